use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use sokcho::application::ports::{RowProcessor, RowProcessorFault};
use sokcho::application::services::{JobRegistry, JobService};
use sokcho::domain::{RowOutcome, SharedDocument, SOURCE_COL};
use sokcho::infrastructure::spreadsheet::CsvDocument;
use sokcho::presentation::{create_router, AppState};

const BOUNDARY: &str = "sokcho-test-boundary";

/// Always resolves; prefixes the raw address so results are easy to
/// spot in the exported file.
struct EchoProcessor;

#[async_trait]
impl RowProcessor<CsvDocument> for EchoProcessor {
    async fn process(
        &self,
        document: &SharedDocument<CsvDocument>,
        row: u32,
    ) -> Result<RowOutcome, RowProcessorFault> {
        let raw = document.cell(row, SOURCE_COL).await.unwrap_or_default();
        Ok(RowOutcome::resolved(format!("도로명:{}", raw), "06234"))
    }
}

fn test_router() -> Router {
    let job_service = Arc::new(JobService::new(
        Arc::new(JobRegistry::new()),
        Arc::new(EchoProcessor),
        Duration::ZERO,
    ));
    create_router(AppState { job_service })
}

fn multipart_upload(user: &str, filename: &str, content: &str) -> Request<Body> {
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{f}\"\r\n\
         Content-Type: text/csv\r\n\r\n{c}\r\n--{b}--\r\n",
        b = BOUNDARY,
        f = filename,
        c = content,
    );
    Request::builder()
        .method("POST")
        .uri("/api/upload")
        .header("x-user", user)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

fn get(user: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("x-user", user)
        .body(Body::empty())
        .unwrap()
}

fn post(user: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("x-user", user)
        .body(Body::empty())
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn given_service_when_health_checked_then_healthy() {
    let app = test_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn given_missing_user_header_when_uploading_then_unauthorized() {
    let app = test_router();

    let request = Request::builder()
        .method("POST")
        .uri("/api/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert_eq!(body["ok"], false);
}

#[tokio::test]
async fn given_wrong_extension_when_uploading_then_rejected() {
    let app = test_router();

    let response = app
        .oneshot(multipart_upload("tester", "addresses.xlsx", "주소\n서울시"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["message"], "csv 파일만 업로드할 수 있습니다.");
}

#[tokio::test]
async fn given_no_addresses_when_uploading_then_rejected() {
    let app = test_router();

    let response = app
        .oneshot(multipart_upload("tester", "empty.csv", "주소\n\n"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["message"], "A열에 정제할 주소가 없습니다.");
}

#[tokio::test]
async fn given_unknown_job_when_polling_then_not_found() {
    let app = test_router();

    let response = app
        .oneshot(get(
            "tester",
            "/api/jobs/00000000-0000-0000-0000-000000000000/status",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_upload_when_run_to_completion_then_download_served() {
    let app = test_router();
    let csv = "주소\n서울특별시 강남구 테헤란로 123\n경기도 성남시 분당구 판교역로 4";

    // Upload.
    let response = app
        .clone()
        .oneshot(multipart_upload("tester", "addresses.csv", csv))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["job"]["total"], 2);
    assert_eq!(body["job"]["done"], 0);
    assert_eq!(body["job"]["can_start"], true);
    let job_id = body["job"]["job_id"].as_str().unwrap().to_string();

    // Start.
    let response = app
        .clone()
        .oneshot(post("tester", &format!("/api/jobs/{}/start", job_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["message"], "작업을 시작했습니다.");

    // Poll until the worker has drained both rows.
    let mut completed = false;
    for _ in 0..200 {
        let response = app
            .clone()
            .oneshot(get("tester", &format!("/api/jobs/{}/status", job_id)))
            .await
            .unwrap();
        let body = json_body(response).await;
        if body["job"]["completed"] == true {
            assert_eq!(body["job"]["done"], 2);
            assert_eq!(body["job"]["percent"], 100);
            completed = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert!(completed, "job did not complete in time");

    // Download.
    let response = app
        .clone()
        .oneshot(get("tester", &format!("/api/jobs/{}/download", job_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("output.csv"));
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("도로명:서울특별시 강남구 테헤란로 123"));
    assert!(text.contains("성공"));
    assert!(text.contains("06234"));
}

#[tokio::test]
async fn given_other_users_job_when_polling_then_not_found() {
    let app = test_router();
    let csv = "주소\n서울특별시 강남구 테헤란로 123";

    let response = app
        .clone()
        .oneshot(multipart_upload("alice", "addresses.csv", csv))
        .await
        .unwrap();
    let body = json_body(response).await;
    let job_id = body["job"]["job_id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(get("bob", &format!("/api/jobs/{}/status", job_id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

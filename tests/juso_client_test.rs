use sokcho::infrastructure::juso::JusoResponse;

#[test]
fn given_success_payload_when_decoded_then_address_fields_present() {
    let payload = r#"{
        "results": {
            "common": {
                "totalCount": "1",
                "currentPage": "1",
                "countPerPage": "1",
                "errorCode": "0",
                "errorMessage": "정상"
            },
            "juso": [
                {
                    "roadAddr": "서울특별시 강남구 테헤란로 123 (역삼동)",
                    "roadAddrPart1": "서울특별시 강남구 테헤란로 123",
                    "roadAddrPart2": " (역삼동)",
                    "jibunAddr": "서울특별시 강남구 역삼동 1-1",
                    "zipNo": "06234"
                }
            ]
        }
    }"#;

    let response: JusoResponse = serde_json::from_str(payload).unwrap();

    assert_eq!(response.results.common.error_code, "0");
    let juso = response.results.juso.unwrap();
    assert_eq!(juso.len(), 1);
    assert_eq!(juso[0].road_addr_part1, "서울특별시 강남구 테헤란로 123");
    assert_eq!(juso[0].road_addr_part2, " (역삼동)");
    assert_eq!(juso[0].zip_no, "06234");
}

#[test]
fn given_error_payload_when_decoded_then_juso_absent() {
    let payload = r#"{
        "results": {
            "common": {
                "errorCode": "E0001",
                "errorMessage": "승인되지 않은 KEY 입니다."
            }
        }
    }"#;

    let response: JusoResponse = serde_json::from_str(payload).unwrap();

    assert_eq!(response.results.common.error_code, "E0001");
    assert_eq!(response.results.common.error_message, "승인되지 않은 KEY 입니다.");
    assert!(response.results.juso.is_none());
}

#[test]
fn given_null_juso_when_decoded_then_none() {
    let payload = r#"{
        "results": {
            "common": { "errorCode": "0", "errorMessage": "정상" },
            "juso": null
        }
    }"#;

    let response: JusoResponse = serde_json::from_str(payload).unwrap();

    assert!(response.results.juso.is_none());
}

#[test]
fn given_empty_match_list_when_decoded_then_empty_vec() {
    let payload = r#"{
        "results": {
            "common": { "errorCode": "0", "errorMessage": "정상" },
            "juso": []
        }
    }"#;

    let response: JusoResponse = serde_json::from_str(payload).unwrap();

    assert_eq!(response.results.juso.unwrap().len(), 0);
}

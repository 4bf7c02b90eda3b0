use async_trait::async_trait;

use crate::application::ports::{RowProcessor, RowProcessorFault};
use crate::domain::{Document, RowOutcome, SharedDocument, SOURCE_COL};

use super::client::{JusoClient, JusoError};
use super::normalize::{
    build_road_address_and_zip, normalize_region_prefix, prepare_api_keyword, split_base_detail,
};

/// Refines one row's source address through the Juso API.
///
/// Every ordinary failure — short keyword, upstream error code, empty
/// result, network trouble — is written into the row as a `실패:…`
/// status so a single bad address never aborts the batch.
pub struct JusoRowProcessor {
    client: JusoClient,
}

impl JusoRowProcessor {
    pub fn new(client: JusoClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<D: Document> RowProcessor<D> for JusoRowProcessor {
    async fn process(
        &self,
        document: &SharedDocument<D>,
        row: u32,
    ) -> Result<RowOutcome, RowProcessorFault> {
        // Short locked read, then the network call runs unlocked.
        let raw = document
            .cell(row, SOURCE_COL)
            .await
            .unwrap_or_default()
            .trim()
            .to_string();

        let (base, original_detail) = split_base_detail(&raw);
        let keyword = prepare_api_keyword(&base);
        if keyword.chars().count() < 2 {
            return Ok(RowOutcome::unresolved(raw, "실패:검색어짧음"));
        }

        let data = match self.client.search(&keyword).await {
            Ok(data) => data,
            Err(e @ JusoError::Request(_)) => {
                tracing::warn!(row, error = %e, "Juso lookup failed");
                return Ok(RowOutcome::unresolved(
                    raw,
                    format!("실패:예외:{}", e.kind()),
                ));
            }
        };

        let common = &data.results.common;
        if common.error_code != "0" {
            return Ok(RowOutcome::unresolved(
                raw,
                format!("실패:{}:{}", common.error_code, common.error_message),
            ));
        }

        let juso = data.results.juso.unwrap_or_default();
        let Some(best) = juso.first() else {
            return Ok(RowOutcome::unresolved(raw, "실패:검색결과없음"));
        };

        let (addr, zip_no) = build_road_address_and_zip(best, &original_detail);
        Ok(RowOutcome::resolved(normalize_region_prefix(&addr), zip_no))
    }
}

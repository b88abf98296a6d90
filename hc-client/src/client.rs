//! Resource client
//!
//! One generic list/create/update/delete quartet serves every backend
//! resource; see [`Resource`].

use std::path::Path;

use serde::Serialize;
use serde::de::IgnoredAny;
use shared::models::UploadOutcome;

use crate::upload::{UPLOAD_FIELD, UPLOAD_PATH, check_file_type, check_upload, parse_outcome};
use crate::{ClientResult, HttpClient, NetworkHttpClient, Resource};

/// Update body: the payload with the record id alongside
#[derive(Serialize)]
struct WithId<'a, P> {
    id: i64,
    #[serde(flatten)]
    payload: &'a P,
}

/// Typed client for the booking backend
#[derive(Debug, Clone)]
pub struct HcClient<H = NetworkHttpClient> {
    http: H,
}

impl<H: HttpClient> HcClient<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    /// GET /R
    pub async fn list<R: Resource>(&self) -> ClientResult<Vec<R>> {
        self.http.get(R::PATH).await
    }

    /// POST /R
    pub async fn create<R: Resource>(&self, payload: &R::Payload) -> ClientResult<R> {
        self.http.post(R::PATH, payload).await
    }

    /// PUT /R/{id}
    ///
    /// Returns `None` when the backend answers without a record body, or with
    /// a body that is not a record (logged).
    pub async fn update<R: Resource>(&self, id: i64, payload: &R::Payload) -> ClientResult<Option<R>> {
        let body = WithId { id, payload };
        let value: serde_json::Value = self.http.put(&R::item_path(id), &body).await?;
        if value.is_null() {
            return Ok(None);
        }
        match serde_json::from_value(value) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                tracing::warn!(path = %R::item_path(id), error = %e, "Update response did not decode");
                Ok(None)
            }
        }
    }

    /// DELETE /R/{id}
    pub async fn delete<R: Resource>(&self, id: i64) -> ClientResult<()> {
        let _: IgnoredAny = self.http.delete(&R::item_path(id)).await?;
        Ok(())
    }

    /// Upload an in-memory Excel workbook for bulk constituency import
    pub async fn upload_bytes(&self, file_name: &str, bytes: Vec<u8>) -> ClientResult<UploadOutcome> {
        check_upload(file_name, bytes.len() as u64)?;
        let body = self
            .http
            .post_file(UPLOAD_PATH, UPLOAD_FIELD, file_name, bytes)
            .await?;
        Ok(parse_outcome(&body))
    }

    /// Upload an Excel workbook from disk for bulk constituency import
    ///
    /// Type and size are checked from the name and metadata before the
    /// file is read.
    pub async fn upload_constituency_data(&self, path: impl AsRef<Path>) -> ClientResult<UploadOutcome> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        check_file_type(&file_name)?;
        let size = tokio::fs::metadata(path).await?.len();
        check_upload(&file_name, size)?;

        let bytes = tokio::fs::read(path).await?;
        self.upload_bytes(&file_name, bytes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::BoothPayload;

    #[test]
    fn test_update_body_carries_id() {
        let payload = BoothPayload {
            name: "Booth A".into(),
            constituency_id: 3,
            part_number: None,
            town: None,
        };
        let json = serde_json::to_value(WithId { id: 8, payload: &payload }).unwrap();
        assert_eq!(json["id"], 8);
        assert_eq!(json["constituencyId"], 3);
        assert!(json["partNumber"].is_null());
    }
}

//! In-memory transport for unit tests

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use hc_client::{ClientError, ClientResult, HcClient, HttpClient};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

#[derive(Debug, Clone)]
pub struct Call {
    pub method: &'static str,
    pub path: String,
    pub body: Value,
}

/// Serves canned lists, echoes creates with id 99 and answers updates and
/// deletes with an empty body
#[derive(Debug, Default)]
pub struct FakeHttp {
    lists: HashMap<String, Value>,
    failing: HashSet<String>,
    upload_reply: Option<Vec<u8>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeHttp {
    pub fn with_list(mut self, path: &str, items: Value) -> Self {
        self.lists.insert(path.to_string(), items);
        self
    }

    /// Every request to `path` answers 409
    pub fn failing(mut self, path: &str) -> Self {
        self.failing.insert(path.to_string());
        self
    }

    pub fn with_upload_reply(mut self, body: &str) -> Self {
        self.upload_reply = Some(body.as_bytes().to_vec());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, method: &'static str, path: &str, body: Value) -> ClientResult<()> {
        self.calls.lock().unwrap().push(Call {
            method,
            path: path.to_string(),
            body,
        });
        if self.failing.contains(path) {
            return Err(ClientError::Conflict(format!("{path} is referenced")));
        }
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> ClientResult<T> {
    Ok(serde_json::from_value(value)?)
}

#[async_trait]
impl HttpClient for FakeHttp {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.record("GET", path, Value::Null)?;
        decode(self.lists.get(path).cloned().unwrap_or_else(|| json!([])))
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<T> {
        let body = serde_json::to_value(body)?;
        self.record("POST", path, body.clone())?;
        let mut created = body;
        if let Value::Object(map) = &mut created {
            map.insert("id".into(), json!(99));
        }
        decode(created)
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<T> {
        self.record("PUT", path, serde_json::to_value(body)?)?;
        decode(Value::Null)
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.record("DELETE", path, Value::Null)?;
        decode(Value::Null)
    }

    async fn post_file(&self, path: &str, field: &str, file_name: &str, bytes: Vec<u8>) -> ClientResult<Vec<u8>> {
        self.record(
            "UPLOAD",
            path,
            json!({ "field": field, "fileName": file_name, "size": bytes.len() }),
        )?;
        Ok(self.upload_reply.clone().unwrap_or_default())
    }

    fn base_url(&self) -> &str {
        "http://fake/api"
    }
}

pub fn fake_client(http: FakeHttp) -> HcClient<FakeHttp> {
    HcClient::new(http)
}

use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /v1/extract`.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractRequest {
    pub urls: Vec<String>,
    pub prompt: String,
    pub schema: Value,
}

impl ExtractRequest {
    /// Request data shaped like `T`.
    pub fn for_schema<T: JsonSchema>(urls: Vec<String>, prompt: impl Into<String>) -> Self {
        Self {
            urls,
            prompt: prompt.into(),
            schema: schema_value::<T>(),
        }
    }
}

/// JSON schema of `T`, as sent to the extraction service.
pub fn schema_value<T: JsonSchema>() -> Value {
    serde_json::to_value(schema_for!(T)).unwrap_or_default()
}

// {
//   "success": true,
//   "id": "3f0c...",            <- only on the initial POST
//   "status": "completed",      <- processing | completed | failed | cancelled
//   "data": { "properties": [ ... ] },
//   "expiresAt": "2025-01-08T20:58:12.000Z"
// }
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Value,
    pub status: Option<String>,
    pub expires_at: Option<String>,
    pub id: Option<String>,
    pub error: Option<String>,
}

impl ExtractResponse {
    pub fn completed(data: Value) -> Self {
        Self {
            success: true,
            data,
            status: Some("completed".to_string()),
            ..Default::default()
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(
            self.status.as_deref(),
            Some("completed") | Some("failed") | Some("cancelled")
        )
    }

    /// The array stored under `data[key]`; empty unless the call succeeded.
    pub fn items(&self, key: &str) -> Vec<Value> {
        if !self.success {
            return Vec::new();
        }
        self.data
            .get(key)
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default()
    }
}

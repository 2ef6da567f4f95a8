use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Version details stamped into every response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiDetails {
    pub version: String,
    pub release: String,
    pub commit: String,
}

impl Default for ApiDetails {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            release: "unknown".into(),
            commit: "unknown".into(),
        }
    }
}

impl ApiDetails {
    pub fn with_release(mut self, release: impl Into<String>) -> Self {
        self.release = release.into();
        self
    }
    pub fn with_commit(mut self, commit: impl Into<String>) -> Self {
        self.commit = commit.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub http_code: u16,
}

impl Default for Status {
    fn default() -> Self {
        Self { http_code: 200 }
    }
}

/// Metadata envelope attached to every response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Information {
    #[serde(rename = "api")]
    pub api_details: ApiDetails,
    pub timestamp: DateTime<Utc>,
    pub status: Status,
}

impl Information {
    pub fn new(api_details: ApiDetails, timestamp: DateTime<Utc>) -> Self {
        Self {
            api_details,
            timestamp,
            status: Status::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}
impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

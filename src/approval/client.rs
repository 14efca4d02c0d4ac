//! HTTP client for the remote approval-status service.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::AppError;

/// Response envelope from `GET /get-user/{id}`.
///
/// Both layers are optional by contract: a missing `user` record means the
/// service had nothing to say (the caller keeps its current state), and a
/// missing `approved` flag on a present record reads as not approved.
#[derive(Debug, Clone, Deserialize)]
pub struct ApprovalResponse {
    #[serde(default)]
    pub user: Option<UserRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub approved: Option<bool>,
}

impl ApprovalResponse {
    /// The approval flag, if the response actually carries a user record.
    pub fn approved(&self) -> Option<bool> {
        self.user
            .as_ref()
            .map(|u| u.approved.unwrap_or(false))
    }
}

/// The seam to the external approval service. The tracker only knows this
/// trait; tests substitute controllable doubles.
#[async_trait]
pub trait ApprovalLookup: Send + Sync {
    async fn fetch(&self, user_id: &str) -> Result<ApprovalResponse, AppError>;
}

/// reqwest-backed lookup against the real service.
pub struct HttpApprovalClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApprovalClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(5))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ApprovalLookup for HttpApprovalClient {
    async fn fetch(&self, user_id: &str) -> Result<ApprovalResponse, AppError> {
        let url = format!("{}/get-user/{}", self.base_url, user_id);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::ApprovalTransport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::ApprovalTransport(format!(
                "approval service returned {}",
                status
            )));
        }

        resp.json::<ApprovalResponse>()
            .await
            .map_err(|e| AppError::ApprovalMalformed(e.to_string()))
    }
}

// ── Tests ────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_payload() {
        let resp: ApprovalResponse =
            serde_json::from_str(r#"{ "user": { "approved": true, "name": "x" } }"#).unwrap();
        assert_eq!(resp.approved(), Some(true));
    }

    #[test]
    fn test_absent_approved_flag_reads_as_false() {
        let resp: ApprovalResponse =
            serde_json::from_str(r#"{ "user": { "email": "a@b.c" } }"#).unwrap();
        assert_eq!(resp.approved(), Some(false));
    }

    #[test]
    fn test_absent_user_record_reads_as_nothing() {
        let resp: ApprovalResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(resp.approved(), None);

        let resp: ApprovalResponse = serde_json::from_str(r#"{ "status": "ok" }"#).unwrap();
        assert_eq!(resp.approved(), None);
    }

    #[test]
    fn test_base_url_trailing_slash_is_tolerated() {
        let client = HttpApprovalClient::new("http://localhost:9090/", Duration::from_secs(1));
        assert_eq!(client.base_url, "http://localhost:9090");
    }
}

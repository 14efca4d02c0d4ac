use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    /// Base URL of the approval-status service.
    pub approval_url: String,
    /// Total timeout for one approval lookup, in seconds.
    pub fetch_timeout_secs: u64,
    /// Interval for the periodic approval re-fetch. 0 disables the job.
    /// Set via VIEWGATE_APPROVAL_REFRESH_SECS. Default: 300.
    pub approval_refresh_secs: u64,
}

pub fn load() -> anyhow::Result<Config> {
    dotenvy::dotenv().ok();

    Ok(Config {
        port: std::env::var("VIEWGATE_PORT")
            .unwrap_or_else(|_| "8460".into())
            .parse()
            .unwrap_or(8460),
        approval_url: std::env::var("VIEWGATE_APPROVAL_URL")
            .unwrap_or_else(|_| "http://localhost:9090".into()),
        fetch_timeout_secs: std::env::var("VIEWGATE_FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10),
        approval_refresh_secs: std::env::var("VIEWGATE_APPROVAL_REFRESH_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(300),
    })
}

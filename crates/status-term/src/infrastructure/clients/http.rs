#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Checker;

/// Client trusting the platform's root certificates, with no other TLS
/// settings.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;

    Ok(client)
}

/// Issues a single GET against `target` and returns the status code. The
/// client lives only for this call and the response body is never read.
pub async fn check(target: &str, timeout: Duration) -> Result<u16> {
    if target.is_empty() {
        bail!("Target URL is not defined");
    }

    let client = build_client(timeout)?;
    let res = client.get(target).send().await?;
    let status = res.status().as_u16();
    drop(res);

    Ok(status)
}

pub struct HttpChecker {
    url: String,
    timeout: Duration,
}

impl HttpChecker {
    pub fn new(url: &str, timeout: Duration) -> HttpChecker {
        HttpChecker {
            url: url.to_string(),
            timeout,
        }
    }

    pub fn from_config() -> Result<HttpChecker> {
        Ok(HttpChecker::new(
            &Config::get(ConfigKey::TargetUrl),
            Config::timeout()?,
        ))
    }
}

#[async_trait]
impl Checker for HttpChecker {
    fn target(&self) -> String {
        self.url.to_string()
    }

    async fn check(&self) -> Result<u16> {
        tracing::debug!(target_url = %self.url, timeout = ?self.timeout, "checking status");
        check(&self.url, self.timeout).await
    }
}

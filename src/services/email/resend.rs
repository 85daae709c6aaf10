use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;

use super::EmailProvider;
use crate::models::OutboundEmail;

pub struct ResendProvider {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl ResendProvider {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            api_key,
            base_url,
            client,
        })
    }
}

#[async_trait]
impl EmailProvider for ResendProvider {
    async fn send_email(&self, email: &OutboundEmail) -> anyhow::Result<serde_json::Value> {
        let url = format!("{}/emails", self.base_url);

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await
            .context("failed to call Resend API")?;

        let status = resp.status();
        if !status.is_success() {
            let error = resp.text().await.unwrap_or_default();
            anyhow::bail!("Resend API error ({}): {}", status, error);
        }

        resp.json::<serde_json::Value>()
            .await
            .context("failed to parse Resend response")
    }
}

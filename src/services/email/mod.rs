pub mod resend;

use async_trait::async_trait;

use crate::models::OutboundEmail;

#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Sends one email and returns the provider's JSON response body.
    async fn send_email(&self, email: &OutboundEmail) -> anyhow::Result<serde_json::Value>;
}

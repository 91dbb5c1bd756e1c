use async_trait::async_trait;

use crate::{errors::TransportError, models::receipt::DeliveryReceipt};

pub type SendResult = Result<DeliveryReceipt, TransportError>;

/// Per-channel delivery capability injected into the dispatcher.
///
/// Implementations are shared across concurrent dispatch calls, so they must
/// be safe to invoke from several tasks at once. Timeouts and retries, if a
/// gateway needs them, live behind this trait.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Short identifier used in logs and health output.
    fn name(&self) -> &str;

    async fn send_email(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
        is_html: bool,
    ) -> SendResult;

    async fn send_sms(&self, phone_number: &str, message: &str) -> SendResult;

    async fn send_push(
        &self,
        device_token: &str,
        title: &str,
        message: &str,
        badge: u32,
    ) -> SendResult;

    async fn send_whatsapp(
        &self,
        phone_number: &str,
        message: &str,
        use_template: bool,
    ) -> SendResult;
}

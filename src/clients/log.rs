use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::{
    clients::transport::{SendResult, Transport},
    models::{channel::Channel, receipt::DeliveryReceipt},
};

/// Transport that records each delivery as a structured log event instead of
/// talking to a gateway.
#[derive(Debug, Default, Clone)]
pub struct LogTransport;

impl LogTransport {
    pub fn new() -> Self {
        info!("Log transport initialized");
        Self
    }

    fn accept(channel: Channel) -> SendResult {
        Ok(DeliveryReceipt::new(channel, Uuid::new_v4().to_string()))
    }
}

#[async_trait]
impl Transport for LogTransport {
    fn name(&self) -> &str {
        "log"
    }

    async fn send_email(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
        is_html: bool,
    ) -> SendResult {
        info!(recipient, subject, body, is_html, "Sending email");
        Self::accept(Channel::Email)
    }

    async fn send_sms(&self, phone_number: &str, message: &str) -> SendResult {
        info!(phone_number, message, "Sending SMS");
        Self::accept(Channel::Sms)
    }

    async fn send_push(
        &self,
        device_token: &str,
        title: &str,
        message: &str,
        badge: u32,
    ) -> SendResult {
        info!(device_token, title, message, badge, "Sending push notification");
        Self::accept(Channel::Push)
    }

    async fn send_whatsapp(
        &self,
        phone_number: &str,
        message: &str,
        use_template: bool,
    ) -> SendResult {
        info!(phone_number, message, use_template, "Sending WhatsApp message");
        Self::accept(Channel::WhatsApp)
    }
}

use std::sync::Mutex;

use async_trait::async_trait;
use multichannel_notifier::{
    clients::transport::{SendResult, Transport},
    errors::TransportError,
    models::{channel::Channel, receipt::DeliveryReceipt},
};

#[derive(Debug, Clone, PartialEq)]
pub enum TransportCall {
    Email {
        recipient: String,
        subject: String,
        body: String,
        is_html: bool,
    },
    Sms {
        phone_number: String,
        message: String,
    },
    Push {
        device_token: String,
        title: String,
        message: String,
        badge: u32,
    },
    WhatsApp {
        phone_number: String,
        message: String,
        use_template: bool,
    },
}

impl TransportCall {
    pub fn channel(&self) -> Channel {
        match self {
            TransportCall::Email { .. } => Channel::Email,
            TransportCall::Sms { .. } => Channel::Sms,
            TransportCall::Push { .. } => Channel::Push,
            TransportCall::WhatsApp { .. } => Channel::WhatsApp,
        }
    }
}

/// Transport double that records every call and can be told to reject one
/// channel.
#[derive(Default)]
pub struct RecordingTransport {
    calls: Mutex<Vec<TransportCall>>,
    failing_channel: Option<Channel>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(channel: Channel) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failing_channel: Some(channel),
        }
    }

    pub fn calls(&self) -> Vec<TransportCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: TransportCall) -> SendResult {
        let channel = call.channel();
        let count = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(call);
            calls.len()
        };

        if self.failing_channel == Some(channel) {
            return Err(TransportError::new(channel, "gateway unavailable"));
        }

        Ok(DeliveryReceipt::new(channel, format!("msg-{}", count)))
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    fn name(&self) -> &str {
        "recording"
    }

    async fn send_email(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
        is_html: bool,
    ) -> SendResult {
        self.record(TransportCall::Email {
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
            is_html,
        })
    }

    async fn send_sms(&self, phone_number: &str, message: &str) -> SendResult {
        self.record(TransportCall::Sms {
            phone_number: phone_number.to_string(),
            message: message.to_string(),
        })
    }

    async fn send_push(
        &self,
        device_token: &str,
        title: &str,
        message: &str,
        badge: u32,
    ) -> SendResult {
        self.record(TransportCall::Push {
            device_token: device_token.to_string(),
            title: title.to_string(),
            message: message.to_string(),
            badge,
        })
    }

    async fn send_whatsapp(
        &self,
        phone_number: &str,
        message: &str,
        use_template: bool,
    ) -> SendResult {
        self.record(TransportCall::WhatsApp {
            phone_number: phone_number.to_string(),
            message: message.to_string(),
            use_template,
        })
    }
}

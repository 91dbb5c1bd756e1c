use serde::Serialize;
use tracing::debug;

use crate::{
    clients::transport::{SendResult, Transport},
    models::channel::Channel,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailNotification {
    recipient: String,
    subject: String,
    body: String,
    is_html: bool,
}

impl EmailNotification {
    pub(crate) fn new(recipient: &str, subject: &str, body: String) -> Self {
        Self {
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            body,
            is_html: true,
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn is_html(&self) -> bool {
        self.is_html
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmsNotification {
    phone_number: String,
    message: String,
}

impl SmsNotification {
    pub(crate) fn new(phone_number: &str, message: String) -> Self {
        Self {
            phone_number: phone_number.to_string(),
            message,
        }
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PushNotification {
    device_token: String,
    title: String,
    message: String,
    badge: u32,
}

impl PushNotification {
    pub(crate) fn new(device_token: &str, title: &str, message: String) -> Self {
        Self {
            device_token: device_token.to_string(),
            title: title.to_string(),
            message,
            badge: 1,
        }
    }

    pub fn device_token(&self) -> &str {
        &self.device_token
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn badge(&self) -> u32 {
        self.badge
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WhatsAppNotification {
    phone_number: String,
    message: String,
    use_template: bool,
}

impl WhatsAppNotification {
    pub(crate) fn new(phone_number: &str, message: String) -> Self {
        Self {
            phone_number: phone_number.to_string(),
            message,
            use_template: true,
        }
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn use_template(&self) -> bool {
        self.use_template
    }
}

/// A fully built, channel-specific notification.
///
/// Variants can only be constructed inside the crate, after the creator that
/// builds them has validated its input. Fields are read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "channel", rename_all = "lowercase")]
pub enum Notification {
    Email(EmailNotification),
    Sms(SmsNotification),
    Push(PushNotification),
    WhatsApp(WhatsAppNotification),
}

impl Notification {
    pub fn channel(&self) -> Channel {
        match self {
            Notification::Email(_) => Channel::Email,
            Notification::Sms(_) => Channel::Sms,
            Notification::Push(_) => Channel::Push,
            Notification::WhatsApp(_) => Channel::WhatsApp,
        }
    }

    /// The address the notification is delivered to, whatever the channel calls it.
    pub fn recipient(&self) -> &str {
        match self {
            Notification::Email(email) => email.recipient(),
            Notification::Sms(sms) => sms.phone_number(),
            Notification::Push(push) => push.device_token(),
            Notification::WhatsApp(whatsapp) => whatsapp.phone_number(),
        }
    }

    /// Hands the fields verbatim to the matching transport call.
    ///
    /// Makes exactly one transport call and returns its result unchanged.
    pub async fn send(&self, transport: &dyn Transport) -> SendResult {
        debug!(
            channel = %self.channel(),
            transport = transport.name(),
            "Handing notification to transport"
        );

        match self {
            Notification::Email(email) => {
                transport
                    .send_email(&email.recipient, &email.subject, &email.body, email.is_html)
                    .await
            }
            Notification::Sms(sms) => transport.send_sms(&sms.phone_number, &sms.message).await,
            Notification::Push(push) => {
                transport
                    .send_push(&push.device_token, &push.title, &push.message, push.badge)
                    .await
            }
            Notification::WhatsApp(whatsapp) => {
                transport
                    .send_whatsapp(&whatsapp.phone_number, &whatsapp.message, whatsapp.use_template)
                    .await
            }
        }
    }
}

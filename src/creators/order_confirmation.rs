use crate::{
    creators::EventCreator,
    errors::ValidationError,
    models::{
        channel::Channel,
        event::EventType,
        notification::{
            EmailNotification, Notification, PushNotification, SmsNotification,
            WhatsAppNotification,
        },
        validation::validate_recipient,
    },
};

pub fn email(recipient: &str, order_number: &str) -> Result<Notification, ValidationError> {
    validate_recipient(Channel::Email, recipient)?;

    Ok(Notification::Email(EmailNotification::new(
        recipient,
        "Confirmação de Pedido",
        format!("Seu pedido {} foi confirmado!", order_number),
    )))
}

pub fn sms(recipient: &str, order_number: &str) -> Result<Notification, ValidationError> {
    validate_recipient(Channel::Sms, recipient)?;

    Ok(Notification::Sms(SmsNotification::new(
        recipient,
        format!("Pedido {} confirmado!", order_number),
    )))
}

pub fn push(recipient: &str, order_number: &str) -> Result<Notification, ValidationError> {
    validate_recipient(Channel::Push, recipient)?;

    Ok(Notification::Push(PushNotification::new(
        recipient,
        "Pedido Confirmado",
        format!("Pedido {} confirmado!", order_number),
    )))
}

pub fn whatsapp(recipient: &str, order_number: &str) -> Result<Notification, ValidationError> {
    validate_recipient(Channel::WhatsApp, recipient)?;

    Ok(Notification::WhatsApp(WhatsAppNotification::new(
        recipient,
        format!("✅ Seu pedido {} foi confirmado!", order_number),
    )))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderConfirmationCreator {
    channel: Channel,
}

impl OrderConfirmationCreator {
    pub fn new(channel: Channel) -> Self {
        Self { channel }
    }
}

impl EventCreator for OrderConfirmationCreator {
    type Payload = str;

    const EVENT: EventType = EventType::OrderConfirmation;

    fn channel(&self) -> Channel {
        self.channel
    }

    fn create_notification(
        &self,
        recipient: &str,
        order_number: &str,
    ) -> Result<Notification, ValidationError> {
        match self.channel {
            Channel::Email => email(recipient, order_number),
            Channel::Sms => sms(recipient, order_number),
            Channel::Push => push(recipient, order_number),
            Channel::WhatsApp => whatsapp(recipient, order_number),
        }
    }
}

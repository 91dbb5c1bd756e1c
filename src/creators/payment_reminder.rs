use rust_decimal::Decimal;

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
        validation::{validate_amount, validate_recipient},
    },
    utils::format_amount,
};

fn validated_amount(
    channel: Channel,
    recipient: &str,
    amount: Decimal,
) -> Result<String, ValidationError> {
    validate_recipient(channel, recipient)?;
    validate_amount(amount)?;

    Ok(format_amount(amount))
}

pub fn email(recipient: &str, amount: Decimal) -> Result<Notification, ValidationError> {
    let amount = validated_amount(Channel::Email, recipient, amount)?;

    Ok(Notification::Email(EmailNotification::new(
        recipient,
        "Lembrete de Pagamento",
        format!("Você tem um pagamento pendente de R$ {}", amount),
    )))
}

pub fn sms(recipient: &str, amount: Decimal) -> Result<Notification, ValidationError> {
    let amount = validated_amount(Channel::Sms, recipient, amount)?;

    Ok(Notification::Sms(SmsNotification::new(
        recipient,
        format!("Pagamento pendente: R$ {}", amount),
    )))
}

pub fn push(recipient: &str, amount: Decimal) -> Result<Notification, ValidationError> {
    let amount = validated_amount(Channel::Push, recipient, amount)?;

    Ok(Notification::Push(PushNotification::new(
        recipient,
        "Lembrete de Pagamento",
        format!("Pagamento pendente: R$ {}", amount),
    )))
}

pub fn whatsapp(recipient: &str, amount: Decimal) -> Result<Notification, ValidationError> {
    let amount = validated_amount(Channel::WhatsApp, recipient, amount)?;

    Ok(Notification::WhatsApp(WhatsAppNotification::new(
        recipient,
        format!("⚠️ Lembrete: pagamento pendente de R$ {}", amount),
    )))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentReminderCreator {
    channel: Channel,
}

impl PaymentReminderCreator {
    pub fn new(channel: Channel) -> Self {
        Self { channel }
    }
}

impl EventCreator for PaymentReminderCreator {
    type Payload = Decimal;

    const EVENT: EventType = EventType::PaymentReminder;

    fn channel(&self) -> Channel {
        self.channel
    }

    fn create_notification(
        &self,
        recipient: &str,
        amount: &Decimal,
    ) -> Result<Notification, ValidationError> {
        match self.channel {
            Channel::Email => email(recipient, *amount),
            Channel::Sms => sms(recipient, *amount),
            Channel::Push => push(recipient, *amount),
            Channel::WhatsApp => whatsapp(recipient, *amount),
        }
    }
}

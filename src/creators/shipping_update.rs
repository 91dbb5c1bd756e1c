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

pub fn email(recipient: &str, tracking_code: &str) -> Result<Notification, ValidationError> {
    validate_recipient(Channel::Email, recipient)?;

    Ok(Notification::Email(EmailNotification::new(
        recipient,
        "Pedido Enviado",
        format!(
            "Seu pedido foi enviado! Código de rastreamento: {}",
            tracking_code
        ),
    )))
}

pub fn sms(recipient: &str, tracking_code: &str) -> Result<Notification, ValidationError> {
    validate_recipient(Channel::Sms, recipient)?;

    Ok(Notification::Sms(SmsNotification::new(
        recipient,
        format!("Pedido enviado! Rastreamento: {}", tracking_code),
    )))
}

pub fn push(recipient: &str, tracking_code: &str) -> Result<Notification, ValidationError> {
    validate_recipient(Channel::Push, recipient)?;

    Ok(Notification::Push(PushNotification::new(
        recipient,
        "Pedido Enviado",
        format!("Rastreamento: {}", tracking_code),
    )))
}

pub fn whatsapp(recipient: &str, tracking_code: &str) -> Result<Notification, ValidationError> {
    validate_recipient(Channel::WhatsApp, recipient)?;

    Ok(Notification::WhatsApp(WhatsAppNotification::new(
        recipient,
        format!("📦 Pedido enviado! Rastreamento: {}", tracking_code),
    )))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingUpdateCreator {
    channel: Channel,
}

impl ShippingUpdateCreator {
    pub fn new(channel: Channel) -> Self {
        Self { channel }
    }
}

impl EventCreator for ShippingUpdateCreator {
    type Payload = str;

    const EVENT: EventType = EventType::ShippingUpdate;

    fn channel(&self) -> Channel {
        self.channel
    }

    fn create_notification(
        &self,
        recipient: &str,
        tracking_code: &str,
    ) -> Result<Notification, ValidationError> {
        match self.channel {
            Channel::Email => email(recipient, tracking_code),
            Channel::Sms => sms(recipient, tracking_code),
            Channel::Push => push(recipient, tracking_code),
            Channel::WhatsApp => whatsapp(recipient, tracking_code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_sets_badge_and_tracking_code() {
        let creator = ShippingUpdateCreator::new(Channel::Push);
        let notification = creator
            .create_notification("device-token-abc123", "BR123456789")
            .unwrap();

        let Notification::Push(push) = notification else {
            panic!("expected a push notification");
        };
        assert_eq!(push.device_token(), "device-token-abc123");
        assert_eq!(push.title(), "Pedido Enviado");
        assert_eq!(push.message(), "Rastreamento: BR123456789");
        assert_eq!(push.badge(), 1);
    }

    #[test]
    fn building_twice_gives_equal_notifications() {
        for channel in Channel::ALL {
            let creator = ShippingUpdateCreator::new(channel);
            let first = creator.create_notification("+5511999999999", "BR1").unwrap();
            let second = creator.create_notification("+5511999999999", "BR1").unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn sms_uses_phone_number_verbatim() {
        let Notification::Sms(sms) = sms(" +55 11 99999-9999 ", "BR9").unwrap() else {
            panic!("expected an SMS notification");
        };
        assert_eq!(sms.phone_number(), " +55 11 99999-9999 ");
        assert_eq!(sms.message(), "Pedido enviado! Rastreamento: BR9");
    }
}

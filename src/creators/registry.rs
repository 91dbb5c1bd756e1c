use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::{
    creators::{order_confirmation, payment_reminder, shipping_update},
    errors::{DispatchError, UnsupportedCombinationError, ValidationError},
    models::{
        channel::Channel,
        event::{EventPayload, EventType},
        notification::Notification,
    },
};

pub type BuildFn = fn(&str, &EventPayload) -> Result<Notification, ValidationError>;

fn mismatch(event_type: EventType, payload: &EventPayload) -> ValidationError {
    ValidationError::PayloadMismatch {
        event_type,
        payload: payload.kind(),
    }
}

fn order_number(payload: &EventPayload) -> Result<&str, ValidationError> {
    match payload {
        EventPayload::OrderNumber(order_number) => Ok(order_number),
        other => Err(mismatch(EventType::OrderConfirmation, other)),
    }
}

fn tracking_code(payload: &EventPayload) -> Result<&str, ValidationError> {
    match payload {
        EventPayload::TrackingCode(tracking_code) => Ok(tracking_code),
        other => Err(mismatch(EventType::ShippingUpdate, other)),
    }
}

fn amount(payload: &EventPayload) -> Result<Decimal, ValidationError> {
    match payload {
        EventPayload::Amount(amount) => Ok(*amount),
        other => Err(mismatch(EventType::PaymentReminder, other)),
    }
}

/// The shipped build function for a pair. Adding an event type or channel
/// without a creator fails to compile here.
fn standard_builder(event_type: EventType, channel: Channel) -> BuildFn {
    match (event_type, channel) {
        (EventType::OrderConfirmation, Channel::Email) => {
            |recipient, payload| order_confirmation::email(recipient, order_number(payload)?)
        }
        (EventType::OrderConfirmation, Channel::Sms) => {
            |recipient, payload| order_confirmation::sms(recipient, order_number(payload)?)
        }
        (EventType::OrderConfirmation, Channel::Push) => {
            |recipient, payload| order_confirmation::push(recipient, order_number(payload)?)
        }
        (EventType::OrderConfirmation, Channel::WhatsApp) => {
            |recipient, payload| order_confirmation::whatsapp(recipient, order_number(payload)?)
        }
        (EventType::ShippingUpdate, Channel::Email) => {
            |recipient, payload| shipping_update::email(recipient, tracking_code(payload)?)
        }
        (EventType::ShippingUpdate, Channel::Sms) => {
            |recipient, payload| shipping_update::sms(recipient, tracking_code(payload)?)
        }
        (EventType::ShippingUpdate, Channel::Push) => {
            |recipient, payload| shipping_update::push(recipient, tracking_code(payload)?)
        }
        (EventType::ShippingUpdate, Channel::WhatsApp) => {
            |recipient, payload| shipping_update::whatsapp(recipient, tracking_code(payload)?)
        }
        (EventType::PaymentReminder, Channel::Email) => {
            |recipient, payload| payment_reminder::email(recipient, amount(payload)?)
        }
        (EventType::PaymentReminder, Channel::Sms) => {
            |recipient, payload| payment_reminder::sms(recipient, amount(payload)?)
        }
        (EventType::PaymentReminder, Channel::Push) => {
            |recipient, payload| payment_reminder::push(recipient, amount(payload)?)
        }
        (EventType::PaymentReminder, Channel::WhatsApp) => {
            |recipient, payload| payment_reminder::whatsapp(recipient, amount(payload)?)
        }
    }
}

/// Lookup table from (event type, channel) to the function that builds the
/// matching notification.
#[derive(Debug, Clone, Default)]
pub struct CreatorRegistry {
    builders: HashMap<(EventType, Channel), BuildFn>,
}

impl CreatorRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn standard() -> Self {
        let builders = EventType::ALL
            .into_iter()
            .flat_map(|event_type| {
                Channel::ALL
                    .into_iter()
                    .map(move |channel| ((event_type, channel), standard_builder(event_type, channel)))
            })
            .collect();

        Self { builders }
    }

    pub fn register(mut self, event_type: EventType, channel: Channel, build: BuildFn) -> Self {
        self.builders.insert((event_type, channel), build);
        self
    }

    pub fn without(mut self, event_type: EventType, channel: Channel) -> Self {
        self.builders.remove(&(event_type, channel));
        self
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Pairs of the full event type × channel product with no creator, in
    /// declaration order.
    pub fn missing(&self) -> Vec<(EventType, Channel)> {
        EventType::ALL
            .into_iter()
            .flat_map(|event_type| Channel::ALL.into_iter().map(move |channel| (event_type, channel)))
            .filter(|pair| !self.builders.contains_key(pair))
            .collect()
    }

    pub fn ensure_complete(&self) -> Result<(), UnsupportedCombinationError> {
        match self.missing().first() {
            Some(&(event_type, channel)) => Err(UnsupportedCombinationError {
                event_type,
                channel,
            }),
            None => Ok(()),
        }
    }

    pub fn lookup(
        &self,
        event_type: EventType,
        channel: Channel,
    ) -> Result<BuildFn, UnsupportedCombinationError> {
        self.builders
            .get(&(event_type, channel))
            .copied()
            .ok_or(UnsupportedCombinationError {
                event_type,
                channel,
            })
    }

    pub fn create(
        &self,
        event_type: EventType,
        channel: Channel,
        recipient: &str,
        payload: &EventPayload,
    ) -> Result<Notification, DispatchError> {
        let build = self.lookup(event_type, channel)?;

        if payload.event_type() != event_type {
            return Err(mismatch(event_type, payload).into());
        }

        Ok(build(recipient, payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_covers_every_pair() {
        let registry = CreatorRegistry::standard();

        assert_eq!(registry.len(), EventType::ALL.len() * Channel::ALL.len());
        assert!(registry.missing().is_empty());
        assert!(registry.ensure_complete().is_ok());
    }

    #[test]
    fn removed_pair_is_reported_not_defaulted() {
        let registry =
            CreatorRegistry::standard().without(EventType::ShippingUpdate, Channel::WhatsApp);

        let expected = UnsupportedCombinationError {
            event_type: EventType::ShippingUpdate,
            channel: Channel::WhatsApp,
        };
        assert_eq!(registry.missing(), vec![(EventType::ShippingUpdate, Channel::WhatsApp)]);
        assert_eq!(registry.ensure_complete(), Err(expected.clone()));
        assert_eq!(
            registry.create(
                EventType::ShippingUpdate,
                Channel::WhatsApp,
                "+5511999999999",
                &EventPayload::TrackingCode("BR1".to_string()),
            ),
            Err(DispatchError::UnsupportedCombination(expected))
        );
    }

    #[test]
    fn mismatched_payload_is_a_validation_error() {
        let result = CreatorRegistry::standard().create(
            EventType::PaymentReminder,
            Channel::Sms,
            "+5511999999999",
            &EventPayload::OrderNumber("12345".to_string()),
        );

        assert_eq!(
            result,
            Err(DispatchError::Validation(ValidationError::PayloadMismatch {
                event_type: EventType::PaymentReminder,
                payload: "order_number",
            }))
        );
    }

    #[test]
    fn every_pair_builds_its_channel_variant() {
        let registry = CreatorRegistry::standard();

        for event_type in EventType::ALL {
            let payload = match event_type {
                EventType::OrderConfirmation => EventPayload::OrderNumber("12345".to_string()),
                EventType::ShippingUpdate => EventPayload::TrackingCode("BR123".to_string()),
                EventType::PaymentReminder => EventPayload::Amount(Decimal::new(999, 1)),
            };
            for channel in Channel::ALL {
                let notification = registry
                    .create(event_type, channel, "someone", &payload)
                    .unwrap();
                assert_eq!(notification.channel(), channel);
                assert_eq!(notification.recipient(), "someone");
            }
        }
    }
}

use std::{
    fmt::{Display, Formatter, Result},
    str::FromStr,
};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    OrderConfirmation,
    ShippingUpdate,
    PaymentReminder,
}

impl EventType {
    pub const ALL: [EventType; 3] = [
        EventType::OrderConfirmation,
        EventType::ShippingUpdate,
        EventType::PaymentReminder,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::OrderConfirmation => "order_confirmation",
            EventType::ShippingUpdate => "shipping_update",
            EventType::PaymentReminder => "payment_reminder",
        }
    }
}

impl Display for EventType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        EventType::ALL
            .into_iter()
            .find(|event_type| event_type.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown event type: {}", s))
    }
}

/// Event-specific data carried into a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventPayload {
    OrderNumber(String),
    TrackingCode(String),
    Amount(Decimal),
}

impl EventPayload {
    /// The event type this payload belongs to.
    pub fn event_type(&self) -> EventType {
        match self {
            EventPayload::OrderNumber(_) => EventType::OrderConfirmation,
            EventPayload::TrackingCode(_) => EventType::ShippingUpdate,
            EventPayload::Amount(_) => EventType::PaymentReminder,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            EventPayload::OrderNumber(_) => "order_number",
            EventPayload::TrackingCode(_) => "tracking_code",
            EventPayload::Amount(_) => "amount",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_kind_maps_to_its_event_type() {
        assert_eq!(
            EventPayload::OrderNumber("1".into()).event_type(),
            EventType::OrderConfirmation
        );
        assert_eq!(
            EventPayload::TrackingCode("BR1".into()).event_type(),
            EventType::ShippingUpdate
        );
        assert_eq!(
            EventPayload::Amount(Decimal::ONE).event_type(),
            EventType::PaymentReminder
        );
    }

    #[test]
    fn payload_deserializes_from_tagged_json() {
        let payload: EventPayload = serde_json::from_str(r#"{"amount":"150.00"}"#).unwrap();
        assert_eq!(payload, EventPayload::Amount(Decimal::new(15000, 2)));

        let payload: EventPayload =
            serde_json::from_str(r#"{"tracking_code":"BR123456789"}"#).unwrap();
        assert_eq!(payload, EventPayload::TrackingCode("BR123456789".to_string()));
    }

    #[test]
    fn parses_event_type_names() {
        assert_eq!(
            "payment_reminder".parse::<EventType>(),
            Ok(EventType::PaymentReminder)
        );
        assert!("refund_issued".parse::<EventType>().is_err());
    }
}

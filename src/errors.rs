use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{channel::Channel, event::EventType};

/// Malformed input rejected before any notification is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Recipient cannot be empty for {channel} notifications")]
    EmptyRecipient { channel: Channel },

    #[error("Amount cannot be negative (got {amount})")]
    NegativeAmount { amount: Decimal },

    #[error("Payload {payload} does not belong to event {event_type}")]
    PayloadMismatch {
        event_type: EventType,
        payload: &'static str,
    },
}

/// No creator is registered for the requested pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No notification creator registered for {event_type} over {channel}")]
pub struct UnsupportedCombinationError {
    pub event_type: EventType,
    pub channel: Channel,
}

/// Delivery failure reported by a transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{channel} transport failed: {reason}")]
pub struct TransportError {
    pub channel: Channel,
    pub reason: String,
}

impl TransportError {
    pub fn new(channel: Channel, reason: impl Into<String>) -> Self {
        Self {
            channel,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    UnsupportedCombination(#[from] UnsupportedCombinationError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

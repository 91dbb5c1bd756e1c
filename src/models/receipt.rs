use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::channel::Channel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    pub channel: Channel,
    pub message_id: String,
    pub accepted_at: DateTime<Utc>,
}

impl DeliveryReceipt {
    pub fn new(channel: Channel, message_id: impl Into<String>) -> Self {
        Self {
            channel,
            message_id: message_id.into(),
            accepted_at: Utc::now(),
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::models::{
    channel::Channel,
    event::{EventPayload, EventType},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub event_type: EventType,
    pub channel: Channel,
    pub recipient: String,
    pub payload: EventPayload,
}

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    clients::transport::Transport,
    creators::CreatorRegistry,
    errors::{DispatchError, UnsupportedCombinationError},
    models::{
        channel::Channel,
        event::{EventPayload, EventType},
        message::NotificationRequest,
        receipt::DeliveryReceipt,
    },
};

/// Picks the creator for an (event type, channel) pair, builds the
/// notification and sends it through the injected transport.
#[derive(Clone)]
pub struct Dispatcher {
    registry: CreatorRegistry,
    transport: Arc<dyn Transport>,
}

impl Dispatcher {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            registry: CreatorRegistry::standard(),
            transport,
        }
    }

    /// Fails if any pair of the event type × channel product has no creator.
    pub fn with_registry(
        registry: CreatorRegistry,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, UnsupportedCombinationError> {
        registry.ensure_complete()?;

        info!(
            creators = registry.len(),
            transport = transport.name(),
            "Creator registry validated"
        );

        Ok(Self {
            registry,
            transport,
        })
    }

    /// Accepts a registry that serves only part of the product. Requests for
    /// an absent pair fail with `UnsupportedCombinationError` at call time.
    pub fn with_partial_registry(registry: CreatorRegistry, transport: Arc<dyn Transport>) -> Self {
        let missing = registry.missing();
        if !missing.is_empty() {
            warn!(
                missing = ?missing,
                transport = transport.name(),
                "Creator registry does not cover every event type and channel"
            );
        }

        Self {
            registry,
            transport,
        }
    }

    pub fn registry(&self) -> &CreatorRegistry {
        &self.registry
    }

    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    pub async fn dispatch(
        &self,
        event_type: EventType,
        channel: Channel,
        recipient: &str,
        payload: &EventPayload,
    ) -> Result<DeliveryReceipt, DispatchError> {
        let trace_id = Uuid::new_v4();

        info!(
            trace_id = %trace_id,
            event_type = %event_type,
            channel = %channel,
            "Dispatching notification"
        );

        let notification = self
            .registry
            .create(event_type, channel, recipient, payload)
            .inspect_err(|e| {
                warn!(trace_id = %trace_id, error = %e, "Notification could not be built");
            })?;

        match notification.send(self.transport.as_ref()).await {
            Ok(receipt) => {
                info!(
                    trace_id = %trace_id,
                    message_id = %receipt.message_id,
                    "Notification sent successfully"
                );
                Ok(receipt)
            }
            Err(e) => {
                warn!(trace_id = %trace_id, error = %e, "Notification failed");
                Err(e.into())
            }
        }
    }

    pub async fn dispatch_request(
        &self,
        request: &NotificationRequest,
    ) -> Result<DeliveryReceipt, DispatchError> {
        self.dispatch(
            request.event_type,
            request.channel,
            &request.recipient,
            &request.payload,
        )
        .await
    }
}

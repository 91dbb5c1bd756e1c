use async_trait::async_trait;

use crate::{
    clients::transport::Transport,
    errors::{DispatchError, ValidationError},
    models::{
        channel::Channel, event::EventType, notification::Notification, receipt::DeliveryReceipt,
    },
};

pub mod order_confirmation;
pub mod payment_reminder;
pub mod registry;
pub mod shipping_update;

pub use order_confirmation::OrderConfirmationCreator;
pub use payment_reminder::PaymentReminderCreator;
pub use registry::{BuildFn, CreatorRegistry};
pub use shipping_update::ShippingUpdateCreator;

/// Builds notifications for one event type over one channel.
///
/// Which notification variant gets built is decided by the implementation;
/// building and then sending is shared by every creator.
#[async_trait]
pub trait EventCreator: Send + Sync {
    type Payload: ?Sized + Sync;

    const EVENT: EventType;

    fn channel(&self) -> Channel;

    /// Builds the notification without sending it.
    fn create_notification(
        &self,
        recipient: &str,
        payload: &Self::Payload,
    ) -> Result<Notification, ValidationError>;

    async fn send_notification(
        &self,
        transport: &dyn Transport,
        recipient: &str,
        payload: &Self::Payload,
    ) -> Result<DeliveryReceipt, DispatchError> {
        let notification = self.create_notification(recipient, payload)?;
        Ok(notification.send(transport).await?)
    }
}

pub mod channel;
pub mod event;
pub mod health;
pub mod message;
pub mod notification;
pub mod receipt;
pub mod response;
pub mod validation;

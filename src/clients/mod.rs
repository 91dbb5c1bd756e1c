pub mod health;
pub mod log;
pub mod transport;

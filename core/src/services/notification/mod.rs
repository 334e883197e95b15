//! Notification fan-out for state changes involving another member

mod service;

pub use service::Notifier;

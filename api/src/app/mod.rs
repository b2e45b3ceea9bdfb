//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod activity_service;
pub mod contact_relay;
pub mod heatmap;
pub mod languages;

pub use activity_service::{ActivityService, ActivitySettings, ActivityView, DisplayOverrides};
pub use contact_relay::ContactRelay;

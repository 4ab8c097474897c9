//! Stateful runtime of the generic health sensor peripheral.
//!
//! One [`service::HealthService`] instance owns its host, schedule state,
//! subscriptions, and notification timer. All host callbacks and poll ticks
//! go through that single `&mut` owner, which serializes them without
//! internal locking; wrap the instance in a mutex only if events arrive
//! from more than one thread.

pub mod config;
pub mod schedule;
pub mod scheduler;
pub mod service;
pub mod subscriptions;

pub use config::ServiceConfig;
pub use schedule::{SchedulePhase, ScheduleState, ValidationError};
pub use service::HealthService;

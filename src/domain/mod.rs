//! Domain layer: spin engine, identifiers, and the event system.
//!
//! This module contains the server-side domain model: the wheel state
//! machine with its angle and easing math, spin identity, the raffle event
//! vocabulary, and the broadcast bus that fans events out to WebSocket
//! clients.

pub mod event_bus;
pub mod raffle_event;
pub mod spin_id;
pub mod wheel;

pub use event_bus::EventBus;
pub use raffle_event::RaffleEvent;
pub use spin_id::SpinId;
pub use wheel::{SpinParams, SpinPlan, Wheel};

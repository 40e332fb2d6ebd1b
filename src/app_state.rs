//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::domain::EventBus;
use crate::service::RaffleService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Raffle service for all business logic.
    pub raffle_service: Arc<RaffleService>,
    /// Event bus for WebSocket subscriptions.
    pub event_bus: EventBus,
}

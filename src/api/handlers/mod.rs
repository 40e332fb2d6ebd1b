//! REST endpoint handlers organized by resource.

pub mod participants;
pub mod spin;
pub mod system;
pub mod winners;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(participants::routes())
        .merge(winners::routes())
        .merge(spin::routes())
        .merge(system::routes())
}

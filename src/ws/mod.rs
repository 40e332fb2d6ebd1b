//! WebSocket layer: upgrade handler, connection loop, and subscriptions.

pub mod connection;
pub mod handler;
pub mod messages;
pub mod subscription;

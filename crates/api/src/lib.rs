//! HTTP API for the portfolio backend.
//!
//! Exposes contact messages and portfolio projects over JSON, and publishes
//! a [`ContactEvent`](folio_events::ContactEvent) for every stored contact
//! message so the notification dispatcher can email the site owner.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;

//! HTTP gateway for the calc arithmetic service.
//!
//! Exposes `POST /api/v1/calculate`, which decodes a JSON expression, hands it
//! to [`calc_core::calc`] and encodes the result or error message.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod format;
pub mod routes;

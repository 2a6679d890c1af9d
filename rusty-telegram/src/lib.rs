//! Thin client for the Telegram Bot API.
//!
//! Each method struct in [`methods`] maps onto a single HTTP request. Responses come back
//! as [`serde_json::Value`] without interpreting the `ok` envelope, see
//! [`models::Response`] for that.

pub mod api;
pub mod error;
pub mod input_file;
pub mod keyboard;
pub mod methods;
pub mod mime;
pub mod models;
pub mod webhook;

pub use crate::error::{Error, Result};

//! HTTP plugin endpoint layer
//!
//! This module implements the ApplicationSet plugin generator protocol:
//! a single authenticated POST route that accepts selection parameters
//! and answers with generated release parameters.
//!
//! # Modules
//!
//! - [`auth`]: Bearer-token authorization middleware
//! - [`error`]: Request failure taxonomy and its HTTP mapping
//! - [`handler`]: Protocol envelopes and the getparams handler
//! - [`server`]: Router construction and server lifecycle

pub mod auth;
pub mod error;
pub mod handler;
pub mod server;

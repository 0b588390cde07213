//! envedit: a local `.env` file editor service
//!
//! A library for editing line-oriented `.env`-style configuration files
//! through a structured entry model, exposed over a small local HTTP API.
//! Disabled settings are represented as commented-out lines, and each
//! setting may carry a description harvested from preceding comment lines.

pub mod config;
pub mod model;
pub mod restart;
pub mod server;
pub mod ssl;
pub mod store;

//! Cinema Ticket Pricing Engine
//!
//! This crate prices cinema ticket orders from a ticket type, a quantity and
//! a booking day, applying a per-ticket weekend surcharge and a bulk
//! discount, and serves an order form and JSON endpoint over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod presentation;

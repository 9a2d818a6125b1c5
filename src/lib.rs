//! Budget dashboard backend.
//!
//! Aggregates categorized transactions from a relational store and serves
//! renderer-agnostic chart descriptions and filter options over HTTP.

pub mod backend;
pub mod charts;
pub mod database;
pub mod error;

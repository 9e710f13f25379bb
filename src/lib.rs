//! Permit Leads Library
//!
//! Core pipeline for turning a flat building-permit export into a ranked,
//! searchable, bookmark-able lead list

pub mod bookmarks;
pub mod config;
pub mod fetch;
pub mod filter;
pub mod freshness;
pub mod ingest;
pub mod normalize;
pub mod pipeline;
pub mod sorter;
pub mod types;
pub mod window;

pub use types::*;

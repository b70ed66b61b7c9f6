//! HTTP front end for the box model generator.

pub mod api;
pub mod config;

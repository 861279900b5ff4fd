//! src/lib.rs
pub mod aggregate;
pub mod configuration;
pub mod error;
pub mod extract;
pub mod job;
pub mod output;
pub mod reader;
pub mod spec;
pub mod telemetry;
pub mod tokenize;

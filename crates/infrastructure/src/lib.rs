//! AWS-backed adapters for the application ports.
pub mod aws;

//! Terraform state ARM64 (Graviton) compatibility analyzer.
//!
//! Reads a Terraform state file, classifies every supported AWS resource as
//! already on ARM64, able to migrate, or without an ARM64 option, and renders
//! the result as text or JSON.

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod report;
pub mod terraform;

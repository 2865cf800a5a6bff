//! Infrastructure adapters. Implement outbound ports and the CLI surface.
//!
//! Filesystem, image encoding, argument parsing. Map errors to DomainError.

pub mod cli;
pub mod persistence;

//! CLI adapter. Parses process arguments into domain `Options`.

pub mod args;

pub use args::CliArgs;

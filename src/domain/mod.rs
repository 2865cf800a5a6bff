//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod color;
pub mod entities;
pub mod errors;
pub mod resolution;

pub use color::{Brush, Color, Pen};
pub use entities::{Bitmap, ColoringOptions, MAX_BITMAP_PIXELS, Options, Settings};
pub use errors::DomainError;
pub use resolution::Resolution;

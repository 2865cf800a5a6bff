//! tags-cloud: settings resolution for a tag cloud renderer, with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;

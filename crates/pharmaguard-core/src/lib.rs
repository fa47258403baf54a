//! PharmaGuard Core - Foundational types for the hero animation
//!
//! This crate provides the types that all other PharmaGuard crates depend on:
//! - `Vec2` - 2D points and displacements in surface units
//! - `ViewportSize` - drawable surface dimensions
//! - `ValueRange` - inclusive-exclusive sampling windows for configuration
//! - `Rgb` - palette colors parsed from `#rrggbb`
//! - Error types and Result alias

mod error;
mod types;

pub use error::{HeroError, Result};
pub use types::{Rgb, ValueRange, Vec2, ViewportSize};

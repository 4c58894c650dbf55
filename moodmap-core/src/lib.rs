//! Spatial core of the music mood map.
//!
//! Tracks live in a normalized valence × energy square ([-1, 1]²). This crate
//! maps them to pixels, clusters them by mood, resolves pointer hits, and
//! produces an ordered list of draw commands for any [`draw::Surface`].
//! It has no browser dependencies; the `moodmap` crate executes the commands
//! on a canvas.

pub mod catalog;
pub mod cluster;
pub mod color;
pub mod coords;
pub mod draw;
pub mod error;
pub mod interaction;
pub mod render;
pub mod types;

pub use error::MapError;

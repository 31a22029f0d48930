//! Platform abstraction layer
//!
//! Turns raw front-end events into simulation input. Storage backends live
//! in `persistence`.

pub mod input;

pub use input::{Controls, Direction};

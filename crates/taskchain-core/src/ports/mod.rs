//! Ports - seams between the pipeline and the outside world
//!
//! The pipeline core has exactly one outward surface: progress notifications.

pub mod observer;

pub use self::observer::{Event, Observer};

//! Impls - observer implementations
//!
//! - `StdoutObserver`: default, timestamped lines on stdout
//! - `TracingObserver`: bridge into the `tracing` ecosystem
//! - `MemoryObserver`: in-memory capture (tests, callers recording a run)

pub mod memory;
pub mod stdout;
pub mod tracing_observer;

pub use self::memory::MemoryObserver;
pub use self::stdout::StdoutObserver;
pub use self::tracing_observer::TracingObserver;

//! Typed - recovering typed arguments from untyped params
//!
//! # Two layers
//! - **binder**: write params into caller-owned slots (`bind`, `bind!`), checked
//!   against runtime type descriptors
//! - **extract**: `FromParams` for tuples, checked per position and returned by value
//!
//! `task` builds the task abstraction on top: `TypedTask` runs `FromParams`
//! before handing typed arguments to its body.

pub mod binder;
pub mod extract;
pub mod task;

pub use self::binder::{Slot, Target, bind, check};
pub use self::extract::FromParams;
pub use self::task::{DynTask, FnTask, TypedTask};

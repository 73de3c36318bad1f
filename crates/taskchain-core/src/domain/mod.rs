//! Domain model (values, params, task outputs, errors).

pub mod errors;
pub mod output;
pub mod value;

pub use self::errors::{BindError, ConfigError, TaskError};
pub use self::output::{Exit, Output};
pub use self::value::{Params, Value};

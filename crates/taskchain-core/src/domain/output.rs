//! Task results and how they map onto the next step's input.

use std::any::Any;
use std::fmt;

use super::value::{Params, Value};

/// Early-termination signal.
///
/// Returning `Output::Exit` from a task stops the pipeline; the run result
/// becomes `payload`.
#[derive(Debug, Clone)]
pub struct Exit {
    pub code: i32,
    pub message: String,
    pub payload: Option<Value>,
}

impl Exit {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            payload: None,
        }
    }

    pub fn with_payload<T: Any + fmt::Debug + Send + Sync>(mut self, payload: T) -> Self {
        self.payload = Some(Value::new(payload));
        self
    }

    /// What a run reports once this signal stops it.
    pub fn into_output(self) -> Output {
        match self.payload {
            Some(value) => Output::Single(value),
            None => Output::Empty,
        }
    }
}

/// What a task hands back to the driver.
///
/// - `Empty`: the next task is called with no arguments.
/// - `Single`: the next task is called with exactly this one argument.
/// - `Multi`: the next task is called with these arguments, in order.
/// - `Exit`: the pipeline stops and reports the exit payload.
#[derive(Debug, Clone, Default)]
pub enum Output {
    #[default]
    Empty,
    Single(Value),
    Multi(Params),
    Exit(Exit),
}

impl Output {
    pub fn empty() -> Self {
        Output::Empty
    }

    pub fn single<T: Any + fmt::Debug + Send + Sync>(value: T) -> Self {
        Output::Single(Value::new(value))
    }

    pub fn multi(params: impl Into<Params>) -> Self {
        Output::Multi(params.into())
    }

    pub fn exit(code: i32, message: impl Into<String>) -> Self {
        Output::Exit(Exit::new(code, message))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Output::Empty)
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Output::Exit(_))
    }

    /// The single value, when this is `Output::Single`.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Output::Single(value) => Some(value),
            _ => None,
        }
    }

    /// Shortcut for `value()` followed by an exact-type downcast.
    pub fn single_as<T: Any>(&self) -> Option<&T> {
        self.value().and_then(Value::downcast_ref::<T>)
    }

    /// Arguments the next task receives after this result.
    pub fn into_params(self) -> Params {
        match self {
            Output::Empty => Params::new(),
            Output::Single(value) => Params::from(value),
            Output::Multi(params) => params,
            Output::Exit(exit) => exit.into_output().into_params(),
        }
    }

    pub fn to_params(&self) -> Params {
        self.clone().into_params()
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Empty => f.write_str("<empty>"),
            Output::Single(value) => write!(f, "{value}"),
            Output::Multi(params) => write!(f, "{params}"),
            Output::Exit(exit) => write!(f, "exit({}): {}", exit.code, exit.message),
        }
    }
}

impl From<()> for Output {
    fn from(_: ()) -> Self {
        Output::Empty
    }
}

impl From<Value> for Output {
    fn from(value: Value) -> Self {
        Output::Single(value)
    }
}

impl From<Params> for Output {
    fn from(params: Params) -> Self {
        Output::Multi(params)
    }
}

impl From<Exit> for Output {
    fn from(exit: Exit) -> Self {
        Output::Exit(exit)
    }
}

//! Task bodies - untyped and typed
//!
//! - `DynTask`: object-safe, what the pipeline stores
//! - `FnTask<F>`: a closure over `Params`
//! - `TypedTask<A, F>`: a closure over a typed tuple; the adapter extracts `A`
//!   from the params once and then calls the body (type erasure)

use std::marker::PhantomData;

use super::extract::FromParams;
use crate::domain::{Output, Params, TaskError};

/// DynTask is one step of a pipeline.
///
/// ```ignore
/// struct Double;
///
/// impl DynTask for Double {
///     fn call(&self, params: Params) -> Result<Output, TaskError> {
///         let (n,): (i32,) = params.extract()?;
///         Ok(Output::single(n * 2))
///     }
/// }
/// ```
pub trait DynTask: Send + Sync {
    fn call(&self, params: Params) -> Result<Output, TaskError>;
}

pub struct FnTask<F> {
    body: F,
}

impl<F> FnTask<F>
where
    F: Fn(Params) -> Result<Output, TaskError> + Send + Sync,
{
    pub fn new(body: F) -> Self {
        Self { body }
    }
}

impl<F> DynTask for FnTask<F>
where
    F: Fn(Params) -> Result<Output, TaskError> + Send + Sync,
{
    fn call(&self, params: Params) -> Result<Output, TaskError> {
        (self.body)(params)
    }
}

/// TypedTask wraps a body that takes its arguments as a typed tuple.
///
/// A mismatch between the received params and `A` is returned as the
/// task's error before the body runs.
pub struct TypedTask<A, F> {
    body: F,
    _marker: PhantomData<fn(A)>,
}

impl<A, F> TypedTask<A, F>
where
    A: FromParams,
    F: Fn(A) -> Result<Output, TaskError> + Send + Sync,
{
    pub fn new(body: F) -> Self {
        Self {
            body,
            _marker: PhantomData,
        }
    }
}

impl<A, F> DynTask for TypedTask<A, F>
where
    A: FromParams,
    F: Fn(A) -> Result<Output, TaskError> + Send + Sync,
{
    fn call(&self, params: Params) -> Result<Output, TaskError> {
        let args = A::from_params(&params)?;
        (self.body)(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BindError;
    use crate::params;

    struct Double;

    impl DynTask for Double {
        fn call(&self, params: Params) -> Result<Output, TaskError> {
            let (n,): (i32,) = params.extract()?;
            Ok(Output::single(n * 2))
        }
    }

    #[test]
    fn struct_task() {
        let out = Double.call(params![21]).unwrap();
        assert_eq!(out.single_as::<i32>(), Some(&42));
    }

    #[test]
    fn fn_task_sees_all_params() {
        let task = FnTask::new(|params: Params| Ok(Output::single(params.len())));
        let out = task.call(params![1, 2, 3]).unwrap();
        assert_eq!(out.single_as::<usize>(), Some(&3));
    }

    #[test]
    fn typed_task_extracts_arguments() {
        let task = TypedTask::new(|(a, b): (i32, i32)| Ok(Output::single(a + b)));
        let out = task.call(params![10, 20]).unwrap();
        assert_eq!(out.single_as::<i32>(), Some(&30));
    }

    #[test]
    fn typed_task_reports_mismatch_without_running_body() {
        let task = TypedTask::new(|(_s,): (String,)| -> Result<Output, TaskError> {
            panic!("body must not run")
        });
        let err = task.call(params![5]).unwrap_err();
        assert!(matches!(
            err.bind_error(),
            Some(BindError::TypeMismatch { index: 0, .. })
        ));
    }

    #[test]
    fn tasks_are_object_safe() {
        let tasks: Vec<Box<dyn DynTask>> = vec![
            Box::new(Double),
            Box::new(TypedTask::new(|(): ()| Ok(Output::empty()))),
        ];
        assert!(tasks[1].call(params![]).unwrap().is_empty());
    }
}

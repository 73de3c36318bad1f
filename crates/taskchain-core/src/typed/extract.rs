//! Typed extraction - recover a tuple of typed arguments in one checked step.
//!
//! `FromParams` is the compile-time counterpart of the slot binder: a task
//! names its argument types once and gets them back by value.
//!
//! ```ignore
//! let (a, b): (i32, String) = params.extract()?;
//! ```
//!
//! Same rules as [`bind`](super::binder::bind): arity first, then exact type
//! per position, trailing values ignored. Nothing is produced unless every
//! position matches.

use std::any::Any;

use crate::domain::{BindError, Params};

pub trait FromParams: Sized {
    fn from_params(params: &Params) -> Result<Self, BindError>;
}

impl FromParams for () {
    fn from_params(_params: &Params) -> Result<Self, BindError> {
        Ok(())
    }
}

/// Untyped passthrough.
impl FromParams for Params {
    fn from_params(params: &Params) -> Result<Self, BindError> {
        Ok(params.clone())
    }
}

fn arity(params: &Params, want: usize) -> Result<(), BindError> {
    if want > params.len() {
        return Err(BindError::Arity {
            want,
            got: params.len(),
        });
    }
    Ok(())
}

fn take<T: Any + Clone>(params: &Params, index: usize) -> Result<T, BindError> {
    let value = params.get(index).ok_or(BindError::Arity {
        want: index + 1,
        got: params.len(),
    })?;
    value
        .downcast::<T>()
        .ok_or_else(|| BindError::TypeMismatch {
            index,
            expected: std::any::type_name::<T>(),
            actual: value.type_name(),
        })
}

macro_rules! tuple_from_params {
    ($len:expr; $($idx:tt => $ty:ident),+) => {
        impl<$($ty: Any + Clone),+> FromParams for ($($ty,)+) {
            fn from_params(params: &Params) -> Result<Self, BindError> {
                arity(params, $len)?;
                Ok(($(take::<$ty>(params, $idx)?,)+))
            }
        }
    };
}

tuple_from_params!(1; 0 => A);
tuple_from_params!(2; 0 => A, 1 => B);
tuple_from_params!(3; 0 => A, 1 => B, 2 => C);
tuple_from_params!(4; 0 => A, 1 => B, 2 => C, 3 => D);
tuple_from_params!(5; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E);
tuple_from_params!(6; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F);
tuple_from_params!(7; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G);
tuple_from_params!(8; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H);

impl Params {
    /// Extracts a typed tuple, see [`FromParams`].
    pub fn extract<A: FromParams>(&self) -> Result<A, BindError> {
        A::from_params(self)
    }

    /// Clones out the value at `index` if it is exactly a `T`.
    pub fn get_as<T: Any + Clone>(&self, index: usize) -> Result<T, BindError> {
        take(self, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params;

    #[test]
    fn extracts_pair_in_order() {
        let p = params![10, 20];
        let (a, b): (i32, i32) = p.extract().unwrap();
        assert_eq!((a, b), (10, 20));
    }

    #[test]
    fn mixed_types() {
        let p = params![1_u8, "two".to_string(), 3.0_f32];
        let (a, b, c) = p.extract::<(u8, String, f32)>().unwrap();
        assert_eq!(a, 1);
        assert_eq!(b, "two");
        assert_eq!(c, 3.0);
    }

    #[test]
    fn too_few_values() {
        let p = params![1];
        let err = p.extract::<(i32, i32)>().unwrap_err();
        assert_eq!(err, BindError::Arity { want: 2, got: 1 });
    }

    #[test]
    fn wrong_type_names_both_sides() {
        let p = params![1, "x"];
        let err = p.extract::<(i32, i32)>().unwrap_err();
        assert_eq!(
            err,
            BindError::TypeMismatch {
                index: 1,
                expected: "i32",
                actual: "&str",
            }
        );
    }

    #[test]
    fn unit_accepts_anything() {
        assert!(params![].extract::<()>().is_ok());
        assert!(params![1, 2].extract::<()>().is_ok());
    }

    #[test]
    fn get_as_single_position() {
        let p = params![1, "x"];
        assert_eq!(p.get_as::<&str>(1).unwrap(), "x");
        assert_eq!(
            p.get_as::<i32>(5).unwrap_err(),
            BindError::Arity { want: 6, got: 2 }
        );
    }

    #[test]
    fn eight_values() {
        let p = params![1, 2, 3, 4, 5, 6, 7, 8];
        let t = p
            .extract::<(i32, i32, i32, i32, i32, i32, i32, i32)>()
            .unwrap();
        assert_eq!(t, (1, 2, 3, 4, 5, 6, 7, 8));
    }
}

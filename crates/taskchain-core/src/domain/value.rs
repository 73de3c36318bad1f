//! Untyped values and the parameter list handed from task to task.
//!
//! A [`Value`] carries any `'static` Rust value together with its runtime
//! type descriptor, so a task can recover it later with an exact type check.
//! [`Params`] is the ordered sequence of values a task is invoked with.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// Object-safe view of whatever a [`Value`] holds.
trait Datum: Any + fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + fmt::Debug + Send + Sync> Datum for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// One untyped value flowing through a pipeline.
///
/// Cloning is cheap: the payload sits behind an `Arc` and is never mutated.
///
/// ```ignore
/// let v = Value::new(42_i32);
/// assert_eq!(v.downcast_ref::<i32>(), Some(&42));
/// assert!(v.downcast_ref::<i64>().is_none());
/// ```
#[derive(Clone)]
pub struct Value {
    inner: Arc<dyn Datum>,
    type_id: TypeId,
    type_name: &'static str,
}

impl Value {
    pub fn new<T: Any + fmt::Debug + Send + Sync>(value: T) -> Self {
        // A Value passed in again is reused rather than nested.
        if let Some(existing) = (&value as &dyn Any).downcast_ref::<Value>() {
            return existing.clone();
        }
        Self {
            inner: Arc::new(value),
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Runtime type of the wrapped value.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Human readable name of the wrapped type, as reported by `std::any::type_name`.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is<T: Any>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Borrows the wrapped value if it is exactly a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        Datum::as_any(&*self.inner).downcast_ref::<T>()
    }

    /// Clones the wrapped value out if it is exactly a `T`.
    pub fn downcast<T: Any + Clone>(&self) -> Option<T> {
        self.downcast_ref::<T>().cloned()
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, f)
    }
}

/// Same as `Debug`: strings are shown quoted (`"s"`), so `[Params]` and
/// `[Result]` lines keep the type visible.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, f)
    }
}

/// The ordered, untyped argument list a task receives.
///
/// The driver builds a fresh `Params` for every step; tasks own theirs and
/// nothing is shared between steps.
#[derive(Clone, Default)]
pub struct Params {
    values: Vec<Value>,
}

impl Params {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    pub fn push(&mut self, value: Value) {
        self.values.push(value);
    }

    /// Builder-style push.
    pub fn with<T: Any + fmt::Debug + Send + Sync>(mut self, value: T) -> Self {
        self.values.push(Value::new(value));
        self
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.values
    }
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values.iter()).finish()
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl AsRef<[Value]> for Params {
    fn as_ref(&self) -> &[Value] {
        &self.values
    }
}

impl From<Vec<Value>> for Params {
    fn from(values: Vec<Value>) -> Self {
        Self { values }
    }
}

impl From<Value> for Params {
    fn from(value: Value) -> Self {
        Self {
            values: vec![value],
        }
    }
}

impl FromIterator<Value> for Params {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Params {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Builds a [`Params`] from plain Rust values.
///
/// ```ignore
/// let p = params![10, "ten".to_string()];
/// assert_eq!(p.len(), 2);
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::domain::Params::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::domain::Params::from(::std::vec![$($crate::domain::Value::new($value)),+])
    };
}

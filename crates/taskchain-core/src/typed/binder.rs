//! Binder - copy untyped params into typed local slots
//!
//! A task declares the variables it expects and hands them to [`bind`]:
//!
//! ```ignore
//! let mut a = 0_i32;
//! let mut b = String::new();
//! bind!(params => a, b)?;
//! ```
//!
//! # Checks
//! 1. arity (`targets.len() <= received.len()`), once up front
//! 2. per position: the target has storage behind it
//! 3. per position: the value's runtime type is exactly the slot's type
//! 4. per position: the slot accepts a write
//!
//! Binding is atomic: every position is validated before the first write, so
//! a failed bind leaves all targets as they were. Trailing values beyond the
//! last target are ignored.

use std::any::{Any, TypeId};
use std::cell::OnceCell;
use std::fmt;

use crate::domain::{BindError, Params, Value};

/// Slot is storage the binder can write one typed value into.
///
/// Implement it for custom storage. `store` is only called after the type
/// check and `is_writable` have passed, and must succeed in that case.
pub trait Slot {
    /// Type the slot holds.
    fn declared_type(&self) -> TypeId;

    fn declared_name(&self) -> &'static str;

    fn is_writable(&self) -> bool {
        true
    }

    /// Writes `value` into the slot. Returns `false` if nothing was written.
    fn store(&mut self, value: &Value) -> bool;
}

struct Place<'a, T> {
    target: &'a mut T,
}

impl<T: Any + Clone> Slot for Place<'_, T> {
    fn declared_type(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn declared_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn store(&mut self, value: &Value) -> bool {
        match value.downcast_ref::<T>() {
            Some(v) => {
                *self.target = v.clone();
                true
            }
            None => false,
        }
    }
}

struct OncePlace<'a, T> {
    cell: &'a mut OnceCell<T>,
}

impl<T: Any + Clone> Slot for OncePlace<'_, T> {
    fn declared_type(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn declared_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn is_writable(&self) -> bool {
        self.cell.get().is_none()
    }

    fn store(&mut self, value: &Value) -> bool {
        match value.downcast_ref::<T>() {
            Some(v) => self.cell.set(v.clone()).is_ok(),
            None => false,
        }
    }
}

enum TargetKind<'a> {
    Owned(Box<dyn Slot + 'a>),
    Borrowed(&'a mut dyn Slot),
    Detached {
        type_name: &'static str,
    },
}

/// Target is one binding destination.
pub struct Target<'a> {
    kind: TargetKind<'a>,
}

impl<'a> Target<'a> {
    /// A plain local variable.
    pub fn of<T: Any + Clone>(target: &'a mut T) -> Self {
        Self {
            kind: TargetKind::Owned(Box::new(Place { target })),
        }
    }

    /// A write-once cell; rejected with `NotWritable` once it holds a value.
    pub fn once<T: Any + Clone>(cell: &'a mut OnceCell<T>) -> Self {
        Self {
            kind: TargetKind::Owned(Box::new(OncePlace { cell })),
        }
    }

    /// Custom storage.
    pub fn slot(slot: &'a mut dyn Slot) -> Self {
        Self {
            kind: TargetKind::Borrowed(slot),
        }
    }

    /// A declared type with no storage behind it. Binding to it always fails
    /// with `NotAddressable`.
    pub fn detached<T: Any>() -> Self {
        Self {
            kind: TargetKind::Detached {
                type_name: std::any::type_name::<T>(),
            },
        }
    }

    pub fn is_addressable(&self) -> bool {
        !matches!(self.kind, TargetKind::Detached { .. })
    }

    fn as_slot(&self) -> Option<&dyn Slot> {
        match &self.kind {
            TargetKind::Owned(slot) => Some(&**slot),
            TargetKind::Borrowed(slot) => Some(&**slot),
            TargetKind::Detached { .. } => None,
        }
    }

    fn store(&mut self, value: &Value) -> bool {
        match &mut self.kind {
            TargetKind::Owned(slot) => slot.store(value),
            TargetKind::Borrowed(slot) => slot.store(value),
            TargetKind::Detached { .. } => false,
        }
    }
}

impl fmt::Debug for Target<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TargetKind::Owned(slot) => write!(f, "Target({})", slot.declared_name()),
            TargetKind::Borrowed(slot) => write!(f, "Target({})", slot.declared_name()),
            TargetKind::Detached { type_name } => write!(f, "Target(detached {type_name})"),
        }
    }
}

/// Binds `received[i]` into `targets[i]` for every target.
pub fn bind(received: &[Value], targets: &mut [Target<'_>]) -> Result<(), BindError> {
    check(received, targets)?;
    for (index, (value, target)) in received.iter().zip(targets.iter_mut()).enumerate() {
        if !target.store(value) {
            return Err(BindError::NotWritable { index });
        }
    }
    Ok(())
}

/// Validates every position without writing anything.
pub fn check(received: &[Value], targets: &[Target<'_>]) -> Result<(), BindError> {
    if targets.len() > received.len() {
        return Err(BindError::Arity {
            want: targets.len(),
            got: received.len(),
        });
    }
    for (index, (value, target)) in received.iter().zip(targets).enumerate() {
        let slot = target
            .as_slot()
            .ok_or(BindError::NotAddressable { index })?;
        if slot.declared_type() != value.type_id() {
            return Err(BindError::TypeMismatch {
                index,
                expected: slot.declared_name(),
                actual: value.type_name(),
            });
        }
        if !slot.is_writable() {
            return Err(BindError::NotWritable { index });
        }
    }
    Ok(())
}

impl Params {
    /// See [`bind`].
    pub fn bind(&self, targets: &mut [Target<'_>]) -> Result<(), BindError> {
        bind(self.as_slice(), targets)
    }
}

/// Binds params into local variables: `bind!(params => a, b, c)`.
///
/// Expands to a [`bind`] call with one [`Target::of`] per variable and
/// evaluates to `Result<(), BindError>`.
#[macro_export]
macro_rules! bind {
    ($params:expr => $($slot:expr),+ $(,)?) => {
        $crate::typed::binder::bind(
            ::std::convert::AsRef::<[$crate::domain::Value]>::as_ref(&$params),
            &mut [$($crate::typed::binder::Target::of(&mut $slot)),+],
        )
    };
}

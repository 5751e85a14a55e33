//! The argument/return window a native method body runs against.

use std::any::Any;
use std::fmt;

use crate::native_error::NativeError;

use super::Dynamic;
use super::convert::{FromDynamic, IntoDynamic};

/// Argument slots and a return slot for one native invocation.
///
/// Instance calls put the receiver in slot 0 and start arguments at slot 1;
/// static calls (including every extension method, whose receiver is an
/// ordinary first argument) start at slot 0. Argument indices passed to the
/// accessors below are always relative to the first argument.
///
/// ```ignore
/// let dx: i64 = ctx.arg(1)?;
/// ctx.set_return(dx * 2);
/// ```
pub struct CallContext<'a> {
    slots: &'a mut [Dynamic],
    arg_offset: usize,
    return_slot: &'a mut Dynamic,
}

impl<'a> CallContext<'a> {
    pub fn new(slots: &'a mut [Dynamic], arg_offset: usize, return_slot: &'a mut Dynamic) -> Self {
        Self {
            slots,
            arg_offset,
            return_slot,
        }
    }

    /// Arguments visible to the body; the receiver slot is not counted.
    pub fn arg_count(&self) -> usize {
        self.slots.len().saturating_sub(self.arg_offset)
    }

    fn out_of_bounds(&self, index: usize) -> NativeError {
        NativeError::ArgumentIndexOutOfBounds {
            index,
            count: self.arg_count(),
        }
    }

    pub fn arg_slot(&self, index: usize) -> Result<&Dynamic, NativeError> {
        match self.slots.get(self.arg_offset + index) {
            Some(slot) => Ok(slot),
            None => Err(self.out_of_bounds(index)),
        }
    }

    pub fn arg_slot_mut(&mut self, index: usize) -> Result<&mut Dynamic, NativeError> {
        let err = self.out_of_bounds(index);
        self.slots.get_mut(self.arg_offset + index).ok_or(err)
    }

    /// Move an argument out, leaving `Void` in its slot.
    pub fn take_arg(&mut self, index: usize) -> Result<Dynamic, NativeError> {
        self.arg_slot_mut(index).map(std::mem::take)
    }

    /// Convert an argument to a primitive Rust value.
    pub fn arg<T: FromDynamic>(&self, index: usize) -> Result<T, NativeError> {
        let slot = self.arg_slot(index)?;
        T::from_dynamic(slot).ok_or_else(|| NativeError::Conversion {
            index,
            expected: T::EXPECTED,
            actual: slot.type_name(),
        })
    }

    /// Borrow a boxed native argument as `T`.
    pub fn arg_native<T: Any>(&self, index: usize) -> Result<&T, NativeError> {
        let slot = self.arg_slot(index)?;
        slot.downcast_ref::<T>().ok_or_else(|| NativeError::Conversion {
            index,
            expected: std::any::type_name::<T>(),
            actual: slot.type_name(),
        })
    }

    pub fn set_return_slot(&mut self, value: Dynamic) {
        *self.return_slot = value;
    }

    pub fn set_return<T: IntoDynamic>(&mut self, value: T) {
        self.set_return_slot(value.into_dynamic());
    }

    /// Borrow the receiver of an instance call.
    ///
    /// # Errors
    ///
    /// [`NativeError::InvalidThis`] for static calls, for receivers that are
    /// not boxed native values, and for receivers of another Rust type.
    pub fn this<T: Any>(&self) -> Result<&T, NativeError> {
        let receiver = match self.slots.first() {
            Some(slot) if self.arg_offset > 0 => slot,
            _ => return Err(NativeError::invalid_this("static call has no receiver")),
        };
        if !matches!(receiver, Dynamic::Native(_)) {
            return Err(NativeError::invalid_this(format!(
                "receiver is {}, not a native value",
                receiver.type_name()
            )));
        }
        receiver.downcast_ref::<T>().ok_or_else(|| {
            NativeError::invalid_this(format!("receiver is not a {}", std::any::type_name::<T>()))
        })
    }
}

impl fmt::Debug for CallContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallContext")
            .field("offset", &self.arg_offset)
            .field("args", &self.arg_count())
            .field("return", &self.return_slot)
            .finish()
    }
}

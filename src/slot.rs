use crate::erasure::sealed::Downcast;
use crate::erasure::{Erasure, IntoErased};
use crate::key::TypeKey;
use alloc::boxed::Box;
use core::any::Any;
use core::fmt;

/// Owns exactly one type-erased value together with the key of its type.
///
/// Moving a `Slot` relocates the value (the box moves, the value stays put on
/// the heap) and the moved-from binding can no longer be used. Dropping it
/// runs the value's destructor through the erased vtable, exactly once.
pub(crate) struct Slot<A: ?Sized + Erasure> {
    key: TypeKey,
    value: Box<A>,
}

impl<A: ?Sized + Erasure> Slot<A> {
    /// Takes ownership of `value`
    pub(crate) fn new<T: IntoErased<A>>(value: T) -> Self {
        Self {
            key: TypeKey::of::<T>(),
            value: value.into_erased(),
        }
    }

    pub(crate) fn key(&self) -> TypeKey {
        self.key
    }

    /// Get a reference to the held value if it is of type T
    pub(crate) fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Get a mutable reference to the held value if it is of type T
    pub(crate) fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.value.downcast_mut::<T>()
    }

    /// Moves the held value back out, or returns the slot untouched if it is
    /// not a T
    pub(crate) fn into_inner<T: Any>(self) -> Result<T, Self> {
        let key = self.key;
        self.value
            .downcast_box::<T>()
            .map(|boxed| *boxed)
            .map_err(|value| Self { key, value })
    }
}

impl<A: ?Sized + Erasure> fmt::Debug for Slot<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot<{}>", self.key)
    }
}

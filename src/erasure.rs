//! Erasure families.
//!
//! A set erases every stored value to one trait object type `A`. The vtable of
//! that trait object carries the concrete type's drop glue, so the set can
//! destroy and relocate values without knowing their types. The family also
//! decides which auto traits the set itself implements:
//!
//! | family                  | value bound           | set is          |
//! |-------------------------|-----------------------|-----------------|
//! | `dyn Any`               | `T: Any`              | neither         |
//! | `dyn Any + Send`        | `T: Any + Send`       | `Send`          |
//! | `dyn Any + Send + Sync` | `T: Any + Send + Sync`| `Send + Sync`   |

use alloc::boxed::Box;
use core::any::Any;

pub(crate) mod sealed {
    use alloc::boxed::Box;
    use core::any::Any;

    /// Typed access to an erased value. Only the set's slots use it, after the
    /// key lookup has already matched the type.
    pub trait Downcast {
        fn downcast_ref<T: Any>(&self) -> Option<&T>;

        fn downcast_mut<T: Any>(&mut self) -> Option<&mut T>;

        fn downcast_box<T: Any>(self: Box<Self>) -> Result<Box<T>, Box<Self>>;
    }
}

/// A trait object type values are erased to.
///
/// Implemented for `dyn Any`, `dyn Any + Send` and `dyn Any + Send + Sync`.
/// Sealed, and carries no methods callers can use: typed access goes through
/// [`AnySet`](crate::AnySet) only.
///
/// ```compile_fail
/// use anyset::Erasure;
/// use std::any::Any;
///
/// let erased: Box<dyn Any> = Box::new(1u8);
/// let _ = Erasure::downcast_ref::<u8>(&*erased);
/// ```
pub trait Erasure: Any + sealed::Downcast {}

/// Conversion of a concrete value into the erased box of family `A`.
///
/// Blanket-implemented for every type meeting the family's bounds, so callers
/// never implement it themselves.
pub trait IntoErased<A: ?Sized + Erasure>: Any {
    /// Boxes `self` as an `A`
    fn into_erased(self) -> Box<A>;
}

macro_rules! erasure_family {
    ($($bound:ident)*) => {
        impl Erasure for dyn Any $(+ $bound)* {}

        impl sealed::Downcast for dyn Any $(+ $bound)* {
            #[inline]
            fn downcast_ref<T: Any>(&self) -> Option<&T> {
                <dyn Any $(+ $bound)*>::downcast_ref::<T>(self)
            }

            #[inline]
            fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
                <dyn Any $(+ $bound)*>::downcast_mut::<T>(self)
            }

            #[inline]
            fn downcast_box<T: Any>(self: Box<Self>) -> Result<Box<T>, Box<Self>> {
                self.downcast::<T>()
            }
        }

        impl<T: Any $(+ $bound)*> IntoErased<dyn Any $(+ $bound)*> for T {
            #[inline]
            fn into_erased(self) -> Box<dyn Any $(+ $bound)*> {
                Box::new(self)
            }
        }
    };
}

erasure_family!();
erasure_family!(Send);
erasure_family!(Send Sync);

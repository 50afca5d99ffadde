use crate::key::TypeKey;
use core::any::Any;
use core::fmt;

/// Errors that can occur when using AnySet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetError {
    /// No value of the requested type is stored in the set
    TypeNotFound(TypeKey),
}

impl SetError {
    pub(crate) fn type_not_found<T: Any>() -> Self {
        SetError::TypeNotFound(TypeKey::of::<T>())
    }

    /// Key of the type the failed lookup asked for
    pub fn key(&self) -> TypeKey {
        match self {
            SetError::TypeNotFound(key) => *key,
        }
    }

    /// Name of the type the failed lookup asked for
    pub fn type_name(&self) -> &'static str {
        self.key().type_name()
    }
}

impl fmt::Display for SetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SetError::TypeNotFound(key) => {
                write!(f, "No value of type `{}` found in set", key.type_name())
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SetError {}

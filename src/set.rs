use crate::erasure::{Erasure, IntoErased};
use crate::error::SetError;
use crate::key::TypeKey;
use crate::slot::Slot;
use core::any::Any;
use core::fmt;
use core::hash::BuildHasherDefault;
use core::mem;
use hashbrown::HashMap;
use rustc_hash::FxHasher;

// Invariant: the slot stored under a key always holds a value of that key's type.
type SlotMap<A> = HashMap<TypeKey, Slot<A>, BuildHasherDefault<FxHasher>>;

const GUARANTEED: &str = "slot type matches its key";

/// A heterogeneous container holding at most one value of each type.
///
/// Values are keyed by their type: inserting a `T` replaces any `T` already
/// stored, and looking a `T` up needs nothing but the type. Stored types only
/// have to be `'static`; they need not be `Clone`, `Default`, or share any
/// trait.
///
/// The type parameter picks the erasure family, which decides whether the set
/// can cross threads. `AnySet` (the default, `dyn Any`) accepts any value and
/// stays on one thread; [`SendAnySet`] and [`SyncAnySet`] require their values
/// to be `Send` / `Send + Sync` and are themselves `Send` / `Send + Sync`.
/// None of them lock anything.
///
/// # Examples
///
/// ```
/// use anyset::AnySet;
///
/// let mut set = AnySet::new();
/// set.insert(2);
/// set.insert(5.5);
/// set.insert("hello".to_string());
///
/// assert_eq!(set.get::<i32>(), Some(&2));
/// assert_eq!(set.get::<f64>(), Some(&5.5));
/// assert_eq!(set.get::<String>().map(String::as_str), Some("hello"));
/// assert_eq!(set.get::<bool>(), None);
/// ```
///
/// A set can not be copied, since the values it holds need not be:
///
/// ```compile_fail
/// use anyset::AnySet;
///
/// let set = AnySet::new();
/// let copy = set.clone();
/// ```
///
/// and the default family never leaves its thread:
///
/// ```compile_fail
/// fn assert_send<T: Send>() {}
/// assert_send::<anyset::AnySet>();
/// ```
pub struct AnySet<A: ?Sized + Erasure = dyn Any> {
    slots: SlotMap<A>,
}

/// An [`AnySet`] of `Send` values, which can be moved to another thread
pub type SendAnySet = AnySet<dyn Any + Send>;

/// An [`AnySet`] of `Send + Sync` values, which can be shared between threads
pub type SyncAnySet = AnySet<dyn Any + Send + Sync>;

impl AnySet {
    /// Creates a new, empty AnySet
    ///
    /// The other families are created with `Default`:
    ///
    /// ```
    /// use anyset::{AnySet, SyncAnySet};
    ///
    /// let local = AnySet::new();
    /// let shared = SyncAnySet::default();
    /// assert!(local.is_empty() && shared.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty AnySet with room for at least `capacity` types
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: SlotMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }
}

impl<A: ?Sized + Erasure> AnySet<A> {
    /// Stores a value, dropping any value of the same type first
    ///
    /// # Examples
    ///
    /// ```
    /// use anyset::AnySet;
    ///
    /// let mut set = AnySet::new();
    /// set.insert(1u8);
    /// set.insert(2u8);
    /// assert_eq!(set.get::<u8>(), Some(&2));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert<T: IntoErased<A>>(&mut self, value: T) {
        let key = TypeKey::of::<T>();
        self.slots.remove(&key);
        self.slots.insert(key, Slot::new(value));
    }

    /// Stores a value and hands back the one it replaced, if any
    pub fn replace<T: IntoErased<A>>(&mut self, value: T) -> Option<T> {
        self.slots
            .insert(TypeKey::of::<T>(), Slot::new(value))
            .and_then(|old| old.into_inner::<T>().ok())
    }

    /// Builds a `T` from constructor arguments and stores it like
    /// [`insert`](Self::insert)
    ///
    /// # Examples
    ///
    /// ```
    /// use anyset::AnySet;
    ///
    /// let mut set = AnySet::new();
    /// set.emplace::<String, _>("hello");
    /// set.emplace::<Vec<u8>, _>([1, 2, 3]);
    /// assert_eq!(set.get::<String>().map(String::as_str), Some("hello"));
    /// assert_eq!(set.get::<Vec<u8>>(), Some(&vec![1, 2, 3]));
    /// ```
    pub fn emplace<T, Args>(&mut self, args: Args)
    where
        T: IntoErased<A> + From<Args>,
    {
        self.insert(T::from(args));
    }

    /// Builds a `T` with `f` and stores it like [`insert`](Self::insert)
    ///
    /// `f` runs before anything is removed, so if it panics the set still
    /// holds its previous `T`.
    pub fn emplace_with<T, F>(&mut self, f: F)
    where
        T: IntoErased<A>,
        F: FnOnce() -> T,
    {
        self.insert(f());
    }

    /// Returns the stored `T`, inserting the result of `f` first if there is
    /// none
    ///
    /// # Examples
    ///
    /// ```
    /// use anyset::AnySet;
    ///
    /// let mut set = AnySet::new();
    /// *set.get_or_insert_with(|| 0u32) += 1;
    /// *set.get_or_insert_with(|| 0u32) += 1;
    /// assert_eq!(set.get::<u32>(), Some(&2));
    /// ```
    pub fn get_or_insert_with<T, F>(&mut self, f: F) -> &mut T
    where
        T: IntoErased<A>,
        F: FnOnce() -> T,
    {
        self.slots
            .entry(TypeKey::of::<T>())
            .or_insert_with(|| Slot::new(f()))
            .downcast_mut::<T>()
            .expect(GUARANTEED)
    }

    /// Returns a reference to the stored `T`, or `None` if there is none
    #[inline]
    pub fn get<T: Any>(&self) -> Option<&T> {
        self.slots.get(&TypeKey::of::<T>())?.downcast_ref::<T>()
    }

    /// Returns a mutable reference to the stored `T`, or `None` if there is none
    #[inline]
    pub fn get_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.slots.get_mut(&TypeKey::of::<T>())?.downcast_mut::<T>()
    }

    /// Returns a reference to a `T` the caller knows is stored
    ///
    /// Use [`get`](Self::get) when absence is an expected outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use anyset::{AnySet, SetError};
    ///
    /// let mut set = AnySet::new();
    /// set.insert(42i64);
    /// assert_eq!(*set.get_ref::<i64>()?, 42);
    ///
    /// let err = set.get_ref::<String>().unwrap_err();
    /// assert!(matches!(err, SetError::TypeNotFound(_)));
    /// println!("{}", err);
    /// # Ok::<(), SetError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `SetError::TypeNotFound` if no `T` is stored.
    pub fn get_ref<T: Any>(&self) -> Result<&T, SetError> {
        self.get::<T>().ok_or_else(SetError::type_not_found::<T>)
    }

    /// Mutable counterpart of [`get_ref`](Self::get_ref)
    ///
    /// # Errors
    ///
    /// Returns `SetError::TypeNotFound` if no `T` is stored.
    pub fn get_mut_ref<T: Any>(&mut self) -> Result<&mut T, SetError> {
        self.get_mut::<T>().ok_or_else(SetError::type_not_found::<T>)
    }

    /// Gets a value by executing a closure with read access
    ///
    /// # Examples
    ///
    /// ```
    /// use anyset::{AnySet, SetError};
    ///
    /// let mut set = AnySet::new();
    /// set.insert(vec![1, 2, 3]);
    ///
    /// let sum = set.with(|v: &Vec<i32>| v.iter().sum::<i32>())?;
    /// assert_eq!(sum, 6);
    /// # Ok::<(), SetError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `SetError::TypeNotFound` if no `T` is stored; `f` is not called.
    pub fn with<T, F, R>(&self, f: F) -> Result<R, SetError>
    where
        T: Any,
        F: FnOnce(&T) -> R,
    {
        self.get_ref::<T>().map(f)
    }

    /// Gets a value by executing a closure with write access
    ///
    /// # Errors
    ///
    /// Returns `SetError::TypeNotFound` if no `T` is stored; `f` is not called.
    pub fn with_mut<T, F, R>(&mut self, f: F) -> Result<R, SetError>
    where
        T: Any,
        F: FnOnce(&mut T) -> R,
    {
        self.get_mut_ref::<T>().map(f)
    }

    /// Drops the stored `T`
    ///
    /// # Returns
    ///
    /// Returns `true` if a `T` was present and removed, `false` if not present.
    pub fn remove<T: Any>(&mut self) -> bool {
        self.slots.remove(&TypeKey::of::<T>()).is_some()
    }

    /// Removes the stored `T` and hands it to the caller
    pub fn take<T: Any>(&mut self) -> Option<T> {
        self.slots
            .remove(&TypeKey::of::<T>())?
            .into_inner::<T>()
            .ok()
    }

    /// Returns true if a `T` is stored
    #[inline]
    pub fn contains<T: Any>(&self) -> bool {
        self.contains_key(TypeKey::of::<T>())
    }

    /// Returns true if a value of the type identified by `key` is stored
    #[inline]
    pub fn contains_key(&self, key: TypeKey) -> bool {
        self.slots.contains_key(&key)
    }

    /// Returns the number of stored values
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the set holds no values
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drops every stored value
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Move-assigns from `source`
    ///
    /// Drops every value held by `self`, then relocates every value of
    /// `source` into `self`. `source` is left empty and usable. To move a set
    /// into a fresh binding, use a plain move or `std::mem::take`.
    ///
    /// # Examples
    ///
    /// ```
    /// use anyset::AnySet;
    ///
    /// let mut a = AnySet::new();
    /// a.insert(1i32);
    /// let mut b = AnySet::new();
    /// b.insert('x');
    ///
    /// b.assign_from(&mut a);
    /// assert_eq!(b.get::<i32>(), Some(&1));
    /// assert_eq!(b.get::<char>(), None);
    /// assert!(a.is_empty());
    /// ```
    pub fn assign_from(&mut self, source: &mut Self) {
        self.slots.clear();
        mem::swap(&mut self.slots, &mut source.slots);
    }
}

impl<A: ?Sized + Erasure> Default for AnySet<A> {
    fn default() -> Self {
        Self {
            slots: SlotMap::default(),
        }
    }
}

impl<A: ?Sized + Erasure> fmt::Debug for AnySet<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.slots.values().map(|slot| slot.key().type_name()))
            .finish()
    }
}

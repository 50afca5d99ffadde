//! # anyset
//!
//! A type-indexed heterogeneous container.
//!
//! `anyset` stores at most one value of each type, keyed by the type itself.
//! Callers insert, replace and retrieve values by naming only the type they
//! want, which makes it a handy building block for service registries,
//! extensible records, or a bag of typed singletons, without declaring a fixed
//! schema or a common trait for the stored types.
//!
//! ## Key Features
//!
//! - **Type-indexed**: the type *is* the key; no string keys to manage
//! - **Move-only payloads**: stored types only need to be `'static`, not `Clone`
//! - **Two lookup styles**: `get` returns an `Option`, `get_ref` returns a
//!   `Result` with [`SetError::TypeNotFound`]
//! - **Nestable**: an `AnySet` is just another value and can live inside another
//! - **`no_std`**: works with `alloc` only when the `std` feature is off
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use anyset::{AnySet, SetError};
//!
//! fn main() -> Result<(), SetError> {
//!     let mut set = AnySet::new();
//!
//!     // Store values of different types
//!     set.insert(2);
//!     set.insert(5.5);
//!     set.insert("hello".to_string());
//!
//!     // Absence is an ordinary outcome for get
//!     if let Some(n) = set.get::<i32>() {
//!         println!("{}", n);
//!     }
//!     assert!(set.get::<bool>().is_none());
//!
//!     // get_ref is for values the caller knows are there
//!     println!("{}", set.get_ref::<String>()?);
//!
//!     match set.get_ref::<bool>() {
//!         Ok(flag) => println!("Flag: {}", flag),
//!         Err(SetError::TypeNotFound(key)) => println!("No {} stored", key),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Modifying Values In-Place
//!
//! ```rust
//! use anyset::{AnySet, SetError};
//! use std::collections::HashMap;
//!
//! fn main() -> Result<(), SetError> {
//!     let mut set = AnySet::new();
//!     set.insert(HashMap::<String, i32>::new());
//!
//!     set.with_mut(|counters: &mut HashMap<String, i32>| {
//!         *counters.entry("visits".to_string()).or_insert(0) += 1;
//!     })?;
//!
//!     let visits = set.with(|counters: &HashMap<String, i32>| {
//!         counters.get("visits").copied().unwrap_or(0)
//!     })?;
//!     assert_eq!(visits, 1);
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Nesting and Moving
//!
//! ```rust
//! use anyset::AnySet;
//!
//! let mut inner = AnySet::new();
//! inner.insert(Box::new(7u8));
//!
//! let mut outer = AnySet::new();
//! outer.insert(inner);
//!
//! let nested = outer.get::<AnySet>().and_then(|inner| inner.get::<Box<u8>>());
//! assert_eq!(nested.map(|b| **b), Some(7));
//!
//! // Moving out leaves a valid, empty set behind
//! let moved = std::mem::take(&mut outer);
//! assert!(outer.get::<AnySet>().is_none());
//! assert!(moved.contains::<AnySet>());
//! ```
//!
//! ### Sharing Across Threads
//!
//! [`AnySet`] itself is neither `Send` nor `Sync`. Pick [`SendAnySet`] or
//! [`SyncAnySet`] to store only thread-safe values, and add your own lock
//! around the set if it must be mutated from several threads.
//!
//! ```rust
//! use anyset::SyncAnySet;
//! use std::sync::{Arc, RwLock};
//!
//! let set = Arc::new(RwLock::new(SyncAnySet::default()));
//! set.write().unwrap().insert(String::from("shared"));
//!
//! let reader = Arc::clone(&set);
//! let len = std::thread::spawn(move || {
//!     reader.read().unwrap().get::<String>().map(String::len)
//! })
//! .join()
//! .unwrap();
//! assert_eq!(len, Some(6));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod erasure;
mod error;
mod key;
mod set;
mod slot;

pub use erasure::{Erasure, IntoErased};
pub use error::SetError;
pub use key::TypeKey;
pub use set::{AnySet, SendAnySet, SyncAnySet};

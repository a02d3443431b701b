//! Type-level identity for description types.
//!
//! A [`TypeKey`] pairs a [`std::any::TypeId`] with the type's name so that
//! registry tables can be keyed by type identity while error messages and
//! logs stay readable. Equality and hashing use only the `TypeId`; the name
//! is carried purely for diagnostics.
//!
//! # Examples
//!
//! ```
//! use girder_core::TypeKey;
//!
//! struct Server;
//! struct Network;
//!
//! let key = TypeKey::of::<Server>();
//! assert_eq!(key, TypeKey::of::<Server>());
//! assert_ne!(key, TypeKey::of::<Network>());
//! assert!(key.is::<Server>());
//! ```

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// The identity of a description type.
#[derive(Clone, Copy, Debug)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Returns the key for a type.
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Returns the full name of the keyed type, including its module path.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Checks whether this key identifies `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

//! Explicit ancestor linearization for description types.
//!
//! Rust has no runtime method-resolution order to introspect, so the
//! fallback order a lookup walks is declared explicitly: every description
//! type carries a [`Lineage`], the precomputed list of its own key followed
//! by its ancestors' keys, most-derived first. The list is computed once
//! per type and cached behind a `&'static` reference.
//!
//! Linearization follows the order a multiple-inheritance-aware method
//! lookup would use: depth-first through each declared base in order, with
//! duplicates removed keeping the first occurrence.
//!
//! Description types are typically zero-sized markers; the runtime state
//! they describe lives in whatever component representation the spec layer
//! chooses. The [`describe!`](crate::describe) macro removes the
//! boilerplate of implementing [`Description`] by hand.

use crate::key::TypeKey;

/// The linearized ancestor chain of a description type.
///
/// Always non-empty: the first key is the type itself, followed by its
/// ancestors in linearized order.
///
/// # Examples
///
/// ```
/// use girder_core::{Lineage, TypeKey};
///
/// struct Server;
/// struct WebServer;
///
/// let base = Lineage::root::<Server>();
/// let derived = Lineage::derived::<WebServer>(&[&base]);
///
/// assert_eq!(derived.head(), TypeKey::of::<WebServer>());
/// assert_eq!(derived.keys(), &[TypeKey::of::<WebServer>(), TypeKey::of::<Server>()]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lineage {
    keys: Vec<TypeKey>,
}

impl Lineage {
    /// Creates the lineage of a type with no declared bases.
    pub fn root<T: 'static>() -> Self {
        Self {
            keys: vec![TypeKey::of::<T>()],
        }
    }

    /// Creates the lineage of a type derived from one or more bases.
    ///
    /// The result starts with `T`, then walks each base lineage depth-first
    /// in declared order, dropping keys already seen. A diamond therefore
    /// contributes its shared root exactly once, at the position of its
    /// first appearance.
    pub fn derived<T: 'static>(bases: &[&Lineage]) -> Self {
        let mut keys = vec![TypeKey::of::<T>()];
        for base in bases {
            for key in &base.keys {
                if !keys.contains(key) {
                    keys.push(*key);
                }
            }
        }
        Self { keys }
    }

    /// Returns the key of the type itself (the most-derived entry).
    pub fn head(&self) -> TypeKey {
        // keys is non-empty by construction
        self.keys[0]
    }

    /// Returns the full linearized chain, most-derived first.
    pub fn keys(&self) -> &[TypeKey] {
        &self.keys
    }

    /// Checks whether a key appears anywhere in the chain.
    pub fn contains(&self, key: TypeKey) -> bool {
        self.keys.contains(&key)
    }

    /// Returns the number of keys in the chain.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false; a lineage contains at least its own type.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates over the chain in linearized order.
    pub fn iter(&self) -> std::slice::Iter<'_, TypeKey> {
        self.keys.iter()
    }
}

impl<'a> IntoIterator for &'a Lineage {
    type Item = &'a TypeKey;
    type IntoIter = std::slice::Iter<'a, TypeKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

/// A description type with a cached, precomputed lineage.
///
/// Implementations return a `&'static Lineage` computed on first access,
/// which keeps the per-lookup cost of ancestor fallback to a slice walk.
/// Use the [`describe!`](crate::describe) macro rather than implementing
/// this by hand:
///
/// ```
/// use girder_core::{describe, Description, TypeKey};
///
/// struct Server;
/// struct WebServer;
///
/// describe!(Server);
/// describe!(WebServer: Server);
///
/// assert_eq!(WebServer::key(), TypeKey::of::<WebServer>());
/// assert!(WebServer::lineage().contains(TypeKey::of::<Server>()));
/// ```
pub trait Description: 'static {
    /// Returns the cached linearized ancestor chain of this type.
    fn lineage() -> &'static Lineage;

    /// Returns the key of this type.
    fn key() -> TypeKey {
        Self::lineage().head()
    }
}

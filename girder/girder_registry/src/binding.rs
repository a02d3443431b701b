//! Bound values and the vacancy contract.
//!
//! A registry stores values implementing [`Binding`]. The trait exists for
//! one reason: lookup must be able to ask a stored value whether it is
//! *vacant*. A vacant binding is skipped during resolution exactly as if it
//! had never been registered, and a lineage holding only vacant bindings
//! still resolves to a miss.
//!
//! `Option<B>` implements `Binding` with `None` as the canonical vacant
//! value, so a spec layer that wants representable-but-absent bindings gets
//! them without a wrapper type. Most callers bind [`ImplBinding`], which is
//! never vacant.

use girder_core::TypeKey;
use std::fmt;

/// A value that can be bound to a description type in a registry.
pub trait Binding: Clone + Send + Sync + 'static {
    /// Whether lookup should treat this binding as absent.
    ///
    /// Vacant bindings do not satisfy a lookup; resolution continues to the
    /// next ancestor in the lineage.
    fn is_vacant(&self) -> bool {
        false
    }
}

impl<B: Binding> Binding for Option<B> {
    fn is_vacant(&self) -> bool {
        self.as_ref().map_or(true, B::is_vacant)
    }
}

/// The common concrete binding value: the identity of an implementation
/// type.
///
/// # Examples
///
/// ```
/// use girder_registry::ImplBinding;
///
/// struct OpenstackServerImpl;
///
/// let binding = ImplBinding::of::<OpenstackServerImpl>();
/// assert!(binding.is::<OpenstackServerImpl>());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImplBinding {
    key: TypeKey,
}

impl ImplBinding {
    /// Creates a binding naming `T` as the implementation type.
    pub fn of<T: 'static>() -> Self {
        Self {
            key: TypeKey::of::<T>(),
        }
    }

    /// Returns the implementation type's key.
    pub fn key(&self) -> TypeKey {
        self.key
    }

    /// Checks whether the bound implementation type is `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.key.is::<T>()
    }
}

impl Binding for ImplBinding {}

impl fmt::Display for ImplBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}

//! # Girder Core
//!
//! `girder_core` provides the shared vocabulary for the Girder substrate:
//! the types that the capability registry and the modifier capture/replay
//! mechanism both depend on, and nothing else.
//!
//! Girder sits beneath a declarative infrastructure-specification layer in
//! which type bodies declare servers, networks, and routers as named
//! attributes. That layer needs two primitives:
//!
//! 1. A way to bind abstract *description* types to concrete
//!    *implementation* types, partitioned by independent domains, with
//!    fallback through a type's ancestor chain — provided by
//!    `girder_registry`.
//! 2. A way to queue statements written inside a type body and replay them
//!    later, in declaration order, against the fully constructed runtime
//!    object — provided by `girder_modifier`.
//!
//! ## Crate Structure
//!
//! - **domain**: [`Domain`], the opaque partition identifier
//! - **key**: [`TypeKey`], type-level identity for description types
//! - **lineage**: [`Lineage`] and the [`Description`] trait, the explicit
//!   precomputed ancestor linearization
//! - **error**: error types for both components
//! - **macros**: the [`describe!`](crate::describe) convenience macro

pub mod domain;
pub mod error;
pub mod key;
pub mod lineage;
pub mod macros;

// Re-export key types for convenience
pub use domain::Domain;
pub use error::{Error, ModifierError, RegistryError, Result};
pub use key::TypeKey;
pub use lineage::{Description, Lineage};
// The describe! macro is exported at the crate root via #[macro_export]

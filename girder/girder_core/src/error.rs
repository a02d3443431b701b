//! Error types for the Girder substrate.
//!
//! This module defines the error hierarchy shared by the registry and
//! modifier crates. Each subsystem has its own error type, and the root
//! `Error` can wrap any of them, allowing uniform error handling in the
//! declarative-spec layer that composes both components.

use crate::domain::Domain;
use crate::key::TypeKey;
use thiserror::Error;

/// Root error type for the Girder substrate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Capability registry errors
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Modifier capture/replay errors
    #[error("Modifier error: {0}")]
    Modifier(#[from] ModifierError),

    /// Errors raised by spec-layer code running inside a modifier.
    ///
    /// Replay propagates these unmodified; a failing modifier stops the
    /// build immediately rather than produce a partially wired object.
    #[error("Runtime error: {0}")]
    Runtime(String),
}

/// Result type used throughout the Girder crates.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors related to capability registry operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// No binding exists for the description type in the given domain,
    /// neither directly nor through any ancestor in its lineage.
    ///
    /// A missing binding is a specification error, not a transient
    /// condition; callers surface it rather than retry.
    #[error("no binding for {key} in domain {domain}")]
    NotBound {
        /// The domain the lookup was scoped to.
        domain: Domain,
        /// The description type the lookup started from.
        key: TypeKey,
    },

    /// A binding was registered after the registry was frozen.
    #[error("registry is frozen; bindings can no longer be registered")]
    Frozen,
}

/// Errors related to modifier queue management.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModifierError {
    /// A queue was installed after the modifier set was frozen.
    #[error("modifier set is frozen; queues can no longer be installed")]
    Frozen,
}

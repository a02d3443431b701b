//! Domain identifiers partitioning one registry from another.
//!
//! A [`Domain`] is an opaque, human-chosen label such as
//! `"provisioner:openstack"`. Bindings registered under one domain are
//! invisible to lookups in every other domain, which is what lets two
//! provisioner families bind different implementations for the same
//! description type.
//!
//! # Examples
//!
//! ```
//! use girder_core::Domain;
//!
//! let openstack = Domain::new("provisioner:openstack");
//! let aws = Domain::from("provisioner:aws");
//!
//! assert_ne!(openstack, aws);
//! assert_eq!(openstack.as_str(), "provisioner:openstack");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque identifier partitioning one registry from another.
///
/// Domains are created implicitly on first use inside a registry or
/// modifier set and persist for that structure's lifetime. Two domains may
/// bind completely different implementations for the same description type
/// without interfering.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Domain(String);

impl Domain {
    /// Creates a domain from a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the domain label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Domain {
    fn from(label: &str) -> Self {
        Self(label.to_owned())
    }
}

impl From<String> for Domain {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

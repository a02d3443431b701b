//! # Girder Registry
//!
//! This crate implements the capability registry of the Girder substrate: a
//! class-keyed, domain-partitioned binding table with ancestor-aware
//! fallback lookup.
//!
//! The declarative-spec layer above Girder binds each abstract component
//! description type to a provisioner-specific implementation type at
//! definition time, then resolves the binding during build. Subclasses
//! inherit a binding unless they override it, mirroring type-based
//! polymorphism while keeping the mapping external to the description
//! types themselves.
//!
//! ## Core Components
//!
//! - **Registry**: [`CapabilityRegistry`], the domain-partitioned table
//!   with lineage-walking resolution and a freeze boundary
//! - **Binding**: the [`Binding`] value contract (including the vacancy
//!   rule) and [`ImplBinding`], the common concrete bound value
//!
//! ## Usage Example
//!
//! ```
//! use girder_core::{describe, Domain};
//! use girder_registry::{CapabilityRegistry, ImplBinding};
//!
//! struct Server;
//! struct WebServer;
//! struct OpenstackServerImpl;
//!
//! describe!(Server);
//! describe!(WebServer: Server);
//!
//! let registry = CapabilityRegistry::new();
//! let domain = Domain::new("provisioner:openstack");
//!
//! registry
//!     .register::<Server>(&domain, ImplBinding::of::<OpenstackServerImpl>())
//!     .unwrap();
//! registry.freeze();
//!
//! let binding = registry.resolve::<WebServer>(&domain).unwrap();
//! assert!(binding.is::<OpenstackServerImpl>());
//! ```

pub mod binding;
pub mod registry;

// Re-export commonly used types
pub use binding::{Binding, ImplBinding};
pub use registry::{CapabilityRegistry, DomainView};

//! The domain-partitioned capability registry.
//!
//! [`CapabilityRegistry`] maps description types to bindings, scoped to one
//! [`Domain`] per partition. Resolution walks the description type's
//! linearized ancestor chain and returns the first non-vacant binding, so a
//! subclass inherits its ancestor's binding unless it registers one of its
//! own — ordinary type-based polymorphism, but held in an external table
//! rather than on the types themselves.
//!
//! Registration is expected during a single-threaded definition phase;
//! [`CapabilityRegistry::freeze`] ends that phase, after which the table is
//! read-only and safe for unsynchronized concurrent reads. A write after
//! freeze fails with [`RegistryError::Frozen`] instead of racing silently.

use dashmap::DashMap;
use girder_core::{Description, Domain, Lineage, RegistryError, TypeKey};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::binding::Binding;

/// A class-keyed, domain-partitioned binding table with ancestor-aware
/// lookup.
///
/// # Examples
///
/// ```
/// use girder_core::{describe, Domain};
/// use girder_registry::{CapabilityRegistry, ImplBinding};
///
/// struct Server;
/// struct WebServer;
/// struct OpenstackServerImpl;
///
/// describe!(Server);
/// describe!(WebServer: Server);
///
/// let registry = CapabilityRegistry::new();
/// let domain = Domain::new("provisioner:openstack");
///
/// registry
///     .register::<Server>(&domain, ImplBinding::of::<OpenstackServerImpl>())
///     .unwrap();
///
/// // WebServer registers nothing of its own and inherits Server's binding.
/// let binding = registry.resolve::<WebServer>(&domain).unwrap();
/// assert!(binding.is::<OpenstackServerImpl>());
/// ```
pub struct CapabilityRegistry<B: Binding> {
    /// Map from domain to its binding table, created on first registration
    domains: DashMap<Domain, HashMap<TypeKey, B>>,

    /// Set once by `freeze`; writes are rejected afterwards
    frozen: AtomicBool,
}

impl<B: Binding> Default for CapabilityRegistry<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Binding> CapabilityRegistry<B> {
    /// Creates an empty registry with no domains.
    pub fn new() -> Self {
        Self {
            domains: DashMap::new(),
            frozen: AtomicBool::new(false),
        }
    }

    /// Binds `D` to `binding` within `domain`.
    ///
    /// The domain is created implicitly on first use. A prior binding for
    /// the same `(domain, D)` pair is overwritten silently — registration
    /// happens once at definition time, so a collision is programmer error
    /// rather than a runtime condition to guard against.
    pub fn register<D: Description>(
        &self,
        domain: &Domain,
        binding: B,
    ) -> Result<(), RegistryError> {
        self.register_key(domain, D::key(), binding)
    }

    /// Binds an explicit `key` to `binding` within `domain`.
    ///
    /// Escape hatch for callers that compute type identity dynamically;
    /// semantics are identical to [`register`](Self::register).
    pub fn register_key(
        &self,
        domain: &Domain,
        key: TypeKey,
        binding: B,
    ) -> Result<(), RegistryError> {
        if self.frozen.load(Ordering::Acquire) {
            log::warn!("rejected binding for {} in frozen registry", key);
            return Err(RegistryError::Frozen);
        }

        let mut table = self.domains.entry(domain.clone()).or_default();
        if table.insert(key, binding).is_some() {
            log::debug!("rebound {} in domain {}", key, domain);
        } else {
            log::debug!("bound {} in domain {}", key, domain);
        }
        Ok(())
    }

    /// Resolves the binding for `D` within `domain`.
    ///
    /// Returns the binding registered directly for `D` if present and
    /// non-vacant; otherwise walks `D`'s lineage most-derived first and
    /// returns the first non-vacant binding found among its ancestors.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotBound`] carrying `(domain, D)` when no
    /// non-vacant binding exists anywhere in the chain.
    pub fn resolve<D: Description>(&self, domain: &Domain) -> Result<B, RegistryError> {
        self.resolve_lineage(domain, D::lineage())
    }

    /// Resolves the binding for an explicit `lineage` within `domain`.
    ///
    /// Never mutates the registry: resolving in a domain that has never
    /// been registered into does not create it.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotBound`] carrying the domain and the
    /// lineage head when no non-vacant binding exists anywhere in the
    /// chain.
    pub fn resolve_lineage(
        &self,
        domain: &Domain,
        lineage: &Lineage,
    ) -> Result<B, RegistryError> {
        if let Some(table) = self.domains.get(domain) {
            for key in lineage {
                match table.get(key) {
                    Some(binding) if !binding.is_vacant() => return Ok(binding.clone()),
                    // vacant counts as absent; keep walking the chain
                    Some(_) => log::trace!("skipping vacant binding for {}", key),
                    None => {}
                }
            }
        }
        log::debug!("no binding for {} in domain {}", lineage.head(), domain);
        Err(RegistryError::NotBound {
            domain: domain.clone(),
            key: lineage.head(),
        })
    }

    /// Returns a snapshot of one domain's bindings, or `None` if the
    /// domain has never been registered into.
    ///
    /// A never-used domain is not an error; it is simply absent.
    pub fn domain_view(&self, domain: &Domain) -> Option<DomainView<B>> {
        self.domains.get(domain).map(|table| DomainView {
            domain: domain.clone(),
            bindings: table.clone(),
        })
    }

    /// Ends the registration phase.
    ///
    /// Every subsequent [`register`](Self::register) fails with
    /// [`RegistryError::Frozen`]; resolution is unaffected. Freezing twice
    /// is a no-op.
    pub fn freeze(&self) {
        if !self.frozen.swap(true, Ordering::AcqRel) {
            log::debug!("registry frozen with {} domain(s)", self.domains.len());
        }
    }

    /// Whether [`freeze`](Self::freeze) has been called.
    pub fn is_frozen(&self) -> bool {
        self.frozen.load(Ordering::Acquire)
    }
}

/// An owned snapshot of one domain's bindings.
#[derive(Clone, Debug)]
pub struct DomainView<B> {
    domain: Domain,
    bindings: HashMap<TypeKey, B>,
}

impl<B> DomainView<B> {
    /// The domain this view was taken from.
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Returns the binding registered directly for `key`, without
    /// ancestor fallback.
    pub fn get_key(&self, key: TypeKey) -> Option<&B> {
        self.bindings.get(&key)
    }

    /// Returns the number of bindings in the domain.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the domain holds no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over all `(key, binding)` pairs in the domain.
    pub fn iter(&self) -> impl Iterator<Item = (&TypeKey, &B)> {
        self.bindings.iter()
    }
}

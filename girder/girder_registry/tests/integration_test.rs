//! End-to-end registry scenario: an abstract component hierarchy bound to
//! provisioner-specific implementations across two independent domains.

use girder_core::{describe, Domain, RegistryError, TypeKey};
use girder_registry::{CapabilityRegistry, ImplBinding};

// Abstract component descriptions declared by the spec layer.
struct Server;
struct WebServer;
struct Network;
struct Router;

describe!(Server);
describe!(WebServer: Server);
describe!(Network);
describe!(Router: Network);

// Provisioner implementation types.
struct OpenstackServerImpl;
struct OpenstackNetworkImpl;
struct AwsServerImpl;

#[test]
fn openstack_bindings_resolve_through_the_hierarchy() {
    let registry = CapabilityRegistry::new();
    let openstack = Domain::new("provisioner:openstack");

    registry
        .register::<Server>(&openstack, ImplBinding::of::<OpenstackServerImpl>())
        .unwrap();
    registry
        .register::<Network>(&openstack, ImplBinding::of::<OpenstackNetworkImpl>())
        .unwrap();
    registry.freeze();

    // WebServer subclasses Server and registers nothing of its own.
    let binding = registry.resolve::<WebServer>(&openstack).unwrap();
    assert!(binding.is::<OpenstackServerImpl>());

    // Router inherits the Network binding the same way.
    let binding = registry.resolve::<Router>(&openstack).unwrap();
    assert!(binding.is::<OpenstackNetworkImpl>());
}

#[test]
fn two_provisioner_families_never_cross_contaminate() {
    let registry = CapabilityRegistry::new();
    let openstack = Domain::new("provisioner:openstack");
    let aws = Domain::new("provisioner:aws");

    registry
        .register::<Server>(&openstack, ImplBinding::of::<OpenstackServerImpl>())
        .unwrap();
    registry
        .register::<Server>(&aws, ImplBinding::of::<AwsServerImpl>())
        .unwrap();

    assert!(registry
        .resolve::<WebServer>(&openstack)
        .unwrap()
        .is::<OpenstackServerImpl>());
    assert!(registry
        .resolve::<WebServer>(&aws)
        .unwrap()
        .is::<AwsServerImpl>());

    // AWS never registered Network; the miss names the AWS domain and the
    // type the lookup started from.
    let err = registry.resolve::<Router>(&aws).unwrap_err();
    assert_eq!(
        err,
        RegistryError::NotBound {
            domain: aws,
            key: TypeKey::of::<Router>(),
        }
    );
}

#[test]
fn domain_view_exposes_registered_bindings() {
    let registry = CapabilityRegistry::new();
    let openstack = Domain::new("provisioner:openstack");

    registry
        .register::<Server>(&openstack, ImplBinding::of::<OpenstackServerImpl>())
        .unwrap();
    registry
        .register::<Network>(&openstack, ImplBinding::of::<OpenstackNetworkImpl>())
        .unwrap();

    let view = registry.domain_view(&openstack).unwrap();
    assert_eq!(view.len(), 2);
    let keys: Vec<&TypeKey> = view.iter().map(|(key, _)| key).collect();
    assert!(keys.contains(&&TypeKey::of::<Server>()));
    assert!(keys.contains(&&TypeKey::of::<Network>()));

    assert!(registry.domain_view(&Domain::new("provisioner:gcp")).is_none());
}

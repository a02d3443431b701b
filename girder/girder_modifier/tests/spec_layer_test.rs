//! Composition test: a miniature declarative-spec layer wiring both Girder
//! components together the way the real one does. Definition time registers
//! bindings and installs queues; build time resolves an implementation and
//! replays modifiers exactly once per constructed object.

use std::collections::BTreeMap;

use girder_core::{describe, Description, Domain, Result};
use girder_modifier::{Modifier, ModifierSet, TypeBody};
use girder_registry::{CapabilityRegistry, ImplBinding};

#[derive(Default)]
struct ComponentState {
    fields: BTreeMap<String, String>,
}

struct Server;
struct WebServer;
describe!(Server);
describe!(WebServer: Server);

struct OpenstackServerImpl;

/// The slice of the spec layer that owns both substrate structures.
struct SpecLayer {
    registry: CapabilityRegistry<ImplBinding>,
    modifiers: ModifierSet<ComponentState>,
}

impl SpecLayer {
    /// Definition phase: single-threaded, ends with both tables frozen.
    fn define() -> Result<Self> {
        let registry = CapabilityRegistry::new();
        let modifiers = ModifierSet::new();
        let openstack = Domain::new("provisioner:openstack");

        registry.register::<Server>(&openstack, ImplBinding::of::<OpenstackServerImpl>())?;

        let set_default = Modifier::new(
            "set_default",
            |state: &mut ComponentState, (field, value): &(String, String)| {
                state
                    .fields
                    .entry(field.clone())
                    .or_insert_with(|| value.clone());
                Ok(())
            },
        );

        let mut body = TypeBody::open::<Server>();
        set_default.defer(&mut body, ("flavor".into(), "m1.small".into()));
        modifiers.install(body.seal())?;

        registry.freeze();
        modifiers.freeze();
        Ok(Self { registry, modifiers })
    }

    /// Build phase: resolve the implementation, construct the state, then
    /// replay modifiers once against the finished object.
    fn build<D: Description>(&self, domain: &Domain, name: &str) -> Result<(ImplBinding, ComponentState)> {
        let binding = self.registry.resolve::<D>(domain)?;
        let mut state = ComponentState::default();
        state.fields.insert("name".into(), name.into());
        self.modifiers.replay::<D>(&mut state)?;
        Ok((binding, state))
    }
}

#[test]
fn build_resolves_inherited_binding_and_replays_inherited_queue() {
    let layer = SpecLayer::define().unwrap();
    let openstack = Domain::new("provisioner:openstack");

    // WebServer declared nothing of its own: it inherits both the Server
    // binding and the Server modifier queue.
    let (binding, state) = layer.build::<WebServer>(&openstack, "web01").unwrap();

    assert!(binding.is::<OpenstackServerImpl>());
    assert_eq!(state.fields.get("name").map(String::as_str), Some("web01"));
    assert_eq!(
        state.fields.get("flavor").map(String::as_str),
        Some("m1.small")
    );
}

#[test]
fn build_in_an_unregistered_domain_fails_fast() {
    let layer = SpecLayer::define().unwrap();
    let aws = Domain::new("provisioner:aws");
    assert!(layer.build::<WebServer>(&aws, "web01").is_err());
}

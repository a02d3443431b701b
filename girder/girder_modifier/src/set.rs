//! The per-type queue table with inherit-or-shadow semantics.
//!
//! A [`ModifierSet`] maps description types to their sealed queues and
//! answers the one question replay needs: which queue governs an object of
//! a given type? The rule is inherit-or-shadow, never merge:
//!
//! - a type whose body queued **no** modifiers owns no queue; its objects
//!   replay the nearest ancestor's queue in full;
//! - a type whose body queued **at least one** modifier owns a queue that
//!   completely replaces every ancestor queue for its objects.
//!
//! Ownership is an explicit table entry, not attribute inheritance: an
//! entry present means shadow, an entry absent means fall through to the
//! next key in the lineage.

use dashmap::DashMap;
use girder_core::{Description, Lineage, ModifierError, Result, TypeKey};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::body::ModifierQueue;

/// Queue ownership table for one description hierarchy.
///
/// # Examples
///
/// ```
/// use girder_core::describe;
/// use girder_modifier::{Modifier, ModifierSet, TypeBody};
///
/// #[derive(Default)]
/// struct Component {
///     tags: Vec<String>,
/// }
///
/// struct Server;
/// struct WebServer;
/// describe!(Server);
/// describe!(WebServer: Server);
///
/// let tag = Modifier::new("tag", |component: &mut Component, name: &String| {
///     component.tags.push(name.clone());
///     Ok(())
/// });
///
/// let set = ModifierSet::new();
/// let mut body = TypeBody::open::<Server>();
/// tag.defer(&mut body, "base".to_string());
/// set.install(body.seal()).unwrap();
///
/// // WebServer's body queued nothing, so its objects inherit Server's queue.
/// let mut component = Component::default();
/// set.replay::<WebServer>(&mut component).unwrap();
/// assert_eq!(component.tags, vec!["base"]);
/// ```
pub struct ModifierSet<O> {
    /// Map from owning description type to its sealed queue
    queues: DashMap<TypeKey, Arc<ModifierQueue<O>>>,

    /// Set once by `freeze`; installs are rejected afterwards
    frozen: AtomicBool,
}

impl<O> ModifierSet<O> {
    /// Creates an empty set with no queues.
    pub fn new() -> Self {
        Self {
            queues: DashMap::new(),
            frozen: AtomicBool::new(false),
        }
    }

    /// Installs a sealed queue under its body's description type.
    ///
    /// An empty queue is dropped without installing: a body in which no
    /// deferred statement executed never owns a queue, so its objects keep
    /// inheriting from ancestors. Re-installing for the same type
    /// overwrites the prior queue (last write wins).
    ///
    /// # Errors
    ///
    /// Returns [`ModifierError::Frozen`] after [`freeze`](Self::freeze).
    pub fn install(&self, queue: ModifierQueue<O>) -> std::result::Result<(), ModifierError> {
        if self.frozen.load(Ordering::Acquire) {
            log::warn!("rejected queue for {} in frozen modifier set", queue.key());
            return Err(ModifierError::Frozen);
        }
        if queue.is_empty() {
            log::trace!("empty body for {}; ancestors stay visible", queue.key());
            return Ok(());
        }
        let key = queue.key();
        if self.queues.insert(key, Arc::new(queue)).is_some() {
            log::debug!("replaced queue for {}", key);
        } else {
            log::debug!("installed queue for {}", key);
        }
        Ok(())
    }

    /// Returns the queue governing objects of the lineage's type: the
    /// first lineage key that owns one, or `None` when no type in the
    /// chain does.
    pub fn queue_for(&self, lineage: &Lineage) -> Option<Arc<ModifierQueue<O>>> {
        lineage
            .iter()
            .find_map(|key| self.queues.get(key).map(|queue| Arc::clone(&queue)))
    }

    /// Replays the governing queue of `D` against `obj`.
    ///
    /// A hierarchy with no queue anywhere in `D`'s lineage is a successful
    /// no-op. There is no idempotence guard: calling this twice on the
    /// same object re-executes every record, so the construction path must
    /// guarantee at-most-once invocation per object.
    ///
    /// # Errors
    ///
    /// The first failing modifier's error, unmodified.
    pub fn replay<D: Description>(&self, obj: &mut O) -> Result<()> {
        self.replay_lineage(D::lineage(), obj)
    }

    /// Replays the governing queue of an explicit lineage against `obj`.
    ///
    /// # Errors
    ///
    /// The first failing modifier's error, unmodified.
    pub fn replay_lineage(&self, lineage: &Lineage, obj: &mut O) -> Result<()> {
        match self.queue_for(lineage) {
            Some(queue) => queue.replay(obj),
            None => {
                log::trace!("no queue anywhere in lineage of {}", lineage.head());
                Ok(())
            }
        }
    }

    /// Returns the number of types that own a queue.
    pub fn len(&self) -> usize {
        self.queues.len()
    }

    /// Whether no type owns a queue.
    pub fn is_empty(&self) -> bool {
        self.queues.is_empty()
    }

    /// Ends the definition phase.
    ///
    /// Every subsequent [`install`](Self::install) fails with
    /// [`ModifierError::Frozen`]; replay is unaffected. Freezing twice is
    /// a no-op.
    pub fn freeze(&self) {
        if !self.frozen.swap(true, Ordering::AcqRel) {
            log::debug!("modifier set frozen with {} queue(s)", self.queues.len());
        }
    }

    /// Whether [`freeze`](Self::freeze) has been called.
    pub fn is_frozen(&self) -> bool {
        self.frozen.load(Ordering::Acquire)
    }
}

impl<O> Default for ModifierSet<O> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::TypeBody;
    use crate::record::Modifier;
    use girder_core::describe;

    #[derive(Default)]
    struct Component {
        log: Vec<String>,
    }

    struct Base;
    struct Middle;
    struct Leaf;

    describe!(Base);
    describe!(Middle: Base);
    describe!(Leaf: Middle);

    fn tag() -> Modifier<Component, String> {
        Modifier::new("tag", |component: &mut Component, name: &String| {
            component.log.push(name.clone());
            Ok(())
        })
    }

    #[test]
    fn test_subtype_with_empty_body_inherits_ancestor_queue() {
        let tag = tag();
        let set = ModifierSet::new();

        let mut body = TypeBody::open::<Base>();
        tag.defer(&mut body, "base1".to_string());
        tag.defer(&mut body, "base2".to_string());
        set.install(body.seal()).unwrap();

        // Leaf and Middle queued nothing; both inherit Base's queue verbatim.
        let mut component = Component::default();
        set.replay::<Leaf>(&mut component).unwrap();
        assert_eq!(component.log, vec!["base1", "base2"]);
    }

    #[test]
    fn test_subtype_with_own_queue_shadows_ancestors() {
        let tag = tag();
        let set = ModifierSet::new();

        let mut body = TypeBody::open::<Base>();
        tag.defer(&mut body, "base".to_string());
        set.install(body.seal()).unwrap();

        let mut body = TypeBody::open::<Middle>();
        tag.defer(&mut body, "middle".to_string());
        set.install(body.seal()).unwrap();

        // Middle's queue completely replaces Base's; no merge.
        let mut component = Component::default();
        set.replay::<Middle>(&mut component).unwrap();
        assert_eq!(component.log, vec!["middle"]);

        // Base objects still replay Base's own queue.
        let mut component = Component::default();
        set.replay::<Base>(&mut component).unwrap();
        assert_eq!(component.log, vec!["base"]);
    }

    #[test]
    fn test_nearest_owner_wins_in_a_deeper_chain() {
        let tag = tag();
        let set = ModifierSet::new();

        let mut body = TypeBody::open::<Base>();
        tag.defer(&mut body, "base".to_string());
        set.install(body.seal()).unwrap();

        let mut body = TypeBody::open::<Middle>();
        tag.defer(&mut body, "middle".to_string());
        set.install(body.seal()).unwrap();

        // Leaf owns nothing; Middle is nearer than Base.
        let mut component = Component::default();
        set.replay::<Leaf>(&mut component).unwrap();
        assert_eq!(component.log, vec!["middle"]);
    }

    #[test]
    fn test_empty_body_never_shadows() {
        let tag = tag();
        let set = ModifierSet::new();

        let mut body = TypeBody::open::<Base>();
        tag.defer(&mut body, "base".to_string());
        set.install(body.seal()).unwrap();

        // Sealing an empty Middle body installs nothing.
        set.install(TypeBody::<Component>::open::<Middle>().seal())
            .unwrap();
        assert_eq!(set.len(), 1);

        let mut component = Component::default();
        set.replay::<Middle>(&mut component).unwrap();
        assert_eq!(component.log, vec!["base"]);
    }

    #[test]
    fn test_no_queue_anywhere_is_a_noop() {
        let set: ModifierSet<Component> = ModifierSet::new();
        let mut component = Component::default();
        set.replay::<Leaf>(&mut component).unwrap();
        assert!(component.log.is_empty());
    }

    #[test]
    fn test_reinstall_overwrites() {
        let tag = tag();
        let set = ModifierSet::new();

        let mut body = TypeBody::open::<Base>();
        tag.defer(&mut body, "first".to_string());
        set.install(body.seal()).unwrap();

        let mut body = TypeBody::open::<Base>();
        tag.defer(&mut body, "second".to_string());
        set.install(body.seal()).unwrap();

        let mut component = Component::default();
        set.replay::<Base>(&mut component).unwrap();
        assert_eq!(component.log, vec!["second"]);
    }

    #[test]
    fn test_install_after_freeze_fails() {
        let tag = tag();
        let set = ModifierSet::new();

        let mut body = TypeBody::open::<Base>();
        tag.defer(&mut body, "base".to_string());
        set.install(body.seal()).unwrap();
        set.freeze();
        assert!(set.is_frozen());

        let mut body = TypeBody::open::<Middle>();
        tag.defer(&mut body, "middle".to_string());
        let err = set.install(body.seal()).unwrap_err();
        assert_eq!(err, ModifierError::Frozen);

        // Replay is unaffected by the freeze.
        let mut component = Component::default();
        set.replay::<Middle>(&mut component).unwrap();
        assert_eq!(component.log, vec!["base"]);
    }

    #[test]
    fn test_queue_for_reports_owner() {
        let tag = tag();
        let set = ModifierSet::new();

        let mut body = TypeBody::open::<Base>();
        tag.defer(&mut body, "base".to_string());
        set.install(body.seal()).unwrap();

        let queue = set.queue_for(Leaf::lineage()).unwrap();
        assert_eq!(queue.key(), TypeKey::of::<Base>());
    }
}

//! Modifier wrappers and the records they queue.
//!
//! A [`Modifier`] wraps a helper function so that calling it inside an open
//! type body queues rather than executes: [`Modifier::defer`] appends a
//! [`ModifierRecord`] holding the wrapper's identity and the captured
//! arguments to the body, and the function only runs when the body's queue
//! is replayed against the finished object. [`Modifier::apply`] is the
//! immediate path replay goes through, and is also available for direct
//! calls outside any body.
//!
//! `O` is the runtime component state the spec layer threads through a
//! whole description hierarchy; `A` is the helper's argument bundle,
//! captured by value at declaration time.

use girder_core::Result;
use std::fmt;
use std::sync::Arc;

use crate::body::TypeBody;

/// A deferred declarative helper.
///
/// # Examples
///
/// ```
/// use girder_core::describe;
/// use girder_modifier::{Modifier, TypeBody};
///
/// #[derive(Default)]
/// struct Component {
///     tags: Vec<String>,
/// }
///
/// struct Server;
/// describe!(Server);
///
/// let tag = Modifier::new("tag", |component: &mut Component, name: &String| {
///     component.tags.push(name.clone());
///     Ok(())
/// });
///
/// let mut body = TypeBody::open::<Server>();
/// tag.defer(&mut body, "edge".to_string());
///
/// // Nothing ran yet; the body only holds a record.
/// assert_eq!(body.len(), 1);
/// ```
pub struct Modifier<O, A> {
    name: &'static str,
    func: Arc<dyn Fn(&mut O, &A) -> Result<()> + Send + Sync>,
}

impl<O: 'static, A: Send + Sync + 'static> Modifier<O, A> {
    /// Wraps a helper function under a diagnostic name.
    pub fn new(
        name: &'static str,
        func: impl Fn(&mut O, &A) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            func: Arc::new(func),
        }
    }

    /// Returns the wrapper's diagnostic name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Queues an invocation on an open type body instead of executing it.
    ///
    /// The arguments are captured by value; the helper runs against the
    /// finished object when the body's queue is replayed, in declaration
    /// order relative to the body's other records.
    pub fn defer(&self, body: &mut TypeBody<O>, args: A) {
        let func = Arc::clone(&self.func);
        body.push(ModifierRecord::new(self.name, move |obj: &mut O| {
            func(obj, &args)
        }));
    }

    /// Invokes the wrapped helper immediately.
    ///
    /// # Errors
    ///
    /// Whatever the wrapped helper returns, unmodified.
    pub fn apply(&self, obj: &mut O, args: &A) -> Result<()> {
        (self.func)(obj, args)
    }
}

impl<O, A> Clone for Modifier<O, A> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            func: Arc::clone(&self.func),
        }
    }
}

impl<O, A> fmt::Debug for Modifier<O, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Modifier").field("name", &self.name).finish()
    }
}

/// One queued invocation: the modifier's identity plus its captured
/// arguments, closed over and ready to run against the finished object.
pub struct ModifierRecord<O> {
    modifier: &'static str,
    apply: Box<dyn Fn(&mut O) -> Result<()> + Send + Sync>,
}

impl<O> ModifierRecord<O> {
    pub(crate) fn new(
        modifier: &'static str,
        apply: impl Fn(&mut O) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        Self {
            modifier,
            apply: Box::new(apply),
        }
    }

    /// The diagnostic name of the modifier that queued this record.
    pub fn modifier(&self) -> &'static str {
        self.modifier
    }

    pub(crate) fn invoke(&self, obj: &mut O) -> Result<()> {
        (self.apply)(obj)
    }
}

impl<O> fmt::Debug for ModifierRecord<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModifierRecord")
            .field("modifier", &self.modifier)
            .finish()
    }
}

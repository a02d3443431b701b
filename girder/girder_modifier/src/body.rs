//! Open type bodies and the sealed queues they produce.
//!
//! The body is an explicit value rather than implicit ambient scope: the
//! spec layer opens a [`TypeBody`] while it evaluates a type's
//! declarations, every deferred helper call takes the body as a parameter,
//! and sealing the body yields the immutable [`ModifierQueue`] for that
//! type.
//!
//! A queue's order is exactly the order its records were declared in; this
//! is what lets a declarative body defer an action that needs a sibling
//! attribute declared three lines later.

use girder_core::{Description, Result, TypeKey};

use crate::record::ModifierRecord;

/// A type body that is currently open for declarations.
///
/// Accumulates the records queued by deferred helper calls made while the
/// body executes. Created empty; consumed by [`seal`](TypeBody::seal) when
/// the body finishes.
pub struct TypeBody<O> {
    key: TypeKey,
    records: Vec<ModifierRecord<O>>,
}

impl<O> TypeBody<O> {
    /// Opens a body for the description type `D`.
    pub fn open<D: Description>() -> Self {
        Self {
            key: D::key(),
            records: Vec::new(),
        }
    }

    /// The description type this body belongs to.
    pub fn key(&self) -> TypeKey {
        self.key
    }

    pub(crate) fn push(&mut self, record: ModifierRecord<O>) {
        log::trace!("queued {} in body of {}", record.modifier(), self.key);
        self.records.push(record);
    }

    /// Returns the number of records queued so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no deferred statements have executed in this body yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Closes the body, producing its immutable queue.
    pub fn seal(self) -> ModifierQueue<O> {
        ModifierQueue {
            key: self.key,
            records: self.records,
        }
    }
}

/// The sealed, ordered modifier queue of one type body.
///
/// Immutable once created. Replaying consumes nothing: the queue may in
/// principle be replayed more than once, and every replay re-executes every
/// record. At-most-once invocation per constructed object is the caller's
/// obligation, typically discharged by replaying exactly once, right after
/// the object's own construction completes.
pub struct ModifierQueue<O> {
    key: TypeKey,
    records: Vec<ModifierRecord<O>>,
}

impl<O> ModifierQueue<O> {
    /// The description type whose body produced this queue.
    pub fn key(&self) -> TypeKey {
        self.key
    }

    /// Returns the number of records in the queue.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the queue holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the queued modifiers' names in declaration order.
    pub fn modifiers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.records.iter().map(ModifierRecord::modifier)
    }

    /// Invokes every record against `obj`, in declaration order.
    ///
    /// # Errors
    ///
    /// The first failing record's error, unmodified; later records do not
    /// run. A failing modifier stops the build rather than produce a
    /// partially wired object.
    pub fn replay(&self, obj: &mut O) -> Result<()> {
        for record in &self.records {
            log::trace!("replaying {} from {}", record.modifier(), self.key);
            record.invoke(obj)?;
        }
        Ok(())
    }
}

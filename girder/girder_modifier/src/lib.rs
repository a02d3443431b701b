//! # Girder Modifier
//!
//! This crate implements the deferred declarative-modifier mechanism of the
//! Girder substrate. Statements written inside a type's body are queued
//! rather than executed, then replayed later, in declaration order, against
//! the fully constructed runtime object. This solves the
//! forward-reference problem of declarative bodies: a statement may wire up
//! a default that depends on a sibling attribute declared three lines
//! further down, because nothing runs until the whole body exists.
//!
//! ## Core Components
//!
//! - **Record**: [`Modifier`], the wrapper that queues instead of
//!   executing, and [`ModifierRecord`], one captured invocation
//! - **Body**: [`TypeBody`], the explicit open-body builder, and
//!   [`ModifierQueue`], the sealed ordered queue it produces
//! - **Set**: [`ModifierSet`], the per-type ownership table realizing the
//!   inherit-or-shadow (never merge) rule and the replay entry point
//!
//! ## Usage Example
//!
//! ```
//! use girder_core::describe;
//! use girder_modifier::{Modifier, ModifierSet, TypeBody};
//!
//! #[derive(Default)]
//! struct Component {
//!     defaults: Vec<(String, String)>,
//! }
//!
//! struct Server;
//! describe!(Server);
//!
//! let set_default = Modifier::new(
//!     "set_default",
//!     |component: &mut Component, (field, value): &(String, String)| {
//!         component.defaults.push((field.clone(), value.clone()));
//!         Ok(())
//!     },
//! );
//!
//! let set = ModifierSet::new();
//! let mut body = TypeBody::open::<Server>();
//! set_default.defer(&mut body, ("flavor".into(), "m1.small".into()));
//! set.install(body.seal()).unwrap();
//! set.freeze();
//!
//! // Construction completes first; replay runs once afterwards.
//! let mut component = Component::default();
//! set.replay::<Server>(&mut component).unwrap();
//! assert_eq!(component.defaults.len(), 1);
//! ```

pub mod body;
pub mod record;
pub mod set;

// Re-export commonly used types
pub use body::{ModifierQueue, TypeBody};
pub use record::{Modifier, ModifierRecord};
pub use set::ModifierSet;

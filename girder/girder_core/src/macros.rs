//! Convenience macros for the Girder substrate.
//!
//! This module provides the [`describe!`](crate::describe) macro, which
//! implements [`Description`](crate::Description) for a marker type with a
//! cached lineage, for both root and derived types.

/// Implement [`Description`](crate::Description) for a description type.
///
/// The one-type form declares a root type with no bases. The colon form
/// declares the type's bases in order; their lineages are merged
/// depth-first with first-occurrence deduplication, most-derived first.
///
/// The lineage is computed on first access and cached for the life of the
/// process.
///
/// # Examples
///
/// ```
/// use girder_core::{describe, Description, TypeKey};
///
/// struct Server;
/// struct LinuxServer;
/// struct WebServer;
///
/// describe!(Server);
/// describe!(LinuxServer: Server);
/// describe!(WebServer: LinuxServer);
///
/// assert_eq!(
///     WebServer::lineage().keys(),
///     &[
///         TypeKey::of::<WebServer>(),
///         TypeKey::of::<LinuxServer>(),
///         TypeKey::of::<Server>(),
///     ]
/// );
/// ```
#[macro_export]
macro_rules! describe {
    ($ty:ty) => {
        impl $crate::Description for $ty {
            fn lineage() -> &'static $crate::Lineage {
                static LINEAGE: ::std::sync::OnceLock<$crate::Lineage> =
                    ::std::sync::OnceLock::new();
                LINEAGE.get_or_init($crate::Lineage::root::<$ty>)
            }
        }
    };

    ($ty:ty : $($base:ty),+ $(,)?) => {
        impl $crate::Description for $ty {
            fn lineage() -> &'static $crate::Lineage {
                static LINEAGE: ::std::sync::OnceLock<$crate::Lineage> =
                    ::std::sync::OnceLock::new();
                LINEAGE.get_or_init(|| {
                    $crate::Lineage::derived::<$ty>(&[
                        $(<$base as $crate::Description>::lineage()),+
                    ])
                })
            }
        }
    };
}

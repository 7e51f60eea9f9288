//! Shared fallback map.
//!
//! Maps fully-qualified dotted names (e.g. `"requests.get"`) to substitute
//! values consulted in sink mode. The map is a handle type: cloning creates
//! another reference to the same underlying table, so a fallback registered
//! through one handle is visible to every sink and deferred path already
//! holding another.

use std::collections::HashMap ;
use std::sync::{ Arc, PoisonError, RwLock };

use crate::value::Value ;



/// A concurrent table from fully-qualified dotted name to fallback [`Value`].
///
/// Safe to share across proxies and threads; entries are only ever added,
/// never removed, so a lookup racing an insert sees either the old or the new
/// table state and nothing in between.
#[derive( Clone, Default )]
pub struct FallbackMap {
    entries: Arc<RwLock<HashMap<String, Value>>>,
}

impl FallbackMap {
    /// Creates an empty map.
    pub fn new() -> Self { Self::default() }

    /// Registers a fallback for a fully-qualified dotted name.
    ///
    /// A later registration for the same name replaces the earlier one.
    pub fn insert( &self, qualname: impl Into<String>, fallback: impl Into<Value> ) -> &Self {
        self.entries.write()
            .unwrap_or_else( PoisonError::into_inner )
            .insert( qualname.into(), fallback.into() );
        self
    }

    /// Looks up the fallback registered for a fully-qualified name, if any.
    pub fn get( &self, qualname: &str ) -> Option<Value> {
        self.entries.read()
            .unwrap_or_else( PoisonError::into_inner )
            .get( qualname )
            .cloned()
    }

    /// Number of registered fallbacks.
    pub fn len( &self ) -> usize {
        self.entries.read().unwrap_or_else( PoisonError::into_inner ).len()
    }

    /// Whether no fallbacks are registered.
    pub fn is_empty( &self ) -> bool { self.len() == 0 }
}

impl std::fmt::Debug for FallbackMap {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        let entries = self.entries.read().unwrap_or_else( PoisonError::into_inner );
        f.debug_set().entries( entries.keys() ).finish()
    }
}

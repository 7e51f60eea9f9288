//! The factory for lazy proxies.
//!
//! An [`Importer`] bundles the configuration shared by a batch of deferred
//! imports - the module source, the sink flag, and an optionally shared
//! fallback map - and builds one [`LazyProxy`] per requested specifier.
//! Nothing is loaded at factory time.

use std::sync::Arc ;

use nonempty_collections::{ IntoNonEmptyIterator, NEVec, NonEmptyIterator };
use pipe_trait::Pipe ;

use crate::fallback::FallbackMap ;
use crate::import_spec::ImportSpec ;
use crate::proxy::LazyProxy ;
use crate::registry::{ global_registry, LoadError, ModuleSource };
use crate::value::Value ;



/// Builds lazy proxies over a [`ModuleSource`].
///
/// ```
/// use std::sync::Arc ;
/// use lazy_link::{ Importer, ImportSpec, Module, Registry, nev };
///
/// let registry = Arc::new( Registry::new() );
/// registry.register_module( Module::new( "math" ));
///
/// let importer = Importer::new( registry );
/// let proxies = importer.import_all( nev![
/// 	ImportSpec::from( "math" ),
/// 	ImportSpec::from(( "np", "numpy" )),
/// ]);
/// for proxy in &proxies {
/// 	assert!( !proxy.is_loaded() );
/// }
/// ```
#[derive( Clone )]
pub struct Importer {
    source: Arc<dyn ModuleSource>,
    sink: bool,
    fallbacks: FallbackMap,
}

impl Importer {

    /// Creates an importer over the given source, with sink mode off and an
    /// empty fallback map.
    pub fn new( source: Arc<dyn ModuleSource> ) -> Self {
        Self { source, sink: false, fallbacks: FallbackMap::new() }
    }

    /// Creates an importer over the process-wide
    /// [`global_registry`]( crate::global_registry ).
    pub fn global() -> Self {
        struct GlobalSource ;
        impl ModuleSource for GlobalSource {
            fn load( &self, path: &str ) -> Result<Value, LoadError> {
                global_registry().load( path )
            }
        }
        Self::new( Arc::new( GlobalSource ))
    }

    /// Enables sink mode for every proxy this importer builds.
    pub fn with_sink( mut self ) -> Self {
        self.sink = true ;
        self
    }

    /// Shares a fallback map across every proxy this importer builds.
    ///
    /// The map is held by handle, so fallbacks registered later - through the
    /// map itself, a proxy's `set`, or a deferred path - are visible to every
    /// proxy built from it.
    pub fn with_fallbacks( mut self, fallbacks: FallbackMap ) -> Self {
        self.fallbacks = fallbacks ;
        self
    }

    /// Builds one proxy for a specifier: a bare dotted path or an
    /// (alias, path) pair. No loading occurs.
    pub fn import( &self, spec: impl Into<ImportSpec> ) -> LazyProxy {
        spec.into().pipe(| spec | LazyProxy::new(
            spec,
            Arc::clone( &self.source ),
            self.sink,
            self.fallbacks.clone(),
        ))
    }

    /// Builds one proxy per specifier, preserving input order.
    pub fn import_all<S>( &self, specs: impl IntoNonEmptyIterator<Item = S> ) -> NEVec<LazyProxy>
    where
        S: Into<ImportSpec>,
    {
        specs.into_nonempty_iter().map(| spec | self.import( spec )).collect()
    }

}

impl std::fmt::Debug for Importer {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        f.debug_struct( "Importer" )
            .field( "source", &"<dyn ModuleSource>" )
            .field( "sink", &self.sink )
            .field( "fallbacks", &self.fallbacks )
            .finish()
    }
}

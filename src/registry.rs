//! Module sources and the registry.
//!
//! Rust has no ambient importer, so the load mechanism behind a proxy is a
//! trait: implement [`ModuleSource`] to define how dotted module paths turn
//! into values. The source can be anything - a static table, generated
//! bindings, a dynamic loader. The shipped [`Registry`] covers the common
//! case of a thread-safe path-to-loader table, and
//! [`global_registry`] provides a process-wide default.

use std::collections::HashMap ;
use std::sync::{ Arc, PoisonError, RwLock };
use once_cell::sync::Lazy ;
use thiserror::Error ;

use crate::value::{ Module, Value };



/// Errors produced by a [`ModuleSource`].
///
/// The distinction matters during resolution: `NotFound` makes the resolver
/// retreat to a shorter path prefix, while any other failure ends the retreat
/// and the proxy resolves to its sentinel.
#[derive( Error, Debug )]
pub enum LoadError {
    /// No module is registered under this path.
    #[error( "module '{0}' not found" )] NotFound( String ),
    /// A loader was found but failed to produce the module.
    #[error( "loading module '{path}' failed: {reason}" )] Failed { path: String, reason: String },
}

/// Trait for loading modules from a user-defined source.
///
/// Implement this to define where proxies resolve their targets from. Proxies
/// call [`load`]( ModuleSource::load ) with candidate dotted prefixes of the
/// requested path, longest first, and treat [`LoadError::NotFound`] as "try a
/// shorter prefix".
pub trait ModuleSource: Send + Sync {
    /// Loads the module registered under `path`.
    ///
    /// # Errors
    /// [`LoadError::NotFound`] if nothing is registered under `path`;
    /// [`LoadError::Failed`] if a loader exists but could not produce the
    /// module.
    fn load( &self, path: &str ) -> Result<Value, LoadError> ;
}

type Loader = Arc<dyn Fn() -> Result<Value, LoadError> + Send + Sync> ;

/// A thread-safe table from module path to loader.
///
/// Loaders run on demand, once per proxy resolution; a proxy's load-once
/// guarantee lives in the proxy, not here, so two distinct proxies for the
/// same path each invoke the loader.
#[derive( Default )]
pub struct Registry {
    modules: RwLock<HashMap<String, Loader>>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self { Self::default() }

    /// Registers a loader for a module path.
    ///
    /// The loader runs each time the path is loaded. Registering the same
    /// path again replaces the previous loader.
    pub fn register(
        &self,
        path: impl Into<String>,
        loader: impl Fn() -> Result<Value, LoadError> + Send + Sync + 'static,
    ) -> &Self {
        self.modules.write()
            .unwrap_or_else( PoisonError::into_inner )
            .insert( path.into(), Arc::new( loader ));
        self
    }

    /// Registers an eagerly built module under its own name.
    ///
    /// The module is shared; every load hands back another handle to it.
    pub fn register_module( &self, module: Module ) -> &Self {
        let path = module.name().to_string();
        let value = Value::from( module );
        self.register( path, move || Ok( value.clone() ))
    }

    /// Whether a loader is registered under `path`.
    pub fn contains( &self, path: &str ) -> bool {
        self.modules.read()
            .unwrap_or_else( PoisonError::into_inner )
            .contains_key( path )
    }
}

impl ModuleSource for Registry {
    fn load( &self, path: &str ) -> Result<Value, LoadError> {
        // Clone the loader out so user code runs outside the table lock.
        let loader = self.modules.read()
            .unwrap_or_else( PoisonError::into_inner )
            .get( path )
            .cloned()
            .ok_or_else(|| LoadError::NotFound( path.to_string() ))?;
        loader()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        let modules = self.modules.read().unwrap_or_else( PoisonError::into_inner );
        f.debug_struct( "Registry" )
            .field( "modules", &modules.keys().collect::<Vec<_>>() )
            .finish()
    }
}

static GLOBAL: Lazy<Registry> = Lazy::new( Registry::new );

/// The process-wide default registry, used by
/// [`Importer::global`]( crate::Importer::global ).
pub fn global_registry() -> &'static Registry { &GLOBAL }

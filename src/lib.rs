//! Lazy import proxies for optional dependencies.
//!
//! A [`LazyProxy`] stands in for a module (or module attribute) that has not
//! been loaded yet. The actual load is deferred until first use, runs at most
//! once per proxy even under concurrent first access, and its outcome is
//! cached for the proxy's lifetime. When the target cannot be loaded at all,
//! the proxy either fails hard on use or - with **sink mode** on - silently
//! absorbs any usage, substituting caller-registered fallback behavior.
//!
//! # Core Concepts
//!
//! - [`ImportSpec`]: An immutable (alias, path) pair naming one deferred
//! 	import. Built from a bare dotted path (alias defaults to the first
//! 	segment) or an explicit (alias, path) pair.
//!
//! - [`ModuleSource`]: The load mechanism behind proxies. Implement it to
//! 	define how dotted paths turn into values; the shipped [`Registry`] is a
//! 	thread-safe path-to-loader table, with a process-wide default reachable
//! 	through [`global_registry`].
//!
//! - [`Value`]: The dynamic value model everything operates on. Attribute
//! 	access, invocation and truthiness are explicit methods
//! 	(`attr`/`call`/`truthy`) rather than implicit interception.
//!
//! - [`LazyProxy`]: The stand-in itself. A handle type; clones share the
//! 	resolution state. Truthiness is the availability contract: `false`
//! 	until the proxy resolves to a real target or a sink, `true` after.
//!
//! - [`Sink`]: The truthy absorbing stand-in cached when resolution fails in
//! 	sink mode. Attribute chains of any depth never fail; calls dispatch to
//! 	fallbacks registered by fully-qualified dotted name in a shared
//! 	[`FallbackMap`].
//!
//! - [`AttrProxy`]: A deferred dotted sub-path on a proxy that has not
//! 	resolved yet (sink mode only) - register fallbacks on it, chain deeper,
//! 	or force resolution by calling it.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc ;
//! use lazy_link::{ Importer, Module, Registry, Value };
//!
//! # fn main() -> Result<(), lazy_link::AccessError> {
//! // Register a module. In an application this is typically done once at
//! // startup, against the global registry.
//! let registry = Arc::new( Registry::new() );
//! registry.register_module( Module::new( "math" ).with_attr( "sqrt", Value::function(| args | {
//! 	let x = args.first().and_then( Value::as_float ).unwrap_or( 0.0 );
//! 	Ok( Value::Float( x.sqrt() ))
//! })));
//!
//! // Nothing is loaded at import time.
//! let math = Importer::new( registry ).import( "math" );
//! assert!( !math.is_loaded() );
//!
//! // First access resolves; later accesses reuse the cached value.
//! let result = math.attr( "sqrt" )?.call( &[ Value::Float( 4.0 )])?;
//! assert_eq!( result, Value::Float( 2.0 ));
//! assert!( math.truthy() );
//! # Ok(())
//! # }
//! ```
//!
//! # Sink Mode
//!
//! With sink mode on, a missing target never fails - it absorbs usage, and
//! fallbacks registered by fully-qualified name substitute real behavior.
//!
//! ```
//! use std::sync::Arc ;
//! use lazy_link::{ Importer, Registry, Value };
//!
//! # fn main() -> Result<(), lazy_link::AccessError> {
//! let registry = Arc::new( Registry::new() );
//! let telemetry = Importer::new( registry ).with_sink().import( "telemetry" );
//!
//! // Register a substitute for `telemetry.flush` before first use.
//! telemetry.set( "flush", Value::function(| _args | Ok( Value::Bool( true ))));
//!
//! // The missing dependency absorbs everything else.
//! let flushed = telemetry.attr( "flush" )?.call( &[] )?;
//! assert_eq!( flushed, Value::Bool( true ));
//! let absorbed = telemetry.attr( "span" )?.attr( "enter" )?.call( &[] )?;
//! assert_eq!( absorbed, Value::Unit );
//! assert!( telemetry.truthy() );
//! # Ok(())
//! # }
//! ```
//!
//! # Hard Failure
//!
//! With sink mode off, a missing target stays falsy and any use is an error
//! naming the dependency.
//!
//! ```
//! use std::sync::Arc ;
//! use lazy_link::{ AccessError, Importer, Registry };
//!
//! let registry = Arc::new( Registry::new() );
//! let numpy = Importer::new( registry ).import(( "np", "numpy" ));
//!
//! assert!( !numpy.truthy() );
//! assert!( numpy.is_loaded() );		// the attempt ran and was cached
//! assert!( matches!( numpy.attr( "array" ), Err( AccessError::MissingDependency( _ ))));
//! ```
//!
//! # Debug Warning
//!
//! Setting the `LAZY_LINK_DEBUG=1` environment variable makes the first sink
//! constructed process-wide emit a single `tracing` warning; later sink
//! constructions are silent.

mod import_spec ;
mod value ;
mod fallback ;
mod sink ;
mod attr_proxy ;
mod proxy ;
mod registry ;
mod importer ;

#[doc( no_inline )]
pub use nonempty_collections::{ NEVec, nev };

pub use import_spec::ImportSpec ;
pub use value::{ AccessError, Module, NativeFn, Value };
pub use fallback::FallbackMap ;
pub use sink::{ Sink, SinkWarning, DEBUG_ENV_VAR, global_warning };
pub use attr_proxy::AttrProxy ;
pub use proxy::LazyProxy ;
pub use registry::{ LoadError, ModuleSource, Registry, global_registry };
pub use importer::Importer ;

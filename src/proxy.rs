//! The lazy proxy: deferred resolution with load-once semantics.
//!
//! A [`LazyProxy`] stands in for a module (or module attribute) that has not
//! been loaded yet. The first real access resolves the dotted path against
//! the proxy's [`ModuleSource`] and caches the outcome for the proxy's
//! lifetime: the real value, a hard-failing missing sentinel, or an absorbing
//! [`Sink`] when sink mode is on.

use std::sync::{ Arc, PoisonError, RwLock };
use std::sync::atomic::{ AtomicBool, Ordering };

use itertools::Itertools ;
use pipe_trait::Pipe ;

use crate::attr_proxy::AttrProxy ;
use crate::fallback::FallbackMap ;
use crate::import_spec::ImportSpec ;
use crate::registry::{ LoadError, ModuleSource };
use crate::sink::Sink ;
use crate::value::{ AccessError, Value };



/// The cached outcome of a resolution attempt.
#[derive( Clone )]
pub(crate) enum Resolved {
	/// The target loaded; trailing path segments already walked.
	Real( Value ),
	/// The target could not be resolved and sink mode was off.
	Missing,
	/// The target could not be resolved and sink mode was on.
	Sink( Sink ),
}

struct ProxyInner {
	spec: ImportSpec,
	source: Arc<dyn ModuleSource>,
	/// Whether failed resolution substitutes a sink instead of hard failure
	sink: AtomicBool,
	/// Shared with every sink and deferred path this proxy spawns
	fallbacks: FallbackMap,
	/// Transitions from `None` to `Some` exactly once, under the write lock.
	/// The only later mutation is the Missing-to-Sink conversion in
	/// `enable_sink`.
	state: RwLock<Option<Resolved>>,
	/// True once resolution produced a real value or a sink
	available: AtomicBool,
}

/// Stand-in for a not-yet-loaded module or module attribute.
///
/// `LazyProxy` is a handle type: cloning creates another reference to the
/// same underlying state, so a clone handed to another thread observes the
/// same resolution outcome. Resolution runs at most once per proxy, guarded
/// by a check / lock / re-check sequence, even under concurrent first access.
///
/// Truthiness is the primary availability contract: a proxy converts to
/// `false` until it resolves to a real target or a sink, `true` thereafter.
#[derive( Clone )]
pub struct LazyProxy {
	inner: Arc<ProxyInner>,
}

impl LazyProxy {

	pub(crate) fn new(
		spec: ImportSpec,
		source: Arc<dyn ModuleSource>,
		sink: bool,
		fallbacks: FallbackMap,
	) -> Self {
		Self { inner: Arc::new( ProxyInner {
			spec,
			source,
			sink: AtomicBool::new( sink ),
			fallbacks,
			state: RwLock::new( None ),
			available: AtomicBool::new( false ),
		})}
	}

	/// The import specification this proxy was built from.
	#[inline] pub fn spec( &self ) -> &ImportSpec { &self.inner.spec }

	/// Whether failed resolution substitutes a sink instead of hard failure.
	pub fn sink_enabled( &self ) -> bool { self.inner.sink.load( Ordering::Acquire )}

	/// Whether resolution has run, regardless of outcome. Never forces
	/// resolution.
	pub fn is_loaded( &self ) -> bool {
		self.inner.state.read()
			.unwrap_or_else( PoisonError::into_inner )
			.is_some()
	}

	/// Forces resolution if it has not run, then reports whether the proxy
	/// holds a usable value (real target or sink).
	pub fn is_available( &self ) -> bool {
		self.force();
		self.inner.available.load( Ordering::Acquire )
	}

	/// Boolean conversion: forces resolution, then reports availability.
	#[inline] pub fn truthy( &self ) -> bool { self.is_available() }

	/// Accesses an attribute.
	///
	/// Before resolution with sink mode on, this returns a deferred
	/// [`AttrProxy`]( crate::AttrProxy ) path builder without resolving.
	/// Otherwise resolution is forced and the access forwards to the resolved
	/// value.
	///
	/// # Errors
	/// [`AccessError::MissingDependency`] if the target is hard-missing, or
	/// [`AccessError::NoSuchAttribute`] from the resolved value.
	pub fn attr( &self, name: &str ) -> Result<Value, AccessError> {
		if !self.is_loaded() && self.sink_enabled() {
			return Ok( Value::Deferred( AttrProxy::new( self.clone(), name )));
		}
		match self.force() {
			Resolved::Real( value ) => value.attr( name ),
			Resolved::Missing => Err( self.missing_error() ),
			Resolved::Sink( sink ) => Ok( sink.attr( name )),
		}
	}

	/// Forces resolution and invokes the resolved value.
	///
	/// # Errors
	/// [`AccessError::MissingDependency`] if the target is hard-missing;
	/// otherwise whatever the resolved value produces.
	pub fn call( &self, args: &[Value] ) -> Result<Value, AccessError> {
		match self.force() {
			Resolved::Real( value ) => value.call( args ),
			Resolved::Missing => Err( self.missing_error() ),
			Resolved::Sink( sink ) => sink.call( args ),
		}
	}

	/// Forces resolution and returns the resolved value: the real target, or
	/// the sink standing in for it.
	///
	/// # Errors
	/// [`AccessError::MissingDependency`] if the target is hard-missing.
	pub fn value( &self ) -> Result<Value, AccessError> {
		match self.force() {
			Resolved::Real( value ) => Ok( value ),
			Resolved::Missing => Err( self.missing_error() ),
			Resolved::Sink( sink ) => Ok( Value::Sink( sink )),
		}
	}

	/// Registers a fallback for `alias.attribute` in the shared fallback map.
	///
	/// Legal in any state; it only becomes observable once a sink or deferred
	/// path for that name consults the map.
	pub fn set( &self, attribute: &str, fallback: impl Into<Value> ) -> &Self {
		self.inner.fallbacks.insert(
			format!( "{}.{}", self.inner.spec.alias(), attribute ),
			fallback,
		);
		self
	}

	/// Idempotently turns sink mode on.
	///
	/// If resolution already failed hard, the cached missing sentinel is
	/// converted to a sink in place and the proxy becomes available, without
	/// re-attempting the load.
	pub fn enable_sink( &self ) -> &Self {
		self.inner.sink.store( true, Ordering::Release );
		let mut slot = self.inner.state.write().unwrap_or_else( PoisonError::into_inner );
		if matches!( slot.as_ref(), Some( Resolved::Missing )) {
			*slot = Some( Resolved::Sink( Sink::new(
				self.inner.spec.alias(),
				self.inner.fallbacks.clone(),
			)));
			self.inner.available.store( true, Ordering::Release );
		}
		self
	}

	/// Turns sink mode on and returns the proxy for chaining.
	///
	/// Unlike [`enable_sink`]( Self::enable_sink ), this does **not** convert
	/// an already-cached missing sentinel; it only affects resolutions that
	/// have not happened yet.
	pub fn with_sink( self ) -> Self {
		self.inner.sink.store( true, Ordering::Release );
		self
	}

	/// Equality against a dynamic value.
	///
	/// # Errors
	/// Comparing against a boolean literal is always an
	/// [`AccessError::InvalidComparison`]; convert with
	/// [`truthy`]( Self::truthy ) or query
	/// [`is_available`]( Self::is_available ) instead. Any other operand is
	/// simply not equal, without forcing resolution.
	pub fn try_eq( &self, other: &Value ) -> Result<bool, AccessError> {
		match other {
			Value::Bool( literal ) => Err( self.comparison_error( "==", *literal )),
			_ => Ok( false ),
		}
	}

	/// Inequality against a dynamic value. Same contract as
	/// [`try_eq`]( Self::try_eq ).
	///
	/// # Errors
	/// [`AccessError::InvalidComparison`] for boolean literals.
	pub fn try_ne( &self, other: &Value ) -> Result<bool, AccessError> {
		match other {
			Value::Bool( literal ) => Err( self.comparison_error( "!=", *literal )),
			_ => Ok( true ),
		}
	}

	pub(crate) fn fallbacks( &self ) -> &FallbackMap { &self.inner.fallbacks }

	/// Resolves at most once and returns the cached outcome.
	///
	/// Fast path: a read lock observing an already-resolved slot. First-time
	/// resolution re-checks under the write lock so concurrent first accesses
	/// import the target once and all observe the same value.
	pub(crate) fn force( &self ) -> Resolved {
		if let Some( resolved ) = self.inner.state.read()
			.unwrap_or_else( PoisonError::into_inner )
			.as_ref()
		{
			return resolved.clone();
		}

		let mut slot = self.inner.state.write().unwrap_or_else( PoisonError::into_inner );
		if let Some( resolved ) = slot.as_ref() {
			return resolved.clone();
		}

		let resolved = self.import();
		self.inner.available.store(
			!matches!( resolved, Resolved::Missing ),
			Ordering::Release,
		);
		*slot = Some( resolved.clone() );
		resolved
	}

	/// Runs the longest-prefix retreat against the module source.
	///
	/// The dotted path is ambiguous about where the module ends and attribute
	/// access begins, so the longest prefix is tried first and shortened one
	/// segment at a time on `NotFound`. The first prefix that loads is the
	/// base module; remaining segments resolve as attribute accesses on it.
	fn import( &self ) -> Resolved {
		let segments: Vec<&str> = self.inner.spec.segments().collect();
		for taken in ( 1..=segments.len() ).rev() {
			let prefix = segments[..taken].iter().join( "." );
			match self.inner.source.load( &prefix ) {
				Ok( module ) => return segments[taken..].iter()
					.try_fold( module, | value, segment | value.attr( segment ))
					.pipe(| walked | match walked {
						Ok( value ) => Resolved::Real( value ),
						// A missing trailing attribute is a failed
						// resolution, cached like a failed import.
						Err( _ ) => self.missing_or_sink(),
					}),
				Err( LoadError::NotFound( _ )) => continue,
				Err( LoadError::Failed { .. } ) => break,
			}
		}
		self.missing_or_sink()
	}

	fn missing_or_sink( &self ) -> Resolved {
		match self.inner.sink.load( Ordering::Acquire ) {
			true => Resolved::Sink( Sink::new(
				self.inner.spec.alias(),
				self.inner.fallbacks.clone(),
			)),
			false => Resolved::Missing,
		}
	}

	fn missing_error( &self ) -> AccessError {
		AccessError::MissingDependency( self.inner.spec.alias().to_string() )
	}

	fn comparison_error( &self, operator: &'static str, literal: bool ) -> AccessError {
		AccessError::InvalidComparison {
			alias: self.inner.spec.alias().to_string(),
			operator,
			literal,
		}
	}

}

impl std::fmt::Debug for LazyProxy {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		let state = match self.is_loaded() {
			true => "loaded",
			false => "pending",
		};
		f.debug_struct( "LazyProxy" )
			.field( "path", &self.inner.spec.path() )
			.field( "state", &state )
			.field( "available", &self.inner.available.load( Ordering::Acquire ))
			.finish_non_exhaustive()
	}
}

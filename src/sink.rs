//! Sink sentinel and the one-shot debug warning.
//!
//! A [`Sink`] is the truthy stand-in cached when resolution fails while sink
//! mode is on. It absorbs arbitrarily deep attribute chains without failing,
//! substituting registered fallbacks where the caller provided them.

use std::sync::atomic::{ AtomicBool, Ordering };

use crate::fallback::FallbackMap ;
use crate::value::{ AccessError, Value };



/// Environment variable that enables the one-shot sink warning.
pub const DEBUG_ENV_VAR: &str = "LAZY_LINK_DEBUG" ;

/// One-shot latch behind the sink construction warning.
///
/// The first sink constructed process-wide emits a single `tracing` warning
/// when [`DEBUG_ENV_VAR`] is set to `1`; every later construction is silent.
/// The latch never resets. Tests exercise a fresh instance instead of the
/// process-wide one.
#[derive( Debug )]
pub struct SinkWarning {
	emitted: AtomicBool,
}

impl SinkWarning {
	/// Creates an unfired latch.
	pub const fn new() -> Self {
		Self { emitted: AtomicBool::new( false )}
	}

	/// Emits the warning if the debug variable is set and the latch has not
	/// fired yet. Returns whether this call emitted.
	pub fn fire( &self ) -> bool {
		self.fire_if( std::env::var( DEBUG_ENV_VAR ).as_deref() == Ok( "1" ))
	}

	/// Emits the warning if `enabled` and the latch has not fired yet,
	/// bypassing the environment lookup. Returns whether this call emitted.
	pub fn fire_if( &self, enabled: bool ) -> bool {
		if !enabled { return false }
		match self.emitted.swap( true, Ordering::Relaxed ) {
			true => false,
			false => {
				tracing::warn!( "lazy_link: substituting a sink proxy for a missing import" );
				true
			}
		}
	}

	/// Whether the warning has been emitted.
	pub fn has_emitted( &self ) -> bool { self.emitted.load( Ordering::Relaxed )}
}

impl Default for SinkWarning {
	fn default() -> Self { Self::new() }
}

static SINK_WARNING: SinkWarning = SinkWarning::new();

/// The process-wide warning latch consulted by [`Sink`] construction.
pub fn global_warning() -> &'static SinkWarning { &SINK_WARNING }

/// Truthy stand-in for a missing import.
///
/// Carries its own fully-qualified name and a handle to the shared fallback
/// map. Attribute access returns the registered fallback for the deeper
/// qualified name when one exists, otherwise a sink scoped to that name, so
/// chains of any depth never fail. Calling a sink dispatches to the fallback
/// registered for its own qualified name, or absorbs the call.
#[derive( Clone )]
pub struct Sink {
	qualname: String,
	fallbacks: FallbackMap,
}

impl Sink {
	pub(crate) fn new( qualname: impl Into<String>, fallbacks: FallbackMap ) -> Self {
		global_warning().fire();
		Self { qualname: qualname.into(), fallbacks }
	}

	/// The fully-qualified dotted name this sink stands in for.
	#[inline] pub fn qualname( &self ) -> &str { &self.qualname }

	/// Registers a fallback for this sink's own qualified name.
	pub fn set( &self, fallback: impl Into<Value> ) -> &Self {
		self.fallbacks.insert( self.qualname.clone(), fallback );
		self
	}

	/// Accesses an attribute: the registered fallback for the deeper name, or
	/// a sink scoped to it.
	pub fn attr( &self, name: &str ) -> Value {
		let qualname = match self.qualname.is_empty() {
			true => name.to_string(),
			false => format!( "{}.{}", self.qualname, name ),
		};
		match self.fallbacks.get( &qualname ) {
			Some( fallback ) => fallback,
			None => Value::Sink( Self::new( qualname, self.fallbacks.clone() )),
		}
	}

	/// Invokes the fallback registered for this sink's own qualified name,
	/// or returns [`Value::Unit`] if none is registered (or the registered
	/// fallback is not callable).
	///
	/// # Errors
	/// Only whatever error a registered fallback function itself produces.
	pub fn call( &self, args: &[Value] ) -> Result<Value, AccessError> {
		match self.fallbacks.get( &self.qualname ) {
			Some( Value::Function( fallback )) => fallback( args ),
			_ => Ok( Value::Unit ),
		}
	}
}

impl std::fmt::Debug for Sink {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "Sink" )
			.field( "qualname", &self.qualname )
			.field( "fallbacks", &self.fallbacks )
			.finish()
	}
}

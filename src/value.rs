//! The dynamic value model flowing through proxies.
//!
//! Resolution hands back a [`Value`], and every proxy operation is expressed
//! against its uniform contract: [`attr`]( Value::attr ) for attribute access,
//! [`call`]( Value::call ) for invocation, [`truthy`]( Value::truthy ) for
//! boolean conversion. Real targets are [`Module`]s built by the caller (or a
//! registered loader); the remaining variants carry the sink and deferred-path
//! machinery.

use std::collections::HashMap ;
use std::sync::Arc ;
use thiserror::Error ;

use crate::attr_proxy::AttrProxy ;
use crate::sink::Sink ;



/// A host function callable through a [`Value`].
pub type NativeFn = Arc<dyn Fn( &[Value] ) -> Result<Value, AccessError> + Send + Sync> ;

/// Errors produced when using a proxy or a resolved value.
///
/// Resolution failures never surface here directly; they are cached as
/// sentinel values, and only *use* of a missing sentinel produces
/// [`MissingDependency`]( AccessError::MissingDependency ).
#[derive( Error, Debug )]
pub enum AccessError {
	/// The target could not be resolved and sink mode is off.
	#[error( "optional dependency '{0}' is not installed" )] MissingDependency( String ),
	/// The named attribute does not exist on the target.
	#[error( "'{target}' has no attribute '{attribute}'" )] NoSuchAttribute { target: String, attribute: String },
	/// The value cannot be invoked.
	#[error( "'{0}' is not callable" )] NotCallable( String ),
	/// A proxy was compared against a boolean literal.
	#[error(
		"invalid comparison: `{alias}` {operator} {literal}; \
		use `proxy.truthy()` or `proxy.is_available()` instead of comparing against a boolean literal"
	)]
	InvalidComparison { alias: String, operator: &'static str, literal: bool },
}

/// A dynamic value: the result of resolving a proxy, or a stand-in for one.
///
/// `Value` is a cheap handle; cloning shares the underlying module, function,
/// or fallback state rather than duplicating it.
#[derive( Clone )]
pub enum Value {
	/// The neutral "no result" value, returned by unregistered sink calls.
	Unit,
	/// A boolean.
	Bool( bool ),
	/// A signed integer.
	Int( i64 ),
	/// A floating point number.
	Float( f64 ),
	/// A string.
	Str( String ),
	/// A callable host function.
	Function( NativeFn ),
	/// An attribute-bearing module.
	Module( Arc<Module> ),
	/// A truthy absorbing stand-in for a missing target (sink mode).
	Sink( Sink ),
	/// A deferred attribute path on a not-yet-resolved proxy (sink mode).
	Deferred( AttrProxy ),
}

impl Value {
	/// Wraps a host closure as a callable value.
	pub fn function( f: impl Fn( &[Value] ) -> Result<Value, AccessError> + Send + Sync + 'static ) -> Self {
		Self::Function( Arc::new( f ))
	}

	/// Wraps a string as a value.
	pub fn str( s: impl Into<String> ) -> Self { Self::Str( s.into() )}

	/// A short name for the variant, used in error messages.
	pub fn type_name( &self ) -> &'static str { match self {
		Self::Unit => "unit",
		Self::Bool( _ ) => "bool",
		Self::Int( _ ) => "int",
		Self::Float( _ ) => "float",
		Self::Str( _ ) => "str",
		Self::Function( _ ) => "function",
		Self::Module( _ ) => "module",
		Self::Sink( _ ) => "sink",
		Self::Deferred( _ ) => "deferred attribute",
	}}

	/// Accesses an attribute on this value.
	///
	/// Modules look the attribute up in their table; sinks return the
	/// registered fallback for the qualified name or a deeper sink; deferred
	/// paths extend without resolving. Everything else has no attributes.
	///
	/// # Errors
	/// [`AccessError::NoSuchAttribute`] if the value has no such attribute.
	pub fn attr( &self, name: &str ) -> Result<Value, AccessError> { match self {
		Self::Module( module ) => module.get( name )
			.cloned()
			.ok_or_else(|| AccessError::NoSuchAttribute {
				target: module.name().to_string(),
				attribute: name.to_string(),
			}),
		Self::Sink( sink ) => Ok( sink.attr( name )),
		Self::Deferred( deferred ) => Ok( Self::Deferred( deferred.attr( name ))),
		other => Err( AccessError::NoSuchAttribute {
			target: other.type_name().to_string(),
			attribute: name.to_string(),
		}),
	}}

	/// Invokes this value with the given arguments.
	///
	/// Functions run directly; sinks dispatch to their whole-path fallback or
	/// absorb the call; deferred paths force resolution first.
	///
	/// # Errors
	/// [`AccessError::NotCallable`] if the value cannot be invoked, or
	/// whatever error the invoked target itself produces.
	pub fn call( &self, args: &[Value] ) -> Result<Value, AccessError> { match self {
		Self::Function( function ) => function( args ),
		Self::Sink( sink ) => sink.call( args ),
		Self::Deferred( deferred ) => deferred.call( args ),
		other => Err( AccessError::NotCallable( other.type_name().to_string() )),
	}}

	/// Boolean conversion.
	///
	/// Sinks are always truthy; deferred paths force resolution and convert
	/// the value they walk to.
	///
	/// # Errors
	/// Only deferred paths can fail, when the forced walk hits a missing
	/// attribute or a hard-missing target.
	#[allow( clippy::float_cmp )]
	pub fn truthy( &self ) -> Result<bool, AccessError> { match self {
		Self::Unit => Ok( false ),
		Self::Bool( b ) => Ok( *b ),
		Self::Int( n ) => Ok( *n != 0 ),
		Self::Float( x ) => Ok( *x != 0.0 ),
		Self::Str( s ) => Ok( !s.is_empty() ),
		Self::Function( _ ) | Self::Module( _ ) | Self::Sink( _ ) => Ok( true ),
		Self::Deferred( deferred ) => deferred.truthy(),
	}}

	/// Returns the integer if this is an `Int`.
	#[inline] pub fn as_int( &self ) -> Option<i64> { match self {
		Self::Int( n ) => Some( *n ),
		_ => None,
	}}

	/// Returns the number if this is a `Float` or an `Int`.
	#[inline] pub fn as_float( &self ) -> Option<f64> { match self {
		Self::Float( x ) => Some( *x ),
		#[allow( clippy::cast_precision_loss )]
		Self::Int( n ) => Some( *n as f64 ),
		_ => None,
	}}

	/// Returns the string if this is a `Str`.
	#[inline] pub fn as_str( &self ) -> Option<&str> { match self {
		Self::Str( s ) => Some( s ),
		_ => None,
	}}

	/// Returns the boolean if this is a `Bool`.
	#[inline] pub fn as_bool( &self ) -> Option<bool> { match self {
		Self::Bool( b ) => Some( *b ),
		_ => None,
	}}
}

/// Structural equality on primitives; modules compare by identity.
///
/// Sink and deferred values are opaque and never compare equal - their only
/// supported conversion is truthiness.
impl PartialEq for Value {
	#[allow( clippy::float_cmp )]
	fn eq( &self, other: &Value ) -> bool { match ( self, other ) {
		( Self::Unit, Self::Unit ) => true,
		( Self::Bool( a ), Self::Bool( b )) => a == b,
		( Self::Int( a ), Self::Int( b )) => a == b,
		( Self::Float( a ), Self::Float( b )) => a == b,
		( Self::Str( a ), Self::Str( b )) => a == b,
		( Self::Module( a ), Self::Module( b )) => Arc::ptr_eq( a, b ),
		_ => false,
	}}
}

impl std::fmt::Debug for Value {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result { match self {
		Self::Unit => write!( f, "Unit" ),
		Self::Bool( b ) => f.debug_tuple( "Bool" ).field( b ).finish(),
		Self::Int( n ) => f.debug_tuple( "Int" ).field( n ).finish(),
		Self::Float( x ) => f.debug_tuple( "Float" ).field( x ).finish(),
		Self::Str( s ) => f.debug_tuple( "Str" ).field( s ).finish(),
		Self::Function( _ ) => write!( f, "Function( <closure> )" ),
		Self::Module( module ) => f.debug_tuple( "Module" ).field( &module.name() ).finish(),
		Self::Sink( sink ) => f.debug_tuple( "Sink" ).field( &sink.qualname() ).finish(),
		Self::Deferred( deferred ) => f.debug_tuple( "Deferred" ).field( &deferred.path() ).finish(),
	}}
}

impl From<bool> for Value { fn from( b: bool ) -> Self { Self::Bool( b )}}
impl From<i64> for Value { fn from( n: i64 ) -> Self { Self::Int( n )}}
impl From<f64> for Value { fn from( x: f64 ) -> Self { Self::Float( x )}}
impl From<&str> for Value { fn from( s: &str ) -> Self { Self::Str( s.to_string() )}}
impl From<String> for Value { fn from( s: String ) -> Self { Self::Str( s )}}
impl From<Module> for Value { fn from( module: Module ) -> Self { Self::Module( Arc::new( module ))}}

/// An attribute-bearing module, the shape real resolution targets take.
///
/// Built once (usually inside a [`Registry`]( crate::Registry ) loader) and
/// shared behind an `Arc`; the attribute table is immutable after
/// construction.
#[derive( Debug )]
pub struct Module {
	/// Module name, used in error messages
	name: String,
	/// Attribute table, fixed at construction
	attrs: HashMap<String, Value>,
}

impl Module {
	/// Creates an empty module.
	pub fn new( name: impl Into<String> ) -> Self {
		Self { name: name.into(), attrs: HashMap::new() }
	}

	/// Adds an attribute, builder style.
	pub fn with_attr( mut self, name: impl Into<String>, value: impl Into<Value> ) -> Self {
		self.attrs.insert( name.into(), value.into() );
		self
	}

	/// Module name.
	#[inline] pub fn name( &self ) -> &str { &self.name }

	/// Looks up an attribute.
	#[inline] pub fn get( &self, name: &str ) -> Option<&Value> { self.attrs.get( name )}
}

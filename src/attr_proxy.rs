//! Deferred attribute paths.
//!
//! While a sink-mode proxy is still unresolved, attribute access hands back
//! an [`AttrProxy`]: a pure path builder that records the dotted sub-path
//! accessed so far without triggering resolution. The path only turns into a
//! real walk when the caller invokes it or converts it to a boolean.

use crate::proxy::{ LazyProxy, Resolved };
use crate::value::{ AccessError, Value };



/// A dotted sub-path accessed on a proxy that has not resolved yet.
///
/// Supports three things: registering a fallback for its exact sub-path,
/// extending the path with further attribute access, and forcing the owning
/// proxy to resolve (on call or boolean conversion), after which the
/// accumulated path is walked against the resolved value.
#[derive( Debug, Clone )]
pub struct AttrProxy {
    /// Handle to the owning proxy
    root: LazyProxy,
    /// Dotted sub-path accessed so far, relative to the root's alias
    path: String,
}

impl AttrProxy {
    pub(crate) fn new( root: LazyProxy, path: impl Into<String> ) -> Self {
        Self { root, path: path.into() }
    }

    /// The dotted sub-path accessed so far.
    #[inline] pub fn path( &self ) -> &str { &self.path }

    /// The fully-qualified name of this path: `alias.sub.path`.
    pub fn qualname( &self ) -> String {
        format!( "{}.{}", self.root.spec().alias(), self.path )
    }

    /// Registers a fallback for this exact sub-path in the owning proxy's
    /// shared fallback map.
    pub fn set( &self, fallback: impl Into<Value> ) -> &Self {
        self.root.fallbacks().insert( self.qualname(), fallback );
        self
    }

    /// Extends the path with another attribute. Never forces resolution.
    pub fn attr( &self, name: &str ) -> AttrProxy {
        Self::new( self.root.clone(), format!( "{}.{}", self.path, name ))
    }

    /// Forces the owning proxy to resolve, then invokes the value at the
    /// accumulated path.
    ///
    /// # Errors
    /// [`AccessError::MissingDependency`] if the owner resolved hard-missing,
    /// [`AccessError::NoSuchAttribute`] if the walk fails on a real module,
    /// or whatever the invoked target produces.
    pub fn call( &self, args: &[Value] ) -> Result<Value, AccessError> {
        self.resolve()?.call( args )
    }

    /// Forces the owning proxy to resolve, then converts the value at the
    /// accumulated path to a boolean.
    ///
    /// # Errors
    /// Same failure modes as [`call`]( Self::call ).
    pub fn truthy( &self ) -> Result<bool, AccessError> {
        self.resolve()?.truthy()
    }

    /// Resolves the root and walks the accumulated path against the result.
    fn resolve( &self ) -> Result<Value, AccessError> {
        let base = match self.root.force() {
            Resolved::Real( value ) => value,
            Resolved::Sink( sink ) => Value::Sink( sink ),
            Resolved::Missing => return Err( AccessError::MissingDependency(
                self.root.spec().alias().to_string(),
            )),
        };
        self.path.split( '.' )
            .try_fold( base, | value, segment | value.attr( segment ))
    }
}

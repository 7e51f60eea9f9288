//! Import specification types.
//!
//! An [`ImportSpec`] names one deferred import: a human-facing `alias` used to
//! namespace fallback lookups and error messages, and a dotted `path` naming
//! the resolution target. Where the module boundary ends and attribute access
//! begins inside `path` is decided at resolution time, not here.

/// An immutable (alias, path) pair describing one deferred import.
///
/// Built from either a bare dotted path (the alias defaults to the first path
/// segment) or an explicit (alias, path) pair. No validation of the path is
/// performed; a malformed path simply fails to resolve later.
///
/// ```
/// use lazy_link::ImportSpec ;
///
/// let bare = ImportSpec::from( "pathlib.Path" );
/// assert_eq!( bare.alias(), "pathlib" );
/// assert_eq!( bare.path(), "pathlib.Path" );
///
/// let aliased = ImportSpec::from(( "np", "numpy" ));
/// assert_eq!( aliased.alias(), "np" );
/// assert_eq!( aliased.path(), "numpy" );
/// ```
#[derive( Debug, Clone, PartialEq, Eq, Hash )]
pub struct ImportSpec {
    /// Human-facing name, used for fallback namespacing and error messages
    alias: String,
    /// Fully dotted resolution target
    path: String,
}

impl ImportSpec {
    /// Creates a specification with an explicit alias.
    #[inline]
    pub fn new( alias: impl Into<String>, path: impl Into<String> ) -> Self {
        Self { alias: alias.into(), path: path.into() }
    }

    /// Human-facing name for this import.
    #[inline] pub fn alias( &self ) -> &str { &self.alias }

    /// Fully dotted resolution target.
    #[inline] pub fn path( &self ) -> &str { &self.path }

    /// The dotted path split into its segments.
    pub(crate) fn segments( &self ) -> std::str::Split<'_, char> {
        self.path.split( '.' )
    }
}

impl From<&str> for ImportSpec {
    fn from( path: &str ) -> Self {
        let alias = path.split( '.' ).next().unwrap_or( path );
        Self::new( alias, path )
    }
}

impl From<String> for ImportSpec {
    fn from( path: String ) -> Self { Self::from( path.as_str() )}
}

impl From<( &str, &str )> for ImportSpec {
    fn from(( alias, path ): ( &str, &str )) -> Self { Self::new( alias, path )}
}

impl From<( String, String )> for ImportSpec {
    fn from(( alias, path ): ( String, String )) -> Self { Self::new( alias, path )}
}

impl std::fmt::Display for ImportSpec {
    fn fmt( &self, f: &mut std::fmt::Formatter ) -> std::fmt::Result {
        match self.alias == self.path {
            true => write!( f, "{}", self.path ),
            false => write!( f, "{} as {}", self.path, self.alias ),
        }
    }
}

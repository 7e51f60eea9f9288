use lazy_link::ImportSpec ;

#[test]
fn bare_path_aliases_to_the_first_segment() {

	let spec = ImportSpec::from( "matplotlib.pyplot.figure" );
	assert_eq!( spec.alias(), "matplotlib" );
	assert_eq!( spec.path(), "matplotlib.pyplot.figure" );

	let single = ImportSpec::from( "math" );
	assert_eq!( single.alias(), "math" );
	assert_eq!( single.path(), "math" );

}

#[test]
fn explicit_pairs_keep_their_alias() {

	let spec = ImportSpec::from(( "plt", "matplotlib.pyplot" ));
	assert_eq!( spec.alias(), "plt" );
	assert_eq!( spec.path(), "matplotlib.pyplot" );

}

#[test]
fn display_shows_the_alias_only_when_it_differs() {

	assert_eq!( ImportSpec::from( "math" ).to_string(), "math" );
	assert_eq!( ImportSpec::from(( "np", "numpy" )).to_string(), "numpy as np" );

}

#[test]
fn no_validation_happens_at_parse_time() {

	// Malformed paths are accepted; they simply fail to resolve later.
	let spec = ImportSpec::from( "..weird..path.." );
	assert_eq!( spec.alias(), "" );
	assert_eq!( spec.path(), "..weird..path.." );

}

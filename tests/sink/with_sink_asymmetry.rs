use std::sync::Arc ;
use lazy_link::{ AccessError, Importer, Registry };

#[test]
fn with_sink_does_not_convert_a_cached_failure() {

	let ghost = Importer::new( Arc::new( Registry::new() )).import( "ghost" );
	assert!( !ghost.truthy() );

	// Flag only: the cached missing sentinel stays in place.
	let ghost = ghost.with_sink();
	assert!( ghost.sink_enabled() );
	assert!( !ghost.truthy() );
	assert!( matches!( ghost.attr( "x" ), Err( AccessError::MissingDependency( _ ))));

	// Only the explicit conversion upgrades the cached failure.
	ghost.enable_sink();
	assert!( ghost.truthy() );

}

#[test]
fn with_sink_before_resolution_behaves_like_sink_mode() {

	let ghost = Importer::new( Arc::new( Registry::new() )).import( "ghost" ).with_sink();
	assert!( ghost.truthy() );
	assert!( ghost.is_available() );

}

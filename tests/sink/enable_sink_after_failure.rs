use std::sync::atomic::Ordering ;
use lazy_link::{ Importer, Value };

#[test]
fn converts_a_cached_failure_without_reloading() {

	let source = crate::CountingSource::empty();
	let ghost = Importer::new( source.clone() ).import( "ghost.module" );

	assert!( !ghost.truthy() );
	let attempts = source.attempts.load( Ordering::SeqCst );
	// One attempt per dotted prefix: "ghost.module", then "ghost".
	assert_eq!( attempts, 2 );

	ghost.enable_sink();
	assert!( ghost.truthy() );
	let result = ghost.attr( "log" ).expect( "log" ).call( &[] ).expect( "absorbed call" );
	assert_eq!( result, Value::Unit );

	// Sink semantics came from the cached conversion, not a fresh load.
	assert_eq!( source.attempts.load( Ordering::SeqCst ), attempts );

}

#[test]
fn enable_sink_is_idempotent() {

	let source = crate::CountingSource::empty();
	let ghost = Importer::new( source.clone() ).import( "ghost" );
	assert!( !ghost.truthy() );

	ghost.enable_sink().enable_sink();
	assert!( ghost.truthy() );

}

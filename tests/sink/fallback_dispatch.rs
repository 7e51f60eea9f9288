use std::sync::{ Arc, Mutex };
use lazy_link::{ FallbackMap, Importer, Registry, Value };

#[test]
fn registered_fallback_receives_the_arguments() {

	let captured = Arc::new( Mutex::new( Vec::new() ));
	let sink_map = FallbackMap::new();
	let capture = Arc::clone( &captured );
	sink_map.insert( "name.log", Value::function( move | args | {
		let message = args.first().and_then( Value::as_str ).unwrap_or( "" ).to_string();
		capture.lock().expect( "capture lock" ).push( message );
		Ok( Value::Unit )
	}));

	let name = Importer::new( Arc::new( Registry::new() ))
		.with_sink()
		.with_fallbacks( sink_map )
		.import( "name.does.not.exist" );

	name.attr( "log" ).expect( "log" )
		.call( &[ Value::str( "hello" )])
		.expect( "fallback call" );
	assert_eq!( captured.lock().expect( "capture lock" ).as_slice(), [ "hello".to_string() ]);

}

#[test]
fn fallback_return_value_propagates_unchanged() {

	let sink_map = FallbackMap::new();
	sink_map.insert( "ghost.answer", Value::function(| _args | Ok( Value::Int( 42 ))));

	let ghost = Importer::new( Arc::new( Registry::new() ))
		.with_sink()
		.with_fallbacks( sink_map.clone() )
		.import( "ghost" );
	assert!( ghost.truthy() );

	let result = ghost.attr( "answer" ).expect( "answer" ).call( &[] ).expect( "fallback call" );
	assert_eq!( result, Value::Int( 42 ));

	// Non-callable fallbacks are handed back as plain values.
	sink_map.insert( "ghost.version", Value::str( "0.0.0" ));
	let version = ghost.attr( "version" ).expect( "version" );
	assert_eq!( version.as_str(), Some( "0.0.0" ));

}

#[test]
fn shared_map_feeds_multiple_proxies() {

	let sink_map = FallbackMap::new();
	let importer = Importer::new( Arc::new( Registry::new() ))
		.with_sink()
		.with_fallbacks( sink_map.clone() );
	let first = importer.import( "first" );
	let second = importer.import( "second" );

	// Overrides registered after construction are visible to both proxies.
	sink_map.insert( "first.ping", Value::function(| _args | Ok( Value::Int( 1 ))));
	sink_map.insert( "second.ping", Value::function(| _args | Ok( Value::Int( 2 ))));

	assert_eq!( first.attr( "ping" ).expect( "ping" ).call( &[] ).expect( "call" ), Value::Int( 1 ));
	assert_eq!( second.attr( "ping" ).expect( "ping" ).call( &[] ).expect( "call" ), Value::Int( 2 ));

}

use std::sync::Arc ;
use lazy_link::{ AttrProxy, Importer, Module, Registry, Value };

fn deferred( value: Value ) -> AttrProxy {
	match value {
		Value::Deferred( path ) => path,
		other => panic!( "Expected a deferred path, found: {:?}", other ),
	}
}

#[test]
fn set_registers_the_exact_subpath() {

	let ghost = Importer::new( Arc::new( Registry::new() )).with_sink().import( "ghost" );

	let log = deferred( ghost.attr( "log" ).expect( "log" ));
	assert_eq!( log.qualname(), "ghost.log" );
	log.set( Value::function(| args | {
		Ok( args.first().cloned().unwrap_or( Value::Unit ))
	}));

	let echoed = log.call( &[ Value::str( "hello" )]).expect( "fallback call" );
	assert_eq!( echoed.as_str(), Some( "hello" ));

}

#[test]
fn chaining_extends_the_qualified_name() {

	let ghost = Importer::new( Arc::new( Registry::new() )).with_sink().import( "ghost" );

	let deep = deferred( ghost.attr( "a" ).expect( "a" )).attr( "b" ).attr( "c" );
	assert_eq!( deep.qualname(), "ghost.a.b.c" );
	assert!( !ghost.is_loaded(), "chaining must not force resolution" );

	deep.set( Value::function(| _args | Ok( Value::Int( 3 ))));
	assert_eq!( deep.call( &[] ).expect( "fallback call" ), Value::Int( 3 ));
	assert!( ghost.is_loaded() );

}

#[test]
fn proxy_set_feeds_deferred_paths() {

	let ghost = Importer::new( Arc::new( Registry::new() )).with_sink().import( "ghost" );
	ghost.set( "ping", Value::function(| _args | Ok( Value::Int( 1 ))));

	let ping = ghost.attr( "ping" ).expect( "ping" );
	assert_eq!( ping.call( &[] ).expect( "fallback call" ), Value::Int( 1 ));

}

#[test]
fn deferred_paths_walk_real_modules_after_resolution() {

	let registry = Arc::new( Registry::new() );
	registry.register_module( Module::new( "pkg" ).with_attr( "answer", Value::Int( 42 )));

	let pkg = Importer::new( registry ).with_sink().import( "pkg" );
	let answer = deferred( pkg.attr( "answer" ).expect( "answer" ));
	let absent = deferred( pkg.attr( "absent" ).expect( "absent" ));

	assert!( answer.truthy().expect( "forced walk" ));
	assert!( absent.truthy().is_err(), "missing attribute on a real module" );

}

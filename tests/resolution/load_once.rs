use std::sync::Arc ;
use std::sync::atomic::{ AtomicUsize, Ordering };
use lazy_link::{ Importer, Module, Registry, Value };

#[test]
fn repeated_access_loads_exactly_once() {

	let loads = Arc::new( AtomicUsize::new( 0 ));
	let registry = Arc::new( Registry::new() );
	let counter = Arc::clone( &loads );
	registry.register( "math", move || {
		counter.fetch_add( 1, Ordering::SeqCst );
		Ok( Value::from( Module::new( "math" ).with_attr( "sqrt", Value::function(| args | {
			let x = args.first().and_then( Value::as_float ).unwrap_or( 0.0 );
			Ok( Value::Float( x.sqrt() ))
		}))))
	});

	let math = Importer::new( registry ).import( "math" );
	assert_eq!( loads.load( Ordering::SeqCst ), 0 );

	let sqrt = math.attr( "sqrt" ).expect( "sqrt attribute" );
	sqrt.call( &[ Value::Float( 9.0 )]).expect( "sqrt(9)" );
	assert!( math.truthy() );
	math.attr( "sqrt" ).expect( "sqrt attribute again" );
	math.call( &[] ).expect_err( "module is not callable" );

	assert_eq!( loads.load( Ordering::SeqCst ), 1 );

}

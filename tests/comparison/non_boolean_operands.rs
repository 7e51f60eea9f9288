use std::sync::Arc ;
use lazy_link::{ Importer, Registry, Value };

#[test]
fn other_operands_are_simply_not_equal() {

	let ghost = Importer::new( Arc::new( Registry::new() )).import( "ghost" );

	assert_eq!( ghost.try_eq( &Value::Int( 1 )).expect( "int operand" ), false );
	assert_eq!( ghost.try_eq( &Value::str( "ghost" )).expect( "str operand" ), false );
	assert_eq!( ghost.try_ne( &Value::Unit ).expect( "unit operand" ), true );

	// The generic comparison path never triggers a load.
	assert!( !ghost.is_loaded() );

}

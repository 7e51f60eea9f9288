/// Module source wrapper that records every load attempt it receives.
pub struct CountingSource {
	pub attempts: std::sync::atomic::AtomicUsize,
	pub inner: lazy_link::Registry,
}

impl CountingSource {
	pub fn empty() -> std::sync::Arc<Self> {
		std::sync::Arc::new( Self {
			attempts: std::sync::atomic::AtomicUsize::new( 0 ),
			inner: lazy_link::Registry::new(),
		})
	}
}

impl lazy_link::ModuleSource for CountingSource {
	fn load( &self, path: &str ) -> Result<lazy_link::Value, lazy_link::LoadError> {
		self.attempts.fetch_add( 1, std::sync::atomic::Ordering::SeqCst );
		lazy_link::ModuleSource::load( &self.inner, path )
	}
}

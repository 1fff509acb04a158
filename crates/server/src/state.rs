use service::Catalog;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct ServerState {
    pub catalog: Catalog,
}

impl ServerState {
    pub fn new(catalog: Catalog) -> Self { Self { catalog } }

    /// State over an empty in-memory catalog.
    pub fn memory() -> Self { Self::new(Catalog::memory()) }
}

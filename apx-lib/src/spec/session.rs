use super::catalog::{self, SpecCatalog};
use super::loader::{self, OpenApiSpec};
use crate::error::LoadError;

/// The last spec load, held for as long as the caller keeps the session.
///
/// Every load replaces the held state, including a failed one: after a
/// failure there is no document to render until the next successful load.
#[derive(Debug, Default)]
pub struct SpecSession {
    state: Option<Result<OpenApiSpec, LoadError>>,
}

impl SpecSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&mut self, url: &str) -> Result<(), LoadError> {
        let result = loader::load(url).await;
        self.replace(result)
    }

    pub fn replace(&mut self, result: Result<OpenApiSpec, LoadError>) -> Result<(), LoadError> {
        let outcome = result.as_ref().map(|_| ()).map_err(Clone::clone);
        self.state = Some(result);
        outcome
    }

    pub fn spec(&self) -> Option<&OpenApiSpec> {
        self.state.as_ref().and_then(|s| s.as_ref().ok())
    }

    /// Renders the held document; never touches the network.
    pub fn catalog(&self) -> Option<SpecCatalog> {
        self.spec().map(catalog::render)
    }
}

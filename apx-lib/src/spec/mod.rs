//! Fetching and rendering OpenAPI / Swagger documents.

pub mod catalog;
pub mod loader;
pub mod session;

pub use catalog::{
    render, EndpointEntry, MediaTypeEntry, ParamLocation, ParameterEntry, ResponseEntry,
    SpecCatalog,
};
pub use loader::{load, load_with_timeout, OpenApiSpec, LOAD_TIMEOUT};
pub use session::SpecSession;

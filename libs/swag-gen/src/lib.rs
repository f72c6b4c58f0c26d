//! Host side of the Swag documentation pipeline.
//!
//! Endpoints are described once (method, path, owning controller, handler),
//! turned into `utoipa` operations, and then handed to every registered
//! [`OperationFilter`] in registration order before the final document is
//! assembled.
//!
//! # Flow
//! 1. **Description**: endpoints are registered on an [`ApiExplorer`] as [`EndpointDescription`]s.
//! 2. **Filtering**: filters are registered on [`SwaggerGenOptions`] and mutate each operation in place.
//! 3. **Generation**: [`ApiExplorer::generate`] builds the `OpenAPI` document, including every schema
//!    collected in the shared [`SchemaRepository`].
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod description;
pub mod error;
pub mod filter;
pub mod generator;
pub mod options;
pub mod schema_repository;

pub use description::{EndpointDescription, ParamLocation, ParamSpec, ResponseSpec};
pub use error::GenError;
pub use filter::{OperationFilter, OperationFilterContext};
pub use generator::ApiExplorer;
pub use options::{OpenApiInfo, SwaggerGenOptions};
pub use schema_repository::{SchemaRepository, TypeSchema};

// Re-export the document model filters operate on
pub use http::Method;
pub use utoipa::openapi::path::Operation;

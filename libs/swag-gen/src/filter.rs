//! Operation filter extension point.

use http::Method;
use utoipa::openapi::{RefOr, path::Operation, schema::Schema};

use crate::description::EndpointDescription;
use crate::schema_repository::{SchemaRepository, TypeSchema};

/// A transformation applied to every generated operation.
///
/// Filters run synchronously, once per operation per generation pass, in the
/// order they were registered on [`crate::SwaggerGenOptions`].
pub trait OperationFilter: Send + Sync {
    fn apply(&self, operation: &mut Operation, context: &OperationFilterContext<'_>);
}

impl<F> OperationFilter for F
where
    F: Fn(&mut Operation, &OperationFilterContext<'_>) + Send + Sync,
{
    fn apply(&self, operation: &mut Operation, context: &OperationFilterContext<'_>) {
        self(operation, context);
    }
}

/// Read-only view handed to filters alongside the operation.
#[derive(Clone, Copy, Debug)]
pub struct OperationFilterContext<'a> {
    pub api_description: &'a EndpointDescription,
    pub schema_repository: &'a SchemaRepository,
}

impl<'a> OperationFilterContext<'a> {
    #[must_use]
    pub fn new(
        api_description: &'a EndpointDescription,
        schema_repository: &'a SchemaRepository,
    ) -> Self {
        Self {
            api_description,
            schema_repository,
        }
    }

    #[must_use]
    pub fn http_method(&self) -> &'a Method {
        &self.api_description.method
    }

    #[must_use]
    pub fn controller(&self) -> Option<&'a str> {
        self.api_description.controller.as_deref()
    }

    #[must_use]
    pub fn handler(&self) -> &'a str {
        &self.api_description.handler
    }

    /// Register `ty` in the shared repository and return a reference to it.
    #[must_use]
    pub fn generate_schema(&self, ty: &TypeSchema) -> RefOr<Schema> {
        self.schema_repository.generate_schema(ty)
    }
}

//! Endpoint registry and `OpenAPI` document generation.
//!
//! The [`ApiExplorer`] collects endpoint descriptions (typically at route
//! registration time) and, on demand, turns them into a `utoipa` document:
//! one operation per endpoint, each passed through the filter pipeline of the
//! given [`SwaggerGenOptions`].

use dashmap::DashMap;
use http::Method;
use utoipa::openapi::{
    Deprecated, OpenApi, OpenApiBuilder, RefOr, Required,
    content::ContentBuilder,
    info::InfoBuilder,
    path::{
        HttpMethod, Operation, OperationBuilder, ParameterBuilder, ParameterIn, PathItemBuilder,
        PathsBuilder,
    },
    response::{ResponseBuilder, ResponsesBuilder},
    schema::{ComponentsBuilder, ObjectBuilder, Schema, SchemaType, Type},
};

use crate::description::{self, EndpointDescription, ParamLocation};
use crate::error::GenError;
use crate::filter::OperationFilterContext;
use crate::options::SwaggerGenOptions;
use crate::schema_repository::SchemaRepository;

/// Collects endpoint descriptions and generates the document.
pub struct ApiExplorer {
    /// Store endpoint descriptions keyed by "METHOD:path"
    endpoints: DashMap<String, EndpointDescription>,
    schema_repository: SchemaRepository,
}

impl ApiExplorer {
    /// Create a new empty explorer
    #[must_use]
    pub fn new() -> Self {
        Self {
            endpoints: DashMap::new(),
            schema_repository: SchemaRepository::new(),
        }
    }

    /// Register an endpoint; a later registration for the same method and path replaces it.
    pub fn register(&self, endpoint: EndpointDescription) {
        let key = endpoint.key();

        tracing::debug!(
            handler = %endpoint.handler,
            controller = %endpoint.controller.as_deref().unwrap_or("-"),
            method = %endpoint.method.as_str(),
            path = %endpoint.path,
            endpoint_key = %key,
            "Registered API endpoint"
        );

        self.endpoints.insert(key, endpoint);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Schema repository shared by every generation pass.
    #[must_use]
    pub fn schema_repository(&self) -> &SchemaRepository {
        &self.schema_repository
    }

    /// Generates the complete `OpenAPI` document.
    ///
    /// Endpoints are processed in `(path, method)` order so that filters observe
    /// a deterministic sequence.
    ///
    /// # Errors
    /// Returns [`GenError::InvalidPath`] for a path not starting with `/` and
    /// [`GenError::UnsupportedMethod`] for a method `OpenAPI` has no slot for.
    pub fn generate(&self, options: &SwaggerGenOptions) -> Result<OpenApi, GenError> {
        let mut endpoints: Vec<EndpointDescription> =
            self.endpoints.iter().map(|e| e.value().clone()).collect();
        endpoints.sort_by(|a, b| {
            a.path
                .cmp(&b.path)
                .then_with(|| a.method.as_str().cmp(b.method.as_str()))
        });

        tracing::info!(
            endpoints = endpoints.len(),
            filters = options.filters().len(),
            "Building OpenAPI document"
        );

        let mut paths = PathsBuilder::new();

        for endpoint in &endpoints {
            if !endpoint.path.starts_with('/') {
                return Err(GenError::InvalidPath {
                    path: endpoint.path.clone(),
                });
            }
            let method = http_method(&endpoint.method).ok_or_else(|| GenError::UnsupportedMethod {
                method: endpoint.method.as_str().to_owned(),
                path: endpoint.path.clone(),
            })?;

            let mut operation = self.build_operation(endpoint);
            let context = OperationFilterContext::new(endpoint, &self.schema_repository);
            options.apply_filters(&mut operation, &context);

            let item = PathItemBuilder::new().operation(method, operation).build();
            paths = paths.path(description::axum_to_openapi_path(&endpoint.path), item);
        }

        let mut components = ComponentsBuilder::new();
        for (name, schema) in self.schema_repository.snapshot().iter() {
            components = components.schema(name.clone(), schema.clone());
        }

        let info = InfoBuilder::new()
            .title(&options.info.title)
            .version(&options.info.version)
            .description(options.info.description.clone())
            .build();

        Ok(OpenApiBuilder::new()
            .info(info)
            .paths(paths.build())
            .components(Some(components.build()))
            .build())
    }

    /// Initial operation, exactly as authored, before any filter runs.
    fn build_operation(&self, endpoint: &EndpointDescription) -> Operation {
        let mut op = OperationBuilder::new()
            .operation_id(
                endpoint
                    .operation_id
                    .clone()
                    .or_else(|| Some(endpoint.handler.clone())),
            )
            .summary(endpoint.summary.clone())
            .description(endpoint.description.clone());

        for tag in &endpoint.tags {
            op = op.tag(tag.clone());
        }

        if endpoint.deprecated {
            op = op.deprecated(Some(Deprecated::True));
        }

        for p in &endpoint.params {
            let in_ = match p.location {
                ParamLocation::Path => ParameterIn::Path,
                ParamLocation::Query => ParameterIn::Query,
                ParamLocation::Header => ParameterIn::Header,
            };
            let required = if matches!(p.location, ParamLocation::Path) || p.required {
                Required::True
            } else {
                Required::False
            };

            let schema_type = match p.param_type.as_str() {
                "integer" => Type::Integer,
                "number" => Type::Number,
                "boolean" => Type::Boolean,
                _ => Type::String,
            };
            let schema = Schema::Object(
                ObjectBuilder::new()
                    .schema_type(SchemaType::Type(schema_type))
                    .build(),
            );

            let param = ParameterBuilder::new()
                .name(&p.name)
                .parameter_in(in_)
                .required(required)
                .description(p.description.clone())
                .schema(Some(schema))
                .build();

            op = op.parameter(param);
        }

        let mut responses = ResponsesBuilder::new();
        for r in &endpoint.responses {
            let mut resp = ResponseBuilder::new().description(&r.description);
            if let Some(ty) = &r.schema {
                let content = ContentBuilder::new()
                    .schema(Some(self.schema_repository.generate_schema(ty)))
                    .build();
                resp = resp.content(r.content_type, content);
            }
            responses = responses.response(r.status.to_string(), RefOr::T(resp.build()));
        }

        op.responses(responses.build()).build()
    }
}

impl Default for ApiExplorer {
    fn default() -> Self {
        Self::new()
    }
}

fn http_method(method: &Method) -> Option<HttpMethod> {
    let mapped = match *method {
        Method::GET => HttpMethod::Get,
        Method::POST => HttpMethod::Post,
        Method::PUT => HttpMethod::Put,
        Method::DELETE => HttpMethod::Delete,
        Method::PATCH => HttpMethod::Patch,
        Method::OPTIONS => HttpMethod::Options,
        Method::HEAD => HttpMethod::Head,
        Method::TRACE => HttpMethod::Trace,
        _ => return None,
    };
    Some(mapped)
}

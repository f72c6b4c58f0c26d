//! Endpoint descriptions: the read-only input of the documentation pipeline.
//!
//! An [`EndpointDescription`] captures everything the host knows about one
//! endpoint before any filter runs: the HTTP method, the path, the identity of
//! the owning controller and handler, and whatever was authored by hand
//! (summary, description, parameters, responses).

use http::Method;

use crate::schema_repository::TypeSchema;

pub const APPLICATION_JSON: &str = "application/json";

/// Convert Axum 0.8+ style path parameters to OpenAPI-style placeholders.
///
/// Removes the asterisk prefix from Axum wildcards `{*path}` to make them OpenAPI-compatible `{path}`.
///
/// # Examples
///
/// ```
/// # use swag_gen::description::axum_to_openapi_path;
/// assert_eq!(axum_to_openapi_path("/users/{id}"), "/users/{id}");
/// assert_eq!(axum_to_openapi_path("/static/{*path}"), "/static/{path}");
/// ```
#[must_use]
pub fn axum_to_openapi_path(path: &str) -> String {
    path.replace("{*", "{")
}

/// Parameter specification for an endpoint
#[derive(Clone, Debug)]
pub struct ParamSpec {
    pub name: String,
    pub location: ParamLocation,
    pub required: bool,
    pub description: Option<String>,
    pub param_type: String, // JSON Schema type (string, integer, etc.)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamLocation {
    Path,
    Query,
    Header,
}

/// Response specification authored directly on the endpoint
#[derive(Clone, Debug)]
pub struct ResponseSpec {
    pub status: u16,
    pub content_type: &'static str,
    pub description: String,
    /// Body type, registered in the schema repository when the document is built.
    pub schema: Option<TypeSchema>,
}

/// Everything the host knows about one endpoint.
#[derive(Clone, Debug)]
#[must_use]
pub struct EndpointDescription {
    pub method: Method,
    pub path: String,
    /// Identity of the controller owning the endpoint, if any.
    pub controller: Option<String>,
    /// Identity of the handler (method) serving the endpoint.
    pub handler: String,
    pub operation_id: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub params: Vec<ParamSpec>,
    pub responses: Vec<ResponseSpec>,
    pub deprecated: bool,
}

impl EndpointDescription {
    /// Create a new description with an HTTP method and path.
    ///
    /// The handler id defaults to `method:path` with separators flattened; use
    /// [`Self::handler`] to bind the endpoint to a concrete handler name.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        let path = path.into();
        let handler = format!(
            "{}:{}",
            method.as_str().to_lowercase(),
            path.replace(['/', '{', '}'], "_")
        );

        Self {
            method,
            path,
            controller: None,
            handler,
            operation_id: None,
            summary: None,
            description: None,
            tags: Vec::new(),
            params: Vec::new(),
            responses: Vec::new(),
            deprecated: false,
        }
    }

    /// Convenience constructor for GET endpoints
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Convenience constructor for POST endpoints
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Convenience constructor for PUT endpoints
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Convenience constructor for PATCH endpoints
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// Convenience constructor for DELETE endpoints
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach the endpoint to a controller
    pub fn controller(mut self, controller: impl Into<String>) -> Self {
        self.controller = Some(controller.into());
        self
    }

    /// Set the handler identity
    pub fn handler(mut self, handler: impl Into<String>) -> Self {
        self.handler = handler.into();
        self
    }

    /// Set the operation ID
    pub fn operation_id(mut self, id: impl Into<String>) -> Self {
        self.operation_id = Some(id.into());
        self
    }

    /// Set the operation summary
    pub fn summary(mut self, text: impl Into<String>) -> Self {
        self.summary = Some(text.into());
        self
    }

    /// Set the operation description
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Add a tag to the operation
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Mark the endpoint as deprecated
    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Add a parameter to the operation
    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    /// Add a path parameter (defaults to string)
    pub fn path_param(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.params.push(ParamSpec {
            name: name.into(),
            location: ParamLocation::Path,
            required: true,
            description: Some(description.into()),
            param_type: "string".to_owned(),
        });
        self
    }

    /// Add a query parameter (defaults to string)
    pub fn query_param(
        mut self,
        name: impl Into<String>,
        required: bool,
        description: impl Into<String>,
    ) -> Self {
        self.params.push(ParamSpec {
            name: name.into(),
            location: ParamLocation::Query,
            required,
            description: Some(description.into()),
            param_type: "string".to_owned(),
        });
        self
    }

    /// Add a header parameter (defaults to string)
    pub fn header_param(
        mut self,
        name: impl Into<String>,
        required: bool,
        description: impl Into<String>,
    ) -> Self {
        self.params.push(ParamSpec {
            name: name.into(),
            location: ParamLocation::Header,
            required,
            description: Some(description.into()),
            param_type: "string".to_owned(),
        });
        self
    }

    /// Declare a response without a body
    pub fn response(mut self, status: u16, description: impl Into<String>) -> Self {
        self.responses.push(ResponseSpec {
            status,
            content_type: APPLICATION_JSON,
            description: description.into(),
            schema: None,
        });
        self
    }

    /// Declare a JSON response whose body is `T`
    pub fn json_response<T>(mut self, status: u16, description: impl Into<String>) -> Self
    where
        T: utoipa::ToSchema + 'static,
    {
        self.responses.push(ResponseSpec {
            status,
            content_type: APPLICATION_JSON,
            description: description.into(),
            schema: Some(TypeSchema::of::<T>()),
        });
        self
    }

    /// Registry key, `METHOD:path`.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}:{}", self.method.as_str(), self.path)
    }
}

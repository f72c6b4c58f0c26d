//! Automatic CRUD documentation for `swag-gen`.
//!
//! The plugin ships three operation filters and a facade to register them:
//!
//! - **CRUD documentation**: canonical summary/description text per HTTP verb and
//!   a standard response table for every endpoint of an annotated controller
//! - **Accept-Language**: an optional `Accept-Language` header on every operation
//! - **camelCase parameters**: parameter names normalized to camelCase
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use swag_gen::{ApiExplorer, EndpointDescription, SwaggerGenOptions};
//! use swag_plugin::{OverrideFlags, SwagAnnotations, SwaggerGenOptionsExt};
//!
//! let mut annotations = SwagAnnotations::new();
//! annotations
//!     .swag_controller::<User>("users")
//!     .override_method("users", "get_user", OverrideFlags::new(true, false));
//!
//! let mut options = SwaggerGenOptions::default();
//! options.register_swag(Arc::new(annotations), |swag| {
//!     swag.enable_auto_swagger_documentation()
//!         .enable_accepted_language();
//! });
//!
//! let explorer = ApiExplorer::new();
//! explorer.register(EndpointDescription::get("/users/{id}").controller("users").handler("get_user"));
//! let doc = explorer.generate(&options)?;
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod annotations;
pub mod config;
pub mod constants;
pub mod helpers;
pub mod models;
pub mod operations;
pub mod options;
pub mod response_codes;
pub mod verb;

pub use annotations::{ControllerDoc, OverrideFlags, SwagAnnotations};
pub use config::{ConfigError, PluginConfig, SwagConfig};
pub use models::ErrorResponse;
pub use operations::{
    AcceptLanguageHeaderOperationFilter, CamelCaseParametersOperationFilter,
    SwagCrudOperationFilter,
};
pub use options::{SwagOptions, SwaggerGenOptionsExt};
pub use response_codes::ResponseCode;
pub use verb::HttpVerb;

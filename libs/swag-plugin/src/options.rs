//! Registration facade.

use std::sync::Arc;

use swag_gen::SwaggerGenOptions;

use crate::annotations::SwagAnnotations;
use crate::config::PluginConfig;
use crate::operations::{
    AcceptLanguageHeaderOperationFilter, CamelCaseParametersOperationFilter,
    SwagCrudOperationFilter,
};

/// Toggles handed to the [`SwaggerGenOptionsExt::register_swag`] callback.
///
/// Every `enable_*` call appends one filter to the underlying pipeline, so
/// call order is filter order.
pub struct SwagOptions<'a> {
    gen_options: &'a mut SwaggerGenOptions,
    annotations: Arc<SwagAnnotations>,
}

impl<'a> SwagOptions<'a> {
    #[must_use]
    pub fn new(gen_options: &'a mut SwaggerGenOptions, annotations: Arc<SwagAnnotations>) -> Self {
        Self {
            gen_options,
            annotations,
        }
    }

    /// Add the optional `Accept-Language` header (default `nl-NL`) to every operation.
    pub fn enable_accepted_language(&mut self) -> &mut Self {
        self.gen_options
            .operation_filter(AcceptLanguageHeaderOperationFilter::default());
        self
    }

    /// Like [`Self::enable_accepted_language`] with a custom default value.
    pub fn enable_accepted_language_with(&mut self, default_language: impl Into<String>) -> &mut Self {
        self.gen_options
            .operation_filter(AcceptLanguageHeaderOperationFilter::new(default_language));
        self
    }

    pub fn enable_camel_case_parameters(&mut self) -> &mut Self {
        self.gen_options
            .operation_filter(CamelCaseParametersOperationFilter);
        self
    }

    /// Document every endpoint of an annotated controller automatically.
    pub fn enable_auto_swagger_documentation(&mut self) -> &mut Self {
        self.gen_options
            .operation_filter(SwagCrudOperationFilter::new(Arc::clone(&self.annotations)));
        self
    }
}

pub trait SwaggerGenOptionsExt {
    /// Register plugin filters through `configure`.
    fn register_swag<F>(&mut self, annotations: Arc<SwagAnnotations>, configure: F) -> &mut Self
    where
        F: FnOnce(&mut SwagOptions<'_>);

    /// Register plugin filters as toggled in `config`.
    ///
    /// Order is CRUD documentation, then camelCase, then `Accept-Language`, so
    /// the header name is never re-cased.
    fn register_swag_from_config(
        &mut self,
        annotations: Arc<SwagAnnotations>,
        config: &PluginConfig,
    ) -> &mut Self {
        tracing::info!(
            auto_crud_documentation = config.auto_crud_documentation,
            camel_case_parameters = config.camel_case_parameters,
            accept_language = config.accept_language,
            "Registering swag plugin from configuration"
        );
        self.register_swag(annotations, |swag| {
            if config.auto_crud_documentation {
                swag.enable_auto_swagger_documentation();
            }
            if config.camel_case_parameters {
                swag.enable_camel_case_parameters();
            }
            if config.accept_language {
                swag.enable_accepted_language_with(config.accept_language_default.clone());
            }
        })
    }
}

impl SwaggerGenOptionsExt for SwaggerGenOptions {
    fn register_swag<F>(&mut self, annotations: Arc<SwagAnnotations>, configure: F) -> &mut Self
    where
        F: FnOnce(&mut SwagOptions<'_>),
    {
        let before = self.filters().len();
        configure(&mut SwagOptions::new(self, annotations));
        tracing::debug!(
            registered = self.filters().len() - before,
            "Registered swag plugin filters"
        );
        self
    }
}

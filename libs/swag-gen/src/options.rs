use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use utoipa::openapi::path::Operation;

use crate::filter::{OperationFilter, OperationFilterContext};

/// `OpenAPI` document metadata (title, version, description)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenApiInfo {
    pub title: String,
    pub version: String,
    pub description: Option<String>,
}

impl Default for OpenApiInfo {
    fn default() -> Self {
        Self {
            title: "API Documentation".to_owned(),
            version: "0.1.0".to_owned(),
            description: None,
        }
    }
}

/// Generation options: document info plus the ordered filter pipeline.
#[derive(Default, Clone)]
pub struct SwaggerGenOptions {
    pub info: OpenApiInfo,
    filters: Vec<Arc<dyn OperationFilter>>,
}

impl SwaggerGenOptions {
    #[must_use]
    pub fn new(info: OpenApiInfo) -> Self {
        Self {
            info,
            filters: Vec::new(),
        }
    }

    /// Append a filter to the pipeline. Filters run in registration order.
    pub fn operation_filter<F>(&mut self, filter: F) -> &mut Self
    where
        F: OperationFilter + 'static,
    {
        tracing::debug!(
            filter = std::any::type_name::<F>(),
            position = self.filters.len(),
            "Registered operation filter"
        );
        self.filters.push(Arc::new(filter));
        self
    }

    #[must_use]
    pub fn filters(&self) -> &[Arc<dyn OperationFilter>] {
        &self.filters
    }

    /// Run every registered filter against `operation`.
    pub fn apply_filters(&self, operation: &mut Operation, context: &OperationFilterContext<'_>) {
        for filter in &self.filters {
            filter.apply(operation, context);
        }
    }
}

impl fmt::Debug for SwaggerGenOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwaggerGenOptions")
            .field("info", &self.info)
            .field("filters", &self.filters.len())
            .finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::description::EndpointDescription;
    use crate::schema_repository::SchemaRepository;

    fn append_summary(suffix: &'static str) -> impl OperationFilter {
        move |op: &mut Operation, _ctx: &OperationFilterContext<'_>| {
            let mut summary = op.summary.take().unwrap_or_default();
            summary.push_str(suffix);
            op.summary = Some(summary);
        }
    }

    #[test]
    fn filters_run_in_registration_order() {
        let mut options = SwaggerGenOptions::default();
        options
            .operation_filter(append_summary("a"))
            .operation_filter(append_summary("b"));
        assert_eq!(options.filters().len(), 2);

        let desc = EndpointDescription::get("/x");
        let repo = SchemaRepository::new();
        let ctx = OperationFilterContext::new(&desc, &repo);
        let mut op = Operation::default();
        options.apply_filters(&mut op, &ctx);

        assert_eq!(op.summary.as_deref(), Some("ab"));
    }

    #[test]
    fn default_info() {
        let info = OpenApiInfo::default();
        assert_eq!(info.title, "API Documentation");
        assert_eq!(info.version, "0.1.0");
        assert!(info.description.is_none());
    }
}

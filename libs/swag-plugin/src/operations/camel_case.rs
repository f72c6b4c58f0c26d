use convert_case::{Case, Casing};
use swag_gen::{OperationFilter, OperationFilterContext};
use utoipa::openapi::path::Operation;

/// Renames every parameter to camelCase.
///
/// An operation without a parameter list gets an empty one, so later filters
/// can always push onto it.
#[derive(Debug, Clone, Copy, Default)]
pub struct CamelCaseParametersOperationFilter;

impl OperationFilter for CamelCaseParametersOperationFilter {
    fn apply(&self, operation: &mut Operation, context: &OperationFilterContext<'_>) {
        let Some(parameters) = operation.parameters.as_mut() else {
            operation.parameters = Some(Vec::new());
            return;
        };

        for param in parameters {
            let renamed = camel_case(&param.name);
            if renamed != param.name {
                tracing::trace!(
                    handler = context.handler(),
                    from = %param.name,
                    to = %renamed,
                    "Renamed parameter"
                );
                param.name = renamed;
            }
        }
    }
}

/// camelCase of `name` with leading separators dropped, so `_id` becomes `id`
/// rather than `Id`. A name made only of separators is kept as is.
fn camel_case(name: &str) -> String {
    let trimmed = name.trim_start_matches(['_', '-', '.', ' ']);
    if trimmed.is_empty() {
        return name.to_owned();
    }
    trimmed.to_case(Case::Camel)
}

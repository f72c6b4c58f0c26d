use serde_json::Value;
use swag_gen::{OperationFilter, OperationFilterContext};
use utoipa::openapi::{
    Required,
    path::{Operation, ParameterBuilder, ParameterIn},
    schema::{ObjectBuilder, Schema, SchemaType, Type},
};

use crate::constants::{ACCEPT_LANGUAGE_HEADER, DEFAULT_ACCEPT_LANGUAGE};

/// Adds an optional `Accept-Language` header parameter to every operation.
///
/// The parameter is appended unconditionally: applying the filter twice
/// documents the header twice.
#[derive(Debug, Clone)]
pub struct AcceptLanguageHeaderOperationFilter {
    default_language: String,
}

impl AcceptLanguageHeaderOperationFilter {
    #[must_use]
    pub fn new(default_language: impl Into<String>) -> Self {
        Self {
            default_language: default_language.into(),
        }
    }
}

impl Default for AcceptLanguageHeaderOperationFilter {
    fn default() -> Self {
        Self::new(DEFAULT_ACCEPT_LANGUAGE)
    }
}

impl OperationFilter for AcceptLanguageHeaderOperationFilter {
    fn apply(&self, operation: &mut Operation, _context: &OperationFilterContext<'_>) {
        let schema = Schema::Object(
            ObjectBuilder::new()
                .schema_type(SchemaType::Type(Type::String))
                .default(Some(Value::String(self.default_language.clone())))
                .build(),
        );

        let param = ParameterBuilder::new()
            .name(ACCEPT_LANGUAGE_HEADER)
            .parameter_in(ParameterIn::Header)
            .required(Required::False)
            .schema(Some(schema))
            .build();

        operation.parameters.get_or_insert_with(Vec::new).push(param);
    }
}

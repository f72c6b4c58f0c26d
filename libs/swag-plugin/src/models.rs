//! Body types documented by the plugin itself.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body documented for every 4xx/5xx response of an annotated controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(title = "ErrorResponse", description = "Error details returned by the API")]
pub struct ErrorResponse {
    /// Status code associated with the error, typically the HTTP status.
    pub status_code: Option<String>,
    /// Human-readable explanation of the error.
    pub message: Option<String>,
    /// Optional stack trace, usually omitted outside development.
    pub stack_trace: Option<String>,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use swag_gen::SchemaRepository;

    #[test]
    fn serializes_camel_case() {
        let err = ErrorResponse {
            status_code: Some("404".to_owned()),
            message: Some("missing".to_owned()),
            stack_trace: None,
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["statusCode"], "404");
        assert_eq!(json["message"], "missing");
        assert!(json["stackTrace"].is_null());
    }

    #[test]
    fn schema_exposes_the_three_fields() {
        let repo = SchemaRepository::new();
        let _ = repo.generate_schema_for::<ErrorResponse>();

        let components = repo.snapshot();
        let json = serde_json::to_value(components.get("ErrorResponse").unwrap()).unwrap();
        let properties = json["properties"].as_object().unwrap();
        assert!(properties.contains_key("statusCode"));
        assert!(properties.contains_key("message"));
        assert!(properties.contains_key("stackTrace"));
    }
}

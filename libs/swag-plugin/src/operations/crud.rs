//! Automatic documentation for CRUD endpoints.
//!
//! For every endpoint of a controller registered with a [`ControllerDoc`]:
//!
//! 1. summary and description fall back to the canonical text of the HTTP verb
//!    when blank, or are replaced by it when overriding is allowed;
//! 2. the standard response set of the verb is written into the response table,
//!    replacing any authored entry at the same status code.
//!
//! Verbs outside GET/POST/PUT/PATCH/DELETE get the fallback text, regardless of
//! override flags, and the full response catalog.

use std::sync::Arc;

use swag_gen::{OperationFilter, OperationFilterContext, TypeSchema};
use utoipa::openapi::{
    RefOr,
    content::ContentBuilder,
    path::Operation,
    response::{Response, ResponseBuilder},
};

use crate::annotations::{ControllerDoc, SwagAnnotations};
use crate::constants::{APPLICATION_JSON, FALLBACK};
use crate::helpers::check_string;
use crate::models::ErrorResponse;
use crate::response_codes::{ResponseCode, default_description_for_status};
use crate::verb::HttpVerb;

pub struct SwagCrudOperationFilter {
    annotations: Arc<SwagAnnotations>,
    error_type: TypeSchema,
}

impl SwagCrudOperationFilter {
    #[must_use]
    pub fn new(annotations: Arc<SwagAnnotations>) -> Self {
        Self {
            annotations,
            error_type: TypeSchema::of::<ErrorResponse>(),
        }
    }

    /// Document 4xx/5xx bodies with `T` instead of [`ErrorResponse`].
    #[must_use]
    pub fn with_error_type<T: utoipa::ToSchema + 'static>(mut self) -> Self {
        self.error_type = TypeSchema::of::<T>();
        self
    }

    fn build_response(
        &self,
        code: u16,
        doc: &ControllerDoc,
        context: &OperationFilterContext<'_>,
    ) -> Response {
        // Anything in [400, 500] is documented as an error body, catalog entry or not.
        let body = match code {
            200 | 201 => Some(doc.passed_type()),
            400..=500 => Some(&self.error_type),
            _ => None,
        };

        let mut response = ResponseBuilder::new().description(default_description_for_status(code));
        if let Some(ty) = body {
            let content = ContentBuilder::new()
                .schema(Some(context.generate_schema(ty)))
                .build();
            response = response.content(APPLICATION_JSON, content);
        }
        response.build()
    }
}

impl OperationFilter for SwagCrudOperationFilter {
    fn apply(&self, operation: &mut Operation, context: &OperationFilterContext<'_>) {
        let Some(controller) = context.controller() else {
            return;
        };
        let Some(doc) = self.annotations.controller(controller) else {
            tracing::trace!(%controller, "Controller not annotated; leaving operation as authored");
            return;
        };

        let flags = self.annotations.effective_flags(controller, context.handler());
        let verb = HttpVerb::from_method(context.http_method());

        let codes: &[ResponseCode] = if let Some(profile) = verb.profile() {
            operation.description = Some(check_string(
                operation.description.as_deref(),
                profile.text.description,
                flags.allow_description,
            ));
            operation.summary = Some(check_string(
                operation.summary.as_deref(),
                profile.text.summary,
                flags.allow_summary,
            ));
            profile.codes
        } else {
            operation.description = Some(FALLBACK.description.to_owned());
            operation.summary = Some(FALLBACK.summary.to_owned());
            &ResponseCode::ALL
        };

        for code in codes {
            let code = code.as_u16();
            let response = self.build_response(code, doc, context);
            operation
                .responses
                .responses
                .insert(code.to_string(), RefOr::T(response));
        }

        tracing::debug!(
            %controller,
            handler = context.handler(),
            method = %context.http_method(),
            responses = codes.len(),
            "Applied CRUD documentation"
        );
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use swag_gen::{EndpointDescription, SchemaRepository};

    #[derive(utoipa::ToSchema)]
    #[allow(dead_code)]
    struct Widget {
        id: i64,
    }

    #[derive(utoipa::ToSchema)]
    #[allow(dead_code)]
    struct Fault {
        reason: String,
    }

    fn filter() -> SwagCrudOperationFilter {
        let mut annotations = SwagAnnotations::new();
        annotations.swag_controller::<Widget>("widgets");
        SwagCrudOperationFilter::new(Arc::new(annotations))
    }

    #[test]
    fn non_catalog_code_in_error_range_gets_error_body() {
        let f = filter();
        let desc = EndpointDescription::get("/w").controller("widgets");
        let repo = SchemaRepository::new();
        let ctx = OperationFilterContext::new(&desc, &repo);
        let doc = f.annotations.controller("widgets").copied().unwrap();

        let response = f.build_response(422, &doc, &ctx);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json["content"]["application/json"]["schema"]["$ref"],
            "#/components/schemas/ErrorResponse"
        );
        assert!(json["description"]
            .as_str()
            .unwrap()
            .starts_with("HTTP Status Code 422"));

        let redirect = serde_json::to_value(f.build_response(302, &doc, &ctx)).unwrap();
        assert!(redirect.get("content").is_none());
    }

    #[test]
    fn custom_error_type_is_documented() {
        let f = filter().with_error_type::<Fault>();
        let desc = EndpointDescription::delete("/w/{id}").controller("widgets");
        let repo = SchemaRepository::new();
        let ctx = OperationFilterContext::new(&desc, &repo);

        let mut op = Operation::default();
        f.apply(&mut op, &ctx);

        let json = serde_json::to_value(&op).unwrap();
        assert_eq!(
            json["responses"]["404"]["content"]["application/json"]["schema"]["$ref"],
            "#/components/schemas/Fault"
        );
        assert!(repo.contains("Fault"));
        assert!(!repo.contains("ErrorResponse"));
    }
}

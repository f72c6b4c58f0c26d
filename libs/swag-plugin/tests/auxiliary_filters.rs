#![allow(clippy::unwrap_used)]

//! Accept-Language header injection and camelCase parameter renaming.

use std::sync::Arc;

use serde_json::Value;
use swag_gen::{
    ApiExplorer, EndpointDescription, Operation, OperationFilter, OperationFilterContext,
    SchemaRepository, SwaggerGenOptions,
};
use swag_plugin::{
    AcceptLanguageHeaderOperationFilter, CamelCaseParametersOperationFilter, SwagAnnotations,
    SwaggerGenOptionsExt,
};
use utoipa::openapi::path::{ParameterBuilder, ParameterIn};

fn apply_to(filter: &dyn OperationFilter, operation: &mut Operation) {
    let desc = EndpointDescription::get("/things");
    let repo = SchemaRepository::new();
    filter.apply(operation, &OperationFilterContext::new(&desc, &repo));
}

fn names(operation: &Operation) -> Vec<String> {
    operation
        .parameters
        .as_ref()
        .unwrap()
        .iter()
        .map(|p| p.name.clone())
        .collect()
}

fn query(name: &str) -> utoipa::openapi::path::Parameter {
    ParameterBuilder::new()
        .name(name)
        .parameter_in(ParameterIn::Query)
        .build()
}

#[test]
fn accept_language_header_is_optional_string_with_default() {
    let mut op = Operation::default();
    apply_to(&AcceptLanguageHeaderOperationFilter::default(), &mut op);

    let json = serde_json::to_value(&op).unwrap();
    let param = &json["parameters"][0];
    assert_eq!(param["name"], "Accept-Language");
    assert_eq!(param["in"], "header");
    assert_eq!(param["required"], false);
    assert_eq!(param["schema"]["type"], "string");
    assert_eq!(param["schema"]["default"], "nl-NL");
}

#[test]
fn accept_language_keeps_existing_parameters() {
    let mut op = Operation::default();
    op.parameters = Some(vec![query("page")]);
    apply_to(&AcceptLanguageHeaderOperationFilter::new("en-GB"), &mut op);

    assert_eq!(names(&op), ["page", "Accept-Language"]);
    let json = serde_json::to_value(&op).unwrap();
    assert_eq!(json["parameters"][1]["schema"]["default"], "en-GB");
}

#[test]
fn accept_language_applied_twice_is_documented_twice() {
    let filter = AcceptLanguageHeaderOperationFilter::default();
    let mut op = Operation::default();
    apply_to(&filter, &mut op);
    apply_to(&filter, &mut op);

    assert_eq!(names(&op), ["Accept-Language", "Accept-Language"]);
}

#[test]
fn camel_case_renames_parameters() {
    let mut op = Operation::default();
    op.parameters = Some(vec![query("user_id"), query("OrderId"), query("page")]);
    apply_to(&CamelCaseParametersOperationFilter, &mut op);

    assert_eq!(names(&op), ["userId", "orderId", "page"]);
}

#[test]
fn camel_case_is_idempotent() {
    let mut op = Operation::default();
    op.parameters = Some(vec![query("user_id"), query("OrderId")]);
    apply_to(&CamelCaseParametersOperationFilter, &mut op);
    let once = names(&op);
    apply_to(&CamelCaseParametersOperationFilter, &mut op);

    assert_eq!(names(&op), once);
}

#[test]
fn camel_case_drops_leading_separators_and_stays_stable() {
    let mut op = Operation::default();
    op.parameters = Some(vec![query("__private"), query("_id")]);
    apply_to(&CamelCaseParametersOperationFilter, &mut op);
    assert_eq!(names(&op), ["private", "id"]);

    apply_to(&CamelCaseParametersOperationFilter, &mut op);
    assert_eq!(names(&op), ["private", "id"]);
}

#[test]
fn camel_case_initializes_missing_parameter_list() {
    let mut op = Operation::default();
    apply_to(&CamelCaseParametersOperationFilter, &mut op);

    assert!(op.parameters.as_ref().is_some_and(Vec::is_empty));
}

#[test]
fn registration_order_decides_header_casing() {
    let explorer = ApiExplorer::new();
    explorer.register(EndpointDescription::get("/items").query_param("page_size", false, "Page size"));

    let mut cased_last = SwaggerGenOptions::default();
    cased_last.register_swag(Arc::new(SwagAnnotations::new()), |swag| {
        swag.enable_accepted_language().enable_camel_case_parameters();
    });
    let json: Value = serde_json::to_value(explorer.generate(&cased_last).unwrap()).unwrap();
    let params = json.pointer("/paths/~1items/get/parameters").unwrap();
    assert_eq!(params[0]["name"], "pageSize");
    assert_eq!(params[1]["name"], "acceptLanguage");

    let mut cased_first = SwaggerGenOptions::default();
    cased_first.register_swag(Arc::new(SwagAnnotations::new()), |swag| {
        swag.enable_camel_case_parameters().enable_accepted_language();
    });
    let json: Value = serde_json::to_value(explorer.generate(&cased_first).unwrap()).unwrap();
    let params = json.pointer("/paths/~1items/get/parameters").unwrap();
    assert_eq!(params[0]["name"], "pageSize");
    assert_eq!(params[1]["name"], "Accept-Language");
}

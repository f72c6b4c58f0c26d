//! Demo API documented by the binary: a users controller, an orders controller
//! and an unowned health probe.

use serde::{Deserialize, Serialize};
use swag_gen::{ApiExplorer, EndpointDescription, Method, ParamLocation, ParamSpec};
use swag_plugin::{OverrideFlags, SwagAnnotations};
use utoipa::ToSchema;

pub const USERS: &str = "users";
pub const ORDERS: &str = "orders";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub display_name: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Shipped,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub status: OrderStatus,
    pub total_cents: i64,
}

/// Controller markers and override flags of the demo API.
#[must_use]
pub fn annotations() -> SwagAnnotations {
    let mut annotations = SwagAnnotations::new();
    annotations
        .swag_controller::<User>(USERS)
        .swag_controller::<Order>(ORDERS)
        .override_method(USERS, "update_user", OverrideFlags::ALL)
        .override_class(ORDERS, OverrideFlags::new(false, true));
    annotations
}

/// Endpoint registry of the demo API.
#[must_use]
pub fn explorer() -> ApiExplorer {
    let explorer = ApiExplorer::new();

    explorer.register(
        EndpointDescription::get("/users")
            .controller(USERS)
            .handler("list_users")
            .tag(USERS)
            .param(ParamSpec {
                name: "page_size".to_owned(),
                location: ParamLocation::Query,
                required: false,
                description: Some("Maximum number of users returned".to_owned()),
                param_type: "integer".to_owned(),
            }),
    );
    explorer.register(
        EndpointDescription::get("/users/{user_id}")
            .controller(USERS)
            .handler("get_user")
            .tag(USERS)
            .summary("Get a user")
            .path_param("user_id", "User identifier"),
    );
    explorer.register(
        EndpointDescription::post("/users")
            .controller(USERS)
            .handler("create_user")
            .tag(USERS)
            .header_param("Idempotency-Key", false, "Replays return the original user"),
    );
    explorer.register(
        EndpointDescription::put("/users/{user_id}")
            .controller(USERS)
            .handler("update_user")
            .tag(USERS)
            .summary("Replace a user")
            .path_param("user_id", "User identifier"),
    );
    explorer.register(
        EndpointDescription::delete("/users/{user_id}")
            .controller(USERS)
            .handler("delete_user")
            .tag(USERS)
            .path_param("user_id", "User identifier"),
    );

    explorer.register(
        EndpointDescription::get("/orders/{order_id}")
            .controller(ORDERS)
            .handler("get_order")
            .tag(ORDERS)
            .summary("Get an order")
            .description("Authored description, replaced by the class override")
            .path_param("order_id", "Order identifier"),
    );
    explorer.register(
        EndpointDescription::patch("/orders/{order_id}")
            .controller(ORDERS)
            .handler("update_order_status")
            .tag(ORDERS)
            .path_param("order_id", "Order identifier"),
    );
    explorer.register(
        EndpointDescription::new(Method::OPTIONS, "/orders")
            .controller(ORDERS)
            .handler("order_options")
            .tag(ORDERS),
    );

    explorer.register(
        EndpointDescription::get("/health")
            .handler("health")
            .summary("Liveness probe")
            .response(200, "Service is alive"),
    );

    explorer
}

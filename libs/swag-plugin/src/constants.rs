//! Canonical prose used by the generated documentation.

/// Summary/description pair for one HTTP verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerbText {
    pub summary: &'static str,
    pub description: &'static str,
}

pub const GET: VerbText = VerbText {
    summary: "Used to retrieve data from a specified resource. GET requests should be safe and idempotent, meaning they do not change the resource state.",
    description: "The GET method requests a representation of the specified resource. Requests using GET should only retrieve data and should have no other effect on the data.",
};

pub const POST: VerbText = VerbText {
    summary: "Used for creating new resources or submitting data to process by the resource. POST requests can change the state and are not idempotent.",
    description: "The POST method is used to submit an entity to the specified resource, often causing a change in state or side effects on the server.",
};

pub const PUT: VerbText = VerbText {
    summary: "Used to update or create a resource at a specific URL. PUT requests are idempotent, meaning multiple identical requests should have the same effect as a single request.",
    description: "The PUT method replaces all current representations of the target resource with the request payload.",
};

pub const PATCH: VerbText = VerbText {
    summary: "Used for making partial updates to an existing resource. PATCH requests are not necessarily idempotent, as they can change the resource's state with each request.",
    description: "The PATCH method is used to apply partial modifications to a resource.",
};

pub const DELETE: VerbText = VerbText {
    summary: "Used to remove resources from the server. DELETE requests should be idempotent, resulting in the removal of the targeted resource.",
    description: "The DELETE method deletes the specified resource.",
};

/// Written unconditionally for verbs outside the table.
pub const FALLBACK: VerbText = VerbText {
    summary: "Serves as a safeguard against unsupported or incorrectly specified HTTP methods, enhancing API error handling and client feedback.",
    description: "This case acts as a fallback for undefined or unsupported HTTP methods requested by the client, ensuring robust error handling in the API.",
};

pub const ACCEPT_LANGUAGE_HEADER: &str = "Accept-Language";
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "nl-NL";

pub use swag_gen::description::APPLICATION_JSON;

//! Operation filters shipped by the plugin.

pub mod accept_language;
pub mod camel_case;
pub mod crud;

pub use accept_language::AcceptLanguageHeaderOperationFilter;
pub use camel_case::CamelCaseParametersOperationFilter;
pub use crud::SwagCrudOperationFilter;

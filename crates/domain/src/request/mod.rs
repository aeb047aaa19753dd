//! Request types for calls against the dashboard API

mod method;
mod query;
mod spec;

pub use method::HttpMethod;
pub use query::QueryParam;
pub use spec::ApiRequest;

pub mod queries;
pub mod traits;

// HTTP implementations
pub mod auth;
pub mod graphql;

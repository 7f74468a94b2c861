//! GraphQL schema and resolvers for the campus gateway
//!
//! This module contains the async-graphql schema including:
//! - Query resolvers mapping root fields onto single service calls
//! - Mutation resolvers passing writes through to the owning service
//! - Type definitions whose relationship fields fan out across services

pub mod context;
pub mod degrade;
pub mod fanout;
pub mod mutation;
pub mod query;
pub mod registry;
pub mod schema;
pub mod types;

pub use context::CallerRole;
pub use registry::RegistryError;
pub use schema::{build_schema, CampusSchema, SchemaBuilder, SchemaError};

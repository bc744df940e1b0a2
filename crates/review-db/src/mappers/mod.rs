//! Model to entity mappers
//!
//! - `From<Model> for Entity` where every row is representable
//! - `TryFrom<Model> for Entity` where a stored status string must be parsed

mod pull_request;
mod stats;
mod team;
mod user;

pub(crate) use pull_request::parse_status;

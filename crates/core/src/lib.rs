//! Domain types and pure rules shared by every Holocron crate.
//!
//! Nothing in here touches the database or the network: the relationship
//! completeness check, pagination bounds, search pattern escaping and
//! upstream resource-URL parsing are all plain functions so they can be
//! unit tested without infrastructure.

pub mod error;
pub mod kind;
pub mod pagination;
pub mod relation;
pub mod resource_url;
pub mod types;

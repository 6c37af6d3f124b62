//! userbase - a minimal user-directory REST service
//!
//! CRUD over a single user collection, backed by a document store
//! reached through the [`store::UserStore`] gateway. The HTTP surface
//! lives in [`rest_api`]; [`cli`] wires configuration, the store
//! client, and the serve loop together.

pub mod cli;
pub mod config;
pub mod model;
pub mod rest_api;
pub mod store;

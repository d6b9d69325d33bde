//! Product store domain, persistence and authentication.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;
pub mod pagination;
pub mod uuids;

#[cfg(test)]
mod test;

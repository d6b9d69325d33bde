//! Authentication

pub(crate) mod handler;
pub(crate) mod middleware;

//! Shared test support

mod memory;

pub(crate) use db::TestDb;
pub(crate) use memory::InMemoryProductsRepository;

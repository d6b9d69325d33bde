//! Extension traits

mod depot;
mod result;

pub(crate) use depot::{AuthenticationExt as _, DepotExt as _};
pub(crate) use result::ResultExt as _;

//! Order planning endpoint

pub(crate) mod errors;
pub(crate) mod get;

pub(crate) mod filter;
pub(crate) mod mapper;
pub(crate) mod model;

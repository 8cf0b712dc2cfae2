pub(crate) mod dsl;
pub(crate) mod model;
pub(crate) mod props;
pub(crate) mod timeline;

pub(crate) mod camera;
pub(crate) mod enter;
pub(crate) mod interp;
pub(crate) mod spring;

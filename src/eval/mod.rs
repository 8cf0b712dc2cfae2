pub(crate) mod background;
pub(crate) mod compositor;
pub(crate) mod element;
pub(crate) mod overlay;

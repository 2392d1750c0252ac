pub(crate) mod edit;
pub(crate) mod geometry;
pub(crate) mod model;
pub(crate) mod preset;

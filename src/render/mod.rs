pub(crate) mod backend;
pub(crate) mod blur;
pub(crate) mod noise;
pub(crate) mod raster;
pub(crate) mod vector;

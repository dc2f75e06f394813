pub mod opencage;

pub use opencage::OpenCageGeocoder;

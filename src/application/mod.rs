//! Application layer - Use cases and orchestration

pub mod convert;
pub mod transform_photos;
pub mod update_stars;

pub use convert::{ConversionReport, ConvertOptions, ConvertService};
pub use transform_photos::{transform_photos, PhotoOutcome, PhotoStatus, PhotoTransform};
pub use update_stars::update_stars;

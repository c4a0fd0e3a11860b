pub mod error;
pub mod formats;
pub mod probe;
pub mod sidecar;
pub mod types;
pub mod walk;

pub use error::FormatError;
pub use types::{ImageDimensions, ImageFormat};

pub mod fetch;
pub mod image;

pub use fetch::{fetch_certificates, FetchError};
pub use image::{ImageData, ImageLoader, ImageStatus};

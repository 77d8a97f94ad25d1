pub mod http;
pub mod traits;

pub use http::HttpImageService;
pub use traits::{ImageService, ServiceResponse};

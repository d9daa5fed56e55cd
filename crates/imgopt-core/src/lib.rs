//! imgopt core: download a remote image, resize it and store it as WebP
//! under the project's `public/images/` folder.

pub mod config;
pub mod error;
pub mod logging;

pub mod decode;
pub mod fetch;
pub mod pipeline;
pub mod project_root;
pub mod request;
pub mod storage;
pub mod transform;
pub mod url_model;

pub use error::{FetchError, OptimizeError, ProcessError};

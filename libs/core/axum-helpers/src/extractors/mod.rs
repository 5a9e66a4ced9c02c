//! Extractors that reject with the [`AppError`](crate::AppError) envelope
//! instead of axum's plain-text rejections.

mod id_path;
mod json_body;
mod query_params;

pub use id_path::IdPath;
pub use json_body::JsonBody;
pub use query_params::QueryParams;

//! Request extractors that reject with `AppError` instead of axum's plain-text rejections.

pub mod json;
pub use json::JsonBody;

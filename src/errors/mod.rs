//! 에러 타입 모듈
//!
//! 플로우 전반에서 사용하는 [`errors::AppError`]를 제공합니다.
//! HTTP 전송 계층 에러는 [`crate::client::ApiError`]에 별도로 정의되어 있습니다.

pub mod errors;

pub use errors::{AppError, AppResult, ErrorContext};

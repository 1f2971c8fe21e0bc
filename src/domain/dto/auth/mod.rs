//! 의사 인증 API DTO 모듈

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;

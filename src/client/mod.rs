//! 백엔드 API 클라이언트 모듈
//!
//! # Modules
//!
//! - [`api_client`] - base URL, Bearer 토큰 첨부, 에러 로깅을 담당하는 공용 클라이언트
//! - [`api_error`] - 상태 코드와 응답 본문을 보존하는 에러 타입
//! - [`doctor_auth_api`] - `google-check` / `google-register` 엔드포인트
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::client::{ApiClient, HttpDoctorAuthApi};
//!
//! let client = Arc::new(ApiClient::new(&ApiConfig::base_url(), store.clone())?);
//! let api = HttpDoctorAuthApi::new(client);
//! ```

pub mod api_client;
pub mod api_error;
pub mod doctor_auth_api;

pub use api_client::ApiClient;
pub use api_error::ApiError;
pub use doctor_auth_api::{DoctorAuthApi, HttpDoctorAuthApi};

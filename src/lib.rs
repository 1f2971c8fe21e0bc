//! NabhaCare 의사 포털 클라이언트
//!
//! Google 로그인으로 의사 계정에 로그인하고, 계정이 없으면
//! 회원가입 폼을 거쳐 새 계정을 등록하는 클라이언트 라이브러리입니다.
//!
//! # Features
//!
//! - **Google 로그인**: ID 토큰 payload에서 이메일/이름 추출
//! - **계정 확인/가입**: 백엔드 `google-check`, `google-register` 호출
//! - **상태 머신**: 명시적인 로그인 흐름 상태와 순수 전이 함수
//! - **세션 토큰 저장소**: 주입 가능한 `TokenStore` (메모리/파일)
//! - **CLI**: 터미널에서 전체 흐름 실행
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │       CLI       │ ← 터미널 입력/출력
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 로그인 흐름 오케스트레이션
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     Domain      │ ← 상태 머신, 가입 폼, DTO
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Client + Storage│ ← 백엔드 HTTP, 세션 토큰
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use nabhacare_portal::client::{ApiClient, HttpDoctorAuthApi};
//! use nabhacare_portal::services::auth::DoctorAuthService;
//! use nabhacare_portal::storage::MemoryTokenStore;
//!
//! let store = Arc::new(MemoryTokenStore::new());
//! let client = Arc::new(ApiClient::new("http://localhost:5000", store.clone())?);
//! let service = DoctorAuthService::new(Arc::new(HttpDoctorAuthApi::new(client)), store);
//!
//! let outcome = service.handle_google_success(&credential).await?;
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod storage;
pub mod utils;

//! # Domain Layer Module
//!
//! 의사 포털 로그인/가입 흐름의 도메인 계층입니다.
//! 네트워크와 저장소에 의존하지 않는 순수한 타입과 규칙만 둡니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── DTOs         - 백엔드 API 요청/응답 본문
//! └── Models       - 인증 흐름 상태, 가입 폼, 진료 분야, 지역 카탈로그
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (client, storage)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`models`]
//!
//! - `auth::AuthFlowState` - 로그인 화면 상태 머신 (순수 전이 함수 `apply`)
//! - `auth::IdentityAssertion` - Google 자격 증명에서 꺼낸 이메일/이름
//! - `doctor::RegistrationDraft` - 가입 폼 입력값과 국가 → 주 → 도시 연쇄 선택
//! - `doctor::DoctorCategory` - 진료 분야와 대시보드 경로
//!
//! ### [`dto`]
//!
//! `/api/auth/doctor/google-check`, `/api/auth/doctor/google-register`의 JSON 계약입니다.
//! 가입 요청은 camelCase로 직렬화됩니다.
//!
//! ```rust,ignore
//! use crate::domain::dto::auth::GoogleRegisterRequest;
//!
//! let request = GoogleRegisterRequest::from_draft(&identity.email, &draft);
//! ```

pub mod dto;
pub mod models;

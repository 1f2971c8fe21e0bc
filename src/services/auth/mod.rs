//! 인증 서비스 모듈
//!
//! Google 로그인 결과를 받아 의사 계정 로그인 또는 회원가입까지 진행합니다.
//!
//! # Security
//!
//! - Google 자격 증명의 서명은 로컬에서 검증하지 않습니다 (백엔드 책임).
//! - 세션 토큰은 로그에 앞 4글자만 남깁니다.

pub mod doctor_auth_service;
pub mod google_identity_service;

pub use doctor_auth_service::*;
pub use google_identity_service::decode_identity_assertion;

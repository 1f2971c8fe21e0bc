//! # Domain Models Module
//!
//! 인증 흐름과 의사 가입 폼의 값 객체입니다.
//!
//! ```text
//! models/
//! ├── auth/     ← 인증 흐름 상태 머신, Google 신원 정보
//! └── doctor/   ← 진료 분야, 가입 폼, 지역 카탈로그
//! ```

pub mod auth;
pub mod doctor;

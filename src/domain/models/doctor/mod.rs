//! 의사 계정 관련 모델
//!
//! 진료 분야, 가입 폼, 국가/주/도시 카탈로그를 제공합니다.

pub mod doctor_category;
pub mod locations;
pub mod registration_draft;

pub use doctor_category::*;
pub use registration_draft::*;

//! 의사 인증 응답 DTO

use serde::Deserialize;

/// `POST /api/auth/doctor/google-check` 응답
///
/// `exists`가 `true`이면 `token`과 `category`가 함께 옵니다.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GoogleCheckResponse {
    pub exists: bool,

    #[serde(default)]
    pub token: Option<String>,

    #[serde(default)]
    pub category: Option<String>,
}

/// `POST /api/auth/doctor/google-register` 응답
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GoogleRegisterResponse {
    pub token: String,

    /// 계정 승인 상태 (예: `pending`)
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub category: Option<String>,
}

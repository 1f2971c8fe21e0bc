//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 로그인/회원가입 플로우를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`를 사용하여 타입 안전하고 일관된 에러 처리를 제공하며,
//! 모든 에러는 해당 사용자 액션의 경계(UI)에서 복구됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::AppError;
//!
//! fn require_email(email: &str) -> Result<(), AppError> {
//!     if email.is_empty() {
//!         return Err(AppError::ValidationError("Email is required".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 플로우 단계별로 세분화되어 있어 호출자가 "사용자 없음"과
/// "조회 실패"를 혼동하지 않도록 합니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// Google 로그인 위젯이 자격 증명을 주지 않은 경우
    #[error("Google sign-in failed: {0}")]
    IdentityProviderError(String),

    /// Google 자격 증명(identity assertion) 디코딩 실패
    #[error("Identity decode error: {0}")]
    IdentityDecodeError(String),

    /// 입력값 검증 에러 (잘못된 국가/주/도시 선택 등)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// google-check 호출 자체가 실패한 경우 (네트워크/서버 에러)
    #[error("Existence check failed: {0}")]
    ExistenceCheckError(String),

    /// google-register 호출 실패
    #[error("Registration failed: {0}")]
    RegistrationError(String),

    /// 현재 상태에서 허용되지 않는 이벤트
    #[error("Invalid transition: {event} is not allowed in {state}")]
    InvalidTransition { state: String, event: String },

    /// 회원가입 요청이 이미 진행 중
    #[error("A registration request is already in progress")]
    SubmissionInProgress,

    /// 자격 증명 저장소 읽기/쓰기 실패
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 설정값 파싱 실패
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 예상하지 못한 내부 에러
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

//! 의사 로그인/회원가입 플로우 상태 머신
//!
//! 화면 렌더링과 무관한 순수 상태 전이만 정의합니다.
//! 네트워크 호출과 토큰 저장 같은 부수 효과는
//! [`crate::services::auth::DoctorAuthService`]가 담당합니다.
//!
//! ```text
//! Unauthenticated ──IdentityAsserted──► CheckingIdentity
//!       ▲  ▲                               │        │
//!       │  └──────────CheckFailed──────────┘        │ AccountFound
//!       │                                  AccountMissing       ▼
//!  IdentityRejected                                │        LoggedIn
//!                                                  ▼            ▲
//!                    ┌──────────────► AwaitingRegistration       │
//!                    │                         │                 │
//!       RegistrationRejected             SubmitRequested    Registered
//!                    │                         ▼                 │
//!                    └──────────────────── Submitting ───────────┘
//! ```

use crate::domain::models::auth::identity_assertion::IdentityAssertion;
use crate::domain::models::doctor::doctor_category::{DoctorCategory, route_for_category};
use crate::domain::models::doctor::registration_draft::RegistrationDraft;
use crate::errors::{AppError, AppResult};

/// 자격 증명 디코딩 또는 존재 확인 실패 시 표시 메시지
pub const GOOGLE_LOGIN_FAILED_MESSAGE: &str = "Google login failed. Please try again.";
/// Google 로그인 위젯 자체가 실패했을 때 표시 메시지
pub const GOOGLE_PROVIDER_ERROR_MESSAGE: &str = "Google login failed";
/// 서버 메시지가 없는 회원가입 실패 시 표시 메시지
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed. Please try again.";

/// 플로우 상태
#[derive(Debug, Clone, PartialEq)]
pub enum AuthFlowState {
    /// 초기 상태. 직전 시도의 에러 메시지를 가질 수 있습니다.
    Unauthenticated { error: Option<String> },
    /// 백엔드에 계정 존재 여부를 확인하는 중
    CheckingIdentity { identity: IdentityAssertion },
    /// 회원가입 폼 입력 대기
    AwaitingRegistration {
        identity: IdentityAssertion,
        draft: RegistrationDraft,
        error: Option<String>,
    },
    /// 회원가입 요청 전송 중 (로딩 상태)
    Submitting {
        identity: IdentityAssertion,
        draft: RegistrationDraft,
    },
    /// 로그인 완료. 더 이상 전이하지 않습니다.
    LoggedIn {
        category: DoctorCategory,
        redirect: &'static str,
    },
}

impl Default for AuthFlowState {
    fn default() -> Self {
        AuthFlowState::Unauthenticated { error: None }
    }
}

/// 상태 전이를 일으키는 이벤트
#[derive(Debug, Clone, PartialEq)]
pub enum AuthFlowEvent {
    /// 자격 증명 디코딩 성공
    IdentityAsserted(IdentityAssertion),
    /// 자격 증명 디코딩 실패 또는 로그인 위젯 에러
    IdentityRejected { message: String },
    /// 기존 계정 확인됨 (토큰은 이미 저장됨)
    AccountFound { category: Option<String> },
    /// 계정 없음 (`exists: false`)
    AccountMissing,
    /// 존재 확인 요청 자체가 실패
    CheckFailed { message: String },
    /// 회원가입 제출
    SubmitRequested,
    /// 회원가입 성공 (토큰은 이미 저장됨)
    Registered { category: Option<String> },
    /// 회원가입 실패
    RegistrationRejected { message: String },
}

impl AuthFlowEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AuthFlowEvent::IdentityAsserted(_) => "IdentityAsserted",
            AuthFlowEvent::IdentityRejected { .. } => "IdentityRejected",
            AuthFlowEvent::AccountFound { .. } => "AccountFound",
            AuthFlowEvent::AccountMissing => "AccountMissing",
            AuthFlowEvent::CheckFailed { .. } => "CheckFailed",
            AuthFlowEvent::SubmitRequested => "SubmitRequested",
            AuthFlowEvent::Registered { .. } => "Registered",
            AuthFlowEvent::RegistrationRejected { .. } => "RegistrationRejected",
        }
    }
}

impl AuthFlowState {
    pub fn name(&self) -> &'static str {
        match self {
            AuthFlowState::Unauthenticated { .. } => "Unauthenticated",
            AuthFlowState::CheckingIdentity { .. } => "CheckingIdentity",
            AuthFlowState::AwaitingRegistration { .. } => "AwaitingRegistration",
            AuthFlowState::Submitting { .. } => "Submitting",
            AuthFlowState::LoggedIn { .. } => "LoggedIn",
        }
    }

    /// 화면에 표시할 에러 메시지
    pub fn error(&self) -> Option<&str> {
        match self {
            AuthFlowState::Unauthenticated { error }
            | AuthFlowState::AwaitingRegistration { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    /// 로그인 완료 시 이동할 경로
    pub fn redirect(&self) -> Option<&'static str> {
        match self {
            AuthFlowState::LoggedIn { redirect, .. } => Some(*redirect),
            _ => None,
        }
    }

    /// 회원가입 폼이 보이는 상태라면 현재 입력값
    pub fn draft(&self) -> Option<&RegistrationDraft> {
        match self {
            AuthFlowState::AwaitingRegistration { draft, .. }
            | AuthFlowState::Submitting { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// 이벤트를 적용한 다음 상태를 계산합니다.
    ///
    /// 현재 상태는 변경하지 않으며, 허용되지 않는 조합은
    /// [`AppError::InvalidTransition`]을 반환합니다.
    pub fn apply(&self, event: AuthFlowEvent) -> AppResult<AuthFlowState> {
        let next = match (self, event) {
            (AuthFlowState::Unauthenticated { .. }, AuthFlowEvent::IdentityAsserted(identity)) => {
                AuthFlowState::CheckingIdentity { identity }
            }
            (AuthFlowState::Unauthenticated { .. }, AuthFlowEvent::IdentityRejected { message }) => {
                AuthFlowState::Unauthenticated {
                    error: Some(message),
                }
            }
            (AuthFlowState::CheckingIdentity { .. }, AuthFlowEvent::AccountFound { category }) => {
                logged_in(category.as_deref())
            }
            (AuthFlowState::CheckingIdentity { identity }, AuthFlowEvent::AccountMissing) => {
                AuthFlowState::AwaitingRegistration {
                    draft: RegistrationDraft::with_name(identity.display_name()),
                    identity: identity.clone(),
                    error: None,
                }
            }
            (AuthFlowState::CheckingIdentity { .. }, AuthFlowEvent::CheckFailed { message }) => {
                AuthFlowState::Unauthenticated {
                    error: Some(message),
                }
            }
            (
                AuthFlowState::AwaitingRegistration {
                    identity, draft, ..
                },
                AuthFlowEvent::SubmitRequested,
            ) => AuthFlowState::Submitting {
                identity: identity.clone(),
                draft: draft.clone(),
            },
            (AuthFlowState::Submitting { .. }, AuthFlowEvent::Registered { category }) => {
                logged_in(category.as_deref())
            }
            (
                AuthFlowState::Submitting { identity, draft },
                AuthFlowEvent::RegistrationRejected { message },
            ) => AuthFlowState::AwaitingRegistration {
                identity: identity.clone(),
                draft: draft.clone(),
                error: Some(message),
            },
            (state, event) => {
                return Err(AppError::InvalidTransition {
                    state: state.name().to_string(),
                    event: event.name().to_string(),
                });
            }
        };

        Ok(next)
    }
}

fn logged_in(category: Option<&str>) -> AuthFlowState {
    AuthFlowState::LoggedIn {
        category: DoctorCategory::from_backend(category),
        redirect: route_for_category(category),
    }
}

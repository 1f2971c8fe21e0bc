//! 의사 로그인/회원가입 오케스트레이터
//!
//! [`AuthFlowState`]의 순수 전이 위에 부수 효과(백엔드 호출, 토큰 저장)를 얹습니다.
//! 모든 실패는 상태에 에러 메시지로 반영되고, 같은 에러가 호출자에게도 반환됩니다.
//!
//! # 흐름
//!
//! ```text
//! handle_google_success(credential)
//!   ├─ 디코딩 실패        → Unauthenticated("Google login failed. Please try again.")
//!   ├─ google-check 실패  → Unauthenticated("Google login failed. Please try again.")
//!   ├─ exists: true       → doctorToken 저장 → LoggedIn(redirect)
//!   └─ exists: false      → AwaitingRegistration(name 미리 채움)
//!
//! submit_registration()
//!   ├─ 이미 Submitting    → SubmissionInProgress (네트워크 호출 없음)
//!   ├─ 성공               → doctorToken 저장 → LoggedIn(redirect)
//!   └─ 실패               → AwaitingRegistration(서버 메시지 또는 기본 메시지, 입력값 유지)
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, error, info, warn};

use crate::client::DoctorAuthApi;
use crate::domain::dto::auth::{GoogleCheckRequest, GoogleRegisterRequest};
use crate::domain::models::auth::{
    AuthFlowEvent, AuthFlowState, GOOGLE_LOGIN_FAILED_MESSAGE, GOOGLE_PROVIDER_ERROR_MESSAGE,
    REGISTRATION_FAILED_MESSAGE,
};
use crate::domain::models::doctor::{DoctorCategory, RegistrationDraft};
use crate::errors::{AppError, AppResult};
use crate::services::auth::google_identity_service::decode_identity_assertion;
use crate::storage::{CredentialKey, TokenStore};
use crate::utils::string_utils::mask_secret;

/// 로그인 시도의 결과
#[derive(Debug, Clone, PartialEq)]
pub enum SignInOutcome {
    /// 로그인 완료. `redirect`로 이동합니다.
    LoggedIn {
        category: DoctorCategory,
        redirect: &'static str,
    },
    /// 계정이 없어 회원가입 폼을 채워야 합니다.
    RegistrationRequired { draft: RegistrationDraft },
}

pub struct DoctorAuthService {
    api: Arc<dyn DoctorAuthApi>,
    token_store: Arc<dyn TokenStore>,
    state: Mutex<AuthFlowState>,
}

impl DoctorAuthService {
    pub fn new(api: Arc<dyn DoctorAuthApi>, token_store: Arc<dyn TokenStore>) -> Self {
        Self {
            api,
            token_store,
            state: Mutex::new(AuthFlowState::default()),
        }
    }

    /// 현재 상태의 스냅샷
    pub fn state(&self) -> AppResult<AuthFlowState> {
        Ok(self.lock_state()?.clone())
    }

    /// 화면에 표시할 에러 메시지
    pub fn error_message(&self) -> AppResult<Option<String>> {
        Ok(self.lock_state()?.error().map(str::to_string))
    }

    /// Google 로그인 위젯이 자격 증명 없이 실패한 경우
    pub fn handle_google_error(&self) -> AppResult<()> {
        warn!("⚠️ Google 로그인 위젯 에러");
        self.transition(AuthFlowEvent::IdentityRejected {
            message: GOOGLE_PROVIDER_ERROR_MESSAGE.to_string(),
        })?;
        Ok(())
    }

    /// Google 로그인 성공 콜백
    ///
    /// 자격 증명을 디코딩하고 백엔드에 계정 존재 여부를 확인합니다.
    /// 계정이 있으면 토큰을 저장하고 로그인을 완료하며, 없으면 회원가입 폼으로 전환합니다.
    pub async fn handle_google_success(&self, credential: &str) -> AppResult<SignInOutcome> {
        let identity = match decode_identity_assertion(credential) {
            Ok(identity) => identity,
            Err(e) => {
                warn!("⚠️ Google 자격 증명 디코딩 실패: {}", e);
                self.transition(AuthFlowEvent::IdentityRejected {
                    message: GOOGLE_LOGIN_FAILED_MESSAGE.to_string(),
                })?;
                return Err(e);
            }
        };

        let request = GoogleCheckRequest {
            email: identity.email.clone(),
        };
        self.transition(AuthFlowEvent::IdentityAsserted(identity))?;
        info!("🔍 의사 계정 확인 중: {}", request.email);

        let response = match self.api.google_check(&request).await {
            Ok(response) => response,
            Err(e) => {
                error!("❌ 계정 확인 요청 실패: {}", e);
                self.fail_check()?;
                return Err(AppError::ExistenceCheckError(e.to_string()));
            }
        };

        if !response.exists {
            info!("📝 등록되지 않은 계정, 회원가입 폼으로 이동: {}", request.email);
            let next = self.transition(AuthFlowEvent::AccountMissing)?;
            let draft = next.draft().cloned().unwrap_or_default();
            return Ok(SignInOutcome::RegistrationRequired { draft });
        }

        let token = match response.token.filter(|token| !token.is_empty()) {
            Some(token) => token,
            None => {
                error!("❌ 계정이 존재하지만 응답에 토큰이 없습니다: {}", request.email);
                self.fail_check()?;
                return Err(AppError::ExistenceCheckError(
                    "account exists but no token was returned".to_string(),
                ));
            }
        };

        if let Err(e) = self.token_store.set(CredentialKey::DoctorToken, &token) {
            error!("❌ 세션 토큰 저장 실패: {}", e);
            self.fail_check()?;
            return Err(e);
        }
        debug!("세션 토큰 저장: {}", mask_secret(&token));

        let next = self.transition(AuthFlowEvent::AccountFound {
            category: response.category,
        })?;
        let outcome = logged_in_outcome(&next)?;
        info!("✅ 로그인 완료: {} → {}", request.email, next.redirect().unwrap_or_default());
        Ok(outcome)
    }

    /// 회원가입 폼 입력값을 수정합니다.
    ///
    /// 폼이 보이는 상태(`AwaitingRegistration`)에서만 허용됩니다.
    /// 클로저가 에러를 반환하면 입력값은 바뀌지 않습니다.
    pub fn edit_draft<F>(&self, edit: F) -> AppResult<()>
    where
        F: FnOnce(&mut RegistrationDraft) -> AppResult<()>,
    {
        let mut state = self.lock_state()?;
        match &mut *state {
            AuthFlowState::AwaitingRegistration { draft, .. } => {
                let mut edited = draft.clone();
                edit(&mut edited)?;
                *draft = edited;
                Ok(())
            }
            other => Err(AppError::InvalidTransition {
                state: other.name().to_string(),
                event: "EditDraft".to_string(),
            }),
        }
    }

    /// 회원가입 제출
    ///
    /// 요청 전에 상태를 `Submitting`으로 바꾸므로, 응답 대기 중의 두 번째 호출은
    /// 네트워크 요청 없이 [`AppError::SubmissionInProgress`]로 거절됩니다.
    pub async fn submit_registration(&self) -> AppResult<SignInOutcome> {
        let request = {
            let mut state = self.lock_state()?;
            if matches!(*state, AuthFlowState::Submitting { .. }) {
                warn!("⚠️ 회원가입 요청이 이미 진행 중입니다");
                return Err(AppError::SubmissionInProgress);
            }

            let next = state.apply(AuthFlowEvent::SubmitRequested)?;
            let AuthFlowState::Submitting { identity, draft } = &next else {
                return Err(AppError::InternalError(format!(
                    "unexpected state after submit: {}",
                    next.name()
                )));
            };
            let request = GoogleRegisterRequest::from_draft(&identity.email, draft);
            *state = next;
            request
        };

        info!("📨 회원가입 요청: {} ({})", request.email, request.category.as_str());

        let response = match self.api.google_register(&request).await {
            Ok(response) => response,
            Err(e) => {
                let message = e
                    .server_message()
                    .unwrap_or(REGISTRATION_FAILED_MESSAGE)
                    .to_string();
                error!("❌ 회원가입 실패: {}", message);
                self.transition(AuthFlowEvent::RegistrationRejected {
                    message: message.clone(),
                })?;
                return Err(AppError::RegistrationError(message));
            }
        };

        if response.token.is_empty() {
            error!("❌ 회원가입 응답에 토큰이 없습니다: {}", request.email);
            self.reject_registration()?;
            return Err(AppError::RegistrationError(REGISTRATION_FAILED_MESSAGE.to_string()));
        }

        if let Err(e) = self.token_store.set(CredentialKey::DoctorToken, &response.token) {
            error!("❌ 세션 토큰 저장 실패: {}", e);
            self.reject_registration()?;
            return Err(e);
        }
        debug!("세션 토큰 저장: {}", mask_secret(&response.token));

        if let Some(status) = &response.status {
            info!("계정 상태: {}", status);
        }

        let next = self.transition(AuthFlowEvent::Registered {
            category: response.category,
        })?;
        let outcome = logged_in_outcome(&next)?;
        info!("✅ 회원가입 완료: {} → {}", request.email, next.redirect().unwrap_or_default());
        Ok(outcome)
    }

    fn fail_check(&self) -> AppResult<()> {
        self.transition(AuthFlowEvent::CheckFailed {
            message: GOOGLE_LOGIN_FAILED_MESSAGE.to_string(),
        })?;
        Ok(())
    }

    fn reject_registration(&self) -> AppResult<()> {
        self.transition(AuthFlowEvent::RegistrationRejected {
            message: REGISTRATION_FAILED_MESSAGE.to_string(),
        })?;
        Ok(())
    }

    fn transition(&self, event: AuthFlowEvent) -> AppResult<AuthFlowState> {
        let mut state = self.lock_state()?;
        let event_name = event.name();
        let next = state.apply(event)?;
        debug!("상태 전이: {} --{}--> {}", state.name(), event_name, next.name());
        *state = next.clone();
        Ok(next)
    }

    fn lock_state(&self) -> AppResult<MutexGuard<'_, AuthFlowState>> {
        self.state
            .lock()
            .map_err(|e| AppError::InternalError(format!("auth flow state lock poisoned: {}", e)))
    }
}

fn logged_in_outcome(state: &AuthFlowState) -> AppResult<SignInOutcome> {
    match state {
        AuthFlowState::LoggedIn { category, redirect } => Ok(SignInOutcome::LoggedIn {
            category: *category,
            redirect: *redirect,
        }),
        other => Err(AppError::InternalError(format!(
            "expected LoggedIn, found {}",
            other.name()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ApiClient, ApiError, HttpDoctorAuthApi};
    use crate::domain::dto::auth::{GoogleCheckResponse, GoogleRegisterResponse};
    use crate::services::auth::google_identity_service::tests::credential_for;
    use crate::storage::MemoryTokenStore;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct FakeApi {
        check: Result<GoogleCheckResponse, ApiError>,
        register: Result<GoogleRegisterResponse, ApiError>,
        register_gate: Option<Arc<Notify>>,
        check_calls: AtomicUsize,
        register_calls: AtomicUsize,
        registered: Mutex<Vec<GoogleRegisterRequest>>,
    }

    impl FakeApi {
        fn new(check: Result<GoogleCheckResponse, ApiError>) -> Self {
            Self {
                check,
                register: Ok(GoogleRegisterResponse {
                    token: "t2".to_string(),
                    status: Some("pending".to_string()),
                    category: Some("ayurvedic".to_string()),
                }),
                register_gate: None,
                check_calls: AtomicUsize::new(0),
                register_calls: AtomicUsize::new(0),
                registered: Mutex::new(Vec::new()),
            }
        }

        fn missing_account() -> Self {
            Self::new(Ok(GoogleCheckResponse {
                exists: false,
                token: None,
                category: None,
            }))
        }

        fn with_register(mut self, register: Result<GoogleRegisterResponse, ApiError>) -> Self {
            self.register = register;
            self
        }
    }

    #[async_trait]
    impl DoctorAuthApi for FakeApi {
        async fn google_check(&self, _request: &GoogleCheckRequest) -> Result<GoogleCheckResponse, ApiError> {
            self.check_calls.fetch_add(1, Ordering::SeqCst);
            self.check.clone()
        }

        async fn google_register(
            &self,
            request: &GoogleRegisterRequest,
        ) -> Result<GoogleRegisterResponse, ApiError> {
            self.register_calls.fetch_add(1, Ordering::SeqCst);
            self.registered.lock().unwrap().push(request.clone());
            if let Some(gate) = &self.register_gate {
                gate.notified().await;
            }
            self.register.clone()
        }
    }

    fn asha_credential() -> String {
        credential_for(&json!({"email": "asha@example.com", "name": "Asha Verma"}))
    }

    fn service_with(api: FakeApi) -> (DoctorAuthService, Arc<FakeApi>, Arc<MemoryTokenStore>) {
        let api = Arc::new(api);
        let store = Arc::new(MemoryTokenStore::new());
        let service = DoctorAuthService::new(api.clone(), store.clone());
        (service, api, store)
    }

    async fn awaiting_registration(api: FakeApi) -> (DoctorAuthService, Arc<FakeApi>, Arc<MemoryTokenStore>) {
        let (service, api, store) = service_with(api);
        service.handle_google_success(&asha_credential()).await.unwrap();
        (service, api, store)
    }

    #[tokio::test]
    async fn test_existing_account_stores_token_and_redirects() {
        let (service, _, store) = service_with(FakeApi::new(Ok(GoogleCheckResponse {
            exists: true,
            token: Some("t1".to_string()),
            category: Some("homeopathy".to_string()),
        })));

        let outcome = service.handle_google_success(&asha_credential()).await.unwrap();

        assert_eq!(
            outcome,
            SignInOutcome::LoggedIn {
                category: DoctorCategory::Homeopathy,
                redirect: "/doctor/homeopathy",
            }
        );
        assert_eq!(store.get(CredentialKey::DoctorToken), Some("t1".to_string()));
        assert_eq!(service.state().unwrap().redirect(), Some("/doctor/homeopathy"));
    }

    #[tokio::test]
    async fn test_unknown_category_redirects_to_general() {
        for category in [None, Some("general"), Some("dentistry"), Some("Homeopathy")] {
            let (service, _, _) = service_with(FakeApi::new(Ok(GoogleCheckResponse {
                exists: true,
                token: Some("t1".to_string()),
                category: category.map(str::to_string),
            })));

            let outcome = service.handle_google_success(&asha_credential()).await.unwrap();
            assert_eq!(
                outcome,
                SignInOutcome::LoggedIn {
                    category: DoctorCategory::General,
                    redirect: "/doctor/general",
                },
                "category {:?}",
                category
            );
        }
    }

    #[tokio::test]
    async fn test_missing_account_opens_registration() {
        let (service, _, store) = service_with(FakeApi::missing_account());

        let outcome = service.handle_google_success(&asha_credential()).await.unwrap();

        let SignInOutcome::RegistrationRequired { draft } = outcome else {
            panic!("expected registration");
        };
        assert_eq!(draft.name, "Asha Verma");
        assert_eq!(draft.country(), "India");
        assert_eq!(service.state().unwrap().name(), "AwaitingRegistration");
        assert_eq!(store.get(CredentialKey::DoctorToken), None);
    }

    #[tokio::test]
    async fn test_missing_name_seeds_empty_string() {
        let (service, _, _) = service_with(FakeApi::missing_account());
        let credential = credential_for(&json!({"email": "ravi@example.com"}));

        service.handle_google_success(&credential).await.unwrap();

        assert_eq!(service.state().unwrap().draft().unwrap().name, "");
    }

    #[tokio::test]
    async fn test_malformed_credential_is_generic_failure() {
        let (service, api, _) = service_with(FakeApi::missing_account());

        let result = service.handle_google_success("garbage").await;

        assert!(matches!(result, Err(AppError::IdentityDecodeError(_))));
        assert_eq!(
            service.state().unwrap(),
            AuthFlowState::Unauthenticated {
                error: Some(GOOGLE_LOGIN_FAILED_MESSAGE.to_string()),
            }
        );
        assert_eq!(api.check_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_check_failure_does_not_fall_through_to_registration() {
        let (service, _, store) = service_with(FakeApi::new(Err(ApiError::from_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"message":"db down"}"#,
        ))));

        let result = service.handle_google_success(&asha_credential()).await;

        assert!(matches!(result, Err(AppError::ExistenceCheckError(_))));
        assert_eq!(service.state().unwrap().name(), "Unauthenticated");
        assert_eq!(
            service.error_message().unwrap().as_deref(),
            Some(GOOGLE_LOGIN_FAILED_MESSAGE)
        );
        assert_eq!(store.get(CredentialKey::DoctorToken), None);
    }

    #[tokio::test]
    async fn test_existing_account_without_token_is_check_failure() {
        let (service, _, store) = service_with(FakeApi::new(Ok(GoogleCheckResponse {
            exists: true,
            token: None,
            category: Some("ayurvedic".to_string()),
        })));

        let result = service.handle_google_success(&asha_credential()).await;

        assert!(matches!(result, Err(AppError::ExistenceCheckError(_))));
        assert_eq!(service.state().unwrap().name(), "Unauthenticated");
        assert_eq!(store.get(CredentialKey::DoctorToken), None);
    }

    #[tokio::test]
    async fn test_retry_after_check_failure() {
        let (service, _, _) = service_with(FakeApi::new(Err(ApiError::Transport("refused".to_string()))));
        assert!(service.handle_google_success(&asha_credential()).await.is_err());

        // 실패 후에도 다시 로그인할 수 있어야 함
        let result = service.handle_google_success(&asha_credential()).await;
        assert!(matches!(result, Err(AppError::ExistenceCheckError(_))));
    }

    #[tokio::test]
    async fn test_google_error_sets_provider_message() {
        let (service, _, _) = service_with(FakeApi::missing_account());

        service.handle_google_error().unwrap();

        assert_eq!(
            service.error_message().unwrap().as_deref(),
            Some(GOOGLE_PROVIDER_ERROR_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_registration_success() {
        let (service, api, store) = awaiting_registration(FakeApi::missing_account()).await;
        service
            .edit_draft(|draft| {
                draft.mobile = "+91 98450 00000".to_string();
                draft.select_state("Tamil Nadu")?;
                draft.select_city("Madurai")
            })
            .unwrap();

        let outcome = service.submit_registration().await.unwrap();

        assert_eq!(
            outcome,
            SignInOutcome::LoggedIn {
                category: DoctorCategory::Ayurvedic,
                redirect: "/doctor/ayurvedic",
            }
        );
        assert_eq!(store.get(CredentialKey::DoctorToken), Some("t2".to_string()));

        let registered = api.registered.lock().unwrap();
        assert_eq!(registered.len(), 1);
        assert_eq!(registered[0].email, "asha@example.com");
        assert_eq!(registered[0].name, "Asha Verma");
        assert_eq!(registered[0].city, "Madurai");
        assert_eq!(registered[0].license_url, "mock-license-url");
        assert_eq!(registered[0].govt_id_url, "mock-govt-id-url");
    }

    #[tokio::test]
    async fn test_registration_server_message_is_shown_and_draft_kept() {
        let api = FakeApi::missing_account().with_register(Err(ApiError::from_status(
            StatusCode::BAD_REQUEST,
            r#"{"message":"Mobile required"}"#,
        )));
        let (service, _, store) = awaiting_registration(api).await;
        service
            .edit_draft(|draft| {
                draft.reg_no = "MCI-1".to_string();
                Ok(())
            })
            .unwrap();
        let before = service.state().unwrap().draft().cloned().unwrap();

        let result = service.submit_registration().await;

        assert_eq!(result, Err(AppError::RegistrationError("Mobile required".to_string())));
        let state = service.state().unwrap();
        assert_eq!(state.name(), "AwaitingRegistration");
        assert_eq!(state.error(), Some("Mobile required"));
        assert_eq!(state.draft(), Some(&before));
        assert_eq!(store.get(CredentialKey::DoctorToken), None);
    }

    #[tokio::test]
    async fn test_registration_without_body_uses_fallback() {
        let api = FakeApi::missing_account()
            .with_register(Err(ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "")));
        let (service, _, _) = awaiting_registration(api).await;

        let result = service.submit_registration().await;

        assert_eq!(
            result,
            Err(AppError::RegistrationError(REGISTRATION_FAILED_MESSAGE.to_string()))
        );
        assert_eq!(service.error_message().unwrap().as_deref(), Some(REGISTRATION_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn test_resubmit_after_failure() {
        let api = FakeApi::missing_account()
            .with_register(Err(ApiError::Transport("connection reset".to_string())));
        let (service, api, _) = awaiting_registration(api).await;

        assert!(service.submit_registration().await.is_err());
        assert!(service.submit_registration().await.is_err());

        // 자동 재시도 없이 제출 횟수만큼만 호출됨
        assert_eq!(api.register_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_double_submit_is_rejected_while_loading() {
        let gate = Arc::new(Notify::new());
        let mut api = FakeApi::missing_account();
        api.register_gate = Some(gate.clone());
        let (service, api, _) = awaiting_registration(api).await;

        let (first, second) = tokio::join!(service.submit_registration(), async {
            let second = service.submit_registration().await;
            gate.notify_one();
            second
        });

        assert!(matches!(first, Ok(SignInOutcome::LoggedIn { .. })));
        assert_eq!(second, Err(AppError::SubmissionInProgress));
        assert_eq!(api.register_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_edit_draft_is_atomic_and_scoped() {
        let (service, _, _) = service_with(FakeApi::missing_account());
        let result = service.edit_draft(|draft| {
            draft.mobile = "1".to_string();
            Ok(())
        });
        assert!(matches!(result, Err(AppError::InvalidTransition { .. })));

        service.handle_google_success(&asha_credential()).await.unwrap();
        let result = service.edit_draft(|draft| {
            draft.mobile = "+91".to_string();
            draft.select_state("Atlantis")
        });

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(service.state().unwrap().draft().unwrap().mobile, "");
    }

    #[tokio::test]
    async fn test_submit_before_sign_in_is_invalid() {
        let (service, api, _) = service_with(FakeApi::missing_account());

        let result = service.submit_registration().await;

        assert!(matches!(result, Err(AppError::InvalidTransition { .. })));
        assert_eq!(api.register_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_end_to_end_over_http() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/doctor/google-check"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"exists": false})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/auth/doctor/google-register"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "token": "t9",
                "status": "pending",
                "category": "homeopathy"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let store = Arc::new(MemoryTokenStore::new());
        let client = Arc::new(ApiClient::new(&server.uri(), store.clone()).unwrap());
        let service = DoctorAuthService::new(Arc::new(HttpDoctorAuthApi::new(client)), store.clone());

        let outcome = service.handle_google_success(&asha_credential()).await.unwrap();
        assert!(matches!(outcome, SignInOutcome::RegistrationRequired { .. }));

        let outcome = service.submit_registration().await.unwrap();
        assert_eq!(
            outcome,
            SignInOutcome::LoggedIn {
                category: DoctorCategory::Homeopathy,
                redirect: "/doctor/homeopathy",
            }
        );
        assert_eq!(store.get(CredentialKey::DoctorToken), Some("t9".to_string()));
    }

    /// 기록이 항상 실패하는 저장소
    struct FailingStore;

    impl TokenStore for FailingStore {
        fn get(&self, _key: CredentialKey) -> Option<String> {
            None
        }

        fn set(&self, _key: CredentialKey, _value: &str) -> AppResult<()> {
            Err(AppError::StorageError("disk full".to_string()))
        }

        fn clear(&self, _key: CredentialKey) -> AppResult<()> {
            Err(AppError::StorageError("disk full".to_string()))
        }
    }

    #[tokio::test]
    async fn test_token_write_failure_fails_check() {
        let service = DoctorAuthService::new(
            Arc::new(FakeApi::new(Ok(GoogleCheckResponse {
                exists: true,
                token: Some("t1".to_string()),
                category: Some("homeopathy".to_string()),
            }))),
            Arc::new(FailingStore),
        );

        let result = service.handle_google_success(&asha_credential()).await;

        assert_eq!(result, Err(AppError::StorageError("disk full".to_string())));
        assert_eq!(
            service.state().unwrap(),
            AuthFlowState::Unauthenticated {
                error: Some(GOOGLE_LOGIN_FAILED_MESSAGE.to_string()),
            }
        );
    }

    #[tokio::test]
    async fn test_token_write_failure_keeps_registration_draft() {
        let api = Arc::new(FakeApi::missing_account());
        let service = DoctorAuthService::new(api.clone(), Arc::new(FailingStore));
        service.handle_google_success(&asha_credential()).await.unwrap();
        service
            .edit_draft(|draft| {
                draft.mobile = "+91 98450 00000".to_string();
                draft.select_state("Delhi")?;
                draft.select_city("Rohini")
            })
            .unwrap();
        let before = service.state().unwrap().draft().cloned().unwrap();

        let result = service.submit_registration().await;

        assert_eq!(result, Err(AppError::StorageError("disk full".to_string())));
        let state = service.state().unwrap();
        assert_eq!(state.name(), "AwaitingRegistration");
        assert_eq!(state.error(), Some(REGISTRATION_FAILED_MESSAGE));
        assert_eq!(state.draft(), Some(&before));
        assert_eq!(api.register_calls.load(Ordering::SeqCst), 1);
    }
}

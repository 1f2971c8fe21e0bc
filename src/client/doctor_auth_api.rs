//! 의사 인증 엔드포인트 클라이언트

use std::sync::Arc;

use async_trait::async_trait;

use crate::client::api_client::ApiClient;
use crate::client::api_error::ApiError;
use crate::domain::dto::auth::{
    GoogleCheckRequest, GoogleCheckResponse, GoogleRegisterRequest, GoogleRegisterResponse,
};

pub const GOOGLE_CHECK_PATH: &str = "/api/auth/doctor/google-check";
pub const GOOGLE_REGISTER_PATH: &str = "/api/auth/doctor/google-register";

/// 의사 계정 조회/가입 API
///
/// 서비스 계층은 이 trait에만 의존하므로 테스트에서 가짜 구현으로 교체할 수 있습니다.
#[async_trait]
pub trait DoctorAuthApi: Send + Sync {
    /// 이메일로 의사 계정 존재 여부를 확인합니다.
    async fn google_check(&self, request: &GoogleCheckRequest) -> Result<GoogleCheckResponse, ApiError>;

    /// 새 의사 계정을 등록합니다.
    async fn google_register(
        &self,
        request: &GoogleRegisterRequest,
    ) -> Result<GoogleRegisterResponse, ApiError>;
}

/// [`ApiClient`]를 통한 HTTP 구현
pub struct HttpDoctorAuthApi {
    client: Arc<ApiClient>,
}

impl HttpDoctorAuthApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DoctorAuthApi for HttpDoctorAuthApi {
    async fn google_check(&self, request: &GoogleCheckRequest) -> Result<GoogleCheckResponse, ApiError> {
        self.client.post_json(GOOGLE_CHECK_PATH, request).await
    }

    async fn google_register(
        &self,
        request: &GoogleRegisterRequest,
    ) -> Result<GoogleRegisterResponse, ApiError> {
        self.client.post_json(GOOGLE_REGISTER_PATH, request).await
    }
}

//! 공용 백엔드 HTTP 클라이언트
//!
//! 모든 요청에 base URL을 붙이고, 저장소에 세션 토큰이 있으면
//! `Authorization: Bearer <token>` 헤더를 자동으로 추가합니다.
//! 실패한 요청은 상세 내용을 로그로 남긴 뒤 그대로 호출자에게 전달하며 재시도하지 않습니다.
//! 요청 타임아웃은 두지 않습니다.

use std::sync::Arc;

use log::{debug, error};
use reqwest::Url;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::api_error::ApiError;
use crate::storage::{self, TokenStore};

pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    token_store: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(base_url: &str, token_store: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        let mut base_url =
            Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        // 경로가 있는 base URL에서도 join이 마지막 세그먼트를 덮어쓰지 않도록
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            token_store,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// 요청에 첨부할 토큰 (의사 토큰 우선, 없으면 관리자 토큰)
    pub fn bearer_token(&self) -> Option<String> {
        storage::bearer_token(self.token_store.as_ref())
    }

    /// JSON 본문으로 POST 요청을 보내고 JSON 응답을 역직렬화합니다.
    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let result = self.send_json(path, body).await;
        if let Err(e) = &result {
            error!("API Error Details: {}", e.details());
        }
        result
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", path, e)))
    }

    async fn send_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!("➡️ POST {}", url);

        let mut request = self.http.post(url).json(body);
        if let Some(token) = self.bearer_token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let raw_body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &raw_body));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice::<R>(&bytes).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

//! 백엔드 API 호출 에러

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// 백엔드 호출 실패
///
/// 2xx가 아닌 응답은 상태 코드와 파싱된 본문을 그대로 보존하여
/// 호출자가 서버 메시지(`body.message`)를 꺼낼 수 있게 합니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 2xx가 아닌 응답
    #[error("Request failed with status {status}")]
    Status {
        status: StatusCode,
        /// JSON이면 파싱된 값, 아니면 원문 문자열. 비어 있으면 `None`.
        body: Option<Value>,
    },

    /// 연결 실패, 타임아웃 등 응답을 받지 못한 경우
    #[error("Transport error: {0}")]
    Transport(String),

    /// 2xx 응답이지만 본문이 기대한 형태가 아닌 경우
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// base URL과 경로를 결합할 수 없는 경우
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// 원문 응답 본문으로 `Status` 에러를 만듭니다.
    pub fn from_status(status: StatusCode, raw_body: &str) -> Self {
        let body = if raw_body.trim().is_empty() {
            None
        } else {
            Some(
                serde_json::from_str::<Value>(raw_body)
                    .unwrap_or_else(|_| Value::String(raw_body.to_string())),
            )
        };
        ApiError::Status { status, body }
    }

    /// 서버가 내려준 사용자용 메시지 (`body.message`, 비어 있지 않은 문자열만)
    pub fn server_message(&self) -> Option<&str> {
        self.response_body()?
            .get("message")?
            .as_str()
            .filter(|message| !message.is_empty())
    }

    pub fn response_body(&self) -> Option<&Value> {
        match self {
            ApiError::Status { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 로그에 남길 에러 상세 (응답 본문이 있으면 본문, 없으면 에러 메시지)
    pub fn details(&self) -> String {
        match self.response_body() {
            Some(body) => body.to_string(),
            None => self.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ApiError::InvalidResponse(error.to_string())
        } else {
            ApiError::Transport(error.to_string())
        }
    }
}

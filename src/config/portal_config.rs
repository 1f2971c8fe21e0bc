//! 포털 클라이언트 설정 모듈
//!
//! 백엔드 API 주소와 자격 증명 저장소 경로를 관리합니다.

use std::env;
use std::path::PathBuf;

use log::error;

/// 백엔드 API 기본 포트
pub const DEFAULT_API_PORT: u16 = 5000;

/// 로컬 루프백으로 취급하는 호스트 이름
const LOOPBACK_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

/// 백엔드 API 설정
pub struct ApiConfig;

impl ApiConfig {
    /// 현재 접속 호스트 이름을 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORTAL_HOST`: 기본값 `localhost`
    pub fn host() -> String {
        env::var("PORTAL_HOST")
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| "localhost".to_string())
    }

    /// 백엔드 API 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORTAL_API_PORT`: 기본값 5000, 비어 있거나 파싱 실패 시에도 5000
    pub fn port() -> u16 {
        parse_port(env::var("PORTAL_API_PORT").ok().as_deref())
    }

    /// 요청에 사용할 기본 URL을 반환합니다.
    ///
    /// `PORTAL_API_BASE_URL`이 설정되어 있으면 그대로 사용하고,
    /// 아니면 [`ApiConfig::base_url_for_host`]로 해석합니다.
    pub fn base_url() -> String {
        match env::var("PORTAL_API_BASE_URL") {
            Ok(url) if !url.is_empty() => url,
            _ => Self::base_url_for_host(&Self::host(), Self::port()),
        }
    }

    /// 호스트 이름으로 백엔드 기본 URL을 결정합니다.
    ///
    /// 루프백 호스트는 항상 `http://localhost:<port>`로,
    /// 그 외에는 같은 호스트의 `<port>`로 연결합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// assert_eq!(ApiConfig::base_url_for_host("127.0.0.1", 5000), "http://localhost:5000");
    /// assert_eq!(ApiConfig::base_url_for_host("10.0.0.7", 5000), "http://10.0.0.7:5000");
    /// ```
    pub fn base_url_for_host(host: &str, port: u16) -> String {
        if LOOPBACK_HOSTS.contains(&host) {
            format!("http://localhost:{}", port)
        } else {
            format!("http://{}:{}", host, port)
        }
    }
}

/// 자격 증명 저장소 설정
pub struct CredentialStoreConfig;

impl CredentialStoreConfig {
    /// 토큰 파일 경로를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `CREDENTIAL_STORE_PATH`: 기본값 `.nabhacare/credentials.json`
    pub fn path() -> PathBuf {
        env::var("CREDENTIAL_STORE_PATH")
            .ok()
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".nabhacare").join("credentials.json"))
    }
}

fn parse_port(raw: Option<&str>) -> u16 {
    match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => raw.parse::<u16>().unwrap_or_else(|e| {
            error!("PORTAL_API_PORT 파싱 실패: {}. 기본값 {} 사용", e, DEFAULT_API_PORT);
            DEFAULT_API_PORT
        }),
        None => DEFAULT_API_PORT,
    }
}

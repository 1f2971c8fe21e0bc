//! 자격 증명 저장소 모듈
//!
//! 백엔드가 발급한 세션 토큰을 보관하는 키-값 저장소입니다.
//! 전역 상태에 직접 접근하지 않고 [`TokenStore`] trait으로 주입받아
//! 테스트에서는 메모리 저장소, 실행 시에는 파일 저장소를 사용합니다.
//!
//! # Keys
//!
//! - `doctorToken` - 의사 세션 토큰 (로그인/회원가입 성공 시 기록)
//! - `adminToken` - 관리자 세션 토큰 (읽기 전용으로 사용)
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::storage::{CredentialKey, MemoryTokenStore, TokenStore};
//!
//! let store: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
//! store.set(CredentialKey::DoctorToken, "t1")?;
//! assert_eq!(store.get(CredentialKey::DoctorToken), Some("t1".to_string()));
//! ```

pub mod file_store;
pub mod memory_store;

pub use file_store::FileTokenStore;
pub use memory_store::MemoryTokenStore;

use crate::errors::AppResult;

/// 저장소 키
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKey {
    DoctorToken,
    AdminToken,
}

impl CredentialKey {
    /// 저장소에 기록되는 키 문자열
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialKey::DoctorToken => "doctorToken",
            CredentialKey::AdminToken => "adminToken",
        }
    }

    /// 모든 키
    pub fn all() -> [CredentialKey; 2] {
        [CredentialKey::DoctorToken, CredentialKey::AdminToken]
    }
}

/// 세션 토큰 저장소 인터페이스
///
/// 프로세스 전역에서 공유되며, 나중에 기록한 값이 이깁니다.
pub trait TokenStore: Send + Sync {
    /// 저장된 값을 반환합니다. 없으면 `None`.
    fn get(&self, key: CredentialKey) -> Option<String>;

    /// 값을 기록합니다.
    fn set(&self, key: CredentialKey, value: &str) -> AppResult<()>;

    /// 값을 삭제합니다. 없는 키를 삭제해도 에러가 아닙니다.
    fn clear(&self, key: CredentialKey) -> AppResult<()>;
}

/// 요청에 첨부할 bearer 토큰을 고릅니다.
///
/// 비어 있지 않은 `doctorToken`을 우선하고, 없으면 `adminToken`을 사용합니다.
pub fn bearer_token(store: &dyn TokenStore) -> Option<String> {
    [CredentialKey::DoctorToken, CredentialKey::AdminToken]
        .into_iter()
        .filter_map(|key| store.get(key))
        .find(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(CredentialKey::DoctorToken.as_str(), "doctorToken");
        assert_eq!(CredentialKey::AdminToken.as_str(), "adminToken");
    }

    #[test]
    fn test_bearer_prefers_doctor_token() {
        let store = MemoryTokenStore::new();
        store.set(CredentialKey::AdminToken, "admin-1").unwrap();
        store.set(CredentialKey::DoctorToken, "doctor-1").unwrap();

        assert_eq!(bearer_token(&store), Some("doctor-1".to_string()));
    }

    #[test]
    fn test_bearer_falls_back_to_admin_token() {
        let store = MemoryTokenStore::new();
        store.set(CredentialKey::AdminToken, "admin-1").unwrap();
        assert_eq!(bearer_token(&store), Some("admin-1".to_string()));

        // 빈 doctorToken은 없는 것으로 취급
        store.set(CredentialKey::DoctorToken, "").unwrap();
        assert_eq!(bearer_token(&store), Some("admin-1".to_string()));
    }

    #[test]
    fn test_bearer_none_when_store_is_empty() {
        let store = MemoryTokenStore::new();
        assert_eq!(bearer_token(&store), None);
    }
}

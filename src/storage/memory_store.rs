//! 메모리 기반 토큰 저장소

use std::collections::HashMap;
use std::sync::RwLock;

use crate::errors::{AppError, AppResult};
use crate::storage::{CredentialKey, TokenStore};

/// 프로세스 메모리에만 유지되는 저장소
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: RwLock<HashMap<CredentialKey, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: CredentialKey) -> Option<String> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(&key).cloned())
    }

    fn set(&self, key: CredentialKey, value: &str) -> AppResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| AppError::StorageError(format!("저장소 잠금 실패: {}", e)))?;
        entries.insert(key, value.to_string());
        Ok(())
    }

    fn clear(&self, key: CredentialKey) -> AppResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| AppError::StorageError(format!("저장소 잠금 실패: {}", e)))?;
        entries.remove(&key);
        Ok(())
    }
}

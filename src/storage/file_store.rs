//! 파일 기반 토큰 저장소
//!
//! 브라우저 `localStorage`처럼 프로세스가 종료되어도 토큰을 유지합니다.
//! 내용은 `{"doctorToken": "...", "adminToken": "..."}` 형태의 JSON 객체이며,
//! 읽을 때마다 파일을 다시 읽으므로 다른 프로세스의 기록도 반영됩니다.
//! 여러 프로세스가 동시에 기록하면 마지막 기록이 남습니다.

use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::{debug, warn};
use tempfile::NamedTempFile;

use crate::errors::{AppError, AppResult};
use crate::storage::{CredentialKey, TokenStore};

type Entries = BTreeMap<String, String>;

/// JSON 파일에 토큰을 보관하는 저장소
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    /// 같은 프로세스 안의 읽기-수정-쓰기를 직렬화
    write_lock: Mutex<()>,
}

impl FileTokenStore {
    /// 주어진 경로를 사용하는 저장소를 생성합니다. 파일은 첫 기록 시 만들어집니다.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> AppResult<Entries> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(Entries::new()),
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                AppError::StorageError(format!(
                    "자격 증명 파일 파싱 실패 ({}): {}",
                    self.path.display(),
                    e
                ))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Entries::new()),
            Err(e) => Err(AppError::StorageError(format!(
                "자격 증명 파일 읽기 실패 ({}): {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn persist(&self, entries: &Entries) -> AppResult<()> {
        let parent = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent).map_err(|e| {
                    AppError::StorageError(format!("디렉터리 생성 실패 ({}): {}", parent.display(), e))
                })?;
                parent
            }
            None => Path::new("."),
        };

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| AppError::StorageError(format!("직렬화 실패: {}", e)))?;

        // 읽는 쪽은 반쯤 쓰인 파일을 보면 안 됨. 임시 파일은 기록마다 따로 만듦
        let mut tmp = NamedTempFile::new_in(parent).map_err(|e| {
            AppError::StorageError(format!("임시 파일 생성 실패 ({}): {}", parent.display(), e))
        })?;
        tmp.write_all(json.as_bytes()).map_err(|e| {
            AppError::StorageError(format!("임시 파일 쓰기 실패 ({}): {}", tmp.path().display(), e))
        })?;
        tmp.persist(&self.path).map_err(|e| {
            AppError::StorageError(format!(
                "자격 증명 파일 교체 실패 ({}): {}",
                self.path.display(),
                e.error
            ))
        })?;
        Ok(())
    }

    fn update<F>(&self, f: F) -> AppResult<()>
    where
        F: FnOnce(&mut Entries),
    {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| AppError::StorageError(format!("저장소 잠금 실패: {}", e)))?;

        let mut entries = self.load()?;
        f(&mut entries);
        self.persist(&entries)
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: CredentialKey) -> Option<String> {
        match self.load() {
            Ok(mut entries) => entries.remove(key.as_str()),
            Err(e) => {
                warn!("자격 증명 조회 실패, 토큰 없음으로 처리: {}", e);
                None
            }
        }
    }

    fn set(&self, key: CredentialKey, value: &str) -> AppResult<()> {
        self.update(|entries| {
            entries.insert(key.as_str().to_string(), value.to_string());
        })?;
        debug!("{} 저장 완료: {}", key.as_str(), self.path.display());
        Ok(())
    }

    fn clear(&self, key: CredentialKey) -> AppResult<()> {
        self.update(|entries| {
            entries.remove(key.as_str());
        })
    }
}

//! OS 키체인/키링 백엔드
//!
//! keyring 크레이트를 통해 플랫폼 자격증명 저장소에 항목을 저장합니다.
//!
//! - 페이로드는 base64로 인코딩하여 password 필드에 저장
//! - keyring의 set_password는 기존 항목을 덮어쓰므로(upsert) 이 백엔드는
//!   `DuplicateItem`을 보고하지 않습니다
//! - keyring은 접근성 속성을 노출하지 않으므로 정책 적용은 OS 기본값에
//!   위임됩니다 (정책 검증 자체는 상위 계층에서 수행)
//! - keyring은 항목 열거를 지원하지 않으므로 `enumerate_all`은
//!   `OtherFailure`를 보고하고, 상위 계층은 이를 빈 키 목록으로 수렴시킵니다

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use keyring::{Entry, Error as KeyringError};

use super::{StorageBackend, StorageItem, StorageStatus};
use crate::policy::Accessible;

/// 키링 서비스 이름 아래에 항목을 저장하는 백엔드
pub struct KeychainStorage {
    service: String,
}

impl KeychainStorage {
    /// 서비스 이름(예: `com.ite.app`)으로 백엔드 생성
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self, identifier: &str) -> Result<Entry, KeyringError> {
        Entry::new(&self.service, identifier)
    }
}

impl StorageBackend for KeychainStorage {
    fn store(&self, identifier: &str, payload: &[u8], _accessible: Accessible) -> StorageStatus {
        let entry = match self.entry(identifier) {
            Ok(entry) => entry,
            Err(e) => {
                eprintln!("[KeychainStorage] Entry error for {}: {}", identifier, e);
                return StorageStatus::OtherFailure;
            }
        };

        match entry.set_password(&BASE64.encode(payload)) {
            Ok(()) => StorageStatus::Success,
            Err(e) => {
                eprintln!("[KeychainStorage] Store error for {}: {}", identifier, e);
                StorageStatus::OtherFailure
            }
        }
    }

    fn fetch(&self, identifier: &str) -> (StorageStatus, Option<Vec<u8>>) {
        let entry = match self.entry(identifier) {
            Ok(entry) => entry,
            Err(_) => return (StorageStatus::OtherFailure, None),
        };

        match entry.get_password() {
            Ok(encoded) => match BASE64.decode(&encoded) {
                Ok(payload) => (StorageStatus::Success, Some(payload)),
                // base64가 아닌 항목은 이 백엔드가 기록한 것이 아님
                Err(_) => (StorageStatus::OtherFailure, None),
            },
            Err(KeyringError::NoEntry) => (StorageStatus::NotFound, None),
            Err(e) => {
                eprintln!("[KeychainStorage] Fetch error for {}: {}", identifier, e);
                (StorageStatus::OtherFailure, None)
            }
        }
    }

    fn delete(&self, identifier: &str) -> StorageStatus {
        let entry = match self.entry(identifier) {
            Ok(entry) => entry,
            Err(_) => return StorageStatus::OtherFailure,
        };

        match entry.delete_password() {
            Ok(()) => StorageStatus::Success,
            // 없는 항목의 삭제는 성공으로 취급
            Err(KeyringError::NoEntry) => StorageStatus::Success,
            Err(e) => {
                eprintln!("[KeychainStorage] Delete error for {}: {}", identifier, e);
                StorageStatus::OtherFailure
            }
        }
    }

    fn enumerate_all(&self) -> (StorageStatus, Vec<StorageItem>) {
        // keyring은 서비스 단위 열거를 제공하지 않음
        (StorageStatus::OtherFailure, Vec::new())
    }
}

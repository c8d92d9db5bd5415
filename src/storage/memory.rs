//! 인메모리 스토리지 백엔드
//!
//! 테스트 및 플랫폼 키체인이 없는 환경용 백엔드입니다. 문서화된 계약:
//!
//! - 동일 식별자에 대한 `store`는 `DuplicateItem`을 보고 (키체인 계약 재현)
//! - 없는 항목의 `delete`는 `Success`를 보고
//! - `enumerate_all`은 모든 항목을 결정적(BTreeMap) 순서로 반환
//!
//! 페이로드는 drop 시 zeroize 됩니다.

use std::collections::BTreeMap;
use std::sync::Mutex;

use zeroize::Zeroizing;

use super::{StorageBackend, StorageItem, StorageStatus};
use crate::policy::Accessible;

#[derive(Debug)]
struct Record {
    payload: Zeroizing<Vec<u8>>,
    accessible: Accessible,
}

/// 인메모리 백엔드
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<BTreeMap<String, Record>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 항목 수
    pub fn len(&self) -> usize {
        self.items.lock().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 식별자에 기록된 접근성 정책 조회 (진단용)
    ///
    /// 쓰기 이후의 정책은 스토어 API로는 조회할 수 없으므로,
    /// 테스트는 이 헬퍼로 기록된 정책을 확인합니다.
    pub fn accessible_of(&self, identifier: &str) -> Option<Accessible> {
        let items = self.items.lock().ok()?;
        items.get(identifier).map(|record| record.accessible)
    }
}

impl StorageBackend for MemoryStorage {
    fn store(&self, identifier: &str, payload: &[u8], accessible: Accessible) -> StorageStatus {
        let Ok(mut items) = self.items.lock() else {
            return StorageStatus::OtherFailure;
        };

        if items.contains_key(identifier) {
            return StorageStatus::DuplicateItem;
        }

        items.insert(
            identifier.to_string(),
            Record {
                payload: Zeroizing::new(payload.to_vec()),
                accessible,
            },
        );
        StorageStatus::Success
    }

    fn fetch(&self, identifier: &str) -> (StorageStatus, Option<Vec<u8>>) {
        let Ok(items) = self.items.lock() else {
            return (StorageStatus::OtherFailure, None);
        };

        match items.get(identifier) {
            Some(record) => (StorageStatus::Success, Some(record.payload.to_vec())),
            None => (StorageStatus::NotFound, None),
        }
    }

    fn delete(&self, identifier: &str) -> StorageStatus {
        let Ok(mut items) = self.items.lock() else {
            return StorageStatus::OtherFailure;
        };

        items.remove(identifier);
        StorageStatus::Success
    }

    fn enumerate_all(&self) -> (StorageStatus, Vec<StorageItem>) {
        let Ok(items) = self.items.lock() else {
            return (StorageStatus::OtherFailure, Vec::new());
        };

        let all = items
            .iter()
            .map(|(identifier, record)| StorageItem {
                identifier: identifier.clone(),
                payload: Some(record.payload.to_vec()),
            })
            .collect();
        (StorageStatus::Success, all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_and_fetch() {
        let storage = MemoryStorage::new();
        let status = storage.store("app.key", b"value", Accessible::WhenUnlocked);
        assert!(status.is_success());

        let (status, payload) = storage.fetch("app.key");
        assert!(status.is_success());
        assert_eq!(payload.as_deref(), Some(b"value".as_ref()));
        assert_eq!(storage.accessible_of("app.key"), Some(Accessible::WhenUnlocked));
    }

    #[test]
    fn test_duplicate_store_is_rejected() {
        let storage = MemoryStorage::new();
        assert!(storage.store("app.key", b"v1", Accessible::Always).is_success());
        assert_eq!(
            storage.store("app.key", b"v2", Accessible::Always),
            StorageStatus::DuplicateItem
        );

        // 기존 값은 그대로 남아야 함
        let (_, payload) = storage.fetch("app.key");
        assert_eq!(payload.as_deref(), Some(b"v1".as_ref()));
    }

    #[test]
    fn test_delete_of_absent_is_success() {
        let storage = MemoryStorage::new();
        assert!(storage.delete("app.missing").is_success());
    }

    #[test]
    fn test_fetch_missing() {
        let storage = MemoryStorage::new();
        let (status, payload) = storage.fetch("app.missing");
        assert_eq!(status, StorageStatus::NotFound);
        assert!(payload.is_none());
    }

    #[test]
    fn test_enumerate_all_is_deterministic() {
        let storage = MemoryStorage::new();
        storage.store("app.b", b"2", Accessible::WhenUnlocked);
        storage.store("app.a", b"1", Accessible::WhenUnlocked);
        storage.store("app.c", b"3", Accessible::WhenUnlocked);

        let (status, items) = storage.enumerate_all();
        assert!(status.is_success());
        let identifiers: Vec<&str> = items.iter().map(|i| i.identifier.as_str()).collect();
        assert_eq!(identifiers, vec!["app.a", "app.b", "app.c"]);
    }
}

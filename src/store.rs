//! 네임스페이스 기반 시큐어 키-값 스토어
//!
//! 논리 키에 애플리케이션 식별자를 접두사로 붙여 저장 식별자를 만들고,
//! 그 위에 단일 항목 연산과 배치 연산을 구성합니다. 호출 간 상태를
//! 유지하지 않으며(캐시 없음), 모든 가변 상태는 백엔드에 있습니다.
//!
//! 배치 연산은 트랜잭션이 아닙니다: 일부 항목이 실패해도 롤백하지 않고,
//! 끝까지 수행한 뒤 항목별 결과를 보고합니다.

use std::collections::HashMap;

use crate::error::StoreError;
use crate::policy::Accessible;
use crate::storage::{StorageBackend, StorageStatus};

/// 네임스페이스 스토어
///
/// 애플리케이션 식별자는 전역이 아니라 생성 시점에 주입되므로,
/// 한 프로세스에서 여러 식별자를 가진 스토어를 동시에 쓸 수 있습니다
/// (백엔드를 `&S` 또는 `Arc<S>`로 공유).
#[derive(Debug)]
pub struct SecureStore<S: StorageBackend> {
    app_id: String,
    backend: S,
}

impl<S: StorageBackend> SecureStore<S> {
    /// 새 스토어 생성
    ///
    /// 빈 애플리케이션 식별자는 초기화 시점에 즉시 실패합니다.
    pub fn new(app_id: impl Into<String>, backend: S) -> Result<Self, StoreError> {
        let app_id = app_id.into();
        if app_id.trim().is_empty() {
            return Err(StoreError::ApplicationIdRequired);
        }
        Ok(Self { app_id, backend })
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// 논리 키 → 저장 식별자 (`<app_id>.<key>`)
    fn namespace(&self, key: &str) -> String {
        format!("{}.{}", self.app_id, key)
    }

    /// 저장 식별자 → 논리 키 (접두사의 첫 번째 출현만 제거)
    fn denamespace(&self, identifier: &str) -> String {
        identifier.replacen(&format!("{}.", self.app_id), "", 1)
    }

    // =====================================
    // 단일 항목 연산
    // =====================================

    /// 값 저장 (upsert)
    ///
    /// 동일 식별자의 기존 항목을 무조건 먼저 삭제한 뒤 저장합니다.
    /// 백엔드의 duplicate item 실패를 피하기 위한 의도적 시퀀스이며,
    /// 삭제와 저장 사이에 키가 잠시 부재하는 창이 있습니다 (비원자적).
    pub fn put(&self, key: &str, value: &str, accessible: Accessible) -> Result<(), StoreError> {
        if key.is_empty() {
            return Err(StoreError::KeyRequired);
        }

        let identifier = self.namespace(key);
        let _ = self.backend.delete(&identifier);

        let status = self.backend.store(&identifier, value.as_bytes(), accessible);
        if status.is_success() {
            Ok(())
        } else {
            Err(StoreError::StorageFailed(status))
        }
    }

    /// 값 조회
    ///
    /// 항목이 없거나 백엔드가 실패를 보고하면 `None`. 이 계층은
    /// "not found"와 잠금 상태로 인한 접근 거부를 구분하지 않습니다.
    /// 저장된 페이로드가 UTF-8이 아니면 `InvalidValue` 에러입니다
    /// (저장 실패가 아니라 호출자에게 보이는 디코드 실패).
    pub fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if key.is_empty() {
            return Err(StoreError::KeyRequired);
        }

        match self.backend.fetch(&self.namespace(key)) {
            (StorageStatus::Success, Some(payload)) => Ok(Some(String::from_utf8(payload)?)),
            _ => Ok(None),
        }
    }

    /// 키 존재 여부 (상태 코드만 확인, 데이터는 버림)
    pub fn exists(&self, key: &str) -> bool {
        let (status, _) = self.backend.fetch(&self.namespace(key));
        status.is_success()
    }

    /// 항목 삭제. 백엔드가 성공을 보고했는지 반환.
    pub fn remove(&self, key: &str) -> bool {
        self.backend.delete(&self.namespace(key)).is_success()
    }

    // =====================================
    // 배치 연산
    // =====================================

    /// 여러 쌍 저장 (best-effort)
    ///
    /// 모든 항목이 성공했을 때만 `true`. 일부 실패 시 롤백하지 않으며,
    /// 실패 전에 성공한 항목은 저장된 채로 남습니다. 순회 순서는 계약의
    /// 일부가 아니고, 정책은 모든 항목에 공유됩니다.
    pub fn put_many(&self, pairs: &HashMap<String, String>, accessible: Accessible) -> bool {
        let mut stored = 0usize;
        for (key, value) in pairs {
            if self.put(key, value, accessible).is_ok() {
                stored += 1;
            }
        }
        stored == pairs.len()
    }

    /// 여러 키 조회
    ///
    /// 빈 키 목록은 조회를 시작하기 전에 `EmptyKeyList`로 실패합니다.
    /// 그 외에는 요청한 모든 키에 대해 결과 항목이 존재하며(없으면 `None`),
    /// 부분 실패하지 않습니다. UTF-8 복원에 실패한 값도 여기서는 `None`으로
    /// 수렴합니다.
    pub fn get_many(&self, keys: &[String]) -> Result<HashMap<String, Option<String>>, StoreError> {
        if keys.is_empty() {
            return Err(StoreError::EmptyKeyList);
        }

        let mut values = HashMap::with_capacity(keys.len());
        for key in keys {
            let value = match self.backend.fetch(&self.namespace(key)) {
                (StorageStatus::Success, Some(payload)) => String::from_utf8(payload).ok(),
                _ => None,
            };
            values.insert(key.clone(), value);
        }
        Ok(values)
    }

    /// 여러 키 삭제
    ///
    /// 삭제되지 못한 키 목록을 반환합니다 (빈 목록 = 전체 성공).
    pub fn remove_many(&self, keys: &[String]) -> Vec<String> {
        let mut unremoved = Vec::new();
        for key in keys {
            if !self.remove(key) {
                unremoved.push(key.clone());
            }
        }
        unremoved
    }

    /// 이 애플리케이션의 모든 항목 삭제
    ///
    /// 열거로 키 집합을 구한 뒤 `remove_many`와 동일하게 동작합니다.
    /// 열거가 아무것도 내놓지 않으면(빈 저장소 또는 열거 실패) 빈 목록을
    /// 반환합니다 — 두 경우는 구분되지 않습니다.
    pub fn clear_all(&self) -> Vec<String> {
        let keys = self.list_keys();
        self.remove_many(&keys)
    }

    // =====================================
    // 키 열거
    // =====================================

    /// 이 애플리케이션 네임스페이스의 모든 논리 키
    ///
    /// 열거 실패는 에러가 아니라 빈 목록으로 수렴합니다. 호출자는
    /// "키 없음"과 "열거 실패"를 구분할 수 없습니다 (문서화된 현재 동작).
    pub fn list_keys(&self) -> Vec<String> {
        let (status, items) = self.backend.enumerate_all();
        if !status.is_success() {
            return Vec::new();
        }

        let prefix = format!("{}.", self.app_id);
        items
            .into_iter()
            .filter(|item| item.identifier.starts_with(&prefix))
            .map(|item| self.denamespace(&item.identifier))
            .collect()
    }
}

//! 시큐어 스토리지 백엔드
//!
//! 실제 암호화 저장(기밀성/무결성, 잠금 상태 평가)은 플랫폼 자격증명
//! 저장소가 담당하고, 이 계층은 4개의 프리미티브만 사용합니다:
//! store / fetch / delete / enumerate_all.
//!
//! 모든 프리미티브는 상태 코드로 결과를 보고하며, `Success` 외의 상태는
//! 상위 계층에서 "연산이 일어나지 않음"으로 보수적으로 처리됩니다.

pub mod keychain;
pub mod memory;

use std::fmt;
use std::sync::Arc;

use crate::policy::Accessible;

/// 백엔드 프리미티브 호출의 상태 코드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageStatus {
    Success,
    NotFound,
    DuplicateItem,
    OtherFailure,
}

impl StorageStatus {
    pub fn is_success(self) -> bool {
        self == StorageStatus::Success
    }
}

impl fmt::Display for StorageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StorageStatus::Success => "success",
            StorageStatus::NotFound => "not found",
            StorageStatus::DuplicateItem => "duplicate item",
            StorageStatus::OtherFailure => "other failure",
        };
        f.write_str(name)
    }
}

/// 열거 결과의 한 항목
#[derive(Debug, Clone)]
pub struct StorageItem {
    /// 네임스페이스가 포함된 저장 식별자
    pub identifier: String,
    /// 항목의 페이로드 (백엔드가 반환하지 못하면 None)
    pub payload: Option<Vec<u8>>,
}

/// 플랫폼 시큐어 스토리지가 제공해야 하는 프리미티브 연산
pub trait StorageBackend {
    /// 식별자 아래에 페이로드 저장
    ///
    /// 동일 식별자가 이미 존재하면 백엔드는 `DuplicateItem`을 보고할 수
    /// 있습니다. (상위 계층의 upsert는 저장 전에 항상 삭제를 먼저 수행)
    fn store(&self, identifier: &str, payload: &[u8], accessible: Accessible) -> StorageStatus;

    /// 단일 항목 조회
    fn fetch(&self, identifier: &str) -> (StorageStatus, Option<Vec<u8>>);

    /// 단일 항목 삭제
    fn delete(&self, identifier: &str) -> StorageStatus;

    /// 저장된 모든 항목 열거
    fn enumerate_all(&self) -> (StorageStatus, Vec<StorageItem>);
}

// 하나의 백엔드를 여러 스토어(애플리케이션 식별자별)가 공유할 수 있도록
// 참조/Arc에 대해서도 구현합니다.
impl<S: StorageBackend + ?Sized> StorageBackend for &S {
    fn store(&self, identifier: &str, payload: &[u8], accessible: Accessible) -> StorageStatus {
        (**self).store(identifier, payload, accessible)
    }

    fn fetch(&self, identifier: &str) -> (StorageStatus, Option<Vec<u8>>) {
        (**self).fetch(identifier)
    }

    fn delete(&self, identifier: &str) -> StorageStatus {
        (**self).delete(identifier)
    }

    fn enumerate_all(&self) -> (StorageStatus, Vec<StorageItem>) {
        (**self).enumerate_all()
    }
}

impl<S: StorageBackend + ?Sized> StorageBackend for Arc<S> {
    fn store(&self, identifier: &str, payload: &[u8], accessible: Accessible) -> StorageStatus {
        (**self).store(identifier, payload, accessible)
    }

    fn fetch(&self, identifier: &str) -> (StorageStatus, Option<Vec<u8>>) {
        (**self).fetch(identifier)
    }

    fn delete(&self, identifier: &str) -> StorageStatus {
        (**self).delete(identifier)
    }

    fn enumerate_all(&self) -> (StorageStatus, Vec<StorageItem>) {
        (**self).enumerate_all()
    }
}

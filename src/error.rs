//! Secure Store Error Types
//!
//! 스토어 전역 에러 타입 정의
//!
//! 전파 정책:
//! - 예상 가능한 부재(키 없음)는 에러가 아니라 `None` / `false`로 보고
//! - 잘못된 요청(알 수 없는 정책, 빈 키 목록)은 즉시 에러로 반환
//! - 배치 연산은 중단 없이 끝까지 수행하고 항목별 결과를 보고

use serde::Serialize;
use thiserror::Error;

use crate::storage::StorageStatus;

/// 시큐어 스토어 에러
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Unknown accessibility policy: {0}")]
    UnknownPolicy(String),

    #[error("At least one key is required")]
    EmptyKeyList,

    #[error("Key must not be empty")]
    KeyRequired,

    #[error("Application identifier must not be empty")]
    ApplicationIdRequired,

    #[error("Secure storage rejected the operation: {0}")]
    StorageFailed(StorageStatus),

    #[error("Stored value is not valid UTF-8")]
    InvalidValue(#[from] std::string::FromUtf8Error),
}

/// 호스트 브리지(명령 계층) 응답용 직렬화 가능한 에러
#[derive(Debug, Serialize)]
pub struct CommandError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl From<StoreError> for CommandError {
    fn from(error: StoreError) -> Self {
        let code = match &error {
            StoreError::UnknownPolicy(_) => "UNKNOWN_POLICY",
            StoreError::EmptyKeyList => "EMPTY_KEY_LIST",
            StoreError::KeyRequired => "KEY_REQUIRED",
            StoreError::ApplicationIdRequired => "APP_ID_REQUIRED",
            StoreError::StorageFailed(_) => "STORAGE_FAILED",
            StoreError::InvalidValue(_) => "INVALID_VALUE",
        };

        CommandError {
            code: code.to_string(),
            message: error.to_string(),
            details: None,
        }
    }
}

/// 브리지 명령 결과 타입
pub type CommandResult<T> = Result<T, CommandError>;

//! secure-store - 네임스페이스 기반 시큐어 키-값 스토어
//!
//! 애플리케이션이 플랫폼 자격증명 저장소의 쿼리 언어를 직접 다루지 않고
//! 문자열 키로 시크릿을 저장/조회할 수 있게 하는 논리 계층입니다.
//!
//! - 키는 `<app_id>.<key>`로 네임스페이스되어 앱 간 시크릿 충돌을 방지
//! - 항목별 접근성(잠금 상태) 정책을 쓰기 시점에 부여
//! - 여러 키에 대한 배치 연산 (best-effort, 트랜잭션 아님)
//! - 실제 암호화 저장은 `StorageBackend` 구현이 담당
//!
//! ```
//! use secure_store::{Accessible, SecureStore};
//! use secure_store::storage::memory::MemoryStorage;
//!
//! let store = SecureStore::new("com.example.app", MemoryStorage::new()).unwrap();
//! store.put("api_key", "sk-test", Accessible::WhenUnlocked).unwrap();
//! assert_eq!(store.get("api_key").unwrap().as_deref(), Some("sk-test"));
//! ```

pub mod error;
pub mod policy;
pub mod storage;
pub mod store;

pub use error::{CommandError, CommandResult, StoreError};
pub use policy::{Accessible, DEFAULT_POLICY};
pub use storage::keychain::KeychainStorage;
pub use storage::memory::MemoryStorage;
pub use storage::{StorageBackend, StorageItem, StorageStatus};
pub use store::SecureStore;

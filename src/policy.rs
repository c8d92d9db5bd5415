//! 접근성 정책 (Accessibility Policy)
//!
//! 저장된 시크릿이 기기 잠금 상태에 따라 언제 읽힐 수 있는지,
//! 그리고 백업/복원 시 다른 기기로 이전되는지를 결정하는 정책입니다.
//!
//! 정책 이름 문자열은 호출자 계약의 일부로 고정되어 있으며(대소문자 구분),
//! 인식되지 않는 이름은 `UnknownPolicy` 에러로 처리합니다.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StoreError;

/// 쓰기 시 정책을 지정하지 않은 호출자를 위한 기본 정책
pub const DEFAULT_POLICY: Accessible = Accessible::WhenUnlocked;

/// 값에 쓰기 시점에 부여되는 접근성 정책
///
/// `ThisDeviceOnly` 변형은 백업/복원으로 다른 기기에 이전되지 않습니다.
/// 쓰기 이후에는 이 계층의 API로 다시 조회할 수 없습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accessible {
    #[serde(rename = "AccessibleWhenUnlocked")]
    WhenUnlocked,
    #[serde(rename = "AccessibleAfterFirstUnlock")]
    AfterFirstUnlock,
    #[serde(rename = "AccessibleAlways")]
    Always,
    #[serde(rename = "AccessibleWhenPasscodeSetThisDeviceOnly")]
    WhenPasscodeSetThisDeviceOnly,
    #[serde(rename = "AccessibleWhenUnlockedThisDeviceOnly")]
    WhenUnlockedThisDeviceOnly,
    #[serde(rename = "AccessibleAfterFirstUnlockThisDeviceOnly")]
    AfterFirstUnlockThisDeviceOnly,
    #[serde(rename = "AccessibleAlwaysThisDeviceOnly")]
    AlwaysThisDeviceOnly,
}

impl Accessible {
    /// 인식되는 모든 정책
    pub const ALL: [Accessible; 7] = [
        Accessible::WhenUnlocked,
        Accessible::AfterFirstUnlock,
        Accessible::Always,
        Accessible::WhenPasscodeSetThisDeviceOnly,
        Accessible::WhenUnlockedThisDeviceOnly,
        Accessible::AfterFirstUnlockThisDeviceOnly,
        Accessible::AlwaysThisDeviceOnly,
    ];

    /// 정책 이름 → 정책 값
    ///
    /// 인식되지 않는 이름은 설정 오류이므로 재시도 없이 즉시 에러로 반환합니다.
    pub fn resolve(name: &str) -> Result<Accessible, StoreError> {
        match name {
            "AccessibleWhenUnlocked" => Ok(Accessible::WhenUnlocked),
            "AccessibleAfterFirstUnlock" => Ok(Accessible::AfterFirstUnlock),
            "AccessibleAlways" => Ok(Accessible::Always),
            "AccessibleWhenPasscodeSetThisDeviceOnly" => {
                Ok(Accessible::WhenPasscodeSetThisDeviceOnly)
            }
            "AccessibleWhenUnlockedThisDeviceOnly" => Ok(Accessible::WhenUnlockedThisDeviceOnly),
            "AccessibleAfterFirstUnlockThisDeviceOnly" => {
                Ok(Accessible::AfterFirstUnlockThisDeviceOnly)
            }
            "AccessibleAlwaysThisDeviceOnly" => Ok(Accessible::AlwaysThisDeviceOnly),
            _ => Err(StoreError::UnknownPolicy(name.to_string())),
        }
    }

    /// 정책의 고정 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            Accessible::WhenUnlocked => "AccessibleWhenUnlocked",
            Accessible::AfterFirstUnlock => "AccessibleAfterFirstUnlock",
            Accessible::Always => "AccessibleAlways",
            Accessible::WhenPasscodeSetThisDeviceOnly => {
                "AccessibleWhenPasscodeSetThisDeviceOnly"
            }
            Accessible::WhenUnlockedThisDeviceOnly => "AccessibleWhenUnlockedThisDeviceOnly",
            Accessible::AfterFirstUnlockThisDeviceOnly => {
                "AccessibleAfterFirstUnlockThisDeviceOnly"
            }
            Accessible::AlwaysThisDeviceOnly => "AccessibleAlwaysThisDeviceOnly",
        }
    }
}

impl FromStr for Accessible {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Accessible::resolve(s)
    }
}

impl fmt::Display for Accessible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_all_known_names() {
        for policy in Accessible::ALL {
            let resolved = Accessible::resolve(policy.as_str()).unwrap();
            assert_eq!(resolved, policy);
            // 같은 입력은 항상 같은 값으로 해석되어야 함
            assert_eq!(Accessible::resolve(policy.as_str()).unwrap(), resolved);
        }
    }

    #[test]
    fn test_resolve_unknown_name_fails() {
        let err = Accessible::resolve("NotARealPolicy").unwrap_err();
        assert!(matches!(err, StoreError::UnknownPolicy(name) if name == "NotARealPolicy"));
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert!(Accessible::resolve("accessibleWhenUnlocked").is_err());
        assert!(Accessible::resolve("ACCESSIBLEALWAYS").is_err());
    }

    #[test]
    fn test_from_str() {
        let policy: Accessible = "AccessibleAfterFirstUnlock".parse().unwrap();
        assert_eq!(policy, Accessible::AfterFirstUnlock);
    }

    #[test]
    fn test_serde_names_match_contract() {
        let json = serde_json::to_string(&Accessible::WhenUnlockedThisDeviceOnly).unwrap();
        assert_eq!(json, "\"AccessibleWhenUnlockedThisDeviceOnly\"");

        let policy: Accessible = serde_json::from_str("\"AccessibleAlways\"").unwrap();
        assert_eq!(policy, Accessible::Always);
    }
}

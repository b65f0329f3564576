//! bcrypt 해시 자격 증명
//!
//! [`HashedPassword`]는 평문 비밀번호를 담을 수 없습니다.
//! 새 값은 [`HashedPassword::from_plaintext`]를 통해서만 만들어지며,
//! 저장소에서 읽어온 값은 이미 해시된 문자열입니다.

use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// 평문 비밀번호를 주어진 cost로 해싱합니다.
    pub fn from_plaintext(plain: &str, cost: u32) -> Result<Self, bcrypt::BcryptError> {
        bcrypt::hash(plain, cost).map(Self)
    }

    /// 평문 비밀번호가 이 해시와 일치하는지 확인합니다.
    ///
    /// 해시 형식이 손상된 경우에도 `false`를 반환합니다.
    pub fn verify(&self, plain: &str) -> bool {
        bcrypt::verify(plain, &self.0).unwrap_or(false)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HashedPassword(****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_not_plaintext_and_verifies() {
        let hashed = HashedPassword::from_plaintext("s3cret", 4).unwrap();

        assert_ne!(hashed.as_str(), "s3cret");
        assert!(hashed.as_str().starts_with("$2"));
        assert!(hashed.verify("s3cret"));
        assert!(!hashed.verify("wrong"));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let first = HashedPassword::from_plaintext("s3cret", 4).unwrap();
        let second = HashedPassword::from_plaintext("s3cret", 4).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_corrupted_hash_never_verifies() {
        let corrupted: HashedPassword = serde_json::from_str("\"not-a-hash\"").unwrap();

        assert!(!corrupted.verify("not-a-hash"));
    }

    #[test]
    fn test_debug_hides_hash() {
        let hashed = HashedPassword::from_plaintext("s3cret", 4).unwrap();

        assert!(!format!("{:?}", hashed).contains(hashed.as_str()));
    }
}

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

const PREFIX: &str = "session_";
const FRAGMENT_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Идентификатор браузерной сессии: `session_<9 base36>_<unix millis>`.
///
/// Scopes the server-side conversation history to one page load. It is not
/// a secret and nothing guarantees uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Fresh id from a v4 UUID and the wall clock.
    pub fn generate() -> Self {
        Self::from_parts(Uuid::new_v4().as_u128(), Utc::now().timestamp_millis())
    }

    /// Builds the id from an explicit random value and timestamp.
    ///
    /// Only the low bits of `random` are used; they are the fully random
    /// part of a v4 UUID.
    pub fn from_parts(random: u128, millis: i64) -> Self {
        let mut fragment = String::with_capacity(FRAGMENT_LEN);
        let mut rest = random;
        for _ in 0..FRAGMENT_LEN {
            fragment.push(BASE36[(rest % 36) as usize] as char);
            rest /= 36;
        }
        Self(format!("{}{}_{}", PREFIX, fragment, millis))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

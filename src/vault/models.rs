use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// A stored credential. `serial` is the row identity used by delete and reveal.
///
/// Serialized with the record shape the display widget consumes
/// (`id`, `platform`, `username`, `password`); `serial` is accepted on input.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CredentialEntry {
    #[serde(rename = "id", alias = "serial")]
    pub serial: u32,
    pub platform: String,
    pub username: String,
    #[serde(with = "crate::vault::secret_string")]
    pub password: SecretString,
}

impl CredentialEntry {
    pub fn new(serial: u32, credentials: Credentials) -> Self {
        Self {
            serial,
            platform: credentials.platform,
            username: credentials.username,
            password: credentials.password,
        }
    }

    /// Case-insensitive substring match on platform or username.
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.platform.to_lowercase().contains(needle)
            || self.username.to_lowercase().contains(needle)
    }

    pub fn password_len(&self) -> usize {
        self.password.expose_secret().encode_utf16().count()
    }
}

/// Candidate entry produced by the add form, before a serial is assigned.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub platform: String,
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(platform: impl Into<String>, username: impl Into<String>, password: &str) -> Self {
        Self {
            platform: platform.into(),
            username: username.into(),
            password: SecretString::new(password.into()),
        }
    }

    /// All three fields non-empty. No trimming: whitespace-only values pass.
    pub fn is_complete(&self) -> bool {
        !self.platform.is_empty()
            && !self.username.is_empty()
            && !self.password.expose_secret().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_password() {
        let entry = CredentialEntry::new(1, Credentials::new("GitHub", "alice", "hunter2"));
        let dbg = format!("{entry:?}");
        assert!(dbg.contains("GitHub"));
        assert!(!dbg.contains("hunter2"));
    }

    #[test]
    fn whitespace_only_fields_count_as_complete() {
        assert!(Credentials::new(" ", " ", " ").is_complete());
        assert!(!Credentials::new("a", "", "c").is_complete());
    }

    #[test]
    fn seed_record_accepts_id_or_serial() {
        let a: CredentialEntry = serde_json::from_str(
            r#"{"id": 4, "platform": "p", "username": "u", "password": "x"}"#,
        )
        .unwrap();
        let b: CredentialEntry = serde_json::from_str(
            r#"{"serial": 5, "platform": "p", "username": "u", "password": "x"}"#,
        )
        .unwrap();
        assert_eq!(a.serial, 4);
        assert_eq!(b.serial, 5);
        assert_eq!(a.password.expose_secret(), "x");
    }
}

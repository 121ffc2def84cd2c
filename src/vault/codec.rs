use crate::vault::models::CredentialEntry;
use crate::vault::ports::SeedCodec;
use crate::vault::seed::SeedError;
use secrecy::ExposeSecret;

/// JSON array of `{ id, platform, username, password }` records.
pub struct JsonSeedCodec;

impl SeedCodec for JsonSeedCodec {
    fn decode(&self, data: &[u8]) -> Result<Vec<CredentialEntry>, SeedError> {
        let entries: Vec<CredentialEntry> = serde_json::from_slice(data)?;
        for (index, e) in entries.iter().enumerate() {
            let field = if e.platform.is_empty() {
                "platform"
            } else if e.username.is_empty() {
                "username"
            } else if e.password.expose_secret().is_empty() {
                "password"
            } else {
                continue;
            };
            return Err(SeedError::EmptyField { index, field });
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_record_with_empty_username() {
        let data = br#"[{"id":1,"platform":"a","username":"","password":"p"}]"#;
        match JsonSeedCodec.decode(data) {
            Err(SeedError::EmptyField { index, field }) => {
                assert_eq!(index, 0);
                assert_eq!(field, "username");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn rejects_non_array() {
        assert!(matches!(
            JsonSeedCodec.decode(br#"{"id":1}"#),
            Err(SeedError::Malformed(_))
        ));
    }
}

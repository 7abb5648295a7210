use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::KeystoreError;

/// The on-disk credential file. Only `mnemonic` is consumed by signing; the
/// remaining fields are carried for the account's own bookkeeping.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountFile {
    pub did: String,
    pub mnemonic: String,
    pub public_key: String,
}

/// Loads the credential file from disk.
pub fn load_account(path: &Path) -> Result<AccountFile, KeystoreError> {
    let data = fs::read_to_string(path).map_err(|e| {
        KeystoreError::CredentialLoad(format!("reading {}: {e}", path.display()))
    })?;

    serde_json::from_str(&data).map_err(|e| {
        KeystoreError::CredentialLoad(format!("parsing {}: {e}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_a_valid_account_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"did":"did:example:1","mnemonic":"abandon abandon about","public_key":"0xabc"}}"#
        )
        .unwrap();

        let account = load_account(file.path()).unwrap();
        assert_eq!(account.did, "did:example:1");
        assert_eq!(account.mnemonic, "abandon abandon about");
        assert_eq!(account.public_key, "0xabc");
    }

    #[test]
    fn missing_file_is_a_credential_error() {
        let err = load_account(Path::new("/nonexistent/Account.json")).unwrap_err();
        assert!(matches!(err, KeystoreError::CredentialLoad(_)));
    }

    #[test]
    fn malformed_json_is_a_credential_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_account(file.path()).unwrap_err();
        assert!(matches!(err, KeystoreError::CredentialLoad(_)));
    }

    #[test]
    fn missing_mnemonic_field_is_a_credential_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"did":"x","public_key":"y"}}"#).unwrap();

        let err = load_account(file.path()).unwrap_err();
        assert!(matches!(err, KeystoreError::CredentialLoad(_)));
    }
}

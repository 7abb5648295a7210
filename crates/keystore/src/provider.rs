use std::path::PathBuf;

use alloy_primitives::Address;
use zeroize::Zeroize;

use crate::account;
use crate::derivation::{derive_eth_key, DerivedKey};
use crate::error::KeystoreError;
use crate::mnemonic::mnemonic_to_seed;

/// The signing account: derived keypair plus its Ethereum address.
pub struct SigningAccount {
    pub key: DerivedKey,
    pub address: Address,
}

/// Source of the signing key. The file-backed implementation below reads the
/// mnemonic on every call; an encrypted or hardware-backed store can
/// implement this trait without the signing pipeline changing.
pub trait KeyProvider: Send + Sync {
    fn signing_account(&self) -> Result<SigningAccount, KeystoreError>;
}

/// Reads the mnemonic from a JSON credential file and derives the account
/// at the fixed Ethereum path.
pub struct FileKeyProvider {
    path: PathBuf,
}

impl FileKeyProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl KeyProvider for FileKeyProvider {
    fn signing_account(&self) -> Result<SigningAccount, KeystoreError> {
        let account = account::load_account(&self.path)?;

        let mut seed = mnemonic_to_seed(&account.mnemonic, "")?;
        let key = derive_eth_key(&seed);
        seed.zeroize();
        let key = key?;

        let address = eth_tx::address::pubkey_to_address(&key.public_key_uncompressed)
            .map_err(|e| KeystoreError::DerivationFailed(e.to_string()))?;

        Ok(SigningAccount { key, address })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn credential_file(mnemonic: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"did":"did:example:1","mnemonic":"{mnemonic}","public_key":""}}"#
        )
        .unwrap();
        file
    }

    #[test]
    fn file_provider_derives_the_expected_account() {
        let file = credential_file(TEST_MNEMONIC);
        let provider = FileKeyProvider::new(file.path());

        let account = provider.signing_account().unwrap();
        assert_eq!(
            account.address.to_checksum(None).to_lowercase(),
            "0x9858effd232b4033e47d90003d41ec34ecaeda94"
        );
        assert_ne!(account.key.private_key, [0u8; 32]);
    }

    #[test]
    fn file_provider_is_pure_in_the_file_contents() {
        let file = credential_file(TEST_MNEMONIC);
        let provider = FileKeyProvider::new(file.path());

        let a = provider.signing_account().unwrap();
        let b = provider.signing_account().unwrap();
        assert_eq!(a.key.private_key, b.key.private_key);
        assert_eq!(a.address, b.address);
    }

    #[test]
    fn invalid_mnemonic_surfaces_as_such() {
        let file = credential_file("twelve bogus words that are not a bip39 phrase at all ok");
        let provider = FileKeyProvider::new(file.path());

        assert!(matches!(
            provider.signing_account(),
            Err(KeystoreError::InvalidMnemonic(_))
        ));
    }

    #[test]
    fn missing_file_surfaces_as_credential_error() {
        let provider = FileKeyProvider::new("/nonexistent/Account.json");
        assert!(matches!(
            provider.signing_account(),
            Err(KeystoreError::CredentialLoad(_))
        ));
    }
}

use alloy_primitives::B256;

use eth_tx::builder::{build_transaction, BuildParams};
use eth_tx::hashing::transaction_hash;
use eth_tx::signing::sign_transaction;
use eth_tx::types::SignedTransaction;
use keystore::provider::KeyProvider;

use crate::error::ApiError;

#[derive(Debug)]
pub struct GeneratedTx {
    pub signed: SignedTransaction,
    pub hash: B256,
}

/// The full generate pipeline: read the credential, derive the key, build
/// the transaction, sign it, and recompute its canonical hash.
///
/// Callers must hold the process-wide signer lock across this call; the
/// pipeline itself is synchronous and lock-free.
pub fn generate_transaction(
    provider: &dyn KeyProvider,
    params: BuildParams,
) -> Result<GeneratedTx, ApiError> {
    let account = provider.signing_account()?;

    let tx = build_transaction(params)?;
    let signed = sign_transaction(&tx, &account.key.private_key)?;
    let hash = transaction_hash(&signed);

    Ok(GeneratedTx { signed, hash })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Address, U256};
    use keystore::provider::FileKeyProvider;
    use std::io::Write;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn credential_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"did":"did:example:1","mnemonic":"{TEST_MNEMONIC}","public_key":""}}"#
        )
        .unwrap();
        file
    }

    fn legacy_params() -> BuildParams {
        BuildParams {
            chain_id: 1,
            nonce: 0,
            to: Some(Address::with_last_byte(1)),
            value: U256::ZERO,
            gas_limit: 21_000,
            gas_price: Some(U256::from(1_000_000_000u64)),
            ..BuildParams::default()
        }
    }

    #[test]
    fn pipeline_produces_a_replay_protected_legacy_tx() {
        let file = credential_file();
        let provider = FileKeyProvider::new(file.path());

        let generated = generate_transaction(&provider, legacy_params()).unwrap();
        let v = generated.signed.v();
        assert!(v == U256::from(37) || v == U256::from(38));
        assert_eq!(generated.hash, transaction_hash(&generated.signed));
    }

    #[test]
    fn pipeline_is_deterministic() {
        let file = credential_file();
        let provider = FileKeyProvider::new(file.path());

        let a = generate_transaction(&provider, legacy_params()).unwrap();
        let b = generate_transaction(&provider, legacy_params()).unwrap();
        assert_eq!(a.hash, b.hash);
    }

    #[test]
    fn missing_credential_file_fails_the_request() {
        let provider = FileKeyProvider::new("/nonexistent/Account.json");
        let err = generate_transaction(&provider, legacy_params()).unwrap_err();
        assert!(matches!(err, ApiError::Keystore(_)));
    }
}

use bip32::{DerivationPath, XPrv};
use k256::ecdsa::SigningKey;
use zeroize::Zeroize;

use crate::error::KeystoreError;

/// Standard Ethereum BIP-44 path. The service signs with a single fixed
/// account; there is no multi-account or rotation support.
pub const ETH_DERIVATION_PATH: &str = "m/44'/60'/0'/0/0";

/// Derived secp256k1 keypair for the signing account.
pub struct DerivedKey {
    pub private_key: [u8; 32],
    pub public_key_uncompressed: [u8; 65],
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.private_key.zeroize();
    }
}

/// Derive the Ethereum signing key from a BIP-39 seed using BIP-32 at
/// [`ETH_DERIVATION_PATH`].
pub fn derive_eth_key(seed: &[u8]) -> Result<DerivedKey, KeystoreError> {
    let path: DerivationPath = ETH_DERIVATION_PATH
        .parse()
        .map_err(|e: bip32::Error| KeystoreError::DerivationFailed(e.to_string()))?;

    let xprv = XPrv::derive_from_path(seed, &path)
        .map_err(|e| KeystoreError::DerivationFailed(e.to_string()))?;

    let private_key: [u8; 32] = xprv.to_bytes().into();
    let signing_key = SigningKey::from_bytes(&private_key.into())
        .map_err(|e| KeystoreError::DerivationFailed(e.to_string()))?;

    let public_key_uncompressed: [u8; 65] = signing_key
        .verifying_key()
        .to_encoded_point(false)
        .as_bytes()
        .try_into()
        .map_err(|_| KeystoreError::DerivationFailed("invalid uncompressed public key".into()))?;

    Ok(DerivedKey {
        private_key,
        public_key_uncompressed,
    })
}

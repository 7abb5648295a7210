use alloy_primitives::Address;
use sha3::{Digest, Keccak256};

use crate::error::EthError;

/// Derives the Ethereum address for an uncompressed secp256k1 public key
/// (65 bytes, starting with 0x04).
///
/// The address is the last 20 bytes of the Keccak-256 hash of the 64-byte
/// key (without the 0x04 prefix).
pub fn pubkey_to_address(uncompressed_pubkey: &[u8; 65]) -> Result<Address, EthError> {
    if uncompressed_pubkey[0] != 0x04 {
        return Err(EthError::InvalidPublicKey(
            "uncompressed key must start with 0x04".into(),
        ));
    }

    let hash = Keccak256::digest(&uncompressed_pubkey[1..]);
    Ok(Address::from_slice(&hash[12..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use k256::elliptic_curve::sec1::ToEncodedPoint;
    use k256::SecretKey;

    fn pubkey_for(privkey: [u8; 32]) -> [u8; 65] {
        let secret = SecretKey::from_bytes((&privkey).into()).expect("valid private key");
        let uncompressed = secret.public_key().to_encoded_point(false);

        let mut key_65 = [0u8; 65];
        key_65.copy_from_slice(uncompressed.as_bytes());
        key_65
    }

    #[test]
    fn known_key_derives_known_address() {
        // Private key 0x...01 is a standard test vector.
        let mut privkey = [0u8; 32];
        privkey[31] = 1;

        let address = pubkey_to_address(&pubkey_for(privkey)).unwrap();
        assert_eq!(
            address.to_checksum(None),
            "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf"
        );
    }

    #[test]
    fn compressed_prefix_is_rejected() {
        let mut key = [0u8; 65];
        key[0] = 0x02;
        assert!(pubkey_to_address(&key).is_err());
    }
}

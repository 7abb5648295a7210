use alloy_primitives::U256;
use k256::ecdsa::signature::hazmat::PrehashSigner;
use k256::ecdsa::{RecoveryId, Signature, SigningKey};
use sha3::{Digest, Keccak256};
use zeroize::Zeroize;

use crate::encode;
use crate::error::EthError;
use crate::types::{SignedTransaction, Transaction, TxSignature};

/// Signs a transaction with the given secp256k1 private key.
///
/// The signing process:
/// 1. Encode the shape's signing preimage (EIP-155 RLP for legacy, type byte
///    plus RLP for typed transactions).
/// 2. Keccak-256 hash the preimage.
/// 3. Sign the hash with k256, keeping the recovery id.
///
/// The recovery id is stored raw; the chain-id adjustment for legacy `v` is
/// applied when the signature is reported or encoded.
pub fn sign_transaction(
    tx: &Transaction,
    private_key: &[u8; 32],
) -> Result<SignedTransaction, EthError> {
    let payload = encode::signing_payload(tx);
    let msg_hash = Keccak256::digest(&payload);

    // Create the signing key (zeroized on drop).
    let mut key_bytes = *private_key;
    let signing_key = SigningKey::from_bytes((&key_bytes).into())
        .map_err(|e| EthError::InvalidPrivateKey(e.to_string()))?;
    key_bytes.zeroize();

    // Sign the hash using PrehashSigner (signs a raw 32-byte hash).
    let (signature, recovery_id): (Signature, RecoveryId) = signing_key
        .sign_prehash(msg_hash.as_slice())
        .map_err(|e| EthError::Signing(e.to_string()))?;

    Ok(SignedTransaction {
        tx: tx.clone(),
        signature: TxSignature {
            y_parity: recovery_id.is_y_odd(),
            r: U256::from_be_slice(signature.r().to_bytes().as_slice()),
            s: U256::from_be_slice(signature.s().to_bytes().as_slice()),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{build_transaction, BuildParams};
    use alloy_primitives::{Address, Bytes, B256};
    use k256::ecdsa::VerifyingKey;

    /// Well-known test private key (DO NOT use on mainnet).
    const TEST_PRIVKEY: [u8; 32] = {
        let mut key = [0u8; 32];
        key[31] = 1;
        key
    };

    fn legacy_params() -> BuildParams {
        BuildParams {
            chain_id: 1,
            nonce: 0,
            to: Some(Address::with_last_byte(1)),
            value: U256::ZERO,
            data: Bytes::new(),
            gas_limit: 21_000,
            gas_price: Some(U256::from(1_000_000_000u64)),
            ..BuildParams::default()
        }
    }

    fn fee_market_params() -> BuildParams {
        BuildParams {
            gas_price: None,
            max_fee_per_gas: Some(U256::from(50_000_000_000u64)),
            max_priority_fee_per_gas: Some(U256::from(1_000_000_000u64)),
            ..legacy_params()
        }
    }

    #[test]
    fn legacy_v_is_replay_protected_for_chain_1() {
        let tx = build_transaction(legacy_params()).unwrap();
        assert!(matches!(tx, Transaction::Legacy(_)));

        let signed = sign_transaction(&tx, &TEST_PRIVKEY).unwrap();
        let v = signed.v();
        // v = y_parity + 35 + 2 * chain_id for chain id 1.
        assert!(v == U256::from(37) || v == U256::from(38), "v was {v}");
    }

    #[test]
    fn typed_v_is_zero_or_one() {
        let tx = build_transaction(fee_market_params()).unwrap();
        let signed = sign_transaction(&tx, &TEST_PRIVKEY).unwrap();
        let v = signed.v();
        assert!(v == U256::ZERO || v == U256::from(1), "v was {v}");
    }

    #[test]
    fn signature_recovers_to_the_signing_key() {
        for params in [legacy_params(), fee_market_params()] {
            let tx = build_transaction(params).unwrap();
            let signed = sign_transaction(&tx, &TEST_PRIVKEY).unwrap();

            let msg_hash = Keccak256::digest(encode::signing_payload(&tx));
            let mut sig_bytes = [0u8; 64];
            sig_bytes[..32].copy_from_slice(&signed.signature.r.to_be_bytes::<32>());
            sig_bytes[32..].copy_from_slice(&signed.signature.s.to_be_bytes::<32>());
            let sig = Signature::from_slice(&sig_bytes).unwrap();
            let recid = RecoveryId::from_byte(signed.signature.y_parity as u8).unwrap();

            let recovered =
                VerifyingKey::recover_from_prehash(msg_hash.as_slice(), &sig, recid).unwrap();
            let expected = SigningKey::from_bytes((&TEST_PRIVKEY).into())
                .unwrap()
                .verifying_key()
                .to_owned();
            assert_eq!(recovered, expected);
        }
    }

    #[test]
    fn signing_is_deterministic() {
        let tx = build_transaction(legacy_params()).unwrap();
        let a = sign_transaction(&tx, &TEST_PRIVKEY).unwrap();
        let b = sign_transaction(&tx, &TEST_PRIVKEY).unwrap();
        assert_eq!(a.signature, b.signature);
    }

    #[test]
    fn different_chain_ids_produce_different_signatures() {
        let tx1 = build_transaction(legacy_params()).unwrap();
        let tx137 = build_transaction(BuildParams {
            chain_id: 137,
            ..legacy_params()
        })
        .unwrap();

        let s1 = sign_transaction(&tx1, &TEST_PRIVKEY).unwrap();
        let s137 = sign_transaction(&tx137, &TEST_PRIVKEY).unwrap();
        assert_ne!(s1.signature, s137.signature);
    }

    #[test]
    fn all_zero_key_is_rejected() {
        let tx = build_transaction(legacy_params()).unwrap();
        let bad_key = [0u8; 32]; // All zeros is not a valid private key.
        assert!(matches!(
            sign_transaction(&tx, &bad_key),
            Err(EthError::InvalidPrivateKey(_))
        ));
    }

    #[test]
    fn access_list_shape_signs_over_its_tuples() {
        let entry = crate::types::AccessListEntry {
            address: Address::with_last_byte(9),
            storage_keys: vec![B256::with_last_byte(1), B256::with_last_byte(2)],
        };
        let with_list = build_transaction(BuildParams {
            access_list: vec![entry.clone()],
            ..legacy_params()
        })
        .unwrap();
        assert!(matches!(with_list, Transaction::AccessList(_)));

        let mut reordered_entry = entry;
        reordered_entry.storage_keys.reverse();
        let reordered = build_transaction(BuildParams {
            access_list: vec![reordered_entry],
            ..legacy_params()
        })
        .unwrap();

        let a = sign_transaction(&with_list, &TEST_PRIVKEY).unwrap();
        let b = sign_transaction(&reordered, &TEST_PRIVKEY).unwrap();
        assert_ne!(a.signature, b.signature);
    }
}

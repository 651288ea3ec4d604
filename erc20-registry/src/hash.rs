//! Token pair identifier derivation.
//!
//! Pair ids are keccak256 digests over the raw contract address followed by
//! the denom bytes. The id is computed once when a pair is registered and
//! stored on the record; migrating the pair to a new contract address never
//! recomputes it.

use tiny_keccak::{Hasher, Keccak};

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Derive the stable identifier of a token pair.
///
/// # Arguments
/// * `erc20_address` - raw 20-byte contract address
/// * `denom` - native coin denomination
///
/// # Returns
/// 32-byte keccak256 hash over `address || denom`
pub fn pair_id(erc20_address: &[u8; 20], denom: &str) -> [u8; 32] {
    let mut data = Vec::with_capacity(20 + denom.len());
    data.extend_from_slice(erc20_address);
    data.extend_from_slice(denom.as_bytes());
    keccak256(&data)
}

/// Convert a 32-byte hash to a hex string (for attributes/logging)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test keccak256 produces expected output for known input
    #[test]
    fn test_keccak256_basic() {
        // keccak256("hello") = 0x1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8
        let result = keccak256(b"hello");
        assert_eq!(
            bytes32_to_hex(&result),
            "0x1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8"
        );
    }

    #[test]
    fn test_pair_id_is_deterministic() {
        let addr = [0xaa; 20];
        assert_eq!(pair_id(&addr, "uabc"), pair_id(&addr, "uabc"));
    }

    #[test]
    fn test_pair_id_depends_on_both_inputs() {
        let addr_a = [0xaa; 20];
        let addr_b = [0xbb; 20];

        assert_ne!(pair_id(&addr_a, "uabc"), pair_id(&addr_b, "uabc"));
        assert_ne!(pair_id(&addr_a, "uabc"), pair_id(&addr_a, "uxyz"));
    }

    /// The concatenation boundary matters: moving a byte between address
    /// and denom must change the digest.
    #[test]
    fn test_pair_id_no_boundary_ambiguity() {
        let mut addr = [0u8; 20];
        addr[19] = b'u';
        let shifted = [0u8; 20];
        assert_ne!(pair_id(&addr, "abc"), pair_id(&shifted, "uabc"));
    }

    #[test]
    fn test_bytes32_to_hex() {
        assert_eq!(
            bytes32_to_hex(&[0u8; 32]),
            "0x0000000000000000000000000000000000000000000000000000000000000000"
        );
    }
}

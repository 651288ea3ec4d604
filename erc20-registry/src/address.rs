//! ERC20 contract address encoding.
//!
//! Contract addresses arrive as hex strings inside governance payloads. They
//! are parsed to their raw 20-byte form for index keys and stored in the
//! 0x-prefixed lowercase form, so differently-cased submissions of the same
//! address cannot slip past the uniqueness checks.

use crate::error::ContractError;

/// Length of a raw ERC20 contract address in bytes
pub const ERC20_ADDRESS_BYTES: usize = 20;

/// Parse a hex ERC20 address (with or without 0x prefix) into raw bytes.
pub fn parse_erc20_address(addr: &str) -> Result<[u8; ERC20_ADDRESS_BYTES], ContractError> {
    let hex_part = addr
        .strip_prefix("0x")
        .or_else(|| addr.strip_prefix("0X"))
        .unwrap_or(addr);

    if hex_part.len() != ERC20_ADDRESS_BYTES * 2 {
        return Err(ContractError::InvalidAddress {
            reason: format!(
                "expected {} hex characters, got {}",
                ERC20_ADDRESS_BYTES * 2,
                hex_part.len()
            ),
        });
    }

    let decoded = hex::decode(hex_part).map_err(|_| ContractError::InvalidAddress {
        reason: "address is not valid hex".to_string(),
    })?;

    let mut raw = [0u8; ERC20_ADDRESS_BYTES];
    raw.copy_from_slice(&decoded);
    Ok(raw)
}

/// Canonical storage form of an ERC20 address: 0x-prefixed lowercase hex.
pub fn format_erc20_address(raw: &[u8; ERC20_ADDRESS_BYTES]) -> String {
    format!("0x{}", hex::encode(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_address() {
        let raw = parse_erc20_address("0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap();
        assert_eq!(raw, [0xaa; 20]);
    }

    #[test]
    fn test_parse_without_prefix() {
        let raw = parse_erc20_address("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb").unwrap();
        assert_eq!(raw, [0xbb; 20]);
    }

    #[test]
    fn test_parse_normalizes_case() {
        let upper = parse_erc20_address("0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA").unwrap();
        let lower = parse_erc20_address("0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(
            format_erc20_address(&upper),
            "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"
        );
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(parse_erc20_address("0x1234").is_err());
        assert!(parse_erc20_address("").is_err());
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        assert!(parse_erc20_address("0xzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz").is_err());
    }
}

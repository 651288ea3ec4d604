//! Read-only ERC20 contract introspection.
//!
//! Coin metadata is recovered from the contract itself: the registry encodes
//! a zero-value read call, submits it through the EVM connector bound to the
//! current state snapshot, and decodes the raw return bytes. Only the two
//! properties the registry consumes are representable; each carries its own
//! selector and expected return type, so an unsupported property cannot be
//! requested at all.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, QuerierWrapper};

use crate::error::ContractError;
use crate::hash::keccak256;

/// Gas ceiling handed to the connector for a single read call
pub const INTROSPECTION_GAS_CAP: u64 = 100_000;

/// Query interface of the EVM connector contract
#[cw_serde]
pub enum EvmQueryMsg {
    /// Evaluate a read-only contract call against the current chain state
    Call {
        /// Target contract address (0x-prefixed hex)
        to: String,
        /// ABI-encoded call data
        data: Binary,
        /// Gas ceiling for the evaluation
        gas_cap: u64,
    },
}

/// Raw result bytes of an evaluated call
#[cw_serde]
pub struct CallResponse {
    pub ret: Binary,
}

/// The ERC20 properties the registry understands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Erc20Property {
    Symbol,
    Decimals,
}

impl Erc20Property {
    /// Solidity signature of the property accessor
    pub const fn signature(&self) -> &'static str {
        match self {
            Erc20Property::Symbol => "symbol()",
            Erc20Property::Decimals => "decimals()",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Erc20Property::Symbol => "symbol",
            Erc20Property::Decimals => "decimals",
        }
    }

    /// 4-byte function selector: the leading bytes of keccak256(signature)
    pub fn selector(&self) -> [u8; 4] {
        let digest = keccak256(self.signature().as_bytes());
        [digest[0], digest[1], digest[2], digest[3]]
    }

    /// Calldata for the zero-argument accessor: the bare selector
    pub fn call_data(&self) -> Binary {
        Binary::from(self.selector().to_vec())
    }
}

/// Introspect the `symbol()` property of an ERC20 contract.
pub fn query_symbol(
    querier: &QuerierWrapper,
    connector: &Addr,
    address: &str,
) -> Result<String, ContractError> {
    let ret = eval_call(querier, connector, address, Erc20Property::Symbol)?;
    decode_string(&ret).map_err(|reason| ContractError::IntrospectionDecode {
        property: Erc20Property::Symbol.name().to_string(),
        reason,
    })
}

/// Introspect the `decimals()` property of an ERC20 contract.
pub fn query_decimals(
    querier: &QuerierWrapper,
    connector: &Addr,
    address: &str,
) -> Result<u8, ContractError> {
    let ret = eval_call(querier, connector, address, Erc20Property::Decimals)?;
    decode_uint8(&ret).map_err(|reason| ContractError::IntrospectionDecode {
        property: Erc20Property::Decimals.name().to_string(),
        reason,
    })
}

/// Submit a zero-value read call to the connector and return the raw result
/// bytes. The connector evaluates against the current state snapshot only.
fn eval_call(
    querier: &QuerierWrapper,
    connector: &Addr,
    address: &str,
    property: Erc20Property,
) -> Result<Vec<u8>, ContractError> {
    let response: CallResponse = querier
        .query_wasm_smart(
            connector,
            &EvmQueryMsg::Call {
                to: address.to_string(),
                data: property.call_data(),
                gas_cap: INTROSPECTION_GAS_CAP,
            },
        )
        .map_err(|err| ContractError::IntrospectionExecute {
            property: property.name().to_string(),
            address: address.to_string(),
            reason: err.to_string(),
        })?;

    Ok(response.ret.to_vec())
}

// ============================================================================
// ABI decoding
// ============================================================================

/// Decode an ABI-encoded dynamic `string` return value.
///
/// Layout: word 0 holds the byte offset of the string head, the head word
/// holds the length, and the bytes follow padded to a 32-byte boundary.
fn decode_string(ret: &[u8]) -> Result<String, String> {
    let offset = word_as_usize(ret, 0)?;
    let len = word_as_usize(ret, offset)?;

    let start = offset
        .checked_add(32)
        .ok_or_else(|| "string offset out of range".to_string())?;
    let end = start
        .checked_add(len)
        .ok_or_else(|| "string length out of range".to_string())?;
    let data = ret
        .get(start..end)
        .ok_or_else(|| "string data extends past return data".to_string())?;

    String::from_utf8(data.to_vec()).map_err(|_| "string data is not valid UTF-8".to_string())
}

/// Decode an ABI-encoded `uint8` return value: a single 32-byte word with
/// the value in its last byte.
fn decode_uint8(ret: &[u8]) -> Result<u8, String> {
    if ret.len() != 32 {
        return Err(format!("expected a 32-byte word, got {} bytes", ret.len()));
    }
    if ret[..31].iter().any(|b| *b != 0) {
        return Err("value exceeds uint8 range".to_string());
    }
    Ok(ret[31])
}

/// Read the 32-byte word at `at` as a usize. Words larger than u32 are
/// rejected rather than truncated.
fn word_as_usize(ret: &[u8], at: usize) -> Result<usize, String> {
    let end = at
        .checked_add(32)
        .ok_or_else(|| "word position out of range".to_string())?;
    let word = ret
        .get(at..end)
        .ok_or_else(|| format!("truncated return data at byte {}", at))?;
    if word[..28].iter().any(|b| *b != 0) {
        return Err("word value out of range".to_string());
    }
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&word[28..32]);
    Ok(u32::from_be_bytes(buf) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abi_encode_string(s: &str) -> Vec<u8> {
        let bytes = s.as_bytes();
        let padded_len = ((bytes.len() + 31) / 32) * 32;
        let mut out = vec![0u8; 64 + padded_len];
        out[31] = 32;
        out[32 + 24..64].copy_from_slice(&(bytes.len() as u64).to_be_bytes());
        out[64..64 + bytes.len()].copy_from_slice(bytes);
        out
    }

    /// Selectors must match the canonical ERC20 ABI values.
    #[test]
    fn test_selectors() {
        assert_eq!(Erc20Property::Symbol.selector(), [0x95, 0xd8, 0x9b, 0x41]);
        assert_eq!(Erc20Property::Decimals.selector(), [0x31, 0x3c, 0xe5, 0x67]);
    }

    #[test]
    fn test_call_data_is_bare_selector() {
        assert_eq!(Erc20Property::Symbol.call_data().as_slice().len(), 4);
    }

    #[test]
    fn test_decode_string() {
        assert_eq!(decode_string(&abi_encode_string("ABC")).unwrap(), "ABC");
        assert_eq!(decode_string(&abi_encode_string("")).unwrap(), "");
    }

    #[test]
    fn test_decode_string_longer_than_one_word() {
        let long = "a-symbol-that-spans-more-than-thirty-two-bytes";
        assert_eq!(decode_string(&abi_encode_string(long)).unwrap(), long);
    }

    #[test]
    fn test_decode_string_rejects_truncated_data() {
        let mut data = abi_encode_string("ABC");
        data.truncate(40);
        assert!(decode_string(&data).is_err());

        assert!(decode_string(&[]).is_err());
        assert!(decode_string(&[0u8; 16]).is_err());
    }

    #[test]
    fn test_decode_string_rejects_length_past_end() {
        let mut data = abi_encode_string("ABC");
        // claim a 200-byte string inside a 96-byte buffer
        data[32 + 24..64].copy_from_slice(&200u64.to_be_bytes());
        assert!(decode_string(&data).is_err());
    }

    #[test]
    fn test_decode_string_rejects_invalid_utf8() {
        let mut data = abi_encode_string("ABC");
        data[64] = 0xff;
        data[65] = 0xfe;
        assert!(decode_string(&data).is_err());
    }

    #[test]
    fn test_decode_uint8() {
        let mut word = [0u8; 32];
        word[31] = 18;
        assert_eq!(decode_uint8(&word).unwrap(), 18);
    }

    #[test]
    fn test_decode_uint8_rejects_overflow() {
        let mut word = [0u8; 32];
        word[30] = 1;
        assert!(decode_uint8(&word).is_err());
    }

    #[test]
    fn test_decode_uint8_rejects_wrong_length() {
        assert!(decode_uint8(&[0u8; 31]).is_err());
        assert!(decode_uint8(&[0u8; 64]).is_err());
    }
}

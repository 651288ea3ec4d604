//! Token pair registry storage.
//!
//! A token pair links one native coin denomination to one ERC20 contract
//! address. Three injective indices are kept: id to record, denom to id,
//! and raw contract address to id. Each mutation writes the affected
//! indices inside a single execute handler, so a failed handler leaves
//! none of them applied.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{StdResult, Storage};
use cw_storage_plus::Map;

use crate::address::{format_erc20_address, ERC20_ADDRESS_BYTES};
use crate::hash::pair_id;

/// A registered native coin / ERC20 contract pairing
#[cw_serde]
pub struct TokenPair {
    /// Stable identifier, derived from the contract address and denom at
    /// registration; never recomputed after an address migration
    pub id: [u8; 32],
    /// Native coin denomination; unique across pairs and immutable
    pub denom: String,
    /// ERC20 contract address, 0x-prefixed lowercase hex; unique across
    /// pairs at any time
    pub erc20_address: String,
    /// Whether relaying through this pair is permitted
    pub enabled: bool,
}

impl TokenPair {
    /// Build a new pair, deriving its stable id.
    pub fn new(denom: String, raw_address: &[u8; ERC20_ADDRESS_BYTES], enabled: bool) -> Self {
        Self {
            id: pair_id(raw_address, &denom),
            erc20_address: format_erc20_address(raw_address),
            denom,
            enabled,
        }
    }
}

/// Pair records
/// Key: pair id, Value: TokenPair
pub const TOKEN_PAIRS: Map<&[u8], TokenPair> = Map::new("token_pairs");

/// Denomination index
/// Key: denom, Value: pair id
pub const DENOM_INDEX: Map<&str, [u8; 32]> = Map::new("denom_index");

/// Contract address index
/// Key: raw 20-byte address, Value: pair id
pub const ERC20_INDEX: Map<&[u8], [u8; 32]> = Map::new("erc20_index");

/// Write a freshly registered pair together with both lookup indices.
pub fn set_token_pair(
    storage: &mut dyn Storage,
    pair: &TokenPair,
    raw_address: &[u8; ERC20_ADDRESS_BYTES],
) -> StdResult<()> {
    TOKEN_PAIRS.save(storage, pair.id.as_slice(), pair)?;
    DENOM_INDEX.save(storage, &pair.denom, &pair.id)?;
    ERC20_INDEX.save(storage, raw_address.as_slice(), &pair.id)
}

/// Rewrite an existing pair record. The lookup indices are untouched.
pub fn update_token_pair(storage: &mut dyn Storage, pair: &TokenPair) -> StdResult<()> {
    TOKEN_PAIRS.save(storage, pair.id.as_slice(), pair)
}

/// Repoint the contract address index after an address migration. The old
/// key must stop resolving in the same transition that adds the new one.
pub fn repoint_erc20_index(
    storage: &mut dyn Storage,
    old_address: &[u8; ERC20_ADDRESS_BYTES],
    new_address: &[u8; ERC20_ADDRESS_BYTES],
    id: &[u8; 32],
) -> StdResult<()> {
    ERC20_INDEX.remove(storage, old_address.as_slice());
    ERC20_INDEX.save(storage, new_address.as_slice(), id)
}

pub fn get_token_pair(storage: &dyn Storage, id: &[u8; 32]) -> StdResult<Option<TokenPair>> {
    TOKEN_PAIRS.may_load(storage, id.as_slice())
}

pub fn get_pair_id_by_denom(storage: &dyn Storage, denom: &str) -> StdResult<Option<[u8; 32]>> {
    DENOM_INDEX.may_load(storage, denom)
}

pub fn get_pair_id_by_erc20(
    storage: &dyn Storage,
    raw_address: &[u8; ERC20_ADDRESS_BYTES],
) -> StdResult<Option<[u8; 32]>> {
    ERC20_INDEX.may_load(storage, raw_address.as_slice())
}

pub fn is_denom_registered(storage: &dyn Storage, denom: &str) -> bool {
    DENOM_INDEX.has(storage, denom)
}

pub fn is_erc20_registered(
    storage: &dyn Storage,
    raw_address: &[u8; ERC20_ADDRESS_BYTES],
) -> bool {
    ERC20_INDEX.has(storage, raw_address.as_slice())
}

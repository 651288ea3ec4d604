//! Coin metadata synthesis.
//!
//! Registering a token pair derives the ledger-side coin metadata for the
//! native denomination directly from the ERC20 contract: symbol and decimals
//! are introspected, the display token is the symbol under a "t" prefix, and
//! the denom unit ladder runs from the base unit at exponent 0 up to the
//! display unit at the contract's decimals.

use cosmwasm_std::{Addr, DenomMetadata, DenomUnit, QuerierWrapper, StdResult, Storage};
use cw_storage_plus::Map;

use crate::erc20;
use crate::error::ContractError;
use crate::registry::TokenPair;

/// Prefix of the derived display denomination
const DISPLAY_DENOM_PREFIX: &str = "t";

/// Synthesized coin metadata
/// Key: base denom, Value: DenomMetadata
pub const METADATA: Map<&str, DenomMetadata> = Map::new("metadata");

/// Read coin metadata for a base denom.
pub fn get_metadata(storage: &dyn Storage, denom: &str) -> StdResult<Option<DenomMetadata>> {
    METADATA.may_load(storage, denom)
}

/// Synthesize and store coin metadata for a freshly registered pair.
///
/// Returns without touching the contract when metadata for the denom is
/// already present.
pub fn create_metadata(
    storage: &mut dyn Storage,
    querier: &QuerierWrapper,
    evm_connector: &Addr,
    pair: &TokenPair,
) -> Result<(), ContractError> {
    if METADATA.has(storage, &pair.denom) {
        // metadata already exists; exit
        // TODO: validate the stored fields against the live contract values
        return Ok(());
    }

    let symbol = erc20::query_symbol(querier, evm_connector, &pair.erc20_address)?;
    let decimals = erc20::query_decimals(querier, evm_connector, &pair.erc20_address)?;

    let display = format!("{}{}", DISPLAY_DENOM_PREFIX, symbol);

    // NOTE: denom units MUST be listed in strictly increasing exponent order
    let metadata = DenomMetadata {
        description: format!(
            "native coin representation of ERC20 token {}",
            pair.erc20_address
        ),
        denom_units: vec![
            DenomUnit {
                denom: pair.denom.clone(),
                exponent: 0,
                aliases: vec![],
            },
            DenomUnit {
                denom: display.clone(),
                exponent: u32::from(decimals),
                aliases: vec![],
            },
        ],
        base: pair.denom.clone(),
        display: display.clone(),
        name: display.clone(),
        symbol: display,
        uri: String::new(),
        uri_hash: String::new(),
    };

    validate_metadata(&metadata).map_err(|reason| ContractError::InvalidMetadata {
        address: pair.erc20_address.clone(),
        reason,
    })?;

    METADATA.save(storage, &pair.denom, &metadata)?;
    Ok(())
}

/// Structural validation of coin metadata: non-empty naming fields, the base
/// unit first at exponent 0, strictly increasing exponents, unique unit
/// denoms, and a display denom that appears in the ladder.
pub fn validate_metadata(metadata: &DenomMetadata) -> Result<(), String> {
    if metadata.base.is_empty() {
        return Err("base denom must not be empty".to_string());
    }
    if metadata.display.is_empty() {
        return Err("display denom must not be empty".to_string());
    }
    if metadata.name.is_empty() {
        return Err("name must not be empty".to_string());
    }
    if metadata.symbol.is_empty() {
        return Err("symbol must not be empty".to_string());
    }

    let first = metadata
        .denom_units
        .first()
        .ok_or_else(|| "denom units must not be empty".to_string())?;
    if first.denom != metadata.base || first.exponent != 0 {
        return Err("first denom unit must be the base denom at exponent 0".to_string());
    }

    for (i, unit) in metadata.denom_units.iter().enumerate() {
        if unit.denom.is_empty() {
            return Err("denom unit name must not be empty".to_string());
        }
        if metadata.denom_units[..i].iter().any(|u| u.denom == unit.denom) {
            return Err(format!("duplicate denom unit: {}", unit.denom));
        }
    }

    for pair in metadata.denom_units.windows(2) {
        if pair[1].exponent <= pair[0].exponent {
            return Err("denom unit exponents must be strictly increasing".to_string());
        }
    }

    if !metadata
        .denom_units
        .iter()
        .any(|u| u.denom == metadata.display)
    {
        return Err("display denom must appear in the denom units".to_string());
    }

    Ok(())
}

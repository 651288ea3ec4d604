//! Token pair lifecycle handlers.
//!
//! All three handlers are governance-gated and read the conversion switch
//! before touching any index. A handler that errors commits nothing.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::address::{format_erc20_address, parse_erc20_address};
use crate::error::ContractError;
use crate::hash::bytes32_to_hex;
use crate::metadata;
use crate::registry::{self, TokenPair};
use crate::state::{CONFIG, PARAMS};

/// Register a token pair and synthesize its coin metadata.
pub fn execute_register_token_pair(
    deps: DepsMut,
    info: MessageInfo,
    denom: String,
    erc20_address: String,
    enabled: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.gov {
        return Err(ContractError::Unauthorized);
    }
    let params = PARAMS.load(deps.storage)?;
    if !params.enable_conversion {
        return Err(ContractError::ConversionDisabled);
    }

    let raw = parse_erc20_address(&erc20_address)?;

    if registry::is_erc20_registered(deps.storage, &raw) {
        return Err(ContractError::Erc20AlreadyRegistered {
            address: format_erc20_address(&raw),
        });
    }
    if registry::is_denom_registered(deps.storage, &denom) {
        return Err(ContractError::DenomAlreadyRegistered { denom });
    }

    let pair = TokenPair::new(denom, &raw, enabled);

    // Metadata synthesis runs before any index write; its failure aborts
    // the whole registration.
    metadata::create_metadata(deps.storage, &deps.querier, &config.evm_connector, &pair)?;

    registry::set_token_pair(deps.storage, &pair, &raw)?;

    Ok(Response::new()
        .add_attribute("method", "register_token_pair")
        .add_attribute("pair_id", bytes32_to_hex(&pair.id))
        .add_attribute("denom", pair.denom)
        .add_attribute("erc20_address", pair.erc20_address)
        .add_attribute("enabled", pair.enabled.to_string()))
}

/// Enable relaying for a registered token pair.
pub fn execute_enable_relay(
    deps: DepsMut,
    info: MessageInfo,
    denom: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.gov {
        return Err(ContractError::Unauthorized);
    }
    let params = PARAMS.load(deps.storage)?;
    if !params.enable_conversion {
        return Err(ContractError::ConversionDisabled);
    }

    let id = registry::get_pair_id_by_denom(deps.storage, &denom)?.ok_or_else(|| {
        ContractError::PairNotRegistered {
            token: denom.clone(),
        }
    })?;
    // The denom index and the record must never diverge; check both anyway.
    let mut pair = registry::get_token_pair(deps.storage, &id)?.ok_or_else(|| {
        ContractError::PairNotRegistered {
            token: denom.clone(),
        }
    })?;

    pair.enabled = true;
    registry::update_token_pair(deps.storage, &pair)?;

    Ok(Response::new()
        .add_attribute("method", "enable_relay")
        .add_attribute("pair_id", bytes32_to_hex(&pair.id))
        .add_attribute("denom", pair.denom))
}

/// Migrate a token pair to a redeployed ERC20 contract address.
pub fn execute_update_token_pair_erc20(
    deps: DepsMut,
    info: MessageInfo,
    erc20_address: String,
    new_erc20_address: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.gov {
        return Err(ContractError::Unauthorized);
    }
    let params = PARAMS.load(deps.storage)?;
    if !params.enable_conversion {
        return Err(ContractError::ConversionDisabled);
    }

    let old_raw = parse_erc20_address(&erc20_address)?;
    let new_raw = parse_erc20_address(&new_erc20_address)?;

    let id = registry::get_pair_id_by_erc20(deps.storage, &old_raw)?.ok_or_else(|| {
        ContractError::PairNotRegistered {
            token: format_erc20_address(&old_raw),
        }
    })?;
    let mut pair = registry::get_token_pair(deps.storage, &id)?.ok_or_else(|| {
        ContractError::PairNotRegistered {
            token: format_erc20_address(&old_raw),
        }
    })?;

    if let Some(existing) = registry::get_pair_id_by_erc20(deps.storage, &new_raw)? {
        if existing != id {
            return Err(ContractError::AddressConflict {
                address: format_erc20_address(&new_raw),
            });
        }
    }

    pair.erc20_address = format_erc20_address(&new_raw);
    registry::update_token_pair(deps.storage, &pair)?;
    // The old address key must stop resolving in the same transition that
    // adds the new one.
    registry::repoint_erc20_index(deps.storage, &old_raw, &new_raw, &pair.id)?;

    Ok(Response::new()
        .add_attribute("method", "update_token_pair_erc20")
        .add_attribute("pair_id", bytes32_to_hex(&pair.id))
        .add_attribute("erc20_address", format_erc20_address(&old_raw))
        .add_attribute("new_erc20_address", pair.erc20_address))
}

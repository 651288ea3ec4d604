//! Token Pair Registry - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_enable_relay, execute_register_token_pair, execute_set_params, execute_update_config,
    execute_update_token_pair_erc20,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_coin_metadata, query_config, query_params, query_token_pair, query_token_pair_by_id,
    query_token_pair_id, query_token_pairs,
};
use crate::state::{Config, Params, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, PARAMS};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        gov: deps.api.addr_validate(&msg.gov)?,
        evm_connector: deps.api.addr_validate(&msg.evm_connector)?,
    };
    CONFIG.save(deps.storage, &config)?;

    PARAMS.save(
        deps.storage,
        &Params {
            enable_conversion: msg.enable_conversion,
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("gov", config.gov)
        .add_attribute("evm_connector", config.evm_connector)
        .add_attribute("enable_conversion", msg.enable_conversion.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::RegisterTokenPair {
            denom,
            erc20_address,
            enabled,
        } => execute_register_token_pair(deps, info, denom, erc20_address, enabled),
        ExecuteMsg::EnableRelay { denom } => execute_enable_relay(deps, info, denom),
        ExecuteMsg::UpdateTokenPairErc20 {
            erc20_address,
            new_erc20_address,
        } => execute_update_token_pair_erc20(deps, info, erc20_address, new_erc20_address),
        ExecuteMsg::SetParams { enable_conversion } => {
            execute_set_params(deps, info, enable_conversion)
        }
        ExecuteMsg::UpdateConfig { gov, evm_connector } => {
            execute_update_config(deps, info, gov, evm_connector)
        }
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Params {} => to_json_binary(&query_params(deps)?),
        QueryMsg::TokenPair { token } => to_json_binary(&query_token_pair(deps, token)?),
        QueryMsg::TokenPairById { id } => to_json_binary(&query_token_pair_by_id(deps, id)?),
        QueryMsg::TokenPairId { token } => to_json_binary(&query_token_pair_id(deps, token)?),
        QueryMsg::TokenPairs { start_after, limit } => {
            to_json_binary(&query_token_pairs(deps, start_after, limit)?)
        }
        QueryMsg::CoinMetadata { denom } => to_json_binary(&query_coin_metadata(deps, denom)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}

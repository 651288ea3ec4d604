//! Query handlers for the token pair registry.

use cosmwasm_std::{Binary, DenomMetadata, Deps, Order, StdError, StdResult};
use cw_storage_plus::Bound;

use crate::address::parse_erc20_address;
use crate::metadata;
use crate::msg::{
    ConfigResponse, ParamsResponse, TokenPairIdResponse, TokenPairResponse, TokenPairsResponse,
};
use crate::registry::{self, TokenPair, TOKEN_PAIRS};
use crate::state::{CONFIG, PARAMS};

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        gov: config.gov,
        evm_connector: config.evm_connector,
    })
}

/// Query governance parameters.
pub fn query_params(deps: Deps) -> StdResult<ParamsResponse> {
    let params = PARAMS.load(deps.storage)?;
    Ok(ParamsResponse {
        enable_conversion: params.enable_conversion,
    })
}

/// Query a token pair by denomination or by 0x-prefixed contract address.
pub fn query_token_pair(deps: Deps, token: String) -> StdResult<TokenPairResponse> {
    Ok(pair_response(load_pair(deps, &token)?))
}

/// Query a token pair by its stable identifier.
pub fn query_token_pair_by_id(deps: Deps, id: Binary) -> StdResult<TokenPairResponse> {
    let id: [u8; 32] = id
        .as_slice()
        .try_into()
        .map_err(|_| StdError::generic_err("pair id must be 32 bytes"))?;
    registry::get_token_pair(deps.storage, &id)?
        .map(pair_response)
        .ok_or_else(|| StdError::not_found("token pair"))
}

/// Query the stable identifier of a pair.
pub fn query_token_pair_id(deps: Deps, token: String) -> StdResult<TokenPairIdResponse> {
    let pair = load_pair(deps, &token)?;
    Ok(TokenPairIdResponse {
        id: Binary::from(pair.id.to_vec()),
    })
}

/// Query paginated list of registered pairs.
pub fn query_token_pairs(
    deps: Deps,
    start_after: Option<Binary>,
    limit: Option<u32>,
) -> StdResult<TokenPairsResponse> {
    let limit = limit.unwrap_or(10).min(30) as usize;
    let start: Option<Bound<&[u8]>> = start_after
        .as_ref()
        .map(|id| Bound::exclusive(id.as_slice()));

    let pairs: Vec<TokenPairResponse> = TOKEN_PAIRS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (_, pair) = item?;
            Ok(pair_response(pair))
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(TokenPairsResponse { pairs })
}

/// Query synthesized coin metadata for a base denom.
pub fn query_coin_metadata(deps: Deps, denom: String) -> StdResult<Option<DenomMetadata>> {
    metadata::get_metadata(deps.storage, &denom)
}

// ============================================================================
// Internal helpers
// ============================================================================

/// Resolve `token` through the matching index: a 0x-prefixed value goes
/// through the contract address index, anything else through the denom
/// index.
fn load_pair(deps: Deps, token: &str) -> StdResult<TokenPair> {
    let id = if token.starts_with("0x") || token.starts_with("0X") {
        let raw = parse_erc20_address(token)
            .map_err(|err| StdError::generic_err(err.to_string()))?;
        registry::get_pair_id_by_erc20(deps.storage, &raw)?
    } else {
        registry::get_pair_id_by_denom(deps.storage, token)?
    };

    let id = id.ok_or_else(|| StdError::not_found(format!("token pair for {}", token)))?;
    registry::get_token_pair(deps.storage, &id)?
        .ok_or_else(|| StdError::not_found(format!("token pair for {}", token)))
}

fn pair_response(pair: TokenPair) -> TokenPairResponse {
    TokenPairResponse {
        id: Binary::from(pair.id.to_vec()),
        denom: pair.denom,
        erc20_address: pair.erc20_address,
        enabled: pair.enabled,
    }
}

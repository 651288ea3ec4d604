//! Governance parameter and configuration handlers.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{Params, CONFIG, PARAMS};

/// Replace the governance-controlled parameters.
pub fn execute_set_params(
    deps: DepsMut,
    info: MessageInfo,
    enable_conversion: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.gov {
        return Err(ContractError::Unauthorized);
    }

    PARAMS.save(deps.storage, &Params { enable_conversion })?;

    Ok(Response::new()
        .add_attribute("method", "set_params")
        .add_attribute("enable_conversion", enable_conversion.to_string()))
}

/// Update contract configuration.
pub fn execute_update_config(
    deps: DepsMut,
    info: MessageInfo,
    gov: Option<String>,
    evm_connector: Option<String>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.gov {
        return Err(ContractError::Unauthorized);
    }

    if let Some(gov) = gov {
        config.gov = deps.api.addr_validate(&gov)?;
    }
    if let Some(connector) = evm_connector {
        config.evm_connector = deps.api.addr_validate(&connector)?;
    }

    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "update_config")
        .add_attribute("gov", config.gov)
        .add_attribute("evm_connector", config.evm_connector))
}

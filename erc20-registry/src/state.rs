//! Contract configuration and governance-controlled parameters.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Governance address; the only sender accepted for mutating operations
    pub gov: Addr,
    /// EVM connector contract used to evaluate read-only ERC20 calls
    pub evm_connector: Addr,
}

/// Governance-controlled parameters, read at the start of every mutating
/// operation
#[cw_serde]
pub struct Params {
    /// Master switch for registering and mutating token pairs
    pub enable_conversion: bool,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:erc20-registry";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = "0.1.0";

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Governance parameters
pub const PARAMS: Item<Params> = Item::new("params");

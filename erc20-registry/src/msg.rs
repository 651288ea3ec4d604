//! Message types for the token pair registry.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, DenomMetadata};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Governance address; the only sender accepted for mutating operations
    pub gov: String,
    /// EVM connector contract used to evaluate read-only ERC20 calls
    pub evm_connector: String,
    /// Initial value of the conversion switch
    pub enable_conversion: bool,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Register a token pair linking a native coin denomination to an ERC20
    /// contract, synthesizing the coin metadata from contract introspection.
    /// Fails if either the denomination or the contract address is already
    /// registered.
    ///
    /// Authorization: governance only
    RegisterTokenPair {
        /// Native coin denomination
        denom: String,
        /// ERC20 contract address (0x-prefixed hex)
        erc20_address: String,
        /// Whether relaying starts out permitted for this pair
        enabled: bool,
    },

    /// Enable relaying for a registered token pair. Enabling an
    /// already-enabled pair succeeds without effect.
    ///
    /// Authorization: governance only
    EnableRelay {
        /// Denomination of the pair to enable
        denom: String,
    },

    /// Migrate a registered token pair to a redeployed ERC20 contract. The
    /// pair id and denomination are unchanged; both the record and the
    /// address index move to the new address.
    ///
    /// Authorization: governance only
    UpdateTokenPairErc20 {
        /// Currently registered contract address
        erc20_address: String,
        /// Replacement contract address
        new_erc20_address: String,
    },

    /// Replace the governance-controlled parameters.
    ///
    /// Authorization: governance only
    SetParams {
        /// Master switch for registering and mutating token pairs
        enable_conversion: bool,
    },

    /// Update contract configuration.
    ///
    /// Authorization: governance only
    UpdateConfig {
        /// New governance address
        gov: Option<String>,
        /// New EVM connector contract
        evm_connector: Option<String>,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Returns governance parameters
    #[returns(ParamsResponse)]
    Params {},

    /// Returns a token pair, looked up by denomination or by 0x-prefixed
    /// contract address
    #[returns(TokenPairResponse)]
    TokenPair { token: String },

    /// Returns a token pair by its stable identifier
    #[returns(TokenPairResponse)]
    TokenPairById { id: Binary },

    /// Returns the stable identifier of a pair, looked up by denomination
    /// or by 0x-prefixed contract address
    #[returns(TokenPairIdResponse)]
    TokenPairId { token: String },

    /// Returns all registered pairs with cursor-based pagination
    #[returns(TokenPairsResponse)]
    TokenPairs {
        /// Cursor: the pair id of the last item from the previous page
        start_after: Option<Binary>,
        /// Max entries to return (default 10, max 30)
        limit: Option<u32>,
    },

    /// Returns the synthesized coin metadata for a base denom, if any
    #[returns(Option<DenomMetadata>)]
    CoinMetadata { denom: String },
}

// ============================================================================
// Response Types
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub gov: Addr,
    pub evm_connector: Addr,
}

#[cw_serde]
pub struct ParamsResponse {
    pub enable_conversion: bool,
}

#[cw_serde]
pub struct TokenPairResponse {
    /// Stable pair identifier (32 bytes)
    pub id: Binary,
    pub denom: String,
    pub erc20_address: String,
    pub enabled: bool,
}

#[cw_serde]
pub struct TokenPairIdResponse {
    /// Stable pair identifier (32 bytes)
    pub id: Binary,
}

#[cw_serde]
pub struct TokenPairsResponse {
    pub pairs: Vec<TokenPairResponse>,
}

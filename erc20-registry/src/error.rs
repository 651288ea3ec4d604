//! Error types for the token pair registry.
//!
//! Every failure is deterministic and data-dependent; a failed handler
//! leaves no partial state behind.

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only the governance address can perform this action")]
    Unauthorized,

    #[error("token pair conversion is currently disabled by governance")]
    ConversionDisabled,

    #[error("token ERC20 contract already registered: {address}")]
    Erc20AlreadyRegistered { address: String },

    #[error("coin denomination already registered: {denom}")]
    DenomAlreadyRegistered { denom: String },

    #[error("token pair not registered: {token}")]
    PairNotRegistered { token: String },

    #[error("ERC20 contract {address} is already bound to another token pair")]
    AddressConflict { address: String },

    #[error("invalid ERC20 address: {reason}")]
    InvalidAddress { reason: String },

    #[error("failed to evaluate {property} call on ERC20 contract {address}: {reason}")]
    IntrospectionExecute {
        property: String,
        address: String,
        reason: String,
    },

    #[error("failed to decode {property} result from ERC20 contract: {reason}")]
    IntrospectionDecode { property: String, reason: String },

    #[error("invalid coin metadata for ERC20 contract {address}: {reason}")]
    InvalidMetadata { address: String, reason: String },
}

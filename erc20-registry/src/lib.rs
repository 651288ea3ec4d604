//! ERC20 Token Pair Registry
//!
//! This contract keeps a consensus-replicated registry mapping native coin
//! denominations to deployed ERC20 contract representations, and keeps the
//! two fungible by deriving the coin metadata from contract introspection.
//!
//! # Registration Flow
//! 1. Governance approves a proposal carrying a (denom, contract) pair
//! 2. The registry checks the conversion switch and both uniqueness indices
//! 3. Symbol and decimals are introspected from the contract through the
//!    EVM connector and synthesized into coin metadata
//! 4. The pair record and both lookup indices are written together
//!
//! # Lifecycle
//! - Pairs are never deleted; relaying is controlled by the enabled flag
//! - The contract address can be migrated; the pair id never changes
//! - Every mutation is gated on the governance-controlled conversion switch

pub mod address;
pub mod contract;
pub mod erc20;
pub mod error;
mod execute;
pub mod hash;
pub mod metadata;
pub mod msg;
mod query;
pub mod registry;
pub mod state;

pub use crate::error::ContractError;
pub use crate::hash::{keccak256, pair_id};
pub use crate::registry::TokenPair;

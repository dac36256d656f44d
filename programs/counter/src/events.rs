//! Events module for the Counter program
//!
//! Increments emit no event; only initialization is observable here.

use anchor_lang::prelude::*;

/// Event emitted when a counter is initialized
///
/// # Fields
/// * `counter` - The public key of the newly initialized counter account
/// * `owner` - The owner recorded on the counter
/// * `deployer` - The namespace the counter address was derived in
/// * `initial_value` - The starting counter value
/// * `timestamp` - Unix timestamp when the counter was initialized
#[event]
pub struct CounterInitialized {
    /// The newly initialized counter account
    pub counter: Pubkey,
    /// The owner of the counter
    pub owner: Pubkey,
    /// The deployer namespace (the factory for clones)
    pub deployer: Pubkey,
    /// The initial value of the counter
    pub initial_value: u64,
    /// Timestamp when the counter was initialized
    pub timestamp: i64,
}

//! # Events Module
//!
//! Events emitted by the counter factory. `CounterCreated` is what log-based
//! clients scan for to learn a new clone's address.

use anchor_lang::prelude::*;

/// Event emitted when the factory is initialized
#[event]
pub struct FactoryInitialized {
    /// The public key of the factory account
    pub factory: Pubkey,
    /// The implementation program the factory clones
    pub implementation: Pubkey,
    /// The account that constructed the factory
    pub deployer: Pubkey,
    /// Timestamp when initialized
    pub timestamp: i64,
}

/// Event emitted when a clone is created and recorded
#[event]
#[derive(Debug, PartialEq)]
pub struct CounterCreated {
    /// The new clone's address
    pub counter: Pubkey,
    /// The factory that created it
    pub factory: Pubkey,
    /// The owner recorded on the clone (the caller)
    pub owner: Pubkey,
    /// The implementation program the clone runs
    pub implementation: Pubkey,
    /// The clone's starting value
    pub initial_value: u64,
    /// Position of the clone in the factory registry
    pub index: u64,
    /// Timestamp when created
    pub timestamp: i64,
}

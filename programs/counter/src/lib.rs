//! # Counter Program
//!
//! The implementation program behind every counter clone. The program itself
//! holds no state: each counter lives in its own `CounterAccount`, so any number
//! of clones can share this code while keeping fully independent storage.
//!
//! ## Features
//! - One-time initializer with a re-initialization guard
//! - Permissionless increment
//! - Read-only views returned as instruction return data

// Suppress warnings from Anchor's internal behavior
// These are framework-level warnings, not from our code
#![allow(deprecated)]
#![allow(ambiguous_glob_reexports)]

use anchor_lang::prelude::*;

// Import our modules
pub mod instructions;
pub mod state;
pub mod errors;
pub mod events;

// Re-export for easier access
pub use instructions::*;
pub use state::*;
pub use errors::*;
pub use events::*;

// Program ID - This should be updated when you deploy
declare_id!("8co6UuzXCQ559YV8jPAtYfubnoorZYborqzd5AEa43wL");

/// Main program module containing all instruction handlers
#[program]
pub mod counter {
    use super::*;

    /// Initialize a counter account
    ///
    /// Creates the counter at the address derived from `deployer` and `nonce`
    /// and sets its owner and starting value. Runs once per account: the factory
    /// calls it through CPI for every clone, and a deployer may call it directly
    /// for a standalone counter.
    ///
    /// # Arguments
    /// * `ctx` - The instruction context containing accounts
    /// * `nonce` - Derivation nonce within the deployer's namespace
    /// * `initial_value` - Starting counter value
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    ///
    /// # Events
    /// * `CounterInitialized` - Emitted when the counter is initialized
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If the counter was initialized before
    pub fn initialize(ctx: Context<Initialize>, nonce: u64, initial_value: u64) -> Result<()> {
        instructions::initialize(ctx, nonce, initial_value)
    }

    /// Increment the counter value by 1
    ///
    /// # Arguments
    /// * `ctx` - The instruction context containing accounts
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    ///
    /// # Errors
    /// * `NotInitialized` - If the counter has not been initialized
    /// * `ArithmeticError` - If the counter would overflow
    pub fn increment(ctx: Context<Increment>) -> Result<()> {
        instructions::increment(ctx)
    }

    /// Get the current counter value
    ///
    /// # Returns
    /// * `Result<u64>` - The current counter value
    pub fn get_count(ctx: Context<ReadCounter>) -> Result<u64> {
        instructions::get_count(ctx)
    }

    /// Get the owner recorded at initialization
    ///
    /// # Returns
    /// * `Result<Pubkey>` - The counter owner
    pub fn get_owner(ctx: Context<ReadCounter>) -> Result<Pubkey> {
        instructions::get_owner(ctx)
    }
}

//! # Counter Factory Program
//!
//! Creates counter clones that all run the code of one implementation program
//! while each keeps its own `CounterAccount` storage, and keeps an ordered
//! registry of every clone it created.
//!
//! ## Features
//! - Factory construction bound to a single implementation program
//! - Clone creation with initialization through CPI in the same instruction
//! - Append-only clone registry in creation order
//! - `CounterCreated` events plus a direct return value for address discovery
//!
//! Host builds also get the [`client`] module for deriving addresses and
//! recovering created clones from transaction logs.

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
#[cfg(not(target_os = "solana"))]
pub mod client;

// Re-export for easier access
pub use instructions::*;
pub use state::*;
pub use errors::*;
pub use events::*;

// Program ID - This should be updated when you deploy
declare_id!("3Tovdpp6maZLQYqUmYN7uiCUJkLz6XyXykm9Db5dps5u");

/// Main program module containing all instruction handlers
#[program]
pub mod counter_factory {
    use super::*;

    /// Initialize a new counter factory
    ///
    /// Binds the factory to an already deployed implementation program. The
    /// binding cannot be changed afterwards.
    ///
    /// # Arguments
    /// * `ctx` - The instruction context containing accounts
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    ///
    /// # Events
    /// * `FactoryInitialized` - Emitted when the factory is successfully initialized
    ///
    /// # Errors
    /// * `InvalidImplementation` - If the implementation is the default key or not executable
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    /// Create a new counter clone
    ///
    /// Derives the next clone address, initializes it through the
    /// implementation program with the caller as owner, and records it.
    ///
    /// # Arguments
    /// * `ctx` - The instruction context containing accounts
    /// * `initial_value` - Starting value of the clone's counter
    ///
    /// # Returns
    /// * `Result<Pubkey>` - The address of the new clone
    ///
    /// # Events
    /// * `CounterCreated` - Emitted when the clone is created and recorded
    ///
    /// # Errors
    /// * `ImplementationMismatch` - If the implementation program is not the recorded one
    /// * `CloneAddressMismatch` - If the counter account is not the next derived clone address
    /// * `RegistryFull` - If the registry account cannot grow any further
    pub fn create_clone(ctx: Context<CreateClone>, initial_value: u64) -> Result<Pubkey> {
        instructions::create_clone(ctx, initial_value)
    }

    /// Get a page of the clone registry in creation order
    ///
    /// # Arguments
    /// * `ctx` - The instruction context containing accounts
    /// * `offset` - Index of the first clone to return
    ///
    /// # Returns
    /// * `Result<Vec<Pubkey>>` - At most `MAX_COUNTERS_PER_PAGE` clone addresses
    pub fn get_counters(ctx: Context<ReadFactory>, offset: u64) -> Result<Vec<Pubkey>> {
        instructions::get_counters(ctx, offset)
    }

    /// Get the implementation program this factory clones
    ///
    /// # Returns
    /// * `Result<Pubkey>` - The implementation program address
    pub fn get_implementation(ctx: Context<ReadFactory>) -> Result<Pubkey> {
        instructions::get_implementation(ctx)
    }
}

//! # Instructions Module
//!
//! This module contains all instruction handlers and account validation contexts
//! for the counter program.

use anchor_lang::prelude::*;
use crate::state::*;
use crate::errors::CounterError;

// Import all instruction modules
pub mod initialize;
pub mod increment;
pub mod read;

// Re-export instruction functions
pub use initialize::*;
pub use increment::*;
pub use read::*;

/// Account validation context for initializing a counter
///
/// The counter address is derived from the deployer and nonce, so the same
/// deployer can own any number of counters. `init_if_needed` lets the handler
/// report `AlreadyInitialized` on a second call instead of a system program
/// failure.
#[derive(Accounts)]
#[instruction(nonce: u64)]
pub struct Initialize<'info> {
    /// The counter account to be created
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + CounterAccount::INIT_SPACE,
        seeds = [COUNTER_SEED, deployer.key().as_ref(), &nonce.to_le_bytes()],
        bump
    )]
    pub counter: Account<'info, CounterAccount>,

    /// The namespace the counter is derived in (the factory PDA for clones)
    pub deployer: Signer<'info>,

    /// The account recorded as counter owner
    /// CHECK: Only its key is stored
    pub owner: UncheckedAccount<'info>,

    /// Pays rent for the counter account
    #[account(mut)]
    pub payer: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/// Account validation context for incrementing a counter
#[derive(Accounts)]
pub struct Increment<'info> {
    /// The counter to increment
    #[account(
        mut,
        seeds = [COUNTER_SEED, counter.deployer.as_ref(), &counter.nonce.to_le_bytes()],
        bump = counter.bump,
        constraint = counter.initialized @ CounterError::NotInitialized
    )]
    pub counter: Account<'info, CounterAccount>,

    /// Whoever submits the increment
    pub caller: Signer<'info>,
}

/// Account validation context for the read-only views
#[derive(Accounts)]
pub struct ReadCounter<'info> {
    /// The counter being read
    #[account(constraint = counter.initialized @ CounterError::NotInitialized)]
    pub counter: Account<'info, CounterAccount>,
}

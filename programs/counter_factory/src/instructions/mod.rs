//! # Instructions Module
//!
//! This module contains all instruction handlers and account validation contexts
//! for the counter factory program.

use anchor_lang::prelude::*;
use crate::state::*;
use crate::errors::FactoryError;

// Import all instruction modules
pub mod initialize;
pub mod create_clone;
pub mod read;

// Re-export instruction functions
pub use initialize::*;
pub use create_clone::*;
pub use read::*;

/// Account validation context for initializing a new factory
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The factory account to be created
    #[account(
        init,
        payer = deployer,
        space = CounterFactory::space_for(0),
        seeds = [FACTORY_SEED, deployer.key().as_ref(), implementation.key().as_ref()],
        bump
    )]
    pub factory: Account<'info, CounterFactory>,

    /// The implementation program clones will run
    ///
    /// Only executability can be checked here. `create_clone` calls the
    /// counter program's `initialize` on it, so binding any other program
    /// leaves a factory whose every `create_clone` fails without side effects.
    /// CHECK: Must be executable; the key is recorded, the data is never read
    #[account(constraint = implementation.executable @ FactoryError::InvalidImplementation)]
    pub implementation: UncheckedAccount<'info>,

    /// The account constructing the factory (pays rent)
    #[account(mut)]
    pub deployer: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/// Account validation context for creating a clone
///
/// The factory account grows by one registry entry per clone; the caller pays
/// for the extra space as well as the clone's own rent.
#[derive(Accounts)]
pub struct CreateClone<'info> {
    /// The factory recording the clone
    #[account(
        mut,
        seeds = [FACTORY_SEED, factory.deployer.as_ref(), factory.implementation.as_ref()],
        bump = factory.bump,
        constraint = factory.clone_count < CounterFactory::max_clones() as u64 @ FactoryError::RegistryFull,
        realloc = CounterFactory::space_for(factory.clone_count as usize + 1),
        realloc::payer = creator,
        realloc::zero = false,
    )]
    pub factory: Account<'info, CounterFactory>,

    /// The clone account, created by the implementation program
    /// CHECK: Compared against the next derived clone address in the handler
    #[account(mut)]
    pub counter: UncheckedAccount<'info>,

    /// The implementation program recorded on the factory
    /// CHECK: Pinned to `factory.implementation`
    #[account(
        address = factory.implementation @ FactoryError::ImplementationMismatch,
        constraint = implementation_program.executable @ FactoryError::ImplementationMismatch
    )]
    pub implementation_program: UncheckedAccount<'info>,

    /// The caller; becomes the clone owner and pays rent
    #[account(mut)]
    pub creator: Signer<'info>,

    /// System program for account creation and reallocation
    pub system_program: Program<'info, System>,
}

/// Account validation context for the read-only views
#[derive(Accounts)]
pub struct ReadFactory<'info> {
    /// The factory being read
    #[account(
        seeds = [FACTORY_SEED, factory.deployer.as_ref(), factory.implementation.as_ref()],
        bump = factory.bump
    )]
    pub factory: Account<'info, CounterFactory>,
}

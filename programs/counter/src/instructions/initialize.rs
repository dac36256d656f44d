//! Initialize instruction for the Counter program

use anchor_lang::prelude::*;
use crate::instructions::Initialize;
use crate::events::CounterInitialized;

/// Initialize a counter account
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
/// * `CounterInitialized` - Emitted when counter is successfully initialized
pub fn initialize(ctx: Context<Initialize>, nonce: u64, initial_value: u64) -> Result<()> {
    let counter = &mut ctx.accounts.counter;
    let clock = Clock::get()?;

    counter.initialize(
        ctx.accounts.owner.key(),
        ctx.accounts.deployer.key(),
        nonce,
        initial_value,
        ctx.bumps.counter,
        &clock,
    )?;

    emit!(CounterInitialized {
        counter: counter.key(),
        owner: counter.owner,
        deployer: counter.deployer,
        initial_value,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Counter {} initialized with value {} for owner {}",
        counter.key(),
        initial_value,
        counter.owner
    );
    Ok(())
}

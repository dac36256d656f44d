//! Increment instruction for the Counter program

use anchor_lang::prelude::*;
use crate::instructions::Increment;

/// Increment the counter value by 1
///
/// Anyone may increment any counter. Only the counter account passed in is
/// written, so clones never affect each other.
///
/// # Arguments
/// * `ctx` - The instruction context containing accounts
///
/// # Returns
/// * `Result<()>` - Success or error
pub fn increment(ctx: Context<Increment>) -> Result<()> {
    let counter = &mut ctx.accounts.counter;
    let clock = Clock::get()?;
    let previous_count = counter.count;

    let new_count = counter.increment(&clock)?;

    msg!(
        "Counter {} incremented by {}! Previous: {}, New: {}",
        counter.key(),
        ctx.accounts.caller.key(),
        previous_count,
        new_count
    );

    Ok(())
}

//! Read-only views for the Counter program

use anchor_lang::prelude::*;
use crate::instructions::ReadCounter;

/// Get the current counter value
pub fn get_count(ctx: Context<ReadCounter>) -> Result<u64> {
    Ok(ctx.accounts.counter.get_count())
}

/// Get the owner recorded at initialization
pub fn get_owner(ctx: Context<ReadCounter>) -> Result<Pubkey> {
    Ok(ctx.accounts.counter.get_owner())
}

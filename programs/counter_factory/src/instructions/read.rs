//! Read-only views for the counter factory program

use anchor_lang::prelude::*;
use crate::instructions::ReadFactory;

/// Get a page of the clone registry starting at `offset`
pub fn get_counters(ctx: Context<ReadFactory>, offset: u64) -> Result<Vec<Pubkey>> {
    let factory_info = ctx.accounts.factory.to_account_info();
    let data = factory_info.try_borrow_data()?;
    Ok(ctx.accounts.factory.counters_page(&data, offset))
}

/// Get the implementation program this factory clones
pub fn get_implementation(ctx: Context<ReadFactory>) -> Result<Pubkey> {
    Ok(ctx.accounts.factory.implementation)
}

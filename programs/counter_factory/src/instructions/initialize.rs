//! Initialize instruction for the counter factory program

use anchor_lang::prelude::*;
use crate::instructions::Initialize;
use crate::events::FactoryInitialized;

/// Initialize a new factory bound to the supplied implementation program
///
/// # Arguments
/// * `ctx` - The instruction context containing accounts
///
/// # Returns
/// * `Result<()>` - Success or error
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let factory = &mut ctx.accounts.factory;
    let deployer = &ctx.accounts.deployer;
    let clock = Clock::get()?;

    factory.initialize(
        ctx.accounts.implementation.key(),
        deployer.key(),
        ctx.bumps.factory,
        &clock,
    )?;

    emit!(FactoryInitialized {
        factory: factory.key(),
        implementation: factory.implementation,
        deployer: deployer.key(),
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Counter factory {} initialized with implementation {}",
        factory.key(),
        factory.implementation
    );
    Ok(())
}

//! Create clone instruction for the counter factory program

use anchor_lang::prelude::*;
use counter::cpi::accounts::Initialize as InitializeCounter;
use crate::instructions::CreateClone;
use crate::events::CounterCreated;
use crate::errors::FactoryError;
use crate::state::FACTORY_SEED;

/// Create and record a new counter clone
///
/// This function:
/// 1. Derives the next clone address from the factory key and registry length
/// 2. Initializes the clone through the implementation program, signing as the factory
/// 3. Writes the clone into the registry slot the account was just grown by
///
/// If any step fails the whole instruction fails and nothing is recorded.
///
/// # Arguments
/// * `ctx` - The instruction context containing accounts
/// * `initial_value` - Starting value of the clone's counter
///
/// # Returns
/// * `Result<Pubkey>` - The new clone address
///
/// # Events
/// * `CounterCreated` - Emitted once the clone is recorded
pub fn create_clone(ctx: Context<CreateClone>, initial_value: u64) -> Result<Pubkey> {
    let factory_key = ctx.accounts.factory.key();
    let nonce = ctx.accounts.factory.next_nonce();
    let clone = ctx.accounts.factory.next_clone_address(&factory_key);
    require_keys_eq!(
        ctx.accounts.counter.key(),
        clone,
        FactoryError::CloneAddressMismatch
    );

    initialize_clone_cpi(&ctx, nonce, initial_value)?;

    let clock = Clock::get()?;
    let owner = ctx.accounts.creator.key();
    let factory_info = ctx.accounts.factory.to_account_info();
    let factory = &mut ctx.accounts.factory;
    let index = {
        let mut data = factory_info.try_borrow_mut_data()?;
        factory.record_clone(&mut data, clone, &clock)?
    };

    emit!(CounterCreated {
        counter: clone,
        factory: factory_key,
        owner,
        implementation: factory.implementation,
        initial_value,
        index,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Clone {} created at index {} for owner {} with value {}",
        clone,
        index,
        owner,
        initial_value
    );

    Ok(clone)
}

/// Run the implementation's initializer on the new clone
///
/// The factory PDA signs as deployer so the clone address lands in the
/// factory's namespace; the creator is recorded as owner and pays rent.
fn initialize_clone_cpi(ctx: &Context<CreateClone>, nonce: u64, initial_value: u64) -> Result<()> {
    let factory = &ctx.accounts.factory;
    let bump = [factory.bump];
    let seeds: &[&[u8]] = &[
        FACTORY_SEED,
        factory.deployer.as_ref(),
        factory.implementation.as_ref(),
        &bump,
    ];
    let signer_seeds = &[seeds];

    let cpi_accounts = InitializeCounter {
        counter: ctx.accounts.counter.to_account_info(),
        deployer: factory.to_account_info(),
        owner: ctx.accounts.creator.to_account_info(),
        payer: ctx.accounts.creator.to_account_info(),
        system_program: ctx.accounts.system_program.to_account_info(),
    };

    let cpi_program = ctx.accounts.implementation_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);

    counter::cpi::initialize(cpi_ctx, nonce, initial_value)?;

    Ok(())
}

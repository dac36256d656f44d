//! # State Module
//!
//! This module contains the factory account and the layout of its clone
//! registry.
//!
//! The account is a fixed `CounterFactory` header followed by one raw 32-byte
//! entry per clone. Entries are read and written in place by index, so no
//! instruction ever deserializes the whole registry onto the heap.

use anchor_lang::prelude::*;
use crate::errors::FactoryError;

/// Seed prefix for factory addresses
pub const FACTORY_SEED: &[u8] = b"counter_factory";

/// Largest account size the runtime allows (10 MiB)
pub const MAX_ACCOUNT_DATA_LEN: usize = 10 * 1024 * 1024;

/// Size of one registry entry
pub const CLONE_ENTRY_LEN: usize = 32;

/// Clones returned per `get_counters` call
///
/// Instruction return data is capped at 1024 bytes; a borsh `Vec<Pubkey>`
/// spends 4 bytes on its length prefix.
pub const MAX_COUNTERS_PER_PAGE: usize = 31;

/// The factory header: implementation binding plus registry length
#[account]
#[derive(InitSpace, Default)]
pub struct CounterFactory {
    /// The implementation program every clone runs
    pub implementation: Pubkey,
    /// The account that constructed the factory
    pub deployer: Pubkey,
    /// Number of registry entries following the header
    pub clone_count: u64,
    /// PDA bump seed
    pub bump: u8,
    /// Timestamp when the factory was created
    pub created_at: i64,
    /// Timestamp of the most recent clone creation
    pub updated_at: i64,
}

impl CounterFactory {
    /// Byte offset of the first registry entry (discriminator included)
    pub const REGISTRY_OFFSET: usize = 8 + Self::INIT_SPACE;

    /// Account size for a registry of `clone_count` entries
    pub fn space_for(clone_count: usize) -> usize {
        Self::REGISTRY_OFFSET + clone_count * CLONE_ENTRY_LEN
    }

    /// Largest registry that fits in a single account
    pub fn max_clones() -> usize {
        (MAX_ACCOUNT_DATA_LEN - Self::REGISTRY_OFFSET) / CLONE_ENTRY_LEN
    }

    /// Byte range of entry `index` within the account data
    fn entry_range(index: u64) -> Option<std::ops::Range<usize>> {
        let start = usize::try_from(index)
            .ok()?
            .checked_mul(CLONE_ENTRY_LEN)?
            .checked_add(Self::REGISTRY_OFFSET)?;
        Some(start..start.checked_add(CLONE_ENTRY_LEN)?)
    }

    /// Derive the factory address for `deployer`/`implementation`
    pub fn derive_address(deployer: &Pubkey, implementation: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[FACTORY_SEED, deployer.as_ref(), implementation.as_ref()],
            &crate::ID,
        )
    }

    /// Initialize a new factory bound to `implementation`
    pub fn initialize(
        &mut self,
        implementation: Pubkey,
        deployer: Pubkey,
        bump: u8,
        clock: &Clock,
    ) -> Result<()> {
        require!(
            implementation != Pubkey::default(),
            FactoryError::InvalidImplementation
        );

        self.implementation = implementation;
        self.deployer = deployer;
        self.clone_count = 0;
        self.bump = bump;
        self.created_at = clock.unix_timestamp;
        self.updated_at = clock.unix_timestamp;
        Ok(())
    }

    /// Nonce the next clone address is derived with
    pub fn next_nonce(&self) -> u64 {
        self.clone_count
    }

    /// Address the next clone must be created at
    pub fn next_clone_address(&self, factory: &Pubkey) -> Pubkey {
        counter::CounterAccount::derive_address(factory, self.next_nonce(), &self.implementation).0
    }

    /// Write `clone` into the next registry slot of `data`, returning its index
    ///
    /// `data` is the factory's full account data, already sized for the new entry.
    pub fn record_clone(&mut self, data: &mut [u8], clone: Pubkey, clock: &Clock) -> Result<u64> {
        require!(
            self.clone_count < Self::max_clones() as u64,
            FactoryError::RegistryFull
        );

        let index = self.clone_count;
        let range = Self::entry_range(index).ok_or(FactoryError::ArithmeticError)?;
        let slot = data.get_mut(range).ok_or(FactoryError::RegistryFull)?;
        slot.copy_from_slice(clone.as_ref());

        self.clone_count = index.checked_add(1)
            .ok_or(FactoryError::ArithmeticError)?;
        self.updated_at = clock.unix_timestamp;
        Ok(index)
    }

    /// Clone at registry position `index`
    pub fn clone_at(&self, data: &[u8], index: u64) -> Option<Pubkey> {
        if index >= self.clone_count {
            return None;
        }
        let bytes = data.get(Self::entry_range(index)?)?;
        Pubkey::try_from(bytes).ok()
    }

    /// At most `MAX_COUNTERS_PER_PAGE` clones starting at `offset`
    pub fn counters_page(&self, data: &[u8], offset: u64) -> Vec<Pubkey> {
        let end = offset
            .saturating_add(MAX_COUNTERS_PER_PAGE as u64)
            .min(self.clone_count);
        (offset..end)
            .map_while(|index| self.clone_at(data, index))
            .collect()
    }

    /// Every clone created so far, in creation order
    ///
    /// Meant for clients holding the fetched account data.
    pub fn counters(&self, data: &[u8]) -> Vec<Pubkey> {
        (0..self.clone_count)
            .map_while(|index| self.clone_at(data, index))
            .collect()
    }
}

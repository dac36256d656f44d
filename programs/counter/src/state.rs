//! # State Module
//!
//! This module contains the account structure and address derivation
//! for counter accounts.

use anchor_lang::prelude::*;
use crate::errors::CounterError;

/// Seed prefix for counter account addresses
pub const COUNTER_SEED: &[u8] = b"counter";

/// Storage of a single counter
///
/// A standalone counter and every clone created by the factory share this
/// layout. The program that owns the account supplies the code; the account
/// supplies the state.
#[account]
#[derive(InitSpace, Default)]
pub struct CounterAccount {
    /// The account recorded as owner at initialization
    pub owner: Pubkey,
    /// The namespace this counter's address was derived in
    pub deployer: Pubkey,
    /// Derivation nonce within the deployer's namespace
    pub nonce: u64,
    /// The current count value
    pub count: u64,
    /// Set once by `initialize`; never cleared
    pub initialized: bool,
    /// PDA bump seed
    pub bump: u8,
    /// Timestamp when the counter was initialized
    pub created_at: i64,
    /// Timestamp when the counter was last updated
    pub updated_at: i64,
}

impl CounterAccount {
    /// Derive the counter address for `deployer`/`nonce` under `program_id`
    pub fn derive_address(deployer: &Pubkey, nonce: u64, program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[COUNTER_SEED, deployer.as_ref(), &nonce.to_le_bytes()],
            program_id,
        )
    }

    /// Initialize the counter
    ///
    /// Fails without touching any field if the counter was initialized before.
    pub fn initialize(
        &mut self,
        owner: Pubkey,
        deployer: Pubkey,
        nonce: u64,
        initial_value: u64,
        bump: u8,
        clock: &Clock,
    ) -> Result<()> {
        require!(!self.initialized, CounterError::AlreadyInitialized);

        self.owner = owner;
        self.deployer = deployer;
        self.nonce = nonce;
        self.count = initial_value;
        self.initialized = true;
        self.bump = bump;
        self.created_at = clock.unix_timestamp;
        self.updated_at = clock.unix_timestamp;
        Ok(())
    }

    /// Increment the counter value, returning the new value
    pub fn increment(&mut self, clock: &Clock) -> Result<u64> {
        require!(self.initialized, CounterError::NotInitialized);

        self.count = self.count.checked_add(1)
            .ok_or(CounterError::ArithmeticError)?;
        self.updated_at = clock.unix_timestamp;
        Ok(self.count)
    }

    /// Get the current counter value
    pub fn get_count(&self) -> u64 {
        self.count
    }

    /// Get the recorded owner
    pub fn get_owner(&self) -> Pubkey {
        self.owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;
    use proptest::prelude::*;

    fn clock_at(unix_timestamp: i64) -> Clock {
        Clock {
            unix_timestamp,
            ..Clock::default()
        }
    }

    fn error_code(err: Error) -> u32 {
        match err {
            Error::AnchorError(e) => e.error_code_number,
            Error::ProgramError(e) => panic!("unexpected program error: {e:?}"),
        }
    }

    fn initialized(owner: Pubkey, initial_value: u64) -> CounterAccount {
        let mut counter = CounterAccount::default();
        counter
            .initialize(owner, Pubkey::new_unique(), 0, initial_value, 255, &clock_at(100))
            .unwrap();
        counter
    }

    #[test]
    fn initialize_sets_every_field() {
        let owner = Pubkey::new_unique();
        let deployer = Pubkey::new_unique();
        let mut counter = CounterAccount::default();

        counter.initialize(owner, deployer, 7, 42, 254, &clock_at(1_000)).unwrap();

        assert!(counter.initialized);
        assert_eq!(counter.get_owner(), owner);
        assert_eq!(counter.deployer, deployer);
        assert_eq!(counter.nonce, 7);
        assert_eq!(counter.get_count(), 42);
        assert_eq!(counter.bump, 254);
        assert_eq!(counter.created_at, 1_000);
        assert_eq!(counter.updated_at, 1_000);
    }

    #[test]
    fn second_initialize_fails_and_keeps_state() {
        let owner = Pubkey::new_unique();
        let mut counter = initialized(owner, 3);
        counter.increment(&clock_at(200)).unwrap();

        let err = counter
            .initialize(Pubkey::new_unique(), Pubkey::new_unique(), 9, 0, 1, &clock_at(300))
            .unwrap_err();

        assert_eq!(error_code(err), u32::from(CounterError::AlreadyInitialized));
        assert_eq!(counter.get_owner(), owner);
        assert_eq!(counter.get_count(), 4);
        assert_eq!(counter.updated_at, 200);
    }

    #[test]
    fn increment_requires_initialization() {
        let mut counter = CounterAccount::default();
        let err = counter.increment(&clock_at(1)).unwrap_err();
        assert_eq!(error_code(err), u32::from(CounterError::NotInitialized));
        assert_eq!(counter.get_count(), 0);
    }

    #[test]
    fn increment_overflow_is_rejected() {
        let mut counter = initialized(Pubkey::new_unique(), u64::MAX);
        let err = counter.increment(&clock_at(1)).unwrap_err();
        assert_eq!(error_code(err), u32::from(CounterError::ArithmeticError));
        assert_eq!(counter.get_count(), u64::MAX);
    }

    #[test]
    fn increment_updates_timestamp() {
        let mut counter = initialized(Pubkey::new_unique(), 0);
        assert_eq!(counter.increment(&clock_at(500)).unwrap(), 1);
        assert_eq!(counter.updated_at, 500);
        assert_eq!(counter.created_at, 100);
    }

    #[test]
    fn counters_do_not_share_state() {
        let mut first = initialized(Pubkey::new_unique(), 0);
        let mut second = initialized(Pubkey::new_unique(), 0);

        first.increment(&clock_at(1)).unwrap();
        second.increment(&clock_at(2)).unwrap();
        second.increment(&clock_at(3)).unwrap();

        assert_eq!(first.get_count(), 1);
        assert_eq!(second.get_count(), 2);
    }

    #[test]
    fn derived_addresses_depend_on_deployer_and_nonce() {
        let deployer = Pubkey::new_unique();
        let other = Pubkey::new_unique();

        let (a, _) = CounterAccount::derive_address(&deployer, 0, &crate::ID);
        let (b, _) = CounterAccount::derive_address(&deployer, 1, &crate::ID);
        let (c, _) = CounterAccount::derive_address(&other, 0, &crate::ID);
        let (again, _) = CounterAccount::derive_address(&deployer, 0, &crate::ID);

        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
        assert_eq!(a, again);
    }

    proptest! {
        #[test]
        fn fresh_counter_reports_initial_value(initial_value in any::<u64>()) {
            let counter = initialized(Pubkey::new_unique(), initial_value);
            prop_assert_eq!(counter.get_count(), initial_value);
        }

        #[test]
        fn n_increments_add_exactly_n(initial_value in 0u64..1_000_000, n in 0u64..200) {
            let mut counter = initialized(Pubkey::new_unique(), initial_value);
            for i in 0..n {
                counter.increment(&clock_at(i as i64)).unwrap();
            }
            prop_assert_eq!(counter.get_count(), initial_value + n);
        }
    }
}

//! Errors module for the Counter program
//!
//! This module contains all custom error definitions used by the Counter program.

use anchor_lang::prelude::*;

/// Custom error codes for the Counter program
#[error_code]
pub enum CounterError {
    /// The counter has already been initialized
    ///
    /// This error occurs when `initialize` is called a second time on the same
    /// counter account, whether directly or through the factory. The existing
    /// owner and count are left untouched.
    #[msg("Already initialized: The counter has already been initialized")]
    AlreadyInitialized,

    /// The counter account is not properly initialized
    #[msg("Not initialized: The counter has not been initialized")]
    NotInitialized,

    /// Counter increment would overflow
    #[msg("Arithmetic error: Mathematical operation failed")]
    ArithmeticError,
}

//! # Error Module
//!
//! This module contains all custom error types for the counter factory program.

use anchor_lang::prelude::*;

/// Custom error codes for the counter factory program
#[error_code]
pub enum FactoryError {
    /// Error when the implementation is the default key or not an executable program
    #[msg("Invalid implementation: The implementation must be a deployed program")]
    InvalidImplementation,

    /// Error when the implementation program passed in differs from the recorded one
    #[msg("Implementation mismatch: The program does not match the factory implementation")]
    ImplementationMismatch,

    /// Error when the counter account is not the next derived clone address
    #[msg("Clone address mismatch: The counter account is not the next clone address")]
    CloneAddressMismatch,

    /// Error when the registry account cannot grow any further
    #[msg("Registry full: The factory cannot record more clones")]
    RegistryFull,

    /// Error when registry index arithmetic overflows
    #[msg("Arithmetic error: Mathematical operation failed")]
    ArithmeticError,
}

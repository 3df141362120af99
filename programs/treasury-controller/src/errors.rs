use anchor_lang::prelude::*;

/// Treasury Controller Error Codes
///
/// Registering an already existing state fails inside the System Program
/// ("account already in use") and missing or foreign state accounts fail
/// Anchor account validation, so neither has a variant here.
#[error_code]
pub enum ErrorCode {
    // Authorization
    #[msg("Signer is not the update authority")]
    UnauthorizedAccess,

    // Configuration
    #[msg("Purchase proportion must be 0-10000 bps")]
    InvalidPurchaseProportion,

    #[msg("Price must be greater than zero")]
    InvalidPrice,

    // Allocation account checks
    #[msg("Treasury does not match controller state")]
    InvalidTreasury,

    #[msg("Mint does not match controller state")]
    InvalidMint,

    #[msg("Holding account does not match controller state")]
    InvalidHoldingAccount,

    #[msg("Holding token account does not match controller state")]
    InvalidHoldingTokenAccount,

    #[msg("Holding token account delegation is missing or too small")]
    InsufficientDelegation,

    // Arithmetic
    #[msg("Arithmetic overflow")]
    MathOverflow,

    #[msg("Division by zero")]
    DivisionByZero,
}

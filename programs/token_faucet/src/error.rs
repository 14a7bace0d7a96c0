use anchor_lang::prelude::*;

#[error_code]
pub enum FaucetError {
    // Access control errors
    #[msg("Only the faucet owner can perform this action")]
    NotOwner,

    // Claim errors
    #[msg("Your time never reach, do the calms!")]
    CooldownNotElapsed,
    #[msg("Faucet balance is lower than the claim amount")]
    InsufficientFaucetBalance,

    // Account validation errors
    #[msg("Token mint does not match the faucet's token mint")]
    TokenMintMismatch,
    #[msg("Token vault does not match the faucet's token vault")]
    InvalidVault,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}

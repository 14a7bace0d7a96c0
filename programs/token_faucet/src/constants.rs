use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * Timing defaults and PDA seeds shared by every faucet instruction.
 */

#[constant]
/// ===== TIMING CONSTANTS =====

/// Cooldown applied to a freshly created faucet (24 hours)
/// - The owner can change it at any time with set_cooldown_time
/// - Value: 24 hours * 60 minutes * 60 seconds = 86,400 seconds
pub const DEFAULT_COOLDOWN_SECONDS: u64 = 24 * 60 * 60;

/// ===== PDA SEED CONSTANTS =====

/// Seed for faucet PDA derivation
/// - Used in: ["faucet", token_mint, owner]
/// - One faucet per (token, owner) pair
/// - The faucet PDA is the authority of its token vault
pub const FAUCET_SEED: &str = "faucet";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", faucet_key]
pub const VAULT_SEED: &str = "vault";

/// Seed for claim record PDA derivation
/// - Used in: ["claim", faucet_key, claimant_key]
/// - Holds the last claim time of one claimant
/// - Absent account means the claimant has never claimed
pub const CLAIM_SEED: &str = "claim";

use anchor_lang::prelude::*;

/**
 * Per-claimant claim record
 *
 * Holds the last successful claim time of one claimant on one faucet.
 *
 * Derivation: ["claim", faucet_key, claimant_key]
 *
 * Lifecycle:
 * 1. Created on first claim (using init_if_needed, zeroed)
 * 2. Updated with each successful claim
 *
 * A zeroed record (claim_count == 0) means "never claimed", which is
 * always eligible regardless of last_claim_time.
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimRecord {
    /// Number of successful claims by this account
    pub claim_count: u64,

    /// Ledger time (Unix timestamp) of the most recent successful claim
    /// - Only meaningful once claim_count > 0
    pub last_claim_time: i64,

    /// Total amount paid out to this account
    pub total_claimed: u64,
}

impl ClaimRecord {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimRecord>();

    pub fn has_claimed(&self) -> bool {
        self.claim_count > 0
    }
}

use anchor_lang::prelude::*;

/// Event emitted when a new faucet is created
#[event]
pub struct FaucetCreated {
    /// The faucet account public key
    pub faucet: Pubkey,
    /// Owner of the faucet
    pub owner: Pubkey,
    /// Mint of the custodied token
    pub token_mint: Pubkey,
    /// Vault holding the custodied balance
    pub token_vault: Pubkey,
    /// Amount paid out per claim
    pub claim_amount: u64,
    /// Seconds between two claims of the same account
    pub cooldown_seconds: u64,
}

/// Event emitted when funds are deposited into the faucet
#[event]
pub struct FundsDeposited {
    pub faucet: Pubkey,
    /// Account that deposited
    pub depositor: Pubkey,
    /// Amount deposited in this transaction
    pub amount: u64,
    /// Faucet balance after the deposit
    pub balance: u64,
}

/// Event emitted when a claimant receives tokens
#[event]
pub struct TokensClaimed {
    pub faucet: Pubkey,
    /// Address of the claimant
    pub claimant: Pubkey,
    /// Amount paid out
    pub amount: u64,
    /// Ledger time of the claim
    pub claim_time: i64,
    /// Earliest time the claimant may claim again
    pub next_claim_time: i64,
    /// Faucet balance after the payout
    pub balance: u64,
}

/// Event emitted when the owner withdraws the whole balance
#[event]
pub struct FundsWithdrawn {
    pub faucet: Pubkey,
    /// Owner who withdrew the funds
    pub owner: Pubkey,
    /// Balance held right before the withdrawal
    pub amount: u64,
}

/// Event emitted when the claim amount changes
#[event]
pub struct ClaimAmountUpdated {
    pub faucet: Pubkey,
    pub owner: Pubkey,
    pub previous_claim_amount: u64,
    pub claim_amount: u64,
}

/// Event emitted when the cooldown changes
#[event]
pub struct CooldownTimeUpdated {
    pub faucet: Pubkey,
    pub owner: Pubkey,
    pub previous_cooldown_seconds: u64,
    pub cooldown_seconds: u64,
}

use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::state::ClaimRecord;

/**
 * Main faucet state account
 *
 * The faucet ledger: the custodied balance, the owner-controlled claim
 * parameters and lifetime accounting totals.
 *
 * Derivation: ["faucet", token_mint, owner]
 *
 * Lifecycle:
 * 1. Created during create_faucet with the owner and initial claim amount
 * 2. Balance grows with deposit_funds
 * 3. Balance shrinks with claim_tokens and withdraw_funds
 * 4. claim_amount and cooldown_seconds change only through the owner setters
 *
 * Every mutating method checks all of its preconditions before touching a
 * field, so a failed call leaves the account unchanged. Caller identity and
 * ledger time are passed in by the instruction handlers.
 *
 * Invariant: balance == total_deposited - total_claimed - total_withdrawn
 */
#[account]
#[derive(Default, Debug)]
pub struct TokenFaucet {
    /// Bump seed for PDA derivation
    /// - Saved to sign vault transfers without recomputation
    pub bump: u8,

    /// Owner of the faucet
    /// - Fixed at creation, never transferred
    /// - Only account allowed to withdraw and reconfigure
    pub owner: Pubkey,

    /// Mint of the custodied token
    pub token_mint: Pubkey,

    /// Token vault account address
    /// - PDA controlled by the faucet PDA
    /// - Derived from: ["vault", faucet_key]
    pub token_vault: Pubkey,

    /// Amount paid out by each successful claim
    pub claim_amount: u64,

    /// Minimum seconds between two successful claims of one account
    /// - Zero disables the cooldown
    pub cooldown_seconds: u64,

    /// Custodied balance available for payout
    pub balance: u64,

    /// Lifetime sum of all deposits
    pub total_deposited: u128,

    /// Lifetime sum of all claim payouts
    pub total_claimed: u128,

    /// Lifetime sum of all owner withdrawals
    pub total_withdrawn: u128,

    /// Number of successful claims across all accounts
    pub claim_count: u64,
}

impl TokenFaucet {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<TokenFaucet>();

    pub fn initialize(
        &mut self,
        bump: u8,
        owner: Pubkey,
        token_mint: Pubkey,
        token_vault: Pubkey,
        claim_amount: u64,
    ) {
        *self = TokenFaucet {
            bump,
            owner,
            token_mint,
            token_vault,
            claim_amount,
            cooldown_seconds: DEFAULT_COOLDOWN_SECONDS,
            ..TokenFaucet::default()
        };
    }

    pub fn is_owner(&self, caller: &Pubkey) -> bool {
        self.owner == *caller
    }

    fn only_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, FaucetError::NotOwner);
        Ok(())
    }

    /// Whether the holder of `record` may claim at ledger time `now`.
    ///
    /// A clock reading earlier than the last claim counts as "not elapsed"
    /// unless the cooldown is disabled.
    pub fn is_eligible(&self, record: &ClaimRecord, now: i64) -> bool {
        if !record.has_claimed() || self.cooldown_seconds == 0 {
            return true;
        }
        let elapsed = i128::from(now) - i128::from(record.last_claim_time);
        elapsed >= i128::from(self.cooldown_seconds)
    }

    /// Earliest ledger time at which the holder of `record` may claim again.
    /// `None` for an account that has never claimed.
    pub fn next_claim_time(&self, record: &ClaimRecord) -> Option<i64> {
        if !record.has_claimed() {
            return None;
        }
        let next = i64::try_from(self.cooldown_seconds)
            .ok()
            .and_then(|cooldown| record.last_claim_time.checked_add(cooldown))
            .unwrap_or(i64::MAX);
        Some(next)
    }

    /// Checks the accounting invariant against the lifetime totals
    pub fn is_balanced(&self) -> bool {
        self.total_claimed
            .checked_add(self.total_withdrawn)
            .and_then(|paid_out| self.total_deposited.checked_sub(paid_out))
            == Some(u128::from(self.balance))
    }

    /// Credits a deposit of any size from any account.
    /// Returns the balance after the deposit.
    pub fn record_deposit(&mut self, amount: u64) -> Result<u64> {
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(FaucetError::ArithmeticOverflow)?;
        let total_deposited = self
            .total_deposited
            .checked_add(u128::from(amount))
            .ok_or(FaucetError::ArithmeticOverflow)?;

        self.balance = balance;
        self.total_deposited = total_deposited;
        Ok(balance)
    }

    /// Credits what a deposit transfer actually moved into the vault, read as
    /// the vault amount before and after the transfer. Mints with a transfer
    /// fee deliver less than the requested amount.
    /// Returns the credited amount.
    pub fn record_vault_deposit(&mut self, vault_before: u64, vault_after: u64) -> Result<u64> {
        let received = vault_after
            .checked_sub(vault_before)
            .ok_or(FaucetError::ArithmeticOverflow)?;
        self.record_deposit(received)?;
        Ok(received)
    }

    /// Debits one claim for the holder of `record` at ledger time `now`.
    /// Returns the amount to pay out.
    ///
    /// Checks, in order:
    /// 1. cooldown elapsed since the holder's last claim
    /// 2. balance covers the claim amount
    pub fn record_claim(&mut self, record: &mut ClaimRecord, now: i64) -> Result<u64> {
        require!(self.is_eligible(record, now), FaucetError::CooldownNotElapsed);
        require!(
            self.balance >= self.claim_amount,
            FaucetError::InsufficientFaucetBalance
        );

        let amount = self.claim_amount;
        let balance = self.balance - amount;
        let total_claimed = self
            .total_claimed
            .checked_add(u128::from(amount))
            .ok_or(FaucetError::ArithmeticOverflow)?;
        let claim_count = self
            .claim_count
            .checked_add(1)
            .ok_or(FaucetError::ArithmeticOverflow)?;
        let record_count = record
            .claim_count
            .checked_add(1)
            .ok_or(FaucetError::ArithmeticOverflow)?;
        let record_total = record
            .total_claimed
            .checked_add(amount)
            .ok_or(FaucetError::ArithmeticOverflow)?;

        self.balance = balance;
        self.total_claimed = total_claimed;
        self.claim_count = claim_count;
        record.claim_count = record_count;
        record.last_claim_time = now;
        record.total_claimed = record_total;
        Ok(amount)
    }

    /// Empties the vault on behalf of the owner.
    /// Returns the amount to pay out.
    ///
    /// `vault_amount` is what the vault holds. Tokens sent to the vault
    /// without going through a deposit are credited as a deposit first, so
    /// the payout is the whole vault and the totals stay balanced.
    pub fn record_withdrawal(&mut self, caller: &Pubkey, vault_amount: u64) -> Result<u64> {
        self.only_owner(caller)?;

        let surplus = vault_amount.saturating_sub(self.balance);
        let amount = self
            .balance
            .checked_add(surplus)
            .ok_or(FaucetError::ArithmeticOverflow)?;
        let total_deposited = self
            .total_deposited
            .checked_add(u128::from(surplus))
            .ok_or(FaucetError::ArithmeticOverflow)?;
        let total_withdrawn = self
            .total_withdrawn
            .checked_add(u128::from(amount))
            .ok_or(FaucetError::ArithmeticOverflow)?;

        self.balance = 0;
        self.total_deposited = total_deposited;
        self.total_withdrawn = total_withdrawn;
        Ok(amount)
    }

    /// Returns the previous claim amount.
    pub fn set_claim_amount(&mut self, caller: &Pubkey, claim_amount: u64) -> Result<u64> {
        self.only_owner(caller)?;
        Ok(std::mem::replace(&mut self.claim_amount, claim_amount))
    }

    /// Returns the previous cooldown.
    pub fn set_cooldown_time(&mut self, caller: &Pubkey, cooldown_seconds: u64) -> Result<u64> {
        self.only_owner(caller)?;
        Ok(std::mem::replace(&mut self.cooldown_seconds, cooldown_seconds))
    }
}

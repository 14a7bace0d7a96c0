use anchor_lang::prelude::*;

declare_id!("G6f3hwtxJeBXEBWLgkZsywmMVqdMzqn8Q6kqJv2eTB3j");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;


use instructions::*;

/**
 * Token Faucet Program
 *
 * A custodial faucet: anyone tops up a shared token pool, and anyone may
 * claim a fixed amount from it once per cooldown window.
 *
 * Key Features:
 * - Owner-configurable claim amount and cooldown, both unbounded
 * - Per-claimant cooldown tracked on-chain with the ledger clock
 * - Open deposits from any account
 * - Owner withdrawal of the whole balance at any time
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Faucet PDA: ledger state (owner, parameters, balance, totals)
 * - Token Vault PDA: holds the custodied tokens, signed for by the faucet PDA
 * - Claim Record PDAs: last claim time of each claimant
 *
 * Workflow:
 * 1. Owner creates the faucet with an initial claim amount
 * 2. Anyone deposits tokens
 * 3. Users claim once per cooldown window while the balance lasts
 * 4. Owner tunes claim amount / cooldown or withdraws the balance
 */
#[program]
pub mod token_faucet {
    use super::*;

    /**
     * Creates a new faucet
     *
     * @param ctx - Account context containing faucet, vault, mint and owner accounts
     * @param claim_amount - Amount paid out by each claim
     *
     * Access Control: Anyone; the signer becomes the owner
     */
    pub fn create_faucet(ctx: Context<CreateFaucet>, claim_amount: u64) -> Result<()> {
        handle_create_faucet(ctx, claim_amount)
    }

    /**
     * Deposits tokens into the faucet
     *
     * @param amount - Amount to move from the depositor into the vault
     *
     * Access Control: Anyone
     */
    pub fn deposit_funds(ctx: Context<DepositFunds>, amount: u64) -> Result<()> {
        handle_deposit_funds(ctx, amount)
    }

    /**
     * Claims the configured amount
     *
     * Fails with CooldownNotElapsed if the signer claimed within the last
     * cooldown window, then with InsufficientFaucetBalance if the balance
     * does not cover the claim amount.
     *
     * Access Control: Anyone
     */
    pub fn claim_tokens(ctx: Context<ClaimTokens>) -> Result<()> {
        handle_claim_tokens(ctx)
    }

    /**
     * Withdraws the whole faucet balance to the owner
     *
     * Access Control: Owner only
     */
    pub fn withdraw_funds(ctx: Context<WithdrawFunds>) -> Result<()> {
        handle_withdraw_funds(ctx)
    }

    /**
     * Sets the amount paid out by each claim
     *
     * Access Control: Owner only
     */
    pub fn set_claim_amount(ctx: Context<SetClaimAmount>, claim_amount: u64) -> Result<()> {
        handle_set_claim_amount(ctx, claim_amount)
    }

    /**
     * Sets the cooldown between two claims of the same account, in seconds
     *
     * Access Control: Owner only
     */
    pub fn set_cooldown_time(ctx: Context<SetCooldownTime>, cooldown_seconds: u64) -> Result<()> {
        handle_set_cooldown_time(ctx, cooldown_seconds)
    }
}

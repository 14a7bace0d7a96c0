use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;

/**
 * Account context for claiming from the faucet
 *
 * Pays the configured claim amount from the vault to the claimant, at most
 * once per cooldown window per claimant.
 *
 * Access Control: Anyone, including the owner
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ClaimTokens<'info> {
    /// The faucet paying out
    #[account(mut)]
    pub faucet: Account<'info, TokenFaucet>,

    /// Claim record of this claimant
    /// - Created zeroed on the first claim ("never claimed")
    /// - Derived from: ["claim", faucet_key, claimant_key]
    #[account(
        init_if_needed,
        payer = claimant,
        space = ClaimRecord::LEN,
        seeds = [CLAIM_SEED.as_bytes(), faucet.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claim_record: Account<'info, ClaimRecord>,

    /// Token vault of the faucet
    /// - Derived from: ["vault", faucet_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), faucet.key().as_ref()],
        bump,
        constraint = token_vault.key() == faucet.token_vault @ FaucetError::InvalidVault
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's token account receiving the payout
    #[account(
        mut,
        token::mint = faucet.token_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == faucet.token_mint @ FaucetError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Pays rent for the claim record on first claim
    #[account(mut)]
    pub claimant: Signer<'info>,

    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Claims the configured amount for the signer
 *
 * @param ctx - The account context containing all required accounts
 *
 * Validation Process:
 * 1. Cooldown elapsed since the claimant's last claim (ledger clock)
 * 2. Faucet balance covers the claim amount
 */
pub fn handle_claim_tokens(ctx: Context<ClaimTokens>) -> Result<()> {
    let faucet = &mut ctx.accounts.faucet;
    let claim_record = &mut ctx.accounts.claim_record;

    let now = Clock::get()?.unix_timestamp;

    // ===== VALIDATION + EFFECTS PHASE =====
    let amount = faucet.record_claim(claim_record, now)?;
    let next_claim_time = faucet.next_claim_time(claim_record).unwrap_or(now);
    let balance = faucet.balance;

    let token_mint_key = faucet.token_mint;
    let owner_key = faucet.owner;
    let faucet_bump = faucet.bump;
    let faucet_key = faucet.key();

    // ===== INTERACTIONS PHASE =====
    let seeds = &[
        FAUCET_SEED.as_bytes(),
        token_mint_key.as_ref(),
        owner_key.as_ref(),
        &[faucet_bump],
    ];
    let signer = &[&seeds[..]];

    transfer_token(
        ctx.accounts.faucet.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.claimant_token_account.to_account_info(),
        &ctx.accounts.token_mint,
        ctx.accounts.token_program.to_account_info(),
        amount,
        Some(signer),
    )?;

    msg!(
        "claim: claimant={} amount={} balance={}",
        ctx.accounts.claimant.key(),
        amount,
        balance
    );

    emit_cpi!(TokensClaimed {
        faucet: faucet_key,
        claimant: ctx.accounts.claimant.key(),
        amount,
        claim_time: now,
        next_claim_time,
        balance,
    });

    Ok(())
}

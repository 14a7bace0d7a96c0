use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;

/**
 * Account context for withdrawing the faucet balance
 *
 * Access Control: Owner only (checked against the signer by the ledger)
 */
#[event_cpi]
#[derive(Accounts)]
pub struct WithdrawFunds<'info> {
    #[account(mut)]
    pub faucet: Account<'info, TokenFaucet>,

    /// Token vault of the faucet
    /// - Derived from: ["vault", faucet_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), faucet.key().as_ref()],
        bump,
        constraint = token_vault.key() == faucet.token_vault @ FaucetError::InvalidVault
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Signer's token account receiving the balance
    #[account(
        mut,
        token::mint = faucet.token_mint,
        token::authority = authority,
        token::token_program = token_program,
    )]
    pub authority_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == faucet.token_mint @ FaucetError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Caller; must be the faucet owner
    pub authority: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Transfers the whole faucet balance to the owner
 *
 * @param ctx - The account context containing all required accounts
 *
 * Tokens sent straight to the vault are swept along with the balance.
 * The faucet stays open; deposits and claims continue afterwards.
 */
pub fn handle_withdraw_funds(ctx: Context<WithdrawFunds>) -> Result<()> {
    let faucet = &mut ctx.accounts.faucet;
    let caller = ctx.accounts.authority.key();
    let vault_amount = ctx.accounts.token_vault.amount;

    // ===== VALIDATION + EFFECTS PHASE =====
    let amount = faucet.record_withdrawal(&caller, vault_amount)?;

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
        ctx.accounts.authority_token_account.to_account_info(),
        &ctx.accounts.token_mint,
        ctx.accounts.token_program.to_account_info(),
        amount,
        Some(signer),
    )?;

    msg!("withdraw: owner={} amount={}", caller, amount);

    emit_cpi!(FundsWithdrawn {
        faucet: faucet_key,
        owner: caller,
        amount,
    });

    Ok(())
}

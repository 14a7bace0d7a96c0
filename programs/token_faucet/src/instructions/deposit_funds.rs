use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;

/**
 * Account context for depositing funds into the faucet
 *
 * Access Control: Anyone can deposit
 */
#[event_cpi]
#[derive(Accounts)]
pub struct DepositFunds<'info> {
    /// The faucet receiving the deposit
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

    /// Depositor's token account the funds are taken from
    #[account(
        mut,
        token::mint = faucet.token_mint,
        token::authority = depositor,
        token::token_program = token_program,
    )]
    pub depositor_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == faucet.token_mint @ FaucetError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    pub depositor: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Deposits `amount` tokens into the faucet vault
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Amount to deposit; zero is accepted and moves nothing
 *
 * The ledger is credited with what the vault received, which is less than
 * `amount` for Token 2022 mints charging a transfer fee.
 */
pub fn handle_deposit_funds(ctx: Context<DepositFunds>, amount: u64) -> Result<()> {
    let vault_before = ctx.accounts.token_vault.amount;

    // ===== INTERACTIONS PHASE =====
    transfer_token(
        ctx.accounts.depositor.to_account_info(),
        ctx.accounts.depositor_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        &ctx.accounts.token_mint,
        ctx.accounts.token_program.to_account_info(),
        amount,
        None, // depositor signs for its own account
    )?;

    ctx.accounts.token_vault.reload()?;
    let vault_after = ctx.accounts.token_vault.amount;

    // ===== EFFECTS PHASE =====
    let faucet = &mut ctx.accounts.faucet;
    let received = faucet.record_vault_deposit(vault_before, vault_after)?;
    let balance = faucet.balance;
    let faucet_key = faucet.key();
    let depositor = ctx.accounts.depositor.key();

    msg!(
        "deposit: depositor={} amount={} received={} balance={}",
        depositor,
        amount,
        received,
        balance
    );

    emit_cpi!(FundsDeposited {
        faucet: faucet_key,
        depositor,
        amount: received,
        balance,
    });

    Ok(())
}

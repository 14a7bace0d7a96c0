use crate::constants::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a new faucet
 *
 * This instruction initializes a faucet for one token mint:
 * - Creates the faucet PDA holding the ledger state
 * - Creates a token vault PDA, owned by the faucet PDA, to custody deposits
 * - Records the signer as the permanent owner
 *
 * Access Control: Anyone; the signer becomes the owner
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateFaucet<'info> {
    /// The faucet account (PDA)
    /// - Derived from: ["faucet", token_mint, owner]
    #[account(
        init,
        payer = owner,
        space = TokenFaucet::LEN,
        seeds = [
            FAUCET_SEED.as_bytes(),
            token_mint.key().as_ref(),
            owner.key().as_ref(),
        ],
        bump
    )]
    pub faucet: Account<'info, TokenFaucet>,

    /// Token vault account (PDA) that custodies the faucet balance
    /// - Controlled by the faucet PDA as token authority
    /// - Derived from: ["vault", faucet_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = faucet,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), faucet.key().as_ref()],
        bump,
        payer = owner,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token handed out by the faucet
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The deployer, recorded as owner
    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    pub rent: Sysvar<'info, Rent>,
}

/**
 * Creates a new faucet
 *
 * @param ctx - The account context containing all required accounts
 * @param claim_amount - Amount paid out per claim; zero is accepted
 *
 * The cooldown starts at DEFAULT_COOLDOWN_SECONDS and the balance at zero.
 */
pub fn handle_create_faucet(ctx: Context<CreateFaucet>, claim_amount: u64) -> Result<()> {
    let faucet = &mut ctx.accounts.faucet;

    faucet.initialize(
        ctx.bumps.faucet,
        ctx.accounts.owner.key(),
        ctx.accounts.token_mint.key(),
        ctx.accounts.token_vault.key(),
        claim_amount,
    );

    msg!(
        "faucet created: owner={} claim_amount={} cooldown={}",
        faucet.owner,
        faucet.claim_amount,
        faucet.cooldown_seconds
    );

    emit_cpi!(FaucetCreated {
        faucet: faucet.key(),
        owner: faucet.owner,
        token_mint: faucet.token_mint,
        token_vault: faucet.token_vault,
        claim_amount: faucet.claim_amount,
        cooldown_seconds: faucet.cooldown_seconds,
    });

    Ok(())
}

use anchor_lang::prelude::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for changing the claim amount
 *
 * Access Control: Owner only (checked against the signer by the ledger)
 *
 * Business Logic:
 * - No lower or upper bound; zero makes claims pay nothing
 * - An amount above the current balance makes claims fail until topped up
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetClaimAmount<'info> {
    #[account(mut)]
    pub faucet: Account<'info, TokenFaucet>,

    /// Caller; must be the faucet owner
    pub authority: Signer<'info>,
}

pub fn handle_set_claim_amount(ctx: Context<SetClaimAmount>, claim_amount: u64) -> Result<()> {
    let faucet = &mut ctx.accounts.faucet;
    let caller = ctx.accounts.authority.key();

    let previous_claim_amount = faucet.set_claim_amount(&caller, claim_amount)?;

    msg!("claim amount: {} -> {}", previous_claim_amount, claim_amount);

    emit_cpi!(ClaimAmountUpdated {
        faucet: faucet.key(),
        owner: caller,
        previous_claim_amount,
        claim_amount,
    });

    Ok(())
}

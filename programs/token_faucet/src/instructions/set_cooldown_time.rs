use anchor_lang::prelude::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for changing the claim cooldown
 *
 * Access Control: Owner only (checked against the signer by the ledger)
 *
 * Business Logic:
 * - Zero disables the cooldown
 * - Applies to every claim after the change, including accounts that
 *   claimed under the previous value
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetCooldownTime<'info> {
    #[account(mut)]
    pub faucet: Account<'info, TokenFaucet>,

    /// Caller; must be the faucet owner
    pub authority: Signer<'info>,
}

pub fn handle_set_cooldown_time(
    ctx: Context<SetCooldownTime>,
    cooldown_seconds: u64,
) -> Result<()> {
    let faucet = &mut ctx.accounts.faucet;
    let caller = ctx.accounts.authority.key();

    let previous_cooldown_seconds = faucet.set_cooldown_time(&caller, cooldown_seconds)?;

    msg!("cooldown: {}s -> {}s", previous_cooldown_seconds, cooldown_seconds);

    emit_cpi!(CooldownTimeUpdated {
        faucet: faucet.key(),
        owner: caller,
        previous_cooldown_seconds,
        cooldown_seconds,
    });

    Ok(())
}

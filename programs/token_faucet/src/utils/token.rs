use anchor_lang::prelude::*;
use anchor_spl::token_interface::{transfer_checked, Mint, TransferChecked};

/// Moves `amount` tokens with `transfer_checked`, which works for both
/// SPL Token and Token 2022. Pass `signer_seeds` when the authority is a PDA.
///
/// A zero amount issues no CPI.
pub fn transfer_token<'a>(
    authority: AccountInfo<'a>,
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: &InterfaceAccount<'a, Mint>,
    token_program: AccountInfo<'a>,
    amount: u64,
    signer_seeds: Option<&[&[&[u8]]]>,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let cpi_accounts = TransferChecked {
        from,
        mint: mint.to_account_info(),
        to,
        authority,
    };

    let cpi_ctx = match signer_seeds {
        Some(seeds) => CpiContext::new_with_signer(token_program, cpi_accounts, seeds),
        None => CpiContext::new(token_program, cpi_accounts),
    };

    transfer_checked(cpi_ctx, amount, mint.decimals)
}

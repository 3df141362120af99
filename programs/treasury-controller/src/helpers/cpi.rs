use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self as token_interface, Mint, TokenAccount, TokenInterface};

use crate::errors::ErrorCode;
use crate::helpers::pda::StateSigner;

/// Move lamports out of the program-owned state account.
///
/// The state account carries data, so the System Program cannot debit it;
/// balances are adjusted directly. Both sides are checked before either is
/// written.
pub fn transfer_from_state<'info>(
    state: &AccountInfo<'info>,
    destination: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 || state.key == destination.key {
        return Ok(());
    }

    require!(state.get_lamports() >= amount, ErrorCode::MathOverflow);
    require!(
        destination.get_lamports().checked_add(amount).is_some(),
        ErrorCode::MathOverflow
    );

    state.sub_lamports(amount)?;
    destination.add_lamports(amount)?;
    Ok(())
}

/// The holding token account must have delegated at least `tokens` to the
/// state PDA and actually hold them.
pub fn check_delegation(
    delegate: Option<Pubkey>,
    delegated_amount: u64,
    balance: u64,
    state: &Pubkey,
    tokens: u64,
) -> Result<()> {
    require!(delegate == Some(*state), ErrorCode::InsufficientDelegation);
    require!(delegated_amount >= tokens, ErrorCode::InsufficientDelegation);
    require!(balance >= tokens, ErrorCode::InsufficientDelegation);
    Ok(())
}

/// Burn `amount` from the holding token account using the allowance it
/// delegated to the state PDA.
#[inline(never)]
pub fn burn_delegated<'info>(
    token_program: &Interface<'info, TokenInterface>,
    mint: &InterfaceAccount<'info, Mint>,
    holding_token_account: &InterfaceAccount<'info, TokenAccount>,
    state: &AccountInfo<'info>,
    signer: &StateSigner,
    amount: u64,
) -> Result<()> {
    msg!(
        "Burning {} units of {} from {} (state index {})",
        amount,
        signer.mint(),
        holding_token_account.key(),
        signer.index()
    );

    let seeds = signer.seeds();

    token_interface::burn(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            token_interface::Burn {
                mint: mint.to_account_info(),
                from: holding_token_account.to_account_info(),
                authority: state.clone(),
            },
            &[&seeds[..]],
        ),
        amount,
    )
}

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::errors::ErrorCode;
use crate::state::*;

// ACCOUNTS - Instruction account validation structs

/// RegisterState - Create the controller state PDA for a mint
///
/// `init` fails if the PDA already exists, so a mint/index pair can only be
/// registered once.
#[derive(Accounts)]
#[instruction(index: u8)]
pub struct RegisterState<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    #[account(
        init,
        payer = payer,
        space = 8 + State::LEN,
        seeds = [STATE_SEED, mint.key().as_ref(), &[index]],
        bump
    )]
    pub state: Account<'info, State>,
    pub mint: InterfaceAccount<'info, Mint>,
    pub system_program: Program<'info, System>,
}

/// UpdateState - Replace the full configuration (update authority only)
#[derive(Accounts)]
pub struct UpdateState<'info> {
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [STATE_SEED, state.mint.as_ref(), &[state.index]],
        bump = state.bump
    )]
    pub state: Account<'info, State>,
}

/// UpdatePrice - Replace the price only (update authority only)
#[derive(Accounts)]
pub struct UpdatePrice<'info> {
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [STATE_SEED, state.mint.as_ref(), &[state.index]],
        bump = state.bump
    )]
    pub state: Account<'info, State>,
}

/// AllocateYield - Permissionless crank
///
/// Every destination is pinned to the addresses stored in the state, so the
/// caller only chooses who pays the transaction fee.
#[derive(Accounts)]
pub struct AllocateYield<'info> {
    pub payer: Signer<'info>,
    #[account(
        mut,
        seeds = [STATE_SEED, state.mint.as_ref(), &[state.index]],
        bump = state.bump
    )]
    pub state: Account<'info, State>,
    /// Mutable because burning reduces supply
    #[account(mut, address = state.mint @ ErrorCode::InvalidMint)]
    pub mint: InterfaceAccount<'info, Mint>,
    /// CHECK: Any account; must match state.treasury
    #[account(mut, address = state.treasury @ ErrorCode::InvalidTreasury)]
    pub treasury: UncheckedAccount<'info>,
    /// CHECK: Any account; must match state.holding_account
    #[account(mut, address = state.holding_account @ ErrorCode::InvalidHoldingAccount)]
    pub holding_account: UncheckedAccount<'info>,
    #[account(
        mut,
        address = state.holding_token_account @ ErrorCode::InvalidHoldingTokenAccount,
        constraint = holding_token_account.mint == state.mint @ ErrorCode::InvalidHoldingTokenAccount
    )]
    pub holding_token_account: InterfaceAccount<'info, TokenAccount>,
    pub token_program: Interface<'info, TokenInterface>,
    pub rent: Sysvar<'info, Rent>,
}

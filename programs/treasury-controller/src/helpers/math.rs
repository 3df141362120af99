use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::ErrorCode;
use crate::state::State;

/// Outcome of one allocation cycle, computed before any funds move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocationPlan {
    /// Spendable lamports found on the state account
    pub available: u64,
    /// Lamports sent to the holding account
    pub purchase_amount: u64,
    /// Lamports sent to the treasury
    pub treasury_amount: u64,
    /// Token base units burned from the holding token account
    pub tokens_to_burn: u64,
}

/// Lamports above the rent reserve. The reserve is never spent.
pub fn spendable_balance(lamports: u64, rent_reserve: u64) -> u64 {
    lamports.saturating_sub(rent_reserve)
}

/// Split `available` into (purchase, treasury).
///
/// purchase = floor(available * bps / 10000), treasury takes the rest, so the
/// two always sum to `available`.
pub fn split_allocation(available: u64, purchase_proportion_bps: u16) -> Result<(u64, u64)> {
    require!(
        purchase_proportion_bps <= BPS_DENOMINATOR,
        ErrorCode::InvalidPurchaseProportion
    );

    let purchase = (available as u128)
        .checked_mul(purchase_proportion_bps as u128)
        .ok_or(ErrorCode::MathOverflow)?
        / BPS_DENOMINATOR as u128;
    let purchase = u64::try_from(purchase).map_err(|_| ErrorCode::MathOverflow)?;
    let treasury = available.checked_sub(purchase).ok_or(ErrorCode::MathOverflow)?;

    Ok((purchase, treasury))
}

/// Token base units bought by `lamports` at `price`.
///
/// Price is native whole units per whole token scaled by 10^PRICE_DECIMALS:
/// tokens = lamports * 10^decimals * 10^PRICE_DECIMALS / (price * 10^NATIVE_DECIMALS)
/// Rounds down. Any mint decimals are supported, including more than 9.
pub fn tokens_for_lamports(lamports: u64, price: u64, decimals: u8) -> Result<u64> {
    require!(price > 0, ErrorCode::DivisionByZero);

    let token_unit = 10u128
        .checked_pow(decimals as u32)
        .ok_or(ErrorCode::MathOverflow)?;

    let numerator = (lamports as u128)
        .checked_mul(token_unit)
        .and_then(|n| n.checked_mul(PRICE_SCALE as u128))
        .ok_or(ErrorCode::MathOverflow)?;
    let denominator = (price as u128)
        .checked_mul(LAMPORTS_PER_NATIVE as u128)
        .ok_or(ErrorCode::MathOverflow)?;

    #[cfg(feature = "verbose")]
    msg!("tokens_for_lamports: numerator={}, denominator={}", numerator, denominator);

    let tokens = numerator
        .checked_div(denominator)
        .ok_or(ErrorCode::DivisionByZero)?;

    u64::try_from(tokens).map_err(|_| error!(ErrorCode::MathOverflow))
}

/// Decide what one crank does with `available` spendable lamports.
///
/// Returns `None` when there is nothing to do: nothing spendable or less than
/// the purchase threshold.
pub fn plan_allocation(state: &State, available: u64, decimals: u8) -> Result<Option<AllocationPlan>> {
    if available == 0 || available < state.purchase_threshold {
        return Ok(None);
    }

    let (purchase_amount, treasury_amount) =
        split_allocation(available, state.purchase_proportion_bps)?;
    let tokens_to_burn = tokens_for_lamports(purchase_amount, state.price, decimals)?;

    #[cfg(feature = "verbose")]
    msg!(
        "plan_allocation: available={}, purchase={}, treasury={}, tokens={}",
        available, purchase_amount, treasury_amount, tokens_to_burn
    );

    Ok(Some(AllocationPlan {
        available,
        purchase_amount,
        treasury_amount,
        tokens_to_burn,
    }))
}

/// Split a token amount into whole and fractional parts for readable logs
pub fn format_tokens(amount: u64, decimals: u8) -> (u64, u64) {
    let unit = 10u64.saturating_pow(decimals as u32);
    (amount / unit, amount % unit)
}

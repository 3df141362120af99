use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod state;

mod formal_verification;

pub use constants::*;
pub use contexts::*;
pub use errors::ErrorCode;
pub use events::*;
pub use helpers::*;
pub use state::*;

declare_id!("stcGmoLCBsr2KSu2vvcSuqMiEZx36F32ySUtCXjab5B");

#[program]
pub mod treasury_controller {
    use super::*;

    pub fn register_state(ctx: Context<RegisterState>, index: u8, config: StateConfig) -> Result<()> {
        let mint = ctx.accounts.mint.key();
        let state = &mut ctx.accounts.state;
        config.ensure_destinations(&state.key())?;
        state.initialize(mint, index, ctx.bumps.state, &config)?;

        msg!(
            "Registered state {} for mint {} (index {})",
            state.key(),
            mint,
            index
        );
        msg!(
            "Price: {}, proportion: {} bps, threshold: {} lamports",
            state.price,
            state.purchase_proportion_bps,
            state.purchase_threshold
        );

        emit!(StateRegistered {
            state: state.key(),
            mint,
            index,
            update_authority: state.update_authority,
            treasury: state.treasury,
            price: state.price,
            purchase_proportion_bps: state.purchase_proportion_bps,
            purchase_threshold: state.purchase_threshold,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }

    pub fn update_state(ctx: Context<UpdateState>, config: StateConfig) -> Result<()> {
        let state = &mut ctx.accounts.state;
        state.ensure_authority(&ctx.accounts.authority.key())?;

        config.ensure_destinations(&state.key())?;

        let previous = state.config();
        state.apply_config(&config)?;

        if previous == config {
            msg!("State {} configuration unchanged", state.key());
        } else {
            msg!("State {} configuration replaced", state.key());
        }

        emit!(StateUpdated {
            state: state.key(),
            old_authority: previous.update_authority,
            new_authority: state.update_authority,
            treasury: state.treasury,
            price: state.price,
            purchase_proportion_bps: state.purchase_proportion_bps,
            purchase_threshold: state.purchase_threshold,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }

    pub fn update_price(ctx: Context<UpdatePrice>, price: u64) -> Result<()> {
        let state = &mut ctx.accounts.state;
        state.ensure_authority(&ctx.accounts.authority.key())?;

        let old_price = state.set_price(price)?;

        msg!("Price updated: {} -> {}", old_price, price);

        emit!(PriceUpdated {
            state: state.key(),
            old_price,
            new_price: price,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }

    /// Permissionless crank: split the state's spendable lamports between the
    /// holding account (burning the equivalent tokens) and the treasury.
    pub fn allocate_yield(ctx: Context<AllocateYield>) -> Result<()> {
        let clock = Clock::get()?;
        let state_info = ctx.accounts.state.to_account_info();
        let state_key = state_info.key();

        let rent_reserve = ctx.accounts.rent.minimum_balance(state_info.data_len());
        let available = spendable_balance(state_info.lamports(), rent_reserve);

        let decimals = ctx.accounts.mint.decimals;
        let plan = match plan_allocation(&ctx.accounts.state, available, decimals)? {
            Some(plan) => plan,
            None => {
                msg!(
                    "Nothing to allocate: {} available, threshold {}",
                    available,
                    ctx.accounts.state.purchase_threshold
                );
                emit!(AllocationSkipped {
                    state: state_key,
                    available,
                    purchase_threshold: ctx.accounts.state.purchase_threshold,
                    timestamp: clock.unix_timestamp,
                });
                return Ok(());
            }
        };

        msg!("Available amount: {}", plan.available);
        msg!("Purchase proportion: {} bps", ctx.accounts.state.purchase_proportion_bps);
        msg!("Amount used for token purchase: {}", plan.purchase_amount);

        if plan.tokens_to_burn > 0 {
            let holding = &ctx.accounts.holding_token_account;
            check_delegation(
                holding.delegate.into(),
                holding.delegated_amount,
                holding.amount,
                &state_key,
                plan.tokens_to_burn,
            )?;

            let signer = StateSigner::from_state(state_key, &ctx.accounts.state);
            burn_delegated(
                &ctx.accounts.token_program,
                &ctx.accounts.mint,
                &ctx.accounts.holding_token_account,
                &state_info,
                &signer,
                plan.tokens_to_burn,
            )?;

            let (whole, frac) = format_tokens(plan.tokens_to_burn, decimals);
            msg!(
                "Burned {}.{:0width$} tokens ({} units)",
                whole,
                frac,
                plan.tokens_to_burn,
                width = decimals as usize
            );
        }

        transfer_from_state(
            &state_info,
            &ctx.accounts.treasury.to_account_info(),
            plan.treasury_amount,
        )?;
        transfer_from_state(
            &state_info,
            &ctx.accounts.holding_account.to_account_info(),
            plan.purchase_amount,
        )?;
        msg!("Sent {} to treasury", plan.treasury_amount);

        let state = &mut ctx.accounts.state;
        let total_spent = state.record_spend(plan.purchase_amount)?;

        emit!(YieldAllocated {
            state: state_key,
            available: plan.available,
            purchase_amount: plan.purchase_amount,
            treasury_amount: plan.treasury_amount,
            tokens_burned: plan.tokens_to_burn,
            price: state.price,
            total_spent,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}

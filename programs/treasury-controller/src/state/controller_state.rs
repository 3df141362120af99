use anchor_lang::prelude::*;

use crate::constants::BPS_DENOMINATOR;
use crate::errors::ErrorCode;

/// Configuration written by both `register_state` and `update_state`.
///
/// Every field is replaced on each call; there is no partial variant.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct StateConfig {
    /// Identity allowed to update configuration and price
    pub update_authority: Pubkey,

    /// Receives the non-purchase share of each allocation
    pub treasury: Pubkey,

    /// Receives the purchase share of each allocation (native currency)
    pub holding_account: Pubkey,

    /// Token account that delegated burn authority to the state PDA
    pub holding_token_account: Pubkey,

    /// Native whole units per whole token, scaled by 10^PRICE_DECIMALS
    pub price: u64,

    /// Share of each allocation routed to purchases, in basis points
    pub purchase_proportion_bps: u16,

    /// Minimum spendable lamports before an allocation acts
    pub purchase_threshold: u64,
}

impl StateConfig {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.purchase_proportion_bps <= BPS_DENOMINATOR,
            ErrorCode::InvalidPurchaseProportion
        );
        require!(self.price > 0, ErrorCode::InvalidPrice);
        Ok(())
    }

    /// Neither payout may land back on the state account at `state`;
    /// those lamports would be split again on the next allocation.
    pub fn ensure_destinations(&self, state: &Pubkey) -> Result<()> {
        require_keys_neq!(self.treasury, *state, ErrorCode::InvalidTreasury);
        require_keys_neq!(self.holding_account, *state, ErrorCode::InvalidHoldingAccount);
        Ok(())
    }
}

/// Controller state for one mint
///
/// Holds the allocation configuration and the running purchase total.
/// Lamports deposited to this account above its rent reserve are what
/// `allocate_yield` splits.
///
/// PDA Seeds: ["state", mint, [index]]
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct State {
    /// Identity allowed to update configuration and price
    pub update_authority: Pubkey,

    /// Destination of the non-purchase share
    pub treasury: Pubkey,

    /// Target token mint; fixed at registration
    pub mint: Pubkey,

    /// Native-currency destination of the purchase share
    pub holding_account: Pubkey,

    /// Token account burned from through its delegation to this PDA
    pub holding_token_account: Pubkey,

    /// Native whole units per whole token, scaled by 10^PRICE_DECIMALS
    pub price: u64,

    /// Minimum spendable lamports before an allocation acts
    pub purchase_threshold: u64,

    /// Lifetime lamports routed to the holding account
    pub total_spent: u64,

    /// Share routed to purchases, in basis points
    pub purchase_proportion_bps: u16,

    /// Configuration discriminator (third PDA seed)
    pub index: u8,

    /// PDA bump seed
    pub bump: u8,

    /// Reserved for future use
    pub _reserved: [u8; 32],
}

impl State {
    /// Account size calculation:
    /// - 5 Pubkeys: 32 * 5 = 160 bytes (update_authority, treasury, mint,
    ///   holding_account, holding_token_account)
    /// - 3 u64: 8 * 3 = 24 bytes (price, purchase_threshold, total_spent)
    /// - 1 u16: 2 bytes (purchase_proportion_bps)
    /// - 2 u8: 2 bytes (index, bump)
    /// - _reserved: 32 bytes
    /// Total: 160 + 24 + 2 + 2 + 32 = 220 bytes
    pub const LEN: usize = 32 * 5 + 8 * 3 + 2 + 1 * 2 + 32;

    /// Seeds the freshly created account. `total_spent` starts at zero.
    pub fn initialize(&mut self, mint: Pubkey, index: u8, bump: u8, config: &StateConfig) -> Result<()> {
        config.validate()?;

        self.mint = mint;
        self.index = index;
        self.bump = bump;
        self.total_spent = 0;
        self.write_config(config);
        Ok(())
    }

    pub fn ensure_authority(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(*signer, self.update_authority, ErrorCode::UnauthorizedAccess);
        Ok(())
    }

    /// Replaces every configurable field, or none of them.
    /// `mint`, `index`, `bump` and `total_spent` are never touched.
    pub fn apply_config(&mut self, config: &StateConfig) -> Result<()> {
        config.validate()?;
        self.write_config(config);
        Ok(())
    }

    /// Returns the previous price.
    pub fn set_price(&mut self, price: u64) -> Result<u64> {
        require!(price > 0, ErrorCode::InvalidPrice);
        let old_price = self.price;
        self.price = price;
        Ok(old_price)
    }

    /// Adds a completed purchase to the lifetime total and returns the new total.
    pub fn record_spend(&mut self, purchase_amount: u64) -> Result<u64> {
        self.total_spent = self
            .total_spent
            .checked_add(purchase_amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(self.total_spent)
    }

    pub fn config(&self) -> StateConfig {
        StateConfig {
            update_authority: self.update_authority,
            treasury: self.treasury,
            holding_account: self.holding_account,
            holding_token_account: self.holding_token_account,
            price: self.price,
            purchase_proportion_bps: self.purchase_proportion_bps,
            purchase_threshold: self.purchase_threshold,
        }
    }

    fn write_config(&mut self, config: &StateConfig) {
        self.update_authority = config.update_authority;
        self.treasury = config.treasury;
        self.holding_account = config.holding_account;
        self.holding_token_account = config.holding_token_account;
        self.price = config.price;
        self.purchase_proportion_bps = config.purchase_proportion_bps;
        self.purchase_threshold = config.purchase_threshold;
    }
}

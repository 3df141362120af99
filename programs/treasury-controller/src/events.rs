use anchor_lang::prelude::*;

// ══════════════════════════════════════════════════════════════════════════════
// CONFIGURATION EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted when a controller state is registered for a mint
#[event]
pub struct StateRegistered {
    pub state: Pubkey,
    pub mint: Pubkey,
    pub index: u8,
    pub update_authority: Pubkey,
    pub treasury: Pubkey,
    pub price: u64,
    pub purchase_proportion_bps: u16,
    pub purchase_threshold: u64,
    pub timestamp: i64,
}

/// Emitted when the full configuration is replaced
#[event]
pub struct StateUpdated {
    pub state: Pubkey,
    pub old_authority: Pubkey,
    pub new_authority: Pubkey,
    pub treasury: Pubkey,
    pub price: u64,
    pub purchase_proportion_bps: u16,
    pub purchase_threshold: u64,
    pub timestamp: i64,
}

/// Emitted on a price-only update
#[event]
pub struct PriceUpdated {
    pub state: Pubkey,
    pub old_price: u64,
    pub new_price: u64,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// ALLOCATION EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted when a crank moves funds
#[event]
pub struct YieldAllocated {
    pub state: Pubkey,
    pub available: u64,
    pub purchase_amount: u64,
    pub treasury_amount: u64,
    pub tokens_burned: u64,
    pub price: u64,
    pub total_spent: u64,
    pub timestamp: i64,
}

/// Emitted when a crank finds less than the purchase threshold
#[event]
pub struct AllocationSkipped {
    pub state: Pubkey,
    pub available: u64,
    pub purchase_threshold: u64,
    pub timestamp: i64,
}

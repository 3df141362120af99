// ══════════════════════════════════════════════════════════════════════════════
// PDA SEEDS
// ══════════════════════════════════════════════════════════════════════════════

/// Namespace tag for controller state PDAs: ["state", mint, [index]]
pub const STATE_SEED: &[u8] = b"state";

/// Configuration discriminator used by the reference deployment
#[cfg(test)]
pub const DEFAULT_STATE_INDEX: u8 = 0;

// ══════════════════════════════════════════════════════════════════════════════
// FIXED-POINT PARAMETERS
// ══════════════════════════════════════════════════════════════════════════════

/// 100% expressed in basis points
pub const BPS_DENOMINATOR: u16 = 10_000;

/// Decimal places carried by `State::price` (native whole units per whole token)
pub const PRICE_DECIMALS: u32 = 9;

/// 10^PRICE_DECIMALS
pub const PRICE_SCALE: u64 = 1_000_000_000;

/// Lamports carry 9 decimals
pub const NATIVE_DECIMALS: u32 = 9;

/// 10^NATIVE_DECIMALS
pub const LAMPORTS_PER_NATIVE: u64 = 1_000_000_000;

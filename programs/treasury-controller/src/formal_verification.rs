// ============================================================================
// FORMAL VERIFICATION & PROPERTY-BASED TESTS
// ============================================================================
//
// Run with: cargo test --lib formal_verification
//
// This module implements:
// 1. Core invariants (conservation, bounds, monotonic totals)
// 2. Deterministic fuzzing over edge-case input grids
// 3. A simulated ledger that replays the allocation crank end to end
// ============================================================================

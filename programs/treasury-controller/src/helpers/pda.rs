use anchor_lang::prelude::*;

use crate::constants::STATE_SEED;
use crate::state::State;

/// Derive the controller state address for `mint` under `program_id`.
///
/// Pure: the same inputs always give the same `(address, bump)`, and the
/// address is off-curve so only the program can sign for it.
pub fn derive_state_address(program_id: &Pubkey, mint: &Pubkey, index: u8) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STATE_SEED, mint.as_ref(), &[index]], program_id)
}

/// Proof that `address` is the state PDA for `mint`/`index`.
///
/// The only source of PDA signer seeds in the program; whoever holds one may
/// authorize transfers up to the allowance delegated to `address`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateSigner {
    pub address: Pubkey,
    pub bump: u8,
    mint: Pubkey,
    index: [u8; 1],
    bump_seed: [u8; 1],
}

impl StateSigner {
    pub fn derive(program_id: &Pubkey, mint: &Pubkey, index: u8) -> Self {
        let (address, bump) = derive_state_address(program_id, mint, index);
        Self::new(address, *mint, index, bump)
    }

    /// Build from a state account whose seeds Anchor already verified.
    pub fn from_state(address: Pubkey, state: &State) -> Self {
        Self::new(address, state.mint, state.index, state.bump)
    }

    fn new(address: Pubkey, mint: Pubkey, index: u8, bump: u8) -> Self {
        Self {
            address,
            bump,
            mint,
            index: [index],
            bump_seed: [bump],
        }
    }

    pub fn mint(&self) -> &Pubkey {
        &self.mint
    }

    pub fn index(&self) -> u8 {
        self.index[0]
    }

    /// Seeds for `invoke_signed` / `CpiContext::new_with_signer`
    pub fn seeds(&self) -> [&[u8]; 4] {
        [STATE_SEED, self.mint.as_ref(), &self.index, &self.bump_seed]
    }
}

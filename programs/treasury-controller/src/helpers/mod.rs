pub mod cpi;
pub mod math;
pub mod pda;

pub use cpi::*;
pub use math::*;
pub use pda::*;

pub mod controller_state;

pub use controller_state::*;

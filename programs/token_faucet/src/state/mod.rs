pub mod faucet_state;
pub mod claim_state;

pub use faucet_state::*;
pub use claim_state::*;

pub mod create_faucet;
pub mod deposit_funds;
pub mod claim_tokens;
pub mod withdraw_funds;
pub mod set_claim_amount;
pub mod set_cooldown_time;

pub use create_faucet::*;
pub use deposit_funds::*;
pub use claim_tokens::*;
pub use withdraw_funds::*;
pub use set_claim_amount::*;
pub use set_cooldown_time::*;

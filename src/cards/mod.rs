pub mod card;
pub use card::*;

pub mod deal;
pub use deal::*;

pub mod error;
pub use error::*;

pub mod evaluator;
pub use evaluator::*;

pub mod hand;
pub use hand::*;

pub mod kicks;
pub use kicks::*;

pub mod mode;
pub use mode::*;

pub mod rank;
pub use rank::*;

pub mod ranking;
pub use ranking::*;

pub mod strength;
pub use strength::*;

pub mod suit;
pub use suit::*;

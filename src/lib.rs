pub mod application;
pub mod domain;
pub mod error;
pub mod interfaces;

pub use application::formatter::spell_dollars_and_cents;
pub use domain::amount::DollarAmount;
pub use domain::english::to_english;
pub use error::{Result, SpellError};

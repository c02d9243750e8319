mod action;
pub use action::*;

mod amount;
pub use amount::*;

mod app_state;
pub use app_state::*;

mod error;
pub use error::*;

mod base64;
pub use base64::*;

mod transaction;
pub use transaction::*;

mod api;
pub use api::*;

mod donate;
pub use donate::*;

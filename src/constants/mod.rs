mod donate;
pub use donate::*;

mod logging;
pub use logging::*;

mod server;
pub use server::*;

mod solana;
pub use solana::*;

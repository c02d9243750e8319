//! The donate action pipeline: resolve the request, build the transfer,
//! encode the unsigned transaction.

mod builder;
pub use builder::*;

mod metadata;
pub use metadata::*;

mod resolver;
pub use resolver::*;

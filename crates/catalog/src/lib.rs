//! Data model of the portfolio backend collections and the pure helpers the
//! admin dashboard needs around them. The backend itself is external.

mod guard;
mod model;
mod storage;

pub use guard::*;
pub use model::*;
pub use storage::*;

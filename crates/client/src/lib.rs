pub mod copy;
mod modal;
mod relay;
mod status;

pub use modal::*;
pub use relay::*;
pub use status::*;

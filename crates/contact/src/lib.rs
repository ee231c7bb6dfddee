mod email;
mod submission;

pub use email::*;
pub use submission::*;

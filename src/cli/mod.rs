mod check;
mod server;

pub use check::check_config;
pub use server::serve;

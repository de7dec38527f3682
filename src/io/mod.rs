pub mod auth;
pub mod console;
pub mod fs_ops;

pub use console::Console;

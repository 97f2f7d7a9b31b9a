pub mod config;
pub mod list;
pub mod task;
pub mod view;

pub use config::*;
pub use list::*;
pub use task::*;
pub use view::*;

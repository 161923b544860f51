//! HTTP controllers for handling requests

pub mod files;
pub mod items;
pub mod models;
pub mod root;

pub use files::*;
pub use items::*;
pub use models::*;
pub use root::*;

mod api;
mod pages;

pub use api::{download, extract};
pub use pages::{generate, index, update};

//! Public page model, HTML rendering and the controller that keeps them in
//! sync with storage

pub mod controller;
pub mod export;
pub mod page;
pub mod prompt;
pub mod render;

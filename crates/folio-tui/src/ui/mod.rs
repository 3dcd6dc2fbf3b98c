//! UI rendering module.

mod document;
mod render;

pub use render::render;

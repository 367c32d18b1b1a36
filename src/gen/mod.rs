//! Character pool resolution and random string generation.

pub mod charset;
mod sample;

pub use charset::{Categories, resolve};
pub use sample::sample;

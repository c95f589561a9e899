pub mod ciphertext;
pub mod conversion;
pub mod encryption;
pub mod extraction;
pub mod operations;
pub mod params;
pub mod secret;

pub use ciphertext::*;
pub use params::*;
pub use secret::*;

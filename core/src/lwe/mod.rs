pub mod ciphertext;
pub mod decryption;
pub mod encryption;
pub mod keyswitch;
pub mod operations;
pub mod params;
pub mod secret;

pub use ciphertext::*;
pub use keyswitch::*;
pub use params::*;
pub use secret::*;

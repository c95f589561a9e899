pub mod error;
pub mod keys;
pub mod lwe;
pub mod parameters;
pub mod tlwe;

pub use error::{ConfigurationError, Error, Result};
pub use keys::*;
pub use lwe::{ciphertext::*, keyswitch::*, params::*, secret::*};
pub use parameters::*;
pub use tlwe::{ciphertext::*, params::*, secret::*};

pub use backend::{Backend, Executor, FFT64, Module, NTT, Torus32, TransformType};

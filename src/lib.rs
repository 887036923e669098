//! Textcloak - reversible text obfuscation pipeline
//!
//! A key is an ordered list of classical transformations. Encryption applies
//! them in order; decryption applies each inverse in reverse order.
//!
//! ## Transformations
//!
//! - **Caesar**: shift every codepoint by a fixed integer
//! - **Reverse**: reverse codepoint order
//! - **Vigenère**: shift by the codepoints of a cycling key string
//!
//! All shifts are taken modulo [`pipeline::MODULUS`] (0xD7FF) so results stay
//! below the surrogate range. Codepoints at or above the modulus pass through
//! unchanged.
//!
//! ## Example
//!
//! ```
//! use textcloak::{decrypt, encrypt, TransformationList, TransformationStep};
//!
//! let steps: TransformationList = vec![
//!     TransformationStep::caesar(3),
//!     TransformationStep::reverse(),
//! ]
//! .into();
//!
//! let cipher = encrypt("hi", &steps).unwrap();
//! assert_eq!(cipher, "lk");
//! assert_eq!(decrypt(&cipher, &steps).unwrap(), "hi");
//! ```

pub mod builder;
pub mod chain;
pub mod cli;
pub mod error;
pub mod keyfile;
pub mod pipeline;
pub mod step;

pub use chain::{decrypt, encrypt};
pub use error::{CloakError, Result};
pub use keyfile::{parse_key_list, read_key_file, write_key_file, TransformationDescriptor};
pub use step::{TransformationKind, TransformationList, TransformationStep};

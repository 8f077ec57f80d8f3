mod bip32;
mod error;
mod murmur;
mod siphash;

pub use bip32::bip32_hash;
pub use error::{ErrorCode, HashError};
pub use murmur::murmur3_32;
pub use siphash::{siphash_u256, siphash_u256_extra, SipHasher};

use hmac::{Hmac, Mac};
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// Hierarchical-deterministic child hash: HMAC-SHA512 keyed by the chain
/// code over `header || key[32] || be32(child_index)` (37 bytes).
///
/// The 64-byte output is returned uninterpreted; callers split it into the
/// child key half and the chain-code half.
pub fn bip32_hash(chain_code: &[u8; 32], child_index: u32, header: u8, key: &[u8; 32]) -> [u8; 64] {
    let mut mac = HmacSha512::new_from_slice(chain_code).expect("HMAC accepts any key length");
    mac.update(&[header]);
    mac.update(key);
    mac.update(&child_index.to_be_bytes());

    let out = mac.finalize().into_bytes();
    let mut r = [0u8; 64];
    r.copy_from_slice(&out);
    r
}

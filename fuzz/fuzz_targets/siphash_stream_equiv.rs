#![no_main]

use libfuzzer_sys::fuzz_target;
use quarry_hashes::{siphash_u256, siphash_u256_extra, SipHasher};

// Fuzz the unrolled fixed-256 SipHash variants against the streaming state.
// Equivalence here is a consensus-critical property: short-ID computation
// breaks silently if the two paths ever drift.
fuzz_target!(|data: &[u8]| {
    // Need 52 bytes: 8 (k0) + 8 (k1) + 32 (value) + 4 (extra).
    if data.len() < 52 {
        return;
    }

    let k0 = u64::from_le_bytes(data[0..8].try_into().unwrap());
    let k1 = u64::from_le_bytes(data[8..16].try_into().unwrap());
    let mut val = [0u8; 32];
    val.copy_from_slice(&data[16..48]);
    let extra = u32::from_le_bytes(data[48..52].try_into().unwrap());

    let mut h = SipHasher::new(k0, k1);
    h.write(&val);
    let streamed = h.finalize();
    let unrolled = siphash_u256(k0, k1, &val);
    if streamed != unrolled {
        panic!("siphash_u256 diverged: {streamed:016x} != {unrolled:016x}");
    }

    let mut h = SipHasher::new(k0, k1);
    h.write(&val);
    h.write(&extra.to_le_bytes());
    let streamed = h.finalize();
    let unrolled = siphash_u256_extra(k0, k1, &val, extra);
    if streamed != unrolled {
        panic!("siphash_u256_extra diverged: {streamed:016x} != {unrolled:016x}");
    }
});

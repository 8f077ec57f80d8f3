#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz murmur3_32: any seed, any data, no panics, stable output.
fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }

    let seed = u32::from_le_bytes(data[..4].try_into().unwrap());
    let payload = &data[4..];

    let r1 = quarry_hashes::murmur3_32(seed, payload);
    let r2 = quarry_hashes::murmur3_32(seed, payload);

    if r1 != r2 {
        panic!("murmur3_32 non-deterministic: {r1:08x} != {r2:08x}");
    }
});

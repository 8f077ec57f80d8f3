#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz bip32_hash: deterministic over its full input domain, no panics.
fuzz_target!(|data: &[u8]| {
    // Need 69 bytes: 32 (chain code) + 4 (child index) + 1 (header) + 32 (key).
    if data.len() < 69 {
        return;
    }

    let mut chain_code = [0u8; 32];
    chain_code.copy_from_slice(&data[..32]);
    let child_index = u32::from_be_bytes(data[32..36].try_into().unwrap());
    let header = data[36];
    let mut key = [0u8; 32];
    key.copy_from_slice(&data[37..69]);

    let r1 = quarry_hashes::bip32_hash(&chain_code, child_index, header, &key);
    let r2 = quarry_hashes::bip32_hash(&chain_code, child_index, header, &key);

    if r1 != r2 {
        panic!("bip32_hash non-deterministic");
    }
});

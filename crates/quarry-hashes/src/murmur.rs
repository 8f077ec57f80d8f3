/// MurmurHash3 x86_32 over a seeded byte sequence.
///
/// Non-cryptographic; used where a cheap, well-distributed 32-bit index is
/// needed. The tail bytes enter most-significant-available first (offset 2
/// shifted by 16, offset 1 by 8, offset 0 unshifted) and skip the block mix,
/// matching the upstream x86_32 reference exactly.
pub fn murmur3_32(seed: u32, data: &[u8]) -> u32 {
    const C1: u32 = 0xcc9e2d51;
    const C2: u32 = 0x1b873593;

    let mut h1 = seed;

    let mut i = 0usize;
    while i + 4 <= data.len() {
        let mut k1 = u32::from_le_bytes(data[i..i + 4].try_into().expect("4-byte chunk"));

        k1 = k1.wrapping_mul(C1);
        k1 = k1.rotate_left(15);
        k1 = k1.wrapping_mul(C2);

        h1 ^= k1;
        h1 = h1.rotate_left(13);
        h1 = h1.wrapping_mul(5).wrapping_add(0xe6546b64);

        i += 4;
    }

    let tail = &data[i..];
    let mut k1 = 0u32;
    if tail.len() >= 3 {
        k1 ^= (tail[2] as u32) << 16;
    }
    if tail.len() >= 2 {
        k1 ^= (tail[1] as u32) << 8;
    }
    if !tail.is_empty() {
        k1 ^= tail[0] as u32;
        k1 = k1.wrapping_mul(C1);
        k1 = k1.rotate_left(15);
        k1 = k1.wrapping_mul(C2);
        h1 ^= k1;
    }

    h1 ^= data.len() as u32;
    h1 ^= h1 >> 16;
    h1 = h1.wrapping_mul(0x85ebca6b);
    h1 ^= h1 >> 13;
    h1 = h1.wrapping_mul(0xc2b2ae35);
    h1 ^= h1 >> 16;

    h1
}

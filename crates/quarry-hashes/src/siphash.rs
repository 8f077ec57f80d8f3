use crate::error::{ErrorCode, HashError};

fn sip_round(v0: &mut u64, v1: &mut u64, v2: &mut u64, v3: &mut u64) {
    *v0 = v0.wrapping_add(*v1);
    *v1 = v1.rotate_left(13);
    *v1 ^= *v0;
    *v0 = v0.rotate_left(32);

    *v2 = v2.wrapping_add(*v3);
    *v3 = v3.rotate_left(16);
    *v3 ^= *v2;

    *v0 = v0.wrapping_add(*v3);
    *v3 = v3.rotate_left(21);
    *v3 ^= *v0;

    *v2 = v2.wrapping_add(*v1);
    *v1 = v1.rotate_left(17);
    *v1 ^= *v2;
    *v2 = v2.rotate_left(32);
}

/// Incremental SipHash-2-4: two compression rounds per 8-byte word, four
/// finalization rounds. Word boundaries are little-endian; `tmp` holds the
/// pending partial word and always covers exactly `count % 8` bytes.
#[derive(Debug)]
pub struct SipHasher {
    v0: u64,
    v1: u64,
    v2: u64,
    v3: u64,
    count: u64,
    tmp: u64,
}

impl SipHasher {
    pub fn new(k0: u64, k1: u64) -> Self {
        Self {
            v0: 0x736f6d6570736575 ^ k0,
            v1: 0x646f72616e646f6d ^ k1,
            v2: 0x6c7967656e657261 ^ k0,
            v3: 0x7465646279746573 ^ k1,
            count: 0,
            tmp: 0,
        }
    }

    /// Absorb one little-endian 64-bit word.
    ///
    /// Only valid on a word-aligned state: mixing a full word while partial
    /// bytes are pending would reorder the stream, so that is refused with
    /// `HASH_ERR_WORD_ALIGN` instead of corrupting the accumulators.
    pub fn write_u64(&mut self, data: u64) -> Result<&mut Self, HashError> {
        if self.count % 8 != 0 {
            return Err(HashError::new(
                ErrorCode::HashErrWordAlign,
                "siphash: word write with partial bytes pending",
            ));
        }

        self.v3 ^= data;
        sip_round(&mut self.v0, &mut self.v1, &mut self.v2, &mut self.v3);
        sip_round(&mut self.v0, &mut self.v1, &mut self.v2, &mut self.v3);
        self.v0 ^= data;

        self.count += 8;
        Ok(self)
    }

    /// Absorb an arbitrary byte run. Bytes fill the pending word low-order
    /// first; every completed word is compressed exactly like `write_u64`.
    pub fn write(&mut self, data: &[u8]) -> &mut Self {
        let mut t = self.tmp;
        let mut c = self.count;

        for &b in data {
            t |= (b as u64) << (8 * (c % 8));
            c += 1;
            if c % 8 == 0 {
                self.v3 ^= t;
                sip_round(&mut self.v0, &mut self.v1, &mut self.v2, &mut self.v3);
                sip_round(&mut self.v0, &mut self.v1, &mut self.v2, &mut self.v3);
                self.v0 ^= t;
                t = 0;
            }
        }

        self.count = c;
        self.tmp = t;
        self
    }

    /// Compute the 64-bit digest of everything absorbed so far.
    ///
    /// Operates on a copy of the state: the total byte count (low byte) is
    /// packed into the top byte of the last word, then the 0xFF domain
    /// separator and four finalization rounds are applied.
    pub fn finalize(&self) -> u64 {
        let mut v0 = self.v0;
        let mut v1 = self.v1;
        let mut v2 = self.v2;
        let mut v3 = self.v3;

        let t = self.tmp | (self.count << 56);

        v3 ^= t;
        sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
        sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
        v0 ^= t;

        v2 ^= 0xff;
        for _ in 0..4 {
            sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
        }

        v0 ^ v1 ^ v2 ^ v3
    }
}

fn u256_le_limbs(val: &[u8; 32]) -> [u64; 4] {
    let mut limbs = [0u64; 4];
    for (i, limb) in limbs.iter_mut().enumerate() {
        *limb = u64::from_le_bytes(val[i * 8..i * 8 + 8].try_into().expect("8-byte chunk"));
    }
    limbs
}

/// One-shot SipHash-2-4 of a 256-bit little-endian value.
///
/// Unrolled for the hot path; must stay bit-identical to writing the four
/// limbs through `SipHasher` and finalizing (length byte 32).
pub fn siphash_u256(k0: u64, k1: u64, val: &[u8; 32]) -> u64 {
    let [d0, d1, d2, d3] = u256_le_limbs(val);

    let mut v0 = 0x736f6d6570736575 ^ k0;
    let mut v1 = 0x646f72616e646f6d ^ k1;
    let mut v2 = 0x6c7967656e657261 ^ k0;
    let mut v3 = 0x7465646279746573 ^ k1 ^ d0;

    sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
    sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
    v0 ^= d0;
    v3 ^= d1;
    sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
    sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
    v0 ^= d1;
    v3 ^= d2;
    sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
    sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
    v0 ^= d2;
    v3 ^= d3;
    sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
    sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
    v0 ^= d3;

    // Final word is the length tag alone: 32 bytes absorbed.
    let t = 32u64 << 56;
    v3 ^= t;
    sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
    sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
    v0 ^= t;

    v2 ^= 0xff;
    for _ in 0..4 {
        sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
    }

    v0 ^ v1 ^ v2 ^ v3
}

/// One-shot SipHash-2-4 of a 256-bit little-endian value followed by one
/// 32-bit word, as a logical 36-byte message.
///
/// The extra word occupies the low half of the final word and the length
/// byte (36) its top byte. Must stay bit-identical to the streaming path.
pub fn siphash_u256_extra(k0: u64, k1: u64, val: &[u8; 32], extra: u32) -> u64 {
    let [d0, d1, d2, d3] = u256_le_limbs(val);

    let mut v0 = 0x736f6d6570736575 ^ k0;
    let mut v1 = 0x646f72616e646f6d ^ k1;
    let mut v2 = 0x6c7967656e657261 ^ k0;
    let mut v3 = 0x7465646279746573 ^ k1 ^ d0;

    sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
    sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
    v0 ^= d0;
    v3 ^= d1;
    sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
    sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
    v0 ^= d1;
    v3 ^= d2;
    sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
    sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
    v0 ^= d2;
    v3 ^= d3;
    sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
    sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
    v0 ^= d3;

    let t = (36u64 << 56) | extra as u64;
    v3 ^= t;
    sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
    sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
    v0 ^= t;

    v2 ^= 0xff;
    for _ in 0..4 {
        sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
    }

    v0 ^ v1 ^ v2 ^ v3
}

//! The 64-bit streaming hash used for pile and deck identity (§4.8).
//!
//! Ported from the SeaHash-style mixer in the original solver
//! (`seahash.h`/`seahash.cpp`): four accumulator words, a multiply-shift-xor
//! diffusion step, and length padding on `finish`. Good enough mixing at the
//! ~10⁸-input scale this engine ever hashes (pile byte buffers and streams
//! of per-pile hashes), without claiming cryptographic strength.

const SEED_A: u64 = 0x16f1_1fe8_9b0d_677c;
const SEED_B: u64 = 0xb480_a793_d8e6_c86c;
const SEED_C: u64 = 0x6fe2_e5aa_f078_ebc9;
const SEED_D: u64 = 0x14f9_94a4_c525_9381;
const DIFFUSE_CONST: u64 = 0x6eed_0e9d_a4d9_4a4f;

const fn diffuse(mut val: u64) -> u64 {
    val = val.wrapping_mul(DIFFUSE_CONST);
    let a = val >> 32;
    let b = val >> 60;
    val ^= a >> b;
    val.wrapping_mul(DIFFUSE_CONST)
}

/// A streaming hash state: `push` one 64-bit word at a time, `finish` once.
#[derive(Debug, Clone, Copy)]
pub struct HashPrimitive {
    a: u64,
    b: u64,
    c: u64,
    d: u64,
    written: u64,
}

impl HashPrimitive {
    #[must_use]
    pub const fn new(seed: u32) -> HashPrimitive {
        HashPrimitive {
            a: SEED_A ^ (seed as u64),
            b: SEED_B,
            c: SEED_C,
            d: SEED_D,
            written: 0,
        }
    }

    /// Mixes one 64-bit word into the state and rotates the accumulators.
    pub fn push(&mut self, x: u64) {
        let mixed = diffuse(self.a ^ x);
        self.a = self.b;
        self.b = self.c;
        self.c = self.d;
        self.d = mixed;
        self.written += 8;
    }

    /// Folds the four accumulators (plus the written-byte count, for length
    /// sensitivity) into a single 64-bit digest.
    #[must_use]
    pub fn finish(&self) -> u64 {
        let mut r1 = self.a ^ self.b;
        let r2 = self.c ^ self.d;
        r1 ^= r2;
        r1 ^= self.written;
        diffuse(r1)
    }
}

impl Default for HashPrimitive {
    fn default() -> HashPrimitive {
        HashPrimitive::new(0)
    }
}

/// Hashes a raw byte buffer (a pile's card bytes) to a 64-bit digest.
#[must_use]
pub fn hash_bytes(bytes: &[u8]) -> u64 {
    let mut state = HashPrimitive::new(0);
    let mut chunks = bytes.chunks_exact(8);
    for chunk in &mut chunks {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(chunk);
        state.push(u64::from_le_bytes(buf));
    }
    let rem = chunks.remainder();
    if !rem.is_empty() {
        let mut buf = [0u8; 8];
        buf[..rem.len()].copy_from_slice(rem);
        state.push(u64::from_le_bytes(buf));
    }
    state.finish() ^ bytes.len() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_stable() {
        assert_eq!(hash_bytes(&[]), hash_bytes(&[]));
    }

    #[test]
    fn different_inputs_usually_differ() {
        assert_ne!(hash_bytes(b"abc"), hash_bytes(b"abd"));
        assert_ne!(hash_bytes(b"abc"), hash_bytes(b"abcd"));
    }

    #[test]
    fn push_finish_matches_hash_bytes_for_one_word() {
        let mut state = HashPrimitive::new(0);
        state.push(42);
        let direct = state.finish() ^ 8;
        assert_eq!(direct, hash_bytes(&42u64.to_le_bytes()));
    }

    #[test]
    fn length_sensitive() {
        // Same leading bytes, different trailing zero-padding length.
        assert_ne!(hash_bytes(&[1, 2, 3]), hash_bytes(&[1, 2, 3, 0]));
    }
}

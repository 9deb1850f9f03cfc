//! SHA-256 over a complete in-memory message.
//!
//! The message is padded into whole 512-bit blocks, each block is expanded
//! into a 64-word schedule and folded into the running state by the
//! 64-round compression function. Every call starts from [`H0`] with its
//! own state, so concurrent calls never share anything mutable.

use crate::types::{Digest, BLOCK_SIZE};

/// Round constants: first 32 bits of the fractional parts of the cube
/// roots of the first 64 primes
pub(crate) const K: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// Initial hash state: first 32 bits of the fractional parts of the square
/// roots of the first 8 primes
pub(crate) const H0: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// Bytes reserved at the end of the final block for the bit length
const LENGTH_FIELD: usize = 8;

/// Hash a complete message.
///
/// Infallible for every byte sequence, including the empty one.
pub fn hash(message: &[u8]) -> Digest {
    let padded = pad(message);
    let mut state = H0;

    for block in padded.chunks_exact(BLOCK_SIZE) {
        let schedule = expand_schedule(block);
        compress(&mut state, &schedule);
    }

    Digest::from_words(state)
}

/// Hash a message and render the digest as 64 lowercase hex characters
pub fn hash_hex(message: &[u8]) -> String {
    hash(message).to_hex()
}

/// Length in bytes of `message_len` bytes after padding.
///
/// A message whose length mod 64 is in `56..64` has no room left for the
/// `0x80` marker plus the length field and spills into one extra block.
pub fn padded_len(message_len: usize) -> usize {
    (message_len + LENGTH_FIELD) / BLOCK_SIZE * BLOCK_SIZE + BLOCK_SIZE
}

/// Apply SHA-256 padding: a single `1` bit, zero bits, then the original
/// bit length as a 64-bit big-endian integer. The result is always a
/// whole number of 64-byte blocks.
pub fn pad(message: &[u8]) -> Vec<u8> {
    let total = padded_len(message.len());
    let bit_len = (message.len() as u64).wrapping_mul(8);

    let mut padded = Vec::with_capacity(total);
    padded.extend_from_slice(message);
    padded.push(0x80);
    padded.resize(total - LENGTH_FIELD, 0);
    padded.extend_from_slice(&bit_len.to_be_bytes());

    debug_assert_eq!(padded.len() % BLOCK_SIZE, 0);
    padded
}

/// Expand one 64-byte block into the 64-word message schedule
pub(crate) fn expand_schedule(block: &[u8]) -> [u32; 64] {
    debug_assert_eq!(block.len(), BLOCK_SIZE);

    let mut w = [0u32; 64];
    for (word, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in 16..64 {
        w[i] = w[i - 16]
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma1(w[i - 2]));
    }

    w
}

/// Run the 64 compression rounds over one schedule and add the result
/// into `state`
pub(crate) fn compress(state: &mut [u32; 8], w: &[u32; 64]) {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for i in 0..64 {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(K[i])
            .wrapping_add(w[i]);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (s, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *s = s.wrapping_add(v);
    }
}

/// For each bit, pick `y` where `x` is set and `z` where it is clear
#[inline]
pub(crate) fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

/// Bitwise majority of three words
#[inline]
pub(crate) fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

#[inline]
pub(crate) fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline]
pub(crate) fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline]
pub(crate) fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline]
pub(crate) fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

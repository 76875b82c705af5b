/*
 * Copyright (c) 2025 The xxh32 Authors
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * Alternatively, the contents of this file may be used under the terms of
 * the MIT license as described below.
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use super::*;
use core::fmt;

/// xxHash32 primes, as published.
const PRIME32_1: u32 = 0x9E3779B1;
const PRIME32_2: u32 = 0x85EBCA77;
const PRIME32_3: u32 = 0xC2B2AE3D;
const PRIME32_4: u32 = 0x27D4EB2F;
const PRIME32_5: u32 = 0x165667B1;

/// Bytes per block, the granularity at which the accumulators advance.
const BLOCK_LEN: usize = 16;

/// One 4-byte lane per accumulator.
type Lanes = [u32; 4];

#[inline(always)]
fn read_u32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes(bytes[0..4].try_into().unwrap())
}

/// The per-lane mixing step. All arithmetic wraps modulo 2^32 by design.
#[inline(always)]
const fn round(acc: u32, lane: u32) -> u32 {
    acc.wrapping_add(lane.wrapping_mul(PRIME32_2))
        .rotate_left(13)
        .wrapping_mul(PRIME32_1)
}

/// Mix one full block into the four accumulators, one LE word per lane.
#[inline(always)]
fn mix_block(mut lanes: Lanes, block: &[u8]) -> Lanes {
    lanes[0] = round(lanes[0], read_u32(&block[0..]));
    lanes[1] = round(lanes[1], read_u32(&block[4..]));
    lanes[2] = round(lanes[2], read_u32(&block[8..]));
    lanes[3] = round(lanes[3], read_u32(&block[12..]));
    lanes
}

/// The final xor/shift/multiply cascade that spreads every input bit
/// across the whole output.
#[inline(always)]
const fn avalanche(mut h: u32) -> u32 {
    h ^= h >> 15;
    h = h.wrapping_mul(PRIME32_2);
    h ^= h >> 13;
    h = h.wrapping_mul(PRIME32_3);
    h ^ (h >> 16)
}

/// One-shot xxHash32 of a byte slice.
#[inline]
pub fn hash(bytes: &[u8], seed: u32) -> u32 {
    let mut hasher = Hasher::with_seed(seed);
    hasher.write(bytes);
    hasher.finish()
}

/// One-shot xxHash32 of any [`ByteSource`].
#[inline]
pub fn hash_source(source: ByteSource<'_>, seed: u32) -> u32 {
    let mut hasher = Hasher::with_seed(seed);
    hasher.write_source(source);
    hasher.finish()
}

/// Streamed xxHash32 hasher.
///
/// Input may arrive in pieces of any size; the digest is identical to the
/// one-shot [`hash`] of the concatenated input. Between calls at most 15
/// bytes are buffered, so memory use is constant regardless of stream length.
///
/// [`finish`](Self::finish) takes `&self` and resets nothing: it can be
/// called repeatedly, and writing more afterwards continues the same stream
/// (the digest then covers everything ever written). Use
/// [`reset`](Self::reset) to start a fresh message with the same seed.
#[derive(Clone)]
pub struct Hasher {
    buffer: [u8; BLOCK_LEN],
    buffered_len: usize,
    total_len: u64,

    seed: u32,
    lanes: Lanes,
}

impl Hasher {
    /// Equivalent to [`with_seed(0)`](Self::with_seed).
    pub const fn new() -> Self {
        Self::with_seed(0)
    }

    /// Creates a hasher whose initial accumulators are derived from `seed`.
    pub const fn with_seed(seed: u32) -> Self {
        Self {
            buffer: [0; BLOCK_LEN],
            buffered_len: 0,
            total_len: 0,
            seed,
            lanes: [
                seed.wrapping_add(PRIME32_1).wrapping_add(PRIME32_2),
                seed.wrapping_add(PRIME32_2),
                seed,
                seed.wrapping_sub(PRIME32_1),
            ],
        }
    }

    /// The seed this hasher was created with.
    pub const fn seed(&self) -> u32 {
        self.seed
    }

    /// Total number of bytes written so far, buffered tail included.
    pub const fn total_len(&self) -> u64 {
        self.total_len
    }

    /// Appends `bytes` to the stream.
    pub fn write(&mut self, bytes: &[u8]) {
        self.total_len = self.total_len.wrapping_add(bytes.len() as u64);

        let off = self.buffered_len;
        if unlikely(off + bytes.len() < BLOCK_LEN) {
            self.buffer[off..off + bytes.len()].copy_from_slice(bytes);
            self.buffered_len += bytes.len();
            return;
        }

        let mut lanes = self.lanes;
        let mut rest = bytes;

        if off > 0 {
            // Complete the partial block left over from previous writes.
            let fill = BLOCK_LEN - off;
            self.buffer[off..].copy_from_slice(&rest[..fill]);
            lanes = mix_block(lanes, &self.buffer);
            rest = &rest[fill..];
            self.buffered_len = 0;
        }

        let blocks = rest.chunks_exact(BLOCK_LEN);
        let remainder = blocks.remainder();
        for block in blocks {
            lanes = mix_block(lanes, block);
        }

        self.buffer[..remainder.len()].copy_from_slice(remainder);
        self.buffered_len = remainder.len();

        self.lanes = lanes;
    }

    /// Appends a [`ByteSource`] to the stream.
    ///
    /// Text is fed as one byte per character, truncated to the low 8 bits.
    pub fn write_source(&mut self, source: ByteSource<'_>) {
        match source {
            ByteSource::Binary(bytes) => self.write(bytes),
            ByteSource::Text(text) => {
                // Stage truncated chars through a small stack buffer; the
                // digest is chunking-invariant, so staging is transparent.
                let mut staged = [0u8; 64];
                let mut n = 0;
                for ch in text.chars() {
                    staged[n] = ch as u8;
                    n += 1;
                    if n == staged.len() {
                        self.write(&staged);
                        n = 0;
                    }
                }
                self.write(&staged[..n]);
            }
        }
    }

    /// Computes the digest of everything written so far.
    ///
    /// Read-only: neither accumulators, buffer, nor length are touched, so
    /// repeated calls without intervening writes return the same value.
    pub fn finish(&self) -> u32 {
        let mut h = if unlikely(self.total_len < BLOCK_LEN as u64) {
            self.seed.wrapping_add(PRIME32_5)
        } else {
            self.lanes[0]
                .rotate_left(1)
                .wrapping_add(self.lanes[1].rotate_left(7))
                .wrapping_add(self.lanes[2].rotate_left(12))
                .wrapping_add(self.lanes[3].rotate_left(18))
        };

        // Only the low 32 bits of the length enter the hash.
        h = h.wrapping_add(self.total_len as u32);

        let mut tail = &self.buffer[..self.buffered_len];
        while tail.len() >= 4 {
            h = h
                .wrapping_add(read_u32(tail).wrapping_mul(PRIME32_3))
                .rotate_left(17)
                .wrapping_mul(PRIME32_4);
            tail = &tail[4..];
        }
        for &byte in tail {
            h = h
                .wrapping_add((byte as u32).wrapping_mul(PRIME32_5))
                .rotate_left(11)
                .wrapping_mul(PRIME32_1);
        }

        avalanche(h)
    }

    /// [`finish`](Self::finish), formatted as eight lowercase hex digits.
    pub fn finish_hex(&self) -> HexDigest {
        HexDigest::from(self.finish())
    }

    /// Restores the initial state for this hasher's seed, discarding all
    /// input written so far.
    pub fn reset(&mut self) {
        *self = Self::with_seed(self.seed);
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Hasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("xxh32::Hasher { ... }")
    }
}

impl core::hash::Hasher for Hasher {
    fn finish(&self) -> u64 {
        self.finish() as u64
    }
    fn write(&mut self, bytes: &[u8]) {
        self.write(bytes)
    }
}

/// A digest rendered as eight lowercase hex digits.
///
/// Plain bytes, so it works without an allocator:
///
/// ```
/// let hex = xxh32::Hasher::new().finish_hex();
/// assert_eq!(hex.as_str(), "02cc5d05");
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct HexDigest([u8; 8]);

impl HexDigest {
    /// The digits as a string slice.
    pub fn as_str(&self) -> &str {
        // Always ASCII, filled from the nibble table below.
        core::str::from_utf8(&self.0).unwrap_or("")
    }
}

impl From<u32> for HexDigest {
    fn from(hash: u32) -> Self {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";
        let mut out = [0u8; 8];
        let mut i = 0;
        while i < 8 {
            out[i] = DIGITS[(hash >> (28 - 4 * i)) as usize & 0xF];
            i += 1;
        }
        Self(out)
    }
}

impl fmt::Display for HexDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for HexDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexDigest({})", self.as_str())
    }
}

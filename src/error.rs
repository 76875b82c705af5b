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

/// Ways constructing hasher input can fail.
///
/// Integer wraparound during hashing is specified algorithm behavior and is
/// never reported through here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A seed value outside the unsigned 32-bit range.
    #[error("seed {value} is out of range for an unsigned 32-bit value")]
    InvalidSeed {
        /// The rejected value.
        value: i128,
    },
    /// Strict text input contained a character that is not representable as
    /// a single byte.
    #[error("character {ch:?} is not representable as one byte")]
    UnsupportedInput {
        /// The first offending character.
        ch: char,
    },
}

/// A seed normalized to the unsigned 32-bit range.
///
/// [`Hasher::with_seed`](crate::Hasher::with_seed) takes a plain `u32`; this
/// type is the checked front door for callers holding wider integers:
///
/// ```
/// use xxh32::Seed;
///
/// let seed = Seed::try_from(42u64).unwrap();
/// assert_eq!(seed.get(), 42);
/// assert!(Seed::try_from(-1i64).is_err());
/// assert!(Seed::try_from(1u64 << 40).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Seed(u32);

impl Seed {
    /// The normalized value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u8> for Seed {
    fn from(value: u8) -> Self {
        Self(value as u32)
    }
}

impl From<u16> for Seed {
    fn from(value: u16) -> Self {
        Self(value as u32)
    }
}

impl From<u32> for Seed {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Seed> for u32 {
    fn from(seed: Seed) -> Self {
        seed.0
    }
}

impl TryFrom<u64> for Seed {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self, Error> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| Error::InvalidSeed { value: value as i128 })
    }
}

impl TryFrom<i64> for Seed {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Error> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| Error::InvalidSeed { value: value as i128 })
    }
}

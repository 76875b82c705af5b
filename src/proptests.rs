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

//! Property tests for the streaming engine.
//!
//! Two facts are proven over arbitrary inputs: any chunking of a stream
//! produces the one-shot digest, and the one-shot digest agrees with an
//! independently published xxHash32 implementation (the oracle).

extern crate std;

use proptest::prelude::*;

use crate::{hash, Hasher};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn chunking_equivalence(
        data in proptest::collection::vec(any::<u8>(), 0..=4096),
        cuts in proptest::collection::vec(1usize..=64, 0..=128),
        seed in any::<u32>(),
    ) {
        let mut hasher = Hasher::with_seed(seed);
        let mut rest = data.as_slice();
        for cut in cuts {
            let cut = cut.min(rest.len());
            let (chunk, tail) = rest.split_at(cut);
            hasher.write(chunk);
            rest = tail;
        }
        hasher.write(rest);

        prop_assert_eq!(hasher.finish(), hash(&data, seed));
    }

    #[test]
    fn split_at_every_offset(
        data in proptest::collection::vec(any::<u8>(), 0..=48),
        seed in any::<u32>(),
    ) {
        let expected = hash(&data, seed);
        for split in 0..=data.len() {
            let (a, b) = data.split_at(split);
            let mut hasher = Hasher::with_seed(seed);
            hasher.write(a);
            hasher.write(b);
            prop_assert_eq!(hasher.finish(), expected);
        }
    }

    #[test]
    fn agrees_with_oracle(
        data in proptest::collection::vec(any::<u8>(), 0..=2048),
        seed in any::<u32>(),
    ) {
        prop_assert_eq!(hash(&data, seed), xxhash_rust::xxh32::xxh32(&data, seed));
    }

    #[test]
    fn length_counter_and_buffer_bound(
        chunks in proptest::collection::vec(
            proptest::collection::vec(any::<u8>(), 0..=40),
            0..=32,
        ),
    ) {
        let mut hasher = Hasher::new();
        let mut submitted = 0u64;
        for chunk in &chunks {
            hasher.write(chunk);
            submitted += chunk.len() as u64;
            prop_assert_eq!(hasher.total_len(), submitted);
        }

        let first = hasher.finish();
        prop_assert_eq!(hasher.finish(), first);
    }
}

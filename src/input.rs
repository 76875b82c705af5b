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

use crate::Error;

/// Input to the hasher: either raw bytes or text hashed one byte per
/// character.
///
/// The text mode reproduces the classic script-host convention of hashing a
/// string without an encoding step: each character contributes exactly one
/// byte, its code point truncated to the low 8 bits. For ASCII (and more
/// generally Latin-1) text this matches hashing the UTF-8 bytes; beyond that
/// it is lossy, and [`text_strict`](Self::text_strict) is the checked
/// alternative.
#[derive(Clone, Copy, Debug)]
pub enum ByteSource<'a> {
    /// Raw byte access.
    Binary(&'a [u8]),
    /// One byte per `char`, truncated to the low 8 bits.
    Text(&'a str),
}

impl<'a> ByteSource<'a> {
    /// Text input that is rejected instead of truncated: fails with
    /// [`Error::UnsupportedInput`] if any character is above U+00FF.
    pub fn text_strict(text: &'a str) -> Result<Self, Error> {
        match text.chars().find(|&ch| ch as u32 > 0xFF) {
            None => Ok(Self::Text(text)),
            Some(ch) => Err(Error::UnsupportedInput { ch }),
        }
    }

    /// Number of bytes this source contributes to the stream.
    ///
    /// For text this is the character count, not the UTF-8 length.
    pub fn len(&self) -> usize {
        match self {
            Self::Binary(bytes) => bytes.len(),
            Self::Text(text) => text.chars().count(),
        }
    }

    /// Whether the source contributes no bytes at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Binary(bytes) => bytes.is_empty(),
            Self::Text(text) => text.is_empty(),
        }
    }
}

impl<'a> From<&'a [u8]> for ByteSource<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Binary(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for ByteSource<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::Binary(bytes)
    }
}

impl<'a> From<&'a str> for ByteSource<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{hash, hash_source};

    #[test]
    fn ascii_text_hashes_like_its_bytes() {
        assert_eq!(hash_source("abc".into(), 0), hash(b"abc", 0));
        assert_eq!(hash_source("".into(), 5), hash(b"", 5));
    }

    #[test]
    fn text_truncates_to_low_byte() {
        // U+00E9 contributes the single byte 0xE9, not its UTF-8 encoding.
        assert_eq!(hash_source("\u{e9}".into(), 0), hash(&[0xE9], 0));
        // U+2603 (snowman) truncates to 0x03.
        assert_eq!(hash_source("\u{2603}".into(), 0), hash(&[0x03], 0));
    }

    #[test]
    fn long_text_streams_through_staging_buffer() {
        extern crate std;
        use std::string::String;

        let text: String = core::iter::repeat('x').take(1000).collect();
        let bytes = [b'x'; 1000];
        assert_eq!(hash_source(text.as_str().into(), 3), hash(&bytes, 3));
    }

    #[test]
    fn strict_text_rejects_non_byte_chars() {
        assert!(ByteSource::text_strict("latin-1 caf\u{e9}").is_ok());
        assert_eq!(
            ByteSource::text_strict("snowman \u{2603}").unwrap_err(),
            Error::UnsupportedInput { ch: '\u{2603}' },
        );
    }

    #[test]
    fn source_len_counts_chars_not_utf8_bytes() {
        assert_eq!(ByteSource::from("\u{e9}\u{e9}").len(), 2);
        assert_eq!("\u{e9}\u{e9}".len(), 4);
        assert_eq!(ByteSource::from(b"1234".as_slice()).len(), 4);
        assert!(ByteSource::from("").is_empty());
    }
}

//! Binary PPM (P6) texture loader.
//!
//! Header: ASCII magic `P6`, then width, height, and max channel value as
//! whitespace/comment-delimited ASCII integers (comments run from `#` to
//! end of line), a single whitespace byte, then `width * height * 3` raw
//! interleaved RGB bytes. Only a max channel value of 255 is supported.

use super::AssetError;
use log::debug;
use std::fs;
use std::path::Path;

/// An RGB8 image shared between primitives via `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    pub width: u32,
    pub height: u32,
    /// Interleaved RGB triples, row-major, `width * height * 3` bytes.
    pub pixels: Vec<u8>,
}

impl Texture {
    /// Reads a P6 PPM file.
    pub fn read(path: &Path) -> Result<Self, AssetError> {
        let bytes = fs::read(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&bytes, path)
    }

    /// Parses an in-memory P6 PPM file. `path` is used only for
    /// diagnostics.
    pub fn parse(bytes: &[u8], path: &Path) -> Result<Self, AssetError> {
        let mut cursor = Cursor { bytes, pos: 0 };

        if cursor.token().as_deref() != Some(b"P6".as_slice()) {
            return Err(AssetError::BadMagic {
                path: path.to_path_buf(),
            });
        }

        let malformed = || AssetError::MalformedHeader {
            path: path.to_path_buf(),
        };
        let width = cursor.integer().ok_or_else(malformed)?;
        let height = cursor.integer().ok_or_else(malformed)?;
        let max = cursor.integer().ok_or_else(malformed)?;
        if max != 255 {
            return Err(AssetError::UnsupportedDepth {
                path: path.to_path_buf(),
                max,
            });
        }

        // Exactly one whitespace byte separates the header from the pixels.
        cursor.pos += 1;

        let len = width as usize * height as usize * 3;
        if cursor.pos + len > bytes.len() {
            return Err(AssetError::TruncatedPixels {
                path: path.to_path_buf(),
            });
        }
        let pixels = bytes[cursor.pos..cursor.pos + len].to_vec();

        debug!("{}: loaded {}x{} texture", path.display(), width, height);
        Ok(Self {
            width,
            height,
            pixels,
        })
    }
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Cursor<'_> {
    /// Skips whitespace and `#` comments, then returns the next token.
    fn token(&mut self) -> Option<Vec<u8>> {
        loop {
            match self.bytes.get(self.pos).copied()? {
                b if b.is_ascii_whitespace() => self.pos += 1,
                b'#' => {
                    while self.bytes.get(self.pos).is_some_and(|&b| b != b'\n') {
                        self.pos += 1;
                    }
                }
                _ => break,
            }
        }
        let start = self.pos;
        while self
            .bytes
            .get(self.pos)
            .is_some_and(|b| !b.is_ascii_whitespace())
        {
            self.pos += 1;
        }
        Some(self.bytes[start..self.pos].to_vec())
    }

    fn integer(&mut self) -> Option<u32> {
        let token = self.token()?;
        std::str::from_utf8(&token).ok()?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_path() -> PathBuf {
        PathBuf::from("test.ppm")
    }

    fn ppm(header: &str, pixels: &[u8]) -> Vec<u8> {
        let mut out = header.as_bytes().to_vec();
        out.extend_from_slice(pixels);
        out
    }

    #[test]
    fn parses_minimal_image() {
        let bytes = ppm("P6 2 1 255\n", &[255, 0, 0, 0, 255, 0]);
        let tex = Texture::parse(&bytes, &test_path()).unwrap();
        assert_eq!((tex.width, tex.height), (2, 1));
        assert_eq!(tex.pixels, vec![255, 0, 0, 0, 255, 0]);
    }

    #[test]
    fn skips_comments_in_header() {
        let bytes = ppm("P6\n# a comment\n2 # inline\n1\n255\n", &[1, 2, 3, 4, 5, 6]);
        let tex = Texture::parse(&bytes, &test_path()).unwrap();
        assert_eq!((tex.width, tex.height), (2, 1));
    }

    #[test]
    fn rejects_wrong_magic() {
        let err = Texture::parse(b"P5 2 1 255\n\x00\x00", &test_path()).unwrap_err();
        assert!(matches!(err, AssetError::BadMagic { .. }));
    }

    #[test]
    fn rejects_unsupported_depth() {
        let err = Texture::parse(b"P6 1 1 65535\n\x00\x00\x00", &test_path()).unwrap_err();
        assert!(matches!(err, AssetError::UnsupportedDepth { max: 65535, .. }));
    }

    #[test]
    fn rejects_truncated_pixels() {
        let err = Texture::parse(b"P6 2 2 255\n\x00\x00\x00", &test_path()).unwrap_err();
        assert!(matches!(err, AssetError::TruncatedPixels { .. }));
    }

    #[test]
    fn rejects_garbage_header() {
        let err = Texture::parse(b"P6 two 1 255\n", &test_path()).unwrap_err();
        assert!(matches!(err, AssetError::MalformedHeader { .. }));
    }
}

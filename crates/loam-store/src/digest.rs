use std::fmt;
use std::io::Read;

/// BLAKE3 digest of a file's bytes.
///
/// Identical content always produces the same digest, making stored files
/// deduplicatable and their names collision-resistant.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentDigest([u8; 32]);

impl ContentDigest {
    /// Digest an in-memory byte slice.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self(*blake3::hash(data).as_bytes())
    }

    /// Digest a byte stream, returning the digest and the byte count read.
    ///
    /// The stream is consumed to EOF.
    pub fn from_reader(mut reader: impl Read) -> std::io::Result<(Self, u64)> {
        let mut hasher = blake3::Hasher::new();
        let mut buf = [0u8; 8192];
        let mut total = 0u64;
        loop {
            let n = reader.read(&mut buf)?;
            if n == 0 {
                break;
            }
            hasher.update(&buf[..n]);
            total += n as u64;
        }
        Ok((Self(*hasher.finalize().as_bytes()), total))
    }

    /// Create from a pre-computed hash.
    pub fn from_hash(hash: [u8; 32]) -> Self {
        Self(hash)
    }

    /// The raw 32-byte hash.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl fmt::Debug for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentDigest({})", self.short_hex())
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_is_deterministic() {
        let d1 = ContentDigest::from_bytes(b"hello world");
        let d2 = ContentDigest::from_bytes(b"hello world");
        assert_eq!(d1, d2);
    }

    #[test]
    fn different_data_produces_different_digests() {
        let d1 = ContentDigest::from_bytes(b"hello");
        let d2 = ContentDigest::from_bytes(b"world");
        assert_ne!(d1, d2);
    }

    #[test]
    fn reader_matches_bytes() {
        let data = b"streamed content of nontrivial length".repeat(500);
        let (streamed, total) = ContentDigest::from_reader(data.as_slice()).unwrap();
        assert_eq!(streamed, ContentDigest::from_bytes(&data));
        assert_eq!(total, data.len() as u64);
    }

    #[test]
    fn empty_stream() {
        let (digest, total) = ContentDigest::from_reader(std::io::empty()).unwrap();
        assert_eq!(total, 0);
        assert_eq!(digest, ContentDigest::from_bytes(b""));
    }

    #[test]
    fn hex_is_64_chars() {
        let digest = ContentDigest::from_bytes(b"abc");
        assert_eq!(digest.to_hex().len(), 64);
        assert_eq!(digest.short_hex().len(), 8);
    }

    #[test]
    fn display_is_full_hex() {
        let digest = ContentDigest::from_bytes(b"abc");
        assert_eq!(format!("{digest}"), digest.to_hex());
    }
}

//! Short id derivation
//!
//! An id is the IEEE CRC32 of the URL bytes, rendered as 8 zero-padded
//! lowercase hex digits. Distinct URLs may collide; the store's primary key
//! rejects the second insert.

/// 生成的 id 长度
pub const HASHED_ID_LEN: usize = 8;

pub fn hash_url(url: &str) -> String {
    format!("{:08x}", crc32fast::hash(url.as_bytes()))
}

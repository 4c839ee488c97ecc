/// The 62 symbols short codes are drawn from: upper and lower ASCII letters, then digits.
pub const BASE62: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Returns `true` if every character of `code` belongs to [`BASE62`].
pub fn is_base62(code: &str) -> bool {
    code.bytes().all(|b| BASE62.contains(&b))
}

//! Deterministic single-character shortcut labels.
//!
//! Each displayed entry gets a mnemonic character drawn from a fixed
//! 57-symbol alphabet so it can be activated directly with Alt+label.
//! The label is a stable hash of the entry's combined text — not a unique
//! key, so two entries may legitimately share a label; the shortcut scan
//! resolves collisions by rank order.

/// The shortcut alphabet: `a`–`z`, `A`–`Z`, then `;[]\/`.
pub const SHORTCUT_ALPHABET: [char; 57] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L',
    'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ';', '[', ']', '\\', '/',
];

/// Stable 32-bit string hash: `h = 23`, then `h = h * 31 + c` per character
/// with wrap-around arithmetic. Identical across platforms and process
/// restarts; character values are taken as their Unicode scalar values.
fn stable_hash(text: &str) -> i32 {
    text.chars()
        .fold(23_i32, |hash, c| hash.wrapping_mul(31).wrapping_add(c as i32))
}

/// Picks the shortcut character for an entry's combined text.
pub fn shortcut_char(combined_text: &str) -> char {
    let index = stable_hash(combined_text).unsigned_abs() as usize % SHORTCUT_ALPHABET.len();
    SHORTCUT_ALPHABET[index]
}

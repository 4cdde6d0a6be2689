//! SHA-256 cell hashing for privacy-preserving matching.

use sha2::Digest;

use cmatch_model::RecordTable;

/// Lowercase hex SHA-256 digest of a byte slice.
#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    hex::encode(digest)
}

/// Digest of a cell's UTF-8 string form.
#[must_use]
pub fn hash_cell(value: &str) -> String {
    sha256_hex(value.as_bytes())
}

/// Replace every cell with its digest, headers untouched.
///
/// All-or-nothing: empty cells are hashed too (the empty string has a fixed
/// well-known digest), so matching against pre-hashed platform data stays
/// consistent.
pub fn hash_table(table: &mut RecordTable) {
    for row in &mut table.rows {
        for cell in row {
            *cell = hash_cell(cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_DIGEST: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn empty_string_has_the_well_known_digest() {
        assert_eq!(hash_cell(""), EMPTY_DIGEST);
    }

    #[test]
    fn hashing_is_deterministic_and_collision_free_in_practice() {
        assert_eq!(hash_cell("ada@example.com"), hash_cell("ada@example.com"));
        assert_ne!(hash_cell("ada@example.com"), hash_cell("bob@example.com"));
    }
}

use crate::constants::{OUTPUT_FILE_EXTENSION, OUTPUT_FILE_NAME_LEN};

const HEX_ALPHABET: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f',
];

/// Generates a random lowercase hex string of `len` characters.
///
/// # Examples
/// ```
/// use firestore_peek::utils::id::random_hex;
/// let id = random_hex(16);
/// assert_eq!(id.len(), 16);
/// assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
#[must_use]
pub fn random_hex(len: usize) -> String {
    nanoid::nanoid!(len, &HEX_ALPHABET)
}

/// Generates the file name used to save a fetched result, e.g. `3f9a0c1d2b4e5f60.json`
#[must_use]
pub fn random_output_file_name() -> String {
    format!(
        "{}.{}",
        random_hex(OUTPUT_FILE_NAME_LEN),
        OUTPUT_FILE_EXTENSION
    )
}

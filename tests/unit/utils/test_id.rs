use firestore_peek::utils::id::{random_hex, random_output_file_name};
use regex::Regex;

#[test]
fn random_hex_has_requested_length_and_alphabet() {
    for len in [1, 8, 16, 32] {
        let id = random_hex(len);
        assert_eq!(id.len(), len);
        assert!(id.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }
}

#[test]
fn output_file_name_is_sixteen_hex_chars_with_json_extension() {
    let pattern = Regex::new(r"^[0-9a-f]{16}\.json$").unwrap();
    let name = random_output_file_name();
    assert!(pattern.is_match(&name), "unexpected name {name}");
}

#[test]
fn output_file_names_differ() {
    assert_ne!(random_output_file_name(), random_output_file_name());
}

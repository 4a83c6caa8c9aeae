use rewindcli::utils::*;

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should not be empty
    assert!(!challenge.is_empty());

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_parse_year_input_valid() {
    let parsed = parse_year_input("2023=songs-2023.txt").unwrap();
    assert_eq!(
        parsed,
        YearInput {
            year: 2023,
            path: "songs-2023.txt".to_string()
        }
    );

    // whitespace around both parts is tolerated
    let parsed = parse_year_input(" 2020 = lists/2020.txt ").unwrap();
    assert_eq!(parsed.year, 2020);
    assert_eq!(parsed.path, "lists/2020.txt");

    // "-" is a valid path and means stdin downstream
    let parsed = parse_year_input("2024=-").unwrap();
    assert_eq!(parsed.path, "-");
}

#[test]
fn test_parse_year_input_invalid() {
    // missing separator
    let result = parse_year_input("2023");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("expected YEAR=FILE"));

    // not a year
    let result = parse_year_input("twenty=songs.txt");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid year"));

    // empty path
    let result = parse_year_input("2023=");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("missing file"));

    // empty input
    let result = parse_year_input("   ");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));
}

#[test]
fn test_join_years() {
    assert_eq!(join_years(&[]), "");
    assert_eq!(join_years(&[2023]), "2023");
    assert_eq!(join_years(&[2021, 2022, 2023]), "2021, 2022, 2023");
}

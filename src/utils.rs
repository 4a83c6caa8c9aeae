use std::io::Read;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// A `YEAR=FILE` argument for the pasted-links analysis path. `-` as the
/// file reads from stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearInput {
    pub year: i32,
    pub path: String,
}

pub fn parse_year_input(input: &str) -> Result<YearInput, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("input cannot be empty".to_string());
    }

    let Some((year, path)) = input.split_once('=') else {
        return Err(format!(
            "invalid value '{}': expected YEAR=FILE, e.g. 2023=songs-2023.txt",
            input
        ));
    };

    let year: i32 = year
        .trim()
        .parse()
        .map_err(|_| format!("invalid year '{}': expected a number", year.trim()))?;

    let path = path.trim();
    if path.is_empty() {
        return Err(format!("invalid value '{}': missing file after '='", input));
    }

    Ok(YearInput {
        year,
        path: path.to_string(),
    })
}

/// Reads pasted text from a file, or from stdin when no file (or `-`) is given.
pub async fn read_text_input(file: Option<String>) -> Result<String, String> {
    match file {
        Some(path) if path != "-" => async_fs::read_to_string(&path)
            .await
            .map_err(|e| format!("cannot read {}: {}", path, e)),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| e.to_string())?;
            Ok(text)
        }
    }
}

pub fn join_years(years: &[i32]) -> String {
    years
        .iter()
        .map(|y| y.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

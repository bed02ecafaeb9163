use thiserror::Error;

use crate::common::types::Page;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid page number '{0}' in reference string")]
    InvalidToken(String),
}

/// Parse a comma-separated reference string like `"7, 0, 1, 2"`.
///
/// Whitespace around entries is ignored, as are empty tokens from trailing
/// or doubled commas. Any other token that is not a non-negative integer is
/// rejected with the offending token in the error.
pub fn parse_reference_string(input: &str) -> Result<Vec<Page>, InputError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<Page>()
                .map_err(|_| InputError::InvalidToken(token.to_string()))
        })
        .collect()
}

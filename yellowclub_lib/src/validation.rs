use chrono::NaiveDate;

use crate::error::YellowClubError;

pub const MAX_SEARCH_LENGTH: usize = 100;
pub const MAX_PER_PAGE: u64 = 100;
pub const MAX_REDEMPTION_QUANTITY: u32 = 99;

/// Brazilian federative units accepted in delivery addresses.
pub const VALID_UFS: &[&str] = &[
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB",
    "PR", "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

/// Nationality marks for Brazilian civil aircraft registrations.
pub const REGISTRATION_PREFIXES: &[&str] = &["PP", "PR", "PS", "PT", "PU"];

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, YellowClubError> {
    if input.len() > max_len {
        return Err(YellowClubError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(YellowClubError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a search term: enforce length, strip control chars, trim.
pub fn validate_search(input: &str) -> Result<String, YellowClubError> {
    sanitize_text(input, MAX_SEARCH_LENGTH)
}

/// Validate page number (must be >= 1).
pub fn validate_page(page: u64) -> Result<u64, YellowClubError> {
    if page < 1 {
        return Err(YellowClubError::InvalidInput(
            "page must be >= 1".to_string(),
        ));
    }
    Ok(page)
}

/// Validate page size (must be 1..=100).
pub fn validate_per_page(per_page: u64) -> Result<u64, YellowClubError> {
    if !(1..=MAX_PER_PAGE).contains(&per_page) {
        return Err(YellowClubError::InvalidInput(format!(
            "per_page must be between 1 and {}",
            MAX_PER_PAGE
        )));
    }
    Ok(per_page)
}

/// Validate a UF code: uppercase, check against the 26 states plus DF.
pub fn validate_uf(input: &str) -> Result<String, YellowClubError> {
    let upper = input.trim().to_uppercase();
    if VALID_UFS.contains(&upper.as_str()) {
        Ok(upper)
    } else {
        Err(YellowClubError::InvalidInput(format!(
            "unknown UF '{}'. Valid codes: AC, AL, AP, ... SP, SE, TO (26 states + DF)",
            input
        )))
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn validate_date(input: &str) -> Result<NaiveDate, YellowClubError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        YellowClubError::InvalidInput(format!(
            "invalid date '{}'. Expected format: YYYY-MM-DD (e.g., 2024-06-01)",
            trimmed
        ))
    })
}

/// Both ends parsed, and `from` not after `to`.
pub fn validate_date_range(
    from: &str,
    to: &str,
) -> Result<(NaiveDate, NaiveDate), YellowClubError> {
    let from = validate_date(from)?;
    let to = validate_date(to)?;
    if from > to {
        return Err(YellowClubError::InvalidInput(format!(
            "start date {} is after end date {}",
            from, to
        )));
    }
    Ok((from, to))
}

/// Validate a redemption quantity (must be 1..=99).
pub fn validate_quantity(quantity: u32) -> Result<u32, YellowClubError> {
    if !(1..=MAX_REDEMPTION_QUANTITY).contains(&quantity) {
        return Err(YellowClubError::InvalidInput(format!(
            "quantity must be between 1 and {}, got {}",
            MAX_REDEMPTION_QUANTITY, quantity
        )));
    }
    Ok(quantity)
}

/// Kind of PIX key, as the payment directory classifies it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixKeyKind {
    Cpf,
    Cnpj,
    Email,
    Phone,
    Random,
}

impl PixKeyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PixKeyKind::Cpf => "cpf",
            PixKeyKind::Cnpj => "cnpj",
            PixKeyKind::Email => "email",
            PixKeyKind::Phone => "telefone",
            PixKeyKind::Random => "aleatoria",
        }
    }
}

/// Classify a PIX key and return it trimmed. Document and phone keys keep
/// whatever punctuation the user typed; only the digit count is checked.
pub fn validate_pix_key(input: &str) -> Result<(PixKeyKind, String), YellowClubError> {
    let key = sanitize_text(input, 77)?;
    let digits: String = key.chars().filter(|c| c.is_ascii_digit()).collect();
    let only_doc_chars = key
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '/'));

    let kind = if key.contains('@') {
        let (local, domain) = key.split_once('@').unwrap_or(("", ""));
        if local.is_empty() || !domain.contains('.') || domain.starts_with('.') {
            return Err(invalid_pix(input));
        }
        PixKeyKind::Email
    } else if key.starts_with('+') {
        if !(12..=13).contains(&digits.len()) || !digits.starts_with("55") {
            return Err(invalid_pix(input));
        }
        PixKeyKind::Phone
    } else if only_doc_chars && digits.len() == 11 {
        PixKeyKind::Cpf
    } else if only_doc_chars && digits.len() == 14 {
        PixKeyKind::Cnpj
    } else if is_random_key(&key) {
        PixKeyKind::Random
    } else {
        return Err(invalid_pix(input));
    };
    Ok((kind, key))
}

fn is_random_key(key: &str) -> bool {
    let parts: Vec<&str> = key.split('-').collect();
    let lengths = [8, 4, 4, 4, 12];
    parts.len() == lengths.len()
        && parts
            .iter()
            .zip(lengths)
            .all(|(part, len)| part.len() == len && part.chars().all(|c| c.is_ascii_hexdigit()))
}

fn invalid_pix(input: &str) -> YellowClubError {
    YellowClubError::InvalidInput(format!(
        "invalid PIX key '{}'. Expected CPF, CNPJ, e-mail, +55 phone, or random key",
        input
    ))
}

/// Validate an aircraft registration such as `PP-ABC` or `prxyz`.
/// Returns the uppercase dashed form.
pub fn validate_registration(input: &str) -> Result<String, YellowClubError> {
    let compact: String = input
        .trim()
        .chars()
        .filter(|c| *c != '-')
        .collect::<String>()
        .to_uppercase();
    let valid = compact.len() == 5
        && compact.chars().all(|c| c.is_ascii_alphabetic())
        && REGISTRATION_PREFIXES.contains(&&compact[..2]);
    if !valid {
        return Err(YellowClubError::InvalidInput(format!(
            "invalid aircraft registration '{}'. Expected e.g. PP-ABC (prefixes: PP, PR, PS, PT, PU)",
            input
        )));
    }
    Ok(format!("{}-{}", &compact[..2], &compact[2..]))
}

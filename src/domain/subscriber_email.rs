#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    /// Trims the candidate and checks it against the address rule: no
    /// whitespace, exactly one `@` with a non-empty local part, and a domain
    /// containing a `.` with non-empty content on both sides.
    pub fn parse(candidate: String) -> Result<Self, ValidationError> {
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty);
        }
        if is_valid_address(trimmed) {
            Ok(Self(trimmed.to_owned()))
        } else {
            Err(ValidationError::Malformed)
        }
    }
}

fn is_valid_address(candidate: &str) -> bool {
    if candidate.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    // Any interior dot qualifies, not just the first one.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubscriberEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your email address")]
    Empty,
    #[error("Please enter a valid email address")]
    Malformed,
}

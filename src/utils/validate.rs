use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// Academic percentage must fall within [0, 100].
pub fn validate_percentage(percentage: f64) -> Result<(), &'static str> {
    if !(0.0..=100.0).contains(&percentage) || percentage.is_nan() {
        return Err("Percentage must be between 0 and 100");
    }
    Ok(())
}

/// Value scores are whole numbers within [1, 10].
pub fn validate_score(score: i32) -> Result<(), &'static str> {
    if !(1..=10).contains(&score) {
        return Err("Score must be between 1 and 10");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(validate_email("teacher@school.com").is_ok());
        assert!(validate_email("a.b+c@sub.domain.org").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
        assert!(validate_email("@school.com").is_err());
    }

    #[test]
    fn test_percentage_bounds() {
        assert!(validate_percentage(0.0).is_ok());
        assert!(validate_percentage(85.5).is_ok());
        assert!(validate_percentage(100.0).is_ok());
        assert!(validate_percentage(-0.1).is_err());
        assert!(validate_percentage(100.1).is_err());
        assert!(validate_percentage(f64::NAN).is_err());
    }

    #[test]
    fn test_score_bounds() {
        assert!(validate_score(1).is_ok());
        assert!(validate_score(10).is_ok());
        assert!(validate_score(0).is_err());
        assert!(validate_score(11).is_err());
    }
}

//! Reward coercion for catalog rows.
//!
//! Rewards are whole currency units. Grid cells and hand-edited files may hold
//! `50`, ` 50 ` or `50.0`; anything with a fractional part is truncated toward
//! zero. Negative, empty and non-numeric values are rejected.

/// Coerce a raw reward cell to a non-negative integer
pub fn coerce_reward(raw: &str) -> Result<u32, String> {
    let cleaned = raw.trim().replace(',', "");

    if cleaned.is_empty() {
        return Err("reward is empty".to_string());
    }

    if let Ok(value) = cleaned.parse::<i64>() {
        return integer_reward(value);
    }

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => integer_reward(value.trunc() as i64),
        Ok(_) => Err("reward must be a finite number".to_string()),
        Err(_) => Err("reward is not a number".to_string()),
    }
}

fn integer_reward(value: i64) -> Result<u32, String> {
    if value < 0 {
        return Err("reward must not be negative".to_string());
    }
    u32::try_from(value).map_err(|_| "reward is too large".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_plain_integers() {
        assert_eq!(coerce_reward("50"), Ok(50));
        assert_eq!(coerce_reward(" 30 "), Ok(30));
        assert_eq!(coerce_reward("0"), Ok(0));
        assert_eq!(coerce_reward("1,000"), Ok(1000));
    }

    #[test]
    fn test_coerce_decimals_truncate() {
        assert_eq!(coerce_reward("50.0"), Ok(50));
        assert_eq!(coerce_reward("49.9"), Ok(49));
        assert_eq!(coerce_reward("-0.5"), Ok(0));
    }

    #[test]
    fn test_coerce_rejects_bad_input() {
        assert!(coerce_reward("").is_err());
        assert!(coerce_reward("   ").is_err());
        assert!(coerce_reward("abc").is_err());
        assert!(coerce_reward("-5").is_err());
        assert!(coerce_reward("NaN").is_err());
        assert!(coerce_reward("inf").is_err());
        assert!(coerce_reward("99999999999").is_err());
    }
}

use rust_decimal::Decimal;

/// Floor a currency amount to whole won.
///
/// Interest accrual produces fractional won; display values are always
/// truncated toward zero-for-positive (floor), never rounded up.
pub fn floor_to_won(amount: Decimal) -> Decimal {
    amount.floor()
}

/// Format an amount as a grouped won string, e.g. `1,234,567원`.
///
/// The amount is floored to whole won first.
///
/// # Examples
///
/// ```
/// use recovery_engine::core::money::format_won;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_won(dec!(1234567.89)), "1,234,567원");
/// assert_eq!(format_won(dec!(0)), "0원");
/// ```
pub fn format_won(amount: Decimal) -> String {
    let floored = floor_to_won(amount);
    let raw = floored.abs().to_string();
    // Decimal::floor keeps a ".0" scale of zero, so raw has no fraction part.
    let digits: Vec<char> = raw.chars().collect();
    let mut grouped = String::with_capacity(raw.len() + raw.len() / 3 + 2);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    if floored.is_sign_negative() && floored != Decimal::ZERO {
        format!("-{}원", grouped)
    } else {
        format!("{}원", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_floor_truncates_fractions() {
        assert_eq!(floor_to_won(dec!(49999.99)), dec!(49999));
        assert_eq!(floor_to_won(dec!(100)), dec!(100));
    }

    #[test]
    fn test_format_groups_thousands() {
        assert_eq!(format_won(dec!(1000000)), "1,000,000원");
        assert_eq!(format_won(dec!(999)), "999원");
        assert_eq!(format_won(dec!(1000)), "1,000원");
    }

    #[test]
    fn test_format_floors_before_grouping() {
        assert_eq!(format_won(dec!(50000.9)), "50,000원");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format_won(dec!(0)), "0원");
    }

    #[test]
    fn test_format_negative() {
        // Negative amounts do not occur in valid data but must not garble.
        assert_eq!(format_won(dec!(-1234567)), "-1,234,567원");
    }
}

//! Number formatting for table cells

/// Форматирует целое число с разделителем тысяч (запятая)
///
/// # Примеры
///
/// ```
/// use staff_dashboard::shared::components::table::format_number_int;
/// assert_eq!(format_number_int(1234567), "1,234,567");
/// ```
pub fn format_number_int(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();

    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    if value < 0 {
        format!("-{}", result)
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(0), "0");
        assert_eq!(format_number_int(999), "999");
        assert_eq!(format_number_int(1000), "1,000");
        assert_eq!(format_number_int(1234567), "1,234,567");
        assert_eq!(format_number_int(-1234), "-1,234");
        assert_eq!(format_number_int(-100), "-100");
    }

    #[test]
    fn test_extremes() {
        assert_eq!(format_number_int(i64::MAX), "9,223,372,036,854,775,807");
        assert_eq!(format_number_int(i64::MIN), "-9,223,372,036,854,775,808");
    }
}

/// Normalises what the user types into the phone field to a UAE number:
/// digits only, with a `+971` country code in front.
pub fn format_uae_phone(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        digits
    } else if digits.starts_with("971") {
        format!("+{}", digits)
    } else {
        format!("+971{}", digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_the_country_code() {
        assert_eq!(format_uae_phone("50 579 7905"), "+971505797905");
        assert_eq!(format_uae_phone("971505797905"), "+971505797905");
        assert_eq!(format_uae_phone("+971 50 579 7905"), "+971505797905");
    }

    #[test]
    fn stays_empty_without_digits() {
        assert_eq!(format_uae_phone(""), "");
        assert_eq!(format_uae_phone("+-()"), "");
    }

    #[test]
    fn is_idempotent() {
        let once = format_uae_phone("050 1234");
        assert_eq!(format_uae_phone(&once), once);
    }
}

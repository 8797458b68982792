//! Shortened display strings.

/// `0x1234...abcd`: first six and last four characters.
pub fn extract_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    let head: String = chars.iter().take(6).collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{head}...{tail}")
}

/// First twenty characters followed by `...`.
pub fn extract_text(text: &str) -> String {
    let head: String = text.chars().take(20).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_shortened() {
        assert_eq!(
            extract_address("0x5F18C75AbDAe578b483E5F43f12a39cF75b973a9"),
            "0x5F18...73a9"
        );
    }

    #[test]
    fn short_input_does_not_panic() {
        assert_eq!(extract_address("0x1"), "0x1...0x1");
        assert_eq!(extract_address(""), "...");
    }

    #[test]
    fn text_truncated() {
        assert_eq!(extract_text("Yearn USDC Vault v0.4.3 Strategy"), "Yearn USDC Vault v0....");
        assert_eq!(extract_text("short"), "short...");
    }
}

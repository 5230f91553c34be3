pub mod url_validator;

pub use url_validator::{is_valid_url, validate_url};

/// Length of generated record ids
pub const ID_LENGTH: usize = 7;
/// Length of generated short codes
pub const SHORT_CODE_LENGTH: usize = 7;
/// Length of the alias handed out when analysis falls back
pub const FALLBACK_ALIAS_LENGTH: usize = 6;
/// Longest alias a user may pick
pub const MAX_ALIAS_LENGTH: usize = 20;

pub fn generate_random_code(length: usize) -> String {
    use std::iter;

    // 小写字母和数字
    let chars = b"abcdefghijklmnopqrstuvwxyz0123456789";

    iter::repeat_with(|| chars[rand::random_range(0..chars.len())] as char)
        .take(length)
        .collect()
}

/// Opaque record identifier; uniqueness is probabilistic only
pub fn generate_id() -> String {
    generate_random_code(ID_LENGTH)
}

/// Default short code when the user gives no alias
pub fn generate_short_code() -> String {
    generate_random_code(SHORT_CODE_LENGTH)
}

/// Keep `[A-Za-z0-9_-]` and cap at [`MAX_ALIAS_LENGTH`] characters
pub fn sanitize_alias(alias: &str) -> String {
    alias
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .take(MAX_ALIAS_LENGTH)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_alias_strips_disallowed() {
        assert_eq!(sanitize_alias("my link!"), "mylink");
        assert_eq!(sanitize_alias("a/b?c=d"), "abcd");
        assert_eq!(sanitize_alias("ok_name-1"), "ok_name-1");
    }

    #[test]
    fn test_sanitize_alias_trims_and_truncates() {
        assert_eq!(sanitize_alias("   spaced  "), "spaced");
        let long = "x".repeat(40);
        assert_eq!(sanitize_alias(&long).len(), MAX_ALIAS_LENGTH);
    }

    #[test]
    fn test_sanitize_alias_drops_non_ascii() {
        assert_eq!(sanitize_alias("短链接abc"), "abc");
        assert_eq!(sanitize_alias("ü"), "");
    }

    #[test]
    fn test_generated_lengths() {
        assert_eq!(generate_id().len(), ID_LENGTH);
        assert_eq!(generate_short_code().len(), SHORT_CODE_LENGTH);
    }
}

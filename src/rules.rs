// 🏷️ Normalization Rules - Subject, Branch, Phone
// Field-level rules applied to every member row

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// ============================================================================
// CREDITS
// ============================================================================

/// Marker for plans without a visit limit ("무제한" = unlimited)
pub const UNLIMITED_MARKER: &str = "무제한";

/// Sentinel stored for unlimited plans. Downstream consumers read it as-is.
pub const UNLIMITED_CREDITS: u64 = 100;

/// Digits immediately followed by "회" (times), e.g. "주2회", "10회권"
static CREDITS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)회").expect("credits pattern is a valid regex"));

/// Any Unicode decimal digit, the same class `\d` matches above
static DECIMAL_DIGIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d$").expect("digit pattern is a valid regex"));

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}

/// Numeric value of a decimal digit in any script ("2", "２", "٢" → 2)
///
/// Unicode lays decimal digits out as contiguous runs of whole 0-9 blocks,
/// so the distance back to the start of the run, mod 10, is the value.
fn digit_value(c: char) -> Option<u64> {
    if let Some(d) = c.to_digit(10) {
        return Some(d as u64);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut offset = 0u64;
    let mut cur = c;
    while let Some(prev) = (cur as u32).checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        offset += 1;
        cur = prev;
    }

    Some(offset % 10)
}

/// Parse a run of decimal digits; None on overflow
fn parse_digits(digits: &str) -> Option<u64> {
    digits.chars().try_fold(0u64, |acc, c| {
        acc.checked_mul(10)?.checked_add(digit_value(c)?)
    })
}

/// Parse the credit count out of a plan subject
///
/// Rules (in order):
/// 1. Empty subject → 0
/// 2. Contains "무제한" → 100
/// 3. First "<number>회" → number
/// 4. Anything else → 0
///
/// # Examples:
/// ```
/// use member_migration::credits_from_text;
/// assert_eq!(credits_from_text("주1회"), 1);
/// assert_eq!(credits_from_text("무제한 이용권"), 100);
/// assert_eq!(credits_from_text("기타"), 0);
/// ```
pub fn credits_from_text(text: &str) -> u64 {
    if text.is_empty() {
        return 0;
    }

    if text.contains(UNLIMITED_MARKER) {
        return UNLIMITED_CREDITS;
    }

    // Only the first match counts; a number past u64 falls back to 0
    CREDITS_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| parse_digits(m.as_str()))
        .unwrap_or(0)
}

// ============================================================================
// BRANCH
// ============================================================================

/// Branch - Physical location a member belongs to
///
/// Serialized as its short code ("mapo", "gwangheungchang").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    Mapo,
    #[default]
    Gwangheungchang,
}

/// Map the raw branch column to a Branch
///
/// "마포" wins first. "광흥창" and its common typo "광흥장" map to
/// Gwangheungchang, which is also the fallback for anything else.
pub fn branch_from_text(text: &str) -> Branch {
    if text.contains("마포") {
        return Branch::Mapo;
    }

    if text.contains("광흥창") || text.contains("광흥장") {
        return Branch::Gwangheungchang;
    }

    Branch::default()
}

// ============================================================================
// PHONE
// ============================================================================

/// Fallback when the phone number is too short
pub const PHONE_LAST4_FALLBACK: &str = "0000";

/// Last 4 characters of the phone number, or "0000" if it has fewer
pub fn phone_last4(phone: &str) -> String {
    let len = phone.chars().count();
    if len < 4 {
        return PHONE_LAST4_FALLBACK.to_string();
    }

    phone.chars().skip(len - 4).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credits_weekly_plan() {
        assert_eq!(credits_from_text("주1회"), 1);
        assert_eq!(credits_from_text("주2회"), 2);
        assert_eq!(credits_from_text("10회권 (3개월)"), 10);
    }

    #[test]
    fn test_credits_unlimited() {
        assert_eq!(credits_from_text("무제한 이용권"), UNLIMITED_CREDITS);
        // Unlimited marker beats any count in the same text
        assert_eq!(credits_from_text("주3회 + 무제한"), 100);
    }

    #[test]
    fn test_credits_empty_or_unknown() {
        assert_eq!(credits_from_text(""), 0);
        assert_eq!(credits_from_text("기타"), 0);
        assert_eq!(credits_from_text("3개월"), 0);
        assert_eq!(credits_from_text("회원권"), 0);
    }

    #[test]
    fn test_credits_first_match_only() {
        assert_eq!(credits_from_text("주2회 / 주3회"), 2);
    }

    #[test]
    fn test_credits_fullwidth_digits() {
        assert_eq!(credits_from_text("주２회"), 2);
        assert_eq!(credits_from_text("１０회권"), 10);
        assert_eq!(credits_from_text("주1２회"), 12);
    }

    #[test]
    fn test_credits_other_script_digits() {
        // Arabic-Indic and Devanagari
        assert_eq!(credits_from_text("٣회"), 3);
        assert_eq!(credits_from_text("९회"), 9);
        // Mathematical bold digits sit next to other digit blocks
        assert_eq!(credits_from_text("𝟕회"), 7);
        assert_eq!(credits_from_text("𝟘회"), 0);
    }

    #[test]
    fn test_credits_large_counts() {
        assert_eq!(credits_from_text("5000000000회"), 5_000_000_000);
        assert_eq!(credits_from_text("18446744073709551615회"), u64::MAX);
    }

    #[test]
    fn test_credits_overflow_falls_back() {
        assert_eq!(credits_from_text("99999999999999999999회"), 0);
    }

    #[test]
    fn test_branch_mapping() {
        assert_eq!(branch_from_text("마포점"), Branch::Mapo);
        assert_eq!(branch_from_text("광흥창점"), Branch::Gwangheungchang);
        assert_eq!(branch_from_text("광흥장점"), Branch::Gwangheungchang);
        assert_eq!(branch_from_text("강남점"), Branch::Gwangheungchang);
        assert_eq!(branch_from_text(""), Branch::Gwangheungchang);
    }

    #[test]
    fn test_branch_mapo_checked_first() {
        assert_eq!(branch_from_text("광흥창/마포"), Branch::Mapo);
    }

    #[test]
    fn test_branch_codes() {
        assert_eq!(serde_json::to_string(&Branch::Mapo).unwrap(), "\"mapo\"");
        assert_eq!(
            serde_json::to_string(&Branch::Gwangheungchang).unwrap(),
            "\"gwangheungchang\""
        );
    }

    #[test]
    fn test_phone_last4() {
        assert_eq!(phone_last4("01012345678"), "5678");
        assert_eq!(phone_last4("010-1234-5678"), "5678");
        assert_eq!(phone_last4("1234"), "1234");
        assert_eq!(phone_last4("123"), "0000");
        assert_eq!(phone_last4(""), "0000");
    }

    #[test]
    fn test_phone_last4_counts_characters() {
        assert_eq!(phone_last4("번호없음"), "번호없음");
        assert_eq!(phone_last4("없음"), "0000");
    }
}

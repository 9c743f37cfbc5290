//! Chain head helpers

use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::Value;

/// Method used to read an endpoint's current head
pub const BLOCK_NUMBER_METHOD: &str = "eth_blockNumber";

/// Sentinel for an unknown head height
pub const UNKNOWN_HEAD: i64 = -1;

/// Convert an `eth_blockNumber` result to a height
///
/// Accepts hex with or without a `0x` prefix. Anything else, including
/// values that do not fit an `i64`, is [`UNKNOWN_HEAD`].
pub fn parse_block_number(result: &Value) -> i64 {
    let Some(s) = result.as_str() else {
        return UNKNOWN_HEAD;
    };

    let s = s.trim();
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);

    u64::from_str_radix(digits, 16)
        .ok()
        .and_then(|n| i64::try_from(n).ok())
        .unwrap_or(UNKNOWN_HEAD)
}

/// Uniform sample without replacement of at most `size` URLs
pub fn sample_urls<'a, R: Rng + ?Sized>(
    urls: &'a [String],
    size: usize,
    rng: &mut R,
) -> Vec<&'a str> {
    urls.choose_multiple(rng, size.min(urls.len()))
        .map(String::as_str)
        .collect()
}

/// How far behind the reference a head is; zero when the reference is unknown
pub fn drift(reference_head: i64, head: i64) -> u64 {
    if reference_head < 0 {
        return 0;
    }
    reference_head.saturating_sub(head).max(0) as u64
}

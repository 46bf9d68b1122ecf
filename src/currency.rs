//! Currency annotation for advice text
//!
//! The advice provider quotes prices in US dollars. When the traveler asks
//! for INR, every `$<amount>` occurrence is annotated in place with its rupee
//! equivalent at a static exchange rate.

use crate::models::Currency;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Static USD to INR conversion rate applied when no override is configured.
pub const USD_TO_INR: f64 = 83.0;

// Dollar sign, digits, optional decimal part. Thousands separators stop the
// match, so `$1,200` only annotates the leading `$1`.
static PRICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(\d+(?:\.\d+)?)").expect("valid price pattern"));

/// Annotate every USD price in `text` with its INR equivalent.
///
/// Identity for [`Currency::Usd`]. For [`Currency::Inr`], `$120` at rate 83
/// becomes `₹9960 (USD $120)`: the INR figure is rounded to whole rupees and
/// the matched amount text is kept verbatim in the parenthetical. Everything
/// outside the matches passes through untouched.
///
/// The rewrite is single-pass and not idempotent: running it again over its
/// own output re-matches the amount inside the parenthetical.
pub fn annotate(text: &str, currency: Currency, rate: f64) -> String {
    if currency == Currency::Usd {
        return text.to_string();
    }

    PRICE
        .replace_all(text, |caps: &Captures<'_>| {
            let amount = &caps[1];
            match amount.parse::<f64>() {
                Ok(usd) => {
                    let inr = (usd * rate).round();
                    format!("₹{:.0} (USD ${})", inr, amount)
                }
                // The pattern only admits digits and a dot; never drop text.
                Err(_) => caps[0].to_string(),
            }
        })
        .into_owned()
}

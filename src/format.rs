//! Amount and countdown formatting.
//!
//! Pure, deterministic text formatting for the render descriptions. The
//! deployment runs against a single fixed locale (Korean Won, zero
//! fractional digits), so formatting is a symbol plus three-digit grouping
//! rather than a full locale engine.

/// Currency presentation: a symbol prefix and a digit grouping separator.
///
/// Amounts are whole currency units; there is no fractional part. Negative
/// amounts carry a leading minus ahead of the symbol, `-₩15,000`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    /// Symbol placed before the grouped digits
    pub symbol: String,
    /// Separator inserted every three digits
    pub separator: char,
}

impl CurrencyFormat {
    /// Korean Won, the deployed configuration.
    pub fn krw() -> Self {
        Self {
            symbol: "₩".to_string(),
            separator: ',',
        }
    }

    /// Format a signed amount, e.g. `85000` as `₩85,000`.
    pub fn format(&self, amount: i64) -> String {
        // Widening before unsigned_abs keeps i64::MIN representable.
        let magnitude = (amount as i128).unsigned_abs();
        let digits = group_digits(magnitude, self.separator);
        if amount < 0 {
            format!("-{}{}", self.symbol, digits)
        } else {
            format!("{}{}", self.symbol, digits)
        }
    }

    /// Parse a string produced by [`format`](Self::format) back into the
    /// amount, ignoring symbol and grouping. Returns `None` for anything
    /// that is not a formatted amount or that overflows `i64`.
    pub fn parse(&self, text: &str) -> Option<i64> {
        let trimmed = text.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix(self.symbol.as_str())?;

        let mut digits = String::with_capacity(rest.len());
        for ch in rest.chars() {
            if ch == self.separator {
                continue;
            }
            if !ch.is_ascii_digit() {
                return None;
            }
            digits.push(ch);
        }
        if digits.is_empty() {
            return None;
        }

        let magnitude: u128 = digits.parse().ok()?;
        if negative {
            if magnitude > i64::MAX as u128 + 1 {
                return None;
            }
            Some((-(magnitude as i128)) as i64)
        } else {
            if magnitude > i64::MAX as u128 {
                return None;
            }
            Some(magnitude as i64)
        }
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::krw()
    }
}

/// Format a day count as a countdown label, `12` as `D-12`.
///
/// Negative counts clamp to `D-0`: once the period has ended the countdown
/// reads as expired instead of showing a double-signed residue.
pub fn countdown(days: i64) -> String {
    format!("D-{}", days.max(0))
}

fn group_digits(mut value: u128, separator: char) -> String {
    if value == 0 {
        return "0".to_string();
    }
    // Digits are collected least-significant first, then reversed.
    let mut reversed = Vec::new();
    let mut emitted = 0usize;
    while value > 0 {
        if emitted > 0 && emitted % 3 == 0 {
            reversed.push(separator);
        }
        reversed.push(char::from(b'0' + (value % 10) as u8));
        value /= 10;
        emitted += 1;
    }
    reversed.iter().rev().collect()
}

//! Locale-aware fixed-point number formatting.
//!
//! Digit grouping, separators, and the minus sign come from `num_format`'s
//! CLDR locale data, so grouping styles such as the Indian `12,34,567` are
//! handled as well as the usual three-digit groups.

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

use num_format::{Buffer, Locale};

pub const DEFAULT_LOCALE: &str = "en-US";

/// Number formatting rules for one locale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    /// Tag the format was requested for.
    pub locale: String,
    rules: Locale,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::for_locale(DEFAULT_LOCALE)
    }
}

impl NumberFormat {
    /// Rules for a BCP 47 tag. Tries the full tag, then its language
    /// subtag, then English.
    pub fn for_locale(tag: &str) -> Self {
        let language = tag.split(['-', '_']).next().unwrap_or(tag);
        let rules = Locale::from_name(tag)
            .or_else(|_| Locale::from_name(language))
            .unwrap_or(Locale::en);
        Self { locale: tag.to_owned(), rules }
    }

    pub fn grouping_separator(&self) -> &'static str {
        self.rules.separator()
    }

    pub fn decimal_separator(&self) -> &'static str {
        self.rules.decimal()
    }

    /// Round `value` to `digits` decimals and apply locale separators.
    pub fn to_locale_fixed(&self, value: f64, digits: usize) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let fixed = format!("{value:.digits$}");
        let (negative, unsigned) = match fixed.strip_prefix('-') {
            Some(rest) => (rest.bytes().any(|b| matches!(b, b'1'..=b'9')), rest),
            None => (false, fixed.as_str()),
        };
        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (unsigned, None),
        };

        let mut out = String::with_capacity(fixed.len() * 2);
        if negative {
            out.push_str(self.rules.minus_sign());
        }
        match int_part.parse::<u128>() {
            Ok(n) => {
                let mut buf = Buffer::default();
                buf.write_formatted(&n, &self.rules);
                out.push_str(buf.as_str());
            }
            Err(_) => out.push_str(int_part),
        }
        if let Some(frac) = frac_part {
            out.push_str(self.rules.decimal());
            out.push_str(frac);
        }
        out
    }
}

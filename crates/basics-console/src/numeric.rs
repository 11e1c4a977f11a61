//! Standard numeric format specifiers.
//!
//! A specifier is one letter plus an optional precision, e.g. `c`, `d9`,
//! `f3`, `E`, `x8`. Numbers are first turned into their exact decimal digits
//! and then rounded half away from zero, so `2.5` under `F0` is `3` and
//! `1.005` under `F2` is `1.00` (the double is slightly below 1.005).

use std::fmt;
use std::str::FromStr;

use crate::error::{BasicsError, BasicsResult};
use crate::locale::{CurrencyPlacement, NumberLocale};

/// Largest precision accepted after a specifier letter.
pub const MAX_PRECISION: usize = 99;

/// Significant digits `G` uses for doubles before switching to scientific.
const SHORTEST_SCIENTIFIC_THRESHOLD: usize = 15;

/// The family selected by a specifier letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// `C` - currency
    Currency,
    /// `D` - integer digits, zero padded
    Decimal,
    /// `E` - scientific
    Exponential,
    /// `F` - fixed point
    FixedPoint,
    /// `G` - general (shortest of fixed and scientific)
    General,
    /// `N` - grouped fixed point
    Number,
    /// `X` - hexadecimal
    Hexadecimal,
}

/// A parsed format specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec {
    pub kind: FormatKind,
    /// Letter case of the specifier. Controls the exponent marker and hex digits.
    pub uppercase: bool,
    pub precision: Option<usize>,
}

impl FormatSpec {
    /// Parse a specifier such as `d9` or `E`.
    pub fn parse(spec: &str) -> BasicsResult<Self> {
        let mut chars = spec.chars();
        let letter = chars
            .next()
            .ok_or_else(|| BasicsError::Format("empty format specifier".to_string()))?;

        let kind = match letter.to_ascii_uppercase() {
            'C' => FormatKind::Currency,
            'D' => FormatKind::Decimal,
            'E' => FormatKind::Exponential,
            'F' => FormatKind::FixedPoint,
            'G' => FormatKind::General,
            'N' => FormatKind::Number,
            'X' => FormatKind::Hexadecimal,
            _ => {
                return Err(BasicsError::Format(format!(
                    "unsupported format specifier '{spec}'"
                )));
            }
        };

        let rest = chars.as_str();
        let precision = if rest.is_empty() {
            None
        } else {
            let p: usize = rest.parse().map_err(|_| {
                BasicsError::Format(format!("invalid precision in format specifier '{spec}'"))
            })?;
            if p > MAX_PRECISION {
                return Err(BasicsError::Format(format!(
                    "precision {p} exceeds maximum of {MAX_PRECISION}"
                )));
            }
            Some(p)
        };

        Ok(Self {
            kind,
            uppercase: letter.is_ascii_uppercase(),
            precision,
        })
    }
}

impl FromStr for FormatSpec {
    type Err = BasicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A number ready for formatting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I32(i32),
    I64(i64),
    F64(f64),
}

impl Number {
    fn exact_digits(self) -> Digits {
        match self {
            Number::I32(v) => Digits::from_integer(i128::from(v)),
            Number::I64(v) => Digits::from_integer(i128::from(v)),
            Number::F64(v) => Digits::from_float_exact(v),
        }
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Number::I32(v)
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number::I64(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::F64(v)
    }
}

impl fmt::Display for Number {
    /// Unformatted rendering with the invariant separators.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format_number(*self, None, &NumberLocale::invariant()).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

/// Render `number` under `spec` (or the default rendering when `None`).
pub fn format_number(
    number: Number,
    spec: Option<&FormatSpec>,
    locale: &NumberLocale,
) -> BasicsResult<String> {
    if let Number::F64(v) = number {
        if v.is_nan() {
            return Ok(locale.nan.to_string());
        }
        if v.is_infinite() {
            let symbol = if v > 0.0 {
                locale.positive_infinity
            } else {
                locale.negative_infinity
            };
            return Ok(symbol.to_string());
        }
    }

    let Some(spec) = spec else {
        return Ok(match number {
            Number::I32(v) => signed(locale, v < 0, &v.unsigned_abs().to_string()),
            Number::I64(v) => signed(locale, v < 0, &v.unsigned_abs().to_string()),
            Number::F64(_) => format_general(number, None, true, locale),
        });
    };

    match spec.kind {
        FormatKind::Currency => {
            let decimals = spec.precision.unwrap_or(locale.currency_digits);
            let mut digits = number.exact_digits();
            digits.round_fraction(decimals);
            let body = grouped_fixed(&digits, decimals, locale);
            let body = match locale.currency_placement {
                CurrencyPlacement::Prefix => format!("{}{body}", locale.currency_symbol),
                CurrencyPlacement::SuffixSpaced => {
                    format!("{body}\u{a0}{}", locale.currency_symbol)
                }
            };
            Ok(signed(locale, digits.is_negative(), &body))
        }
        FormatKind::Decimal => {
            let (negative, magnitude) = integer_parts(number, spec)?;
            let width = spec.precision.unwrap_or(0);
            Ok(signed(locale, negative, &format!("{magnitude:0>width$}")))
        }
        FormatKind::FixedPoint => {
            let decimals = spec.precision.unwrap_or(2);
            let mut digits = number.exact_digits();
            digits.round_fraction(decimals);
            let mut body = digits.integer_part();
            if decimals > 0 {
                body.push_str(locale.decimal_separator);
                body.push_str(&digits.fraction_part(decimals));
            }
            Ok(signed(locale, digits.is_negative(), &body))
        }
        FormatKind::Number => {
            let decimals = spec.precision.unwrap_or(2);
            let mut digits = number.exact_digits();
            digits.round_fraction(decimals);
            let body = grouped_fixed(&digits, decimals, locale);
            Ok(signed(locale, digits.is_negative(), &body))
        }
        FormatKind::Exponential => {
            let precision = spec.precision.unwrap_or(6);
            let mut digits = number.exact_digits();
            digits.round_significant(precision + 1);

            let mut body = String::new();
            body.push(char::from(b'0' + digits.digit(0)));
            if precision > 0 {
                body.push_str(locale.decimal_separator);
                for i in 1..=precision {
                    body.push(char::from(b'0' + digits.digit(i)));
                }
            }
            body.push_str(&exponent_suffix(
                digits.scientific_exponent(),
                spec.uppercase,
                3,
            ));
            Ok(signed(locale, digits.is_negative(), &body))
        }
        FormatKind::General => Ok(format_general(
            number,
            spec.precision,
            spec.uppercase,
            locale,
        )),
        FormatKind::Hexadecimal => {
            let hex = match number {
                Number::I32(v) if spec.uppercase => format!("{v:X}"),
                Number::I32(v) => format!("{v:x}"),
                Number::I64(v) if spec.uppercase => format!("{v:X}"),
                Number::I64(v) => format!("{v:x}"),
                Number::F64(_) => return Err(integer_only(spec)),
            };
            let width = spec.precision.unwrap_or(0);
            Ok(format!("{hex:0>width$}"))
        }
    }
}

fn integer_only(spec: &FormatSpec) -> BasicsError {
    BasicsError::Format(format!(
        "format specifier {:?} is only supported for integral types",
        spec.kind
    ))
}

fn integer_parts(number: Number, spec: &FormatSpec) -> BasicsResult<(bool, String)> {
    match number {
        Number::I32(v) => Ok((v < 0, v.unsigned_abs().to_string())),
        Number::I64(v) => Ok((v < 0, v.unsigned_abs().to_string())),
        Number::F64(_) => Err(integer_only(spec)),
    }
}

fn format_general(
    number: Number,
    precision: Option<usize>,
    uppercase: bool,
    locale: &NumberLocale,
) -> String {
    let (digits, limit) = match (number, precision.filter(|p| *p > 0)) {
        (_, Some(p)) => {
            let mut digits = number.exact_digits();
            digits.round_significant(p);
            (digits, p)
        }
        (Number::F64(v), None) => (
            Digits::from_float_shortest(v),
            SHORTEST_SCIENTIFIC_THRESHOLD,
        ),
        (_, None) => (number.exact_digits(), usize::MAX),
    };
    let exponent = digits.scientific_exponent();
    let scientific = exponent <= -5 || usize::try_from(exponent).is_ok_and(|e| e >= limit);

    let mut body = String::new();
    if scientific {
        body.push(char::from(b'0' + digits.digit(0)));
        if digits.len() > 1 {
            body.push_str(locale.decimal_separator);
            for i in 1..digits.len() {
                body.push(char::from(b'0' + digits.digit(i)));
            }
        }
        body.push_str(&exponent_suffix(exponent, uppercase, 2));
    } else {
        body.push_str(&digits.integer_part());
        let decimals = digits.fraction_len();
        if decimals > 0 {
            body.push_str(locale.decimal_separator);
            body.push_str(&digits.fraction_part(decimals));
        }
    }
    signed(locale, digits.is_negative(), &body)
}

fn exponent_suffix(exponent: i32, uppercase: bool, min_digits: usize) -> String {
    let marker = if uppercase { 'E' } else { 'e' };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!(
        "{marker}{sign}{:0>min_digits$}",
        exponent.unsigned_abs()
    )
}

fn grouped_fixed(digits: &Digits, decimals: usize, locale: &NumberLocale) -> String {
    let mut body = group_thousands(&digits.integer_part(), locale.group_separator);
    if decimals > 0 {
        body.push_str(locale.decimal_separator);
        body.push_str(&digits.fraction_part(decimals));
    }
    body
}

fn signed(locale: &NumberLocale, negative: bool, body: &str) -> String {
    if negative {
        format!("{}{body}", locale.negative_sign)
    } else {
        body.to_string()
    }
}

/// Insert `separator` between every group of three integer digits.
#[must_use]
pub fn group_thousands(integer: &str, separator: &str) -> String {
    let len = integer.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

/// Exact decimal digits of a number: `0.d1d2d3... x 10^exponent`.
///
/// Invariant: no leading or trailing zero digits; zero is the empty vector
/// with exponent 0.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Digits {
    negative: bool,
    digits: Vec<u8>,
    exponent: i32,
}

impl Digits {
    fn from_integer(value: i128) -> Self {
        let text = value.unsigned_abs().to_string();
        let exponent = text.len() as i32;
        Self::normalized(value < 0, text.bytes().map(|b| b - b'0').collect(), exponent)
    }

    /// Every double has at most 767 significant decimal digits.
    fn from_float_exact(value: f64) -> Self {
        Self::from_scientific(&format!("{:.766e}", value.abs()), value < 0.0)
    }

    /// Fewest digits that round-trip back to the same double.
    fn from_float_shortest(value: f64) -> Self {
        Self::from_scientific(&format!("{:e}", value.abs()), value < 0.0)
    }

    fn from_scientific(text: &str, negative: bool) -> Self {
        let (mantissa, exp) = text.split_once('e').unwrap_or((text, "0"));
        let exp: i32 = exp.parse().unwrap_or(0);
        let digits = mantissa
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .collect();
        Self::normalized(negative, digits, exp + 1)
    }

    fn normalized(negative: bool, mut digits: Vec<u8>, mut exponent: i32) -> Self {
        let leading = digits.iter().take_while(|d| **d == 0).count();
        digits.drain(..leading);
        exponent -= leading as i32;
        while digits.last() == Some(&0) {
            digits.pop();
        }
        if digits.is_empty() {
            exponent = 0;
        }
        Self {
            negative,
            digits,
            exponent,
        }
    }

    fn len(&self) -> usize {
        self.digits.len()
    }

    fn is_negative(&self) -> bool {
        self.negative && !self.digits.is_empty()
    }

    fn digit(&self, i: usize) -> u8 {
        self.digits.get(i).copied().unwrap_or(0)
    }

    fn scientific_exponent(&self) -> i32 {
        if self.digits.is_empty() {
            0
        } else {
            self.exponent - 1
        }
    }

    /// Keep the first `keep` digits, rounding half away from zero.
    fn round_at(&mut self, keep: i64) {
        if keep < 0 {
            self.digits.clear();
            self.exponent = 0;
            return;
        }
        let keep = keep as usize;
        if keep >= self.digits.len() {
            return;
        }

        let round_up = self.digits[keep] >= 5;
        self.digits.truncate(keep);
        if round_up {
            let mut i = keep;
            loop {
                if i == 0 {
                    self.digits.insert(0, 1);
                    self.exponent += 1;
                    break;
                }
                i -= 1;
                if self.digits[i] == 9 {
                    self.digits[i] = 0;
                } else {
                    self.digits[i] += 1;
                    break;
                }
            }
        }

        let digits = std::mem::take(&mut self.digits);
        *self = Self::normalized(self.negative, digits, self.exponent);
    }

    fn round_fraction(&mut self, decimals: usize) {
        self.round_at(i64::from(self.exponent) + decimals as i64);
    }

    fn round_significant(&mut self, significant: usize) {
        self.round_at(significant as i64);
    }

    fn integer_part(&self) -> String {
        if self.exponent <= 0 {
            return "0".to_string();
        }
        let whole = self.exponent as usize;
        (0..whole)
            .map(|i| char::from(b'0' + self.digit(i)))
            .collect()
    }

    fn fraction_len(&self) -> usize {
        (self.digits.len() as i64 - i64::from(self.exponent)).max(0) as usize
    }

    fn fraction_part(&self, decimals: usize) -> String {
        (0..decimals as i64)
            .map(|p| {
                let idx = i64::from(self.exponent) + p;
                let d = if idx >= 0 { self.digit(idx as usize) } else { 0 };
                char::from(b'0' + d)
            })
            .collect()
    }
}

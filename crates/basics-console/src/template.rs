//! Positional template interpolation
//!
//! Templates reference arguments by index: `"Hello {0}! You are {1} years old."`.
//! A placeholder may carry an alignment and a numeric format specifier,
//! `{index[,alignment][:specifier]}`. Literal braces are written `{{` and `}}`.

use crate::error::{BasicsError, BasicsResult};
use crate::locale::NumberLocale;
use crate::numeric::{FormatSpec, Number, format_number};

/// A borrowed argument for a template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// Missing value, such as a line read at end of input. Renders empty.
    Absent,
    Str(&'a str),
    Char(char),
    Bool(bool),
    I32(i32),
    I64(i64),
    F64(f64),
}

impl Value<'_> {
    /// Canonical text for a boolean.
    #[must_use]
    pub fn bool_label(b: bool) -> &'static str {
        if b { "True" } else { "False" }
    }

    /// Render this value, applying `spec` to numbers only.
    pub fn render(&self, spec: Option<&str>, locale: &NumberLocale) -> BasicsResult<String> {
        let number = match *self {
            Value::Absent => return Ok(String::new()),
            Value::Str(s) => return Ok(s.to_string()),
            Value::Char(c) => return Ok(c.to_string()),
            Value::Bool(b) => return Ok(Self::bool_label(b).to_string()),
            Value::I32(v) => Number::I32(v),
            Value::I64(v) => Number::I64(v),
            Value::F64(v) => Number::F64(v),
        };
        let spec = spec.map(FormatSpec::parse).transpose()?;
        format_number(number, spec.as_ref(), locale)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Str(s)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::Str(s.as_str())
    }
}

impl<'a> From<Option<&'a str>> for Value<'a> {
    fn from(s: Option<&'a str>) -> Self {
        s.map_or(Value::Absent, Value::Str)
    }
}

impl From<char> for Value<'_> {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value<'_> {
    fn from(v: i32) -> Self {
        Value::I32(v)
    }
}

impl From<i64> for Value<'_> {
    fn from(v: i64) -> Self {
        Value::I64(v)
    }
}

impl From<usize> for Value<'_> {
    fn from(v: usize) -> Self {
        Value::I64(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Value<'_> {
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

/// Substitute `args` into `template`.
pub fn interpolate(template: &str, args: &[Value<'_>], locale: &NumberLocale) -> BasicsResult<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let brace = rest.as_bytes()[pos];
        let after = &rest[pos + 1..];

        if brace == b'}' {
            if after.starts_with('}') {
                out.push('}');
                rest = &after[1..];
                continue;
            }
            return Err(BasicsError::template(template, "unmatched '}'"));
        }

        if after.starts_with('{') {
            out.push('{');
            rest = &after[1..];
            continue;
        }

        let end = after
            .find('}')
            .ok_or_else(|| BasicsError::template(template, "unterminated placeholder"))?;
        let placeholder = Placeholder::parse(template, &after[..end])?;
        let value = args.get(placeholder.index).ok_or_else(|| {
            BasicsError::template(
                template,
                format!(
                    "argument index {} out of range ({} supplied)",
                    placeholder.index,
                    args.len()
                ),
            )
        })?;

        let text = value.render(placeholder.spec, locale)?;
        placeholder.pad_into(&mut out, &text);
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Widths at or above this are rejected.
pub const MAX_ALIGNMENT: u64 = 1_000_000;

/// One `{index[,alignment][:specifier]}` directive.
#[derive(Debug, PartialEq, Eq)]
struct Placeholder<'t> {
    index: usize,
    alignment: i64,
    spec: Option<&'t str>,
}

impl<'t> Placeholder<'t> {
    fn parse(template: &str, body: &'t str) -> BasicsResult<Self> {
        if body.contains('{') {
            return Err(BasicsError::template(template, "nested '{' in placeholder"));
        }

        // `{0:}` is the default rendering.
        let (head, spec) = match body.split_once(':') {
            Some((head, spec)) => (head, Some(spec).filter(|s| !s.is_empty())),
            None => (body, None),
        };
        let (index, alignment) = match head.split_once(',') {
            Some((index, alignment)) => (index, Some(alignment)),
            None => (head, None),
        };

        let index = index.trim().parse::<usize>().map_err(|_| {
            BasicsError::template(template, format!("invalid argument index {index:?}"))
        })?;
        let alignment = match alignment {
            Some(a) => a.trim().parse::<i64>().map_err(|_| {
                BasicsError::template(template, format!("invalid alignment {a:?}"))
            })?,
            None => 0,
        };
        if alignment.unsigned_abs() >= MAX_ALIGNMENT {
            return Err(BasicsError::template(
                template,
                format!("alignment {alignment} must be below {MAX_ALIGNMENT}"),
            ));
        }

        Ok(Self {
            index,
            alignment,
            spec,
        })
    }

    fn pad_into(&self, out: &mut String, text: &str) {
        let width = self.alignment.unsigned_abs() as usize;
        if self.alignment >= 0 {
            out.push_str(&format!("{text:>width$}"));
        } else {
            out.push_str(&format!("{text:<width$}"));
        }
    }
}

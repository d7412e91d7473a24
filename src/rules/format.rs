//! Format rules: `email`, `date`, `url`, `uuid`, `card-number`, `regex` and
//! `not-regex`. Blank values pass.

use crate::compare::{is_blank, scalar_text};
use crate::error::ConfigError;
use crate::primitives::resolve;
use crate::validator::Validator;
use chrono::format::{self, Parsed, StrftimeItems};
use regex::Regex;
use serde_json::Value;
use std::fmt::{Display, Write};
use std::sync::LazyLock;

static EMAIL_LOCAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~.-]{1,64}$").unwrap());

static EMAIL_DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$")
        .unwrap()
});

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://(?:[^\s/?#@]+@)?[^\s/?#:@]+(?::[0-9]{1,5})?(?:[/?#]\S*)?$")
        .unwrap()
});

static UUID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9A-Fa-f]{8}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{12}$").unwrap()
});

const DEFAULT_DATE_FORMAT: &str = "Y-m-d";

// ─── Fixed formats ──────────────────────────────────────────────────────────

pub fn email(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    _parameters: &[String],
) -> Result<(), ConfigError> {
    check_text(validator, data, pattern, rule, &[], is_email);
    Ok(())
}

/// An address with a dotted domain: `username@example.com`.
pub fn is_email(text: &str) -> bool {
    let Some((local, domain)) = text.rsplit_once('@') else {
        return false;
    };
    EMAIL_LOCAL_RE.is_match(local)
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && domain.len() <= 253
        && EMAIL_DOMAIN_RE.is_match(domain)
}

/// Absolute URL with a scheme and a host.
pub fn url(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    _parameters: &[String],
) -> Result<(), ConfigError> {
    check_text(validator, data, pattern, rule, &[], |text| URL_RE.is_match(text));
    Ok(())
}

/// Hyphenated hex UUID. Only strings qualify.
pub fn uuid(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    _parameters: &[String],
) -> Result<(), ConfigError> {
    for (attribute, value) in resolve(data, pattern) {
        if is_blank(value) || value.as_str().is_some_and(|s| UUID_RE.is_match(s)) {
            continue;
        }
        validator.add_error(&attribute, rule);
    }
    Ok(())
}

/// Luhn checksum over the digits; spaces and hyphens are ignored.
pub fn card_number(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    _parameters: &[String],
) -> Result<(), ConfigError> {
    check_text(validator, data, pattern, rule, &[], luhn);
    Ok(())
}

pub fn luhn(text: &str) -> bool {
    let digits: Vec<u32> = text.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.is_empty() {
        return false;
    }

    let parity = digits.len() % 2;
    let total: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == parity {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    total % 10 == 0
}

// ─── Dates ──────────────────────────────────────────────────────────────────

/// `date` or `date:<format>`, with `Y-m-d` style format letters.
///
/// The value must parse under the format and print back identically, so
/// `2017-08-32` and `2017-8-29` both fail `Y-m-d`.
pub fn date(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    parameters: &[String],
) -> Result<(), ConfigError> {
    let format = match parameters.join(",") {
        f if f.is_empty() => DEFAULT_DATE_FORMAT.to_string(),
        f => f,
    };
    let strftime = strftime_format(&format).map_err(|letter| ConfigError::InvalidParameter {
        pattern: pattern.to_string(),
        rule: rule.to_string(),
        value: format.clone(),
        message: format!("unsupported format character '{}'", letter),
    })?;

    check_text(validator, data, pattern, rule, &[("format", format.as_str())], |text| {
        matches_date_format(text, &strftime)
    });
    Ok(())
}

/// Translates date format letters (`Y-m-d H:i:s`) to a chrono format string.
/// A backslash escapes the next character. Returns the first unsupported
/// letter on failure.
pub fn strftime_format(format: &str) -> Result<String, char> {
    let mut out = String::new();
    let mut chars = format.chars();

    while let Some(c) = chars.next() {
        let spec = match c {
            'd' => "%d",
            'D' => "%a",
            'j' => "%-d",
            'l' => "%A",
            'N' => "%u",
            'w' => "%w",
            'F' => "%B",
            'M' => "%b",
            'm' => "%m",
            'n' => "%-m",
            'Y' => "%Y",
            'y' => "%y",
            'a' => "%P",
            'A' => "%p",
            'g' => "%-I",
            'G' => "%-H",
            'h' => "%I",
            'H' => "%H",
            'i' => "%M",
            's' => "%S",
            'u' => "%6f",
            'v' => "%3f",
            'O' => "%z",
            'P' => "%:z",
            'U' => "%s",
            '\\' => {
                if let Some(escaped) = chars.next() {
                    push_literal(&mut out, escaped);
                }
                continue;
            }
            c if c.is_ascii_alphabetic() => return Err(c),
            c => {
                push_literal(&mut out, c);
                continue;
            }
        };
        out.push_str(spec);
    }
    Ok(out)
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

fn matches_date_format(text: &str, strftime: &str) -> bool {
    let mut parsed = Parsed::new();
    if format::parse(&mut parsed, text, StrftimeItems::new(strftime)).is_err() {
        return false;
    }

    let printed = if let Ok(dt) = parsed.to_naive_datetime_with_offset(0) {
        print(dt.format(strftime))
    } else if let Ok(d) = parsed.to_naive_date() {
        print(d.format(strftime))
    } else if let Ok(t) = parsed.to_naive_time() {
        print(t.format(strftime))
    } else {
        None
    };
    printed.as_deref() == Some(text)
}

/// Formatting fails for items a date or time alone cannot print.
fn print(formatted: impl Display) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", formatted).ok()?;
    Some(out)
}

// ─── Regular expressions ────────────────────────────────────────────────────

/// `regex:/pattern/flags`. Parameters are rejoined with `,`, so use the list
/// form of a rule entry when the expression contains `|`.
pub fn regex(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    parameters: &[String],
) -> Result<(), ConfigError> {
    let re = rule_regex(pattern, rule, parameters)?;
    for (attribute, value) in resolve(data, pattern) {
        if is_blank(value) || value.as_str().is_some_and(|s| re.is_match(s)) {
            continue;
        }
        validator.add_error(&attribute, rule);
    }
    Ok(())
}

pub fn not_regex(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    parameters: &[String],
) -> Result<(), ConfigError> {
    let re = rule_regex(pattern, rule, parameters)?;
    for (attribute, value) in resolve(data, pattern) {
        if is_blank(value) || value.as_str().is_some_and(|s| !re.is_match(s)) {
            continue;
        }
        validator.add_error(&attribute, rule);
    }
    Ok(())
}

fn rule_regex(pattern: &str, rule: &str, parameters: &[String]) -> Result<Regex, ConfigError> {
    let source = parameters.join(",");
    if source.is_empty() {
        return Err(ConfigError::MissingParameter {
            pattern: pattern.to_string(),
            rule: rule.to_string(),
        });
    }
    compile_delimited(&source).map_err(|message| ConfigError::InvalidRegex {
        pattern: pattern.to_string(),
        rule: rule.to_string(),
        message,
    })
}

/// Compiles `/body/flags`, where the delimiter is one of
/// [`DELIMITERS`] or a bracket pair. Flags `i`, `m`, `s`, `x` and `U` become
/// inline flags; `u` and `D` are accepted and ignored. Text without delimiters
/// compiles as is.
pub fn compile_delimited(source: &str) -> Result<Regex, String> {
    let (body, flags) = split_delimiters(source).unwrap_or((source, ""));

    let mut inline = String::new();
    for flag in flags.chars() {
        match flag {
            'i' | 'm' | 's' | 'x' | 'U' => inline.push(flag),
            'u' | 'D' => {}
            other => return Err(format!("unsupported modifier '{}'", other)),
        }
    }

    let expression = if inline.is_empty() {
        body.to_string()
    } else {
        format!("(?{}){}", inline, body)
    };
    Regex::new(&expression).map_err(|e| e.to_string())
}

/// Single-character delimiters. Regex metacharacters are left out so that an
/// undelimited expression such as `^a|^b` is never split.
pub const DELIMITERS: &[char] = &[
    '/', '#', '~', '!', '@', '%', ',', ';', '`', '"', '\'', '=', ':',
];

const MODIFIERS: &[char] = &['i', 'm', 's', 'x', 'U', 'u', 'D'];

fn split_delimiters(source: &str) -> Option<(&str, &str)> {
    let open = source.chars().next()?;
    let (close, bracketed) = match open {
        '(' => (')', true),
        '{' => ('}', true),
        '[' => (']', true),
        '<' => ('>', true),
        c if DELIMITERS.contains(&c) => (c, false),
        _ => return None,
    };

    let rest = &source[open.len_utf8()..];
    let end = rest.rfind(close)?;
    let flags = &rest[end + close.len_utf8()..];

    // Brackets are also grouping syntax: `(a)b` is an expression, not `a`
    // with flag `b`.
    let valid = if bracketed {
        flags.chars().all(|c| MODIFIERS.contains(&c))
    } else {
        flags.chars().all(|c| c.is_ascii_alphabetic())
    };
    valid.then_some((&rest[..end], flags))
}

// ─── Shared ─────────────────────────────────────────────────────────────────

/// Checks the text of every non-blank scalar. Containers fail.
fn check_text(
    validator: &mut Validator,
    data: &Value,
    pattern: &str,
    rule: &str,
    replacements: &[(&str, &str)],
    passes: impl Fn(&str) -> bool,
) {
    for (attribute, value) in resolve(data, pattern) {
        if is_blank(value) || scalar_text(value).is_some_and(|text| passes(&text)) {
            continue;
        }
        validator.add_error_with(&attribute, rule, replacements.iter().copied());
    }
}

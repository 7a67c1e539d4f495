//! Translation of Unicode date patterns (`"EEEE, MMM d, yyyy"`) into chrono
//! format strings (`"%A, %b %-d, %Y"`).
//!
//! Pattern letters repeat to choose a width (`M` → `1`, `MM` → `01`,
//! `MMM` → `Jan`, `MMMM` → `January`). ASCII letters are reserved: each must
//! map to a known field or the pattern is rejected. Text inside single quotes is
//! copied verbatim and `''` stands for one quote. Everything else is a literal.

use std::iter::Peekable;
use std::str::Chars;

use crate::error::{Result, WrapperError};

/// Translate `pattern` into a chrono `strftime` string.
pub fn to_strftime(pattern: &str) -> Result<String> {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' => quoted(&mut chars, &mut out, pattern)?,
            c if c.is_ascii_alphabetic() => {
                let mut width = 1;
                while chars.next_if_eq(&c).is_some() {
                    width += 1;
                }
                let spec =
                    field_spec(c, width).ok_or_else(|| WrapperError::unsupported_field(c, pattern))?;
                out.push_str(spec);
            }
            other => push_literal(&mut out, other),
        }
    }

    Ok(out)
}

// Called after the opening quote has been consumed.
fn quoted(chars: &mut Peekable<Chars<'_>>, out: &mut String, pattern: &str) -> Result<()> {
    if chars.next_if_eq(&'\'').is_some() {
        out.push('\'');
        return Ok(());
    }

    while let Some(c) = chars.next() {
        if c != '\'' {
            push_literal(out, c);
        } else if chars.next_if_eq(&'\'').is_some() {
            out.push('\'');
        } else {
            return Ok(());
        }
    }

    Err(WrapperError::UnterminatedQuote {
        pattern: pattern.to_owned(),
    })
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

fn field_spec(letter: char, width: usize) -> Option<&'static str> {
    let spec = match (letter, width) {
        ('y', 2) => "%y",
        ('y', _) => "%Y",
        ('Y', 2) => "%g",
        ('Y', _) => "%G",
        ('M', 1) => "%-m",
        ('M', 2) => "%m",
        ('M', 3) => "%b",
        ('M', _) => "%B",
        ('d', 1) => "%-d",
        ('d', 2) => "%d",
        ('E', 1..=3) => "%a",
        ('E', _) => "%A",
        ('H', 1) => "%-H",
        ('H', 2) => "%H",
        ('h', 1) => "%-I",
        ('h', 2) => "%I",
        ('m', 1) => "%-M",
        ('m', 2) => "%M",
        ('s', 1) => "%-S",
        ('s', 2) => "%S",
        ('a', 1) => "%p",
        _ => return None,
    };
    Some(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_common_patterns() {
        assert_eq!(to_strftime("MM-dd-yyyy").unwrap(), "%m-%d-%Y");
        assert_eq!(to_strftime("yyyy-MM-dd").unwrap(), "%Y-%m-%d");
        assert_eq!(to_strftime("EEEE, MMM d, yyyy").unwrap(), "%A, %b %-d, %Y");
        assert_eq!(to_strftime("h:mm a").unwrap(), "%-I:%M %p");
    }

    #[test]
    fn week_year_is_distinct_from_calendar_year() {
        assert_eq!(to_strftime("MM-dd-YYYY").unwrap(), "%m-%d-%G");
    }

    #[test]
    fn quoted_text_is_literal() {
        assert_eq!(to_strftime("'Day' d").unwrap(), "Day %-d");
        assert_eq!(to_strftime("h 'o''clock'").unwrap(), "%-I o'clock");
        assert_eq!(to_strftime("''yy").unwrap(), "'%y");
    }

    #[test]
    fn percent_signs_are_escaped() {
        assert_eq!(to_strftime("d%").unwrap(), "%-d%%");
    }

    #[test]
    fn unknown_letters_are_rejected() {
        assert_eq!(
            to_strftime("yyyy QQ"),
            Err(WrapperError::unsupported_field('Q', "yyyy QQ"))
        );
        assert!(to_strftime("ddd").is_err());
    }

    #[test]
    fn unterminated_quote_is_rejected() {
        assert_eq!(
            to_strftime("d 'of"),
            Err(WrapperError::UnterminatedQuote {
                pattern: "d 'of".to_string()
            })
        );
    }
}

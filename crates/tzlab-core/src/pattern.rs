//! Compiled date-time patterns.
//!
//! Patterns use the familiar letter-run syntax (`yyyy-MM-dd'T'HH:mm:ss.SSS`).
//! A pattern is compiled once into a token list and then drives both
//! formatting and parsing, so the two directions always agree on field
//! positions.
//!
//! | Token  | Field        | Example       |
//! |--------|--------------|---------------|
//! | `yyyy` | year         | `2022`        |
//! | `MM`   | month        | `08`          |
//! | `dd`   | day          | `23`          |
//! | `HH`   | hour (0-23)  | `07`          |
//! | `mm`   | minute       | `00`          |
//! | `ss`   | second       | `00`          |
//! | `SSS`  | millisecond  | `000`         |
//! | `Z`    | offset       | `-0700`       |
//! | `X`    | offset       | `Z`, `-07`    |
//! | `XX`   | offset       | `Z`, `-0700`  |
//! | `XXX`  | offset       | `Z`, `-07:00` |
//! | `xx`   | offset       | `+0000`       |
//! | `xxx`  | offset       | `+00:00`      |
//!
//! Text between single quotes is literal, and `''` stands for a single quote.
//! Any other non-letter character is literal too.

use jiff::{civil::DateTime, tz::Offset, Zoned};

use crate::error::{ConversionError, Result};

/// Local date-time with milliseconds, no offset.
pub const LOCAL_PATTERN: &str = "yyyy-MM-dd'T'HH:mm:ss.SSS";

/// Local date-time with milliseconds and a `+HHMM` offset.
pub const OFFSET_PATTERN: &str = "yyyy-MM-dd'T'HH:mm:ss.SSSZ";

/// Local date-time with milliseconds and a `+HH:MM` offset (`+00:00` for UTC).
pub const ISO_OFFSET_PATTERN: &str = "yyyy-MM-dd'T'HH:mm:ss.SSSxxx";

/// How an offset field is written and read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OffsetField {
    /// Emit minutes (`X` alone omits them)
    minutes: bool,
    /// Separate hours and minutes with `:`
    colon: bool,
    /// Write a zero offset as `Z`
    zulu: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
    Offset(OffsetField),
}

/// Local fields read from text, plus the offset if the text carried one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDateTime {
    pub datetime: DateTime,
    pub offset: Option<Offset>,
}

/// A compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimePattern {
    source: String,
    tokens: Vec<Token>,
}

impl DateTimePattern {
    /// Compiles a pattern string.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::InvalidPattern` for unsupported letter runs,
    /// unterminated quotes, or more than one offset field.
    pub fn compile(pattern: &str) -> Result<Self> {
        let mut tokens: Vec<Token> = Vec::new();
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '\'' {
                let mut text = String::new();
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    text.push('\'');
                } else {
                    let mut closed = false;
                    while let Some(q) = chars.next() {
                        if q == '\'' {
                            if chars.peek() == Some(&'\'') {
                                chars.next();
                                text.push('\'');
                            } else {
                                closed = true;
                                break;
                            }
                        } else {
                            text.push(q);
                        }
                    }
                    if !closed {
                        return Err(ConversionError::invalid_pattern(
                            pattern,
                            "unterminated quoted literal",
                        ));
                    }
                }
                push_literal(&mut tokens, &text);
            } else if c.is_ascii_alphabetic() {
                let mut count = 1;
                while chars.peek() == Some(&c) {
                    chars.next();
                    count += 1;
                }
                tokens.push(field_token(pattern, c, count)?);
            } else {
                push_literal(&mut tokens, c.encode_utf8(&mut [0; 4]));
            }
        }

        let offsets = tokens
            .iter()
            .filter(|t| matches!(t, Token::Offset(_)))
            .count();
        if offsets > 1 {
            return Err(ConversionError::invalid_pattern(
                pattern,
                "at most one offset field is allowed",
            ));
        }

        Ok(Self {
            source: pattern.to_string(),
            tokens,
        })
    }

    /// Renders the local fields and offset of a zoned date-time.
    pub fn format_zoned(&self, zdt: &Zoned) -> String {
        let mut out = String::with_capacity(self.source.len() + 8);
        for token in &self.tokens {
            match token {
                Token::Literal(text) => out.push_str(text),
                Token::Year => push_year(&mut out, zdt.year()),
                Token::Month => push_padded(&mut out, i64::from(zdt.month()), 2),
                Token::Day => push_padded(&mut out, i64::from(zdt.day()), 2),
                Token::Hour => push_padded(&mut out, i64::from(zdt.hour()), 2),
                Token::Minute => push_padded(&mut out, i64::from(zdt.minute()), 2),
                Token::Second => push_padded(&mut out, i64::from(zdt.second()), 2),
                Token::Millisecond => push_padded(&mut out, i64::from(zdt.millisecond()), 3),
                Token::Offset(field) => push_offset(&mut out, zdt.offset(), *field),
            }
        }
        out
    }

    /// Reads local fields (and an offset, if the pattern has one) from text.
    ///
    /// Fields the pattern does not mention default to 1970-01-01T00:00:00.000.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::Parse` when the text does not match the
    /// pattern or a field is out of range.
    pub fn parse(&self, text: &str) -> Result<ParsedDateTime> {
        let mut cursor = Cursor {
            text,
            pos: 0,
            pattern: &self.source,
        };
        let (mut year, mut month, mut day) = (1970_i64, 1_i64, 1_i64);
        let (mut hour, mut minute, mut second, mut millis) = (0_i64, 0_i64, 0_i64, 0_i64);
        let mut offset = None;

        for token in &self.tokens {
            match token {
                Token::Literal(lit) => cursor.expect_literal(lit)?,
                Token::Year => year = cursor.signed_digits(4)?,
                Token::Month => month = cursor.digits(2)?,
                Token::Day => day = cursor.digits(2)?,
                Token::Hour => hour = cursor.digits(2)?,
                Token::Minute => minute = cursor.digits(2)?,
                Token::Second => second = cursor.digits(2)?,
                Token::Millisecond => millis = cursor.digits(3)?,
                Token::Offset(field) => offset = Some(cursor.offset(*field)?),
            }
        }
        if cursor.pos != text.len() {
            return Err(cursor.error(format!(
                "unexpected trailing text '{}'",
                &text[cursor.pos..]
            )));
        }

        let datetime = build_datetime(year, month, day, hour, minute, second, millis)
            .map_err(|reason| ConversionError::parse(text, &self.source).with_reason(reason))?;
        Ok(ParsedDateTime { datetime, offset })
    }
}

fn field_token(pattern: &str, letter: char, count: usize) -> Result<Token> {
    let token = match (letter, count) {
        ('y', 4) => Token::Year,
        ('M', 2) => Token::Month,
        ('d', 2) => Token::Day,
        ('H', 2) => Token::Hour,
        ('m', 2) => Token::Minute,
        ('s', 2) => Token::Second,
        ('S', 3) => Token::Millisecond,
        ('Z', 1) => Token::Offset(OffsetField {
            minutes: true,
            colon: false,
            zulu: false,
        }),
        ('X', 1..=3) => Token::Offset(OffsetField {
            minutes: count > 1,
            colon: count == 3,
            zulu: true,
        }),
        ('x', 2..=3) => Token::Offset(OffsetField {
            minutes: true,
            colon: count == 3,
            zulu: false,
        }),
        _ => {
            return Err(ConversionError::invalid_pattern(
                pattern,
                format!(
                    "unsupported field '{}'",
                    std::iter::repeat(letter).take(count).collect::<String>()
                ),
            ))
        }
    };
    Ok(token)
}

fn push_literal(tokens: &mut Vec<Token>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Token::Literal(last)) = tokens.last_mut() {
        last.push_str(text);
    } else {
        tokens.push(Token::Literal(text.to_string()));
    }
}

fn push_padded(out: &mut String, value: i64, width: usize) {
    out.push_str(&format!("{value:0width$}"));
}

fn push_year(out: &mut String, year: i16) {
    if year < 0 {
        out.push('-');
    }
    push_padded(out, i64::from(year).abs(), 4);
}

fn push_offset(out: &mut String, offset: Offset, field: OffsetField) {
    let total = offset.seconds();
    if total == 0 && field.zulu {
        out.push('Z');
        return;
    }
    out.push(if total < 0 { '-' } else { '+' });
    let total = total.unsigned_abs();
    push_padded(out, i64::from(total / 3600), 2);
    if field.minutes {
        if field.colon {
            out.push(':');
        }
        push_padded(out, i64::from(total % 3600 / 60), 2);
    }
}

fn build_datetime(
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
    millis: i64,
) -> std::result::Result<DateTime, String> {
    let narrow = |name: &str, value: i64| {
        i8::try_from(value).map_err(|_| format!("{name} value {value} is out of range"))
    };
    let year = i16::try_from(year).map_err(|_| format!("year value {year} is out of range"))?;
    DateTime::new(
        year,
        narrow("month", month)?,
        narrow("day", day)?,
        narrow("hour", hour)?,
        narrow("minute", minute)?,
        narrow("second", second)?,
        // three digits at most, so this cannot overflow
        (millis * 1_000_000) as i32,
    )
    .map_err(|e| e.to_string())
}

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
    pattern: &'a str,
}

impl Cursor<'_> {
    fn error(&self, reason: impl Into<String>) -> ConversionError {
        ConversionError::parse(self.text, self.pattern).with_reason(reason)
    }

    fn rest(&self) -> &str {
        &self.text[self.pos..]
    }

    fn expect_literal(&mut self, literal: &str) -> Result<()> {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            Ok(())
        } else {
            Err(self.error(format!(
                "expected '{literal}' at position {}",
                self.pos
            )))
        }
    }

    fn digits(&mut self, width: usize) -> Result<i64> {
        let rest = self.rest().as_bytes();
        if rest.len() < width || !rest[..width].iter().all(u8::is_ascii_digit) {
            return Err(self.error(format!(
                "expected {width} digits at position {}",
                self.pos
            )));
        }
        let value = rest[..width]
            .iter()
            .fold(0_i64, |acc, b| acc * 10 + i64::from(b - b'0'));
        self.pos += width;
        Ok(value)
    }

    fn signed_digits(&mut self, width: usize) -> Result<i64> {
        if self.rest().starts_with('-') {
            self.pos += 1;
            Ok(-self.digits(width)?)
        } else {
            self.digits(width)
        }
    }

    fn offset(&mut self, field: OffsetField) -> Result<Offset> {
        if field.zulu && self.rest().starts_with('Z') {
            self.pos += 1;
            return Ok(Offset::UTC);
        }
        let sign = match self.rest().as_bytes().first() {
            Some(b'+') => 1,
            Some(b'-') => -1,
            _ => {
                return Err(self.error(format!(
                    "expected offset sign at position {}",
                    self.pos
                )))
            }
        };
        self.pos += 1;
        let hours = self.digits(2)?;
        let minutes = if field.minutes {
            if field.colon {
                self.expect_literal(":")?;
            }
            self.digits(2)?
        } else {
            0
        };
        if minutes > 59 {
            return Err(self.error(format!("offset minutes {minutes} out of range")));
        }
        let seconds = sign * (hours * 3600 + minutes * 60);
        // hours are two digits, so the total fits comfortably in i32
        Offset::from_seconds(seconds as i32)
            .map_err(|e| self.error(format!("invalid offset: {e}")))
    }
}

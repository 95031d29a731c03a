//! Layout-driven parsing and formatting of dates.
//!
//! A layout shows how the reference moment
//!
//! ```text
//! Mon Jan 2 15:04:05 2006 -0700
//! ```
//!
//! would be written.  Each recognised piece of the reference moment stands
//! for the corresponding field; everything else is literal text:
//!
//! | chunk | meaning |
//! |---|---|
//! | `2006` | year, at least four digits, optional leading `-` |
//! | `06` | two-digit year (`69`–`99` → 19xx, `00`–`68` → 20xx) |
//! | `01`, `1` | month, zero-padded / unpadded |
//! | `Jan`, `January` | month name |
//! | `02`, `2`, `_2` | day of month, zero-padded / unpadded / space-padded |
//! | `002` | day of year, three digits |
//! | `Mon`, `Monday` | weekday name |
//! | `15`, `03`, `3` | hour (24h, 12h zero-padded, 12h) |
//! | `04`, `4` | minute |
//! | `05`, `5` | second |
//! | `PM`, `pm` | AM/PM marker |
//! | `.000`, `.999` | fractional seconds (fixed / optional digits) |
//! | `-0700`, `-07:00`, `-07`, `Z0700`, `Z07:00` | UTC offset |
//!
//! Time-of-day and offset chunks are parsed and validated but do not change
//! the resulting date.  Weekday names are accepted without checking them
//! against the date.  Fields missing from the layout default to year 0,
//! January, day 1.

use dc_core::errors::{Error, Result};

use crate::date::{days_in_month, Date};
use crate::month::Month;
use crate::weekday::Weekday;

/// The canonical `YYYY-MM-DD` layout.
pub const CANONICAL: &str = "2006-01-02";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chunk<'a> {
    Literal(&'a str),
    LongYear,
    Year,
    Month,
    ZeroMonth,
    MonthShort,
    MonthLong,
    Day,
    ZeroDay,
    UnderDay,
    YearDay,
    WeekdayShort,
    WeekdayLong,
    Hour,
    Hour12,
    ZeroHour12,
    Minute,
    ZeroMinute,
    Second,
    ZeroSecond,
    Meridiem { upper: bool },
    Fraction { sep: char, digits: usize, optional: bool },
    Offset(OffsetStyle),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OffsetStyle {
    /// `-0700`
    Compact,
    /// `-07:00`
    Colon,
    /// `-07`
    HoursOnly,
    /// `Z0700`
    IsoCompact,
    /// `Z07:00`
    IsoColon,
}

impl OffsetStyle {
    fn allows_z(self) -> bool {
        matches!(self, OffsetStyle::IsoCompact | OffsetStyle::IsoColon)
    }
}

impl Chunk<'_> {
    fn is_numeric(&self) -> bool {
        !matches!(
            self,
            Chunk::Literal(_)
                | Chunk::MonthShort
                | Chunk::MonthLong
                | Chunk::WeekdayShort
                | Chunk::WeekdayLong
                | Chunk::Meridiem { .. }
        )
    }
}

/// Why a parse failed; rendered into [`Error::Parse`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
enum ParseFailure {
    #[error("expected {expected:?}, found {found:?}")]
    Literal { expected: String, found: String },
    #[error("cannot read {0}")]
    BadValue(&'static str),
    #[error("{0} out of range")]
    OutOfRange(&'static str),
    #[error("extra text {0:?}")]
    ExtraText(String),
    #[error("day of year does not agree with month and day")]
    YearDayMismatch,
}

type Step<T> = std::result::Result<T, ParseFailure>;

// ── Layout tokenizer ──────────────────────────────────────────────────────────

/// Recognise the chunk at the start of `s`, returning it with its length.
fn std_chunk(s: &str) -> Option<(Chunk<'static>, usize)> {
    const FIXED: &[(&str, Chunk<'static>)] = &[
        ("January", Chunk::MonthLong),
        ("Jan", Chunk::MonthShort),
        ("Monday", Chunk::WeekdayLong),
        ("Mon", Chunk::WeekdayShort),
        ("2006", Chunk::LongYear),
        ("002", Chunk::YearDay),
        ("01", Chunk::ZeroMonth),
        ("02", Chunk::ZeroDay),
        ("03", Chunk::ZeroHour12),
        ("04", Chunk::ZeroMinute),
        ("05", Chunk::ZeroSecond),
        ("06", Chunk::Year),
        ("15", Chunk::Hour),
        ("_2", Chunk::UnderDay),
        ("1", Chunk::Month),
        ("2", Chunk::Day),
        ("3", Chunk::Hour12),
        ("4", Chunk::Minute),
        ("5", Chunk::Second),
        ("PM", Chunk::Meridiem { upper: true }),
        ("pm", Chunk::Meridiem { upper: false }),
        ("-07:00", Chunk::Offset(OffsetStyle::Colon)),
        ("-0700", Chunk::Offset(OffsetStyle::Compact)),
        ("-07", Chunk::Offset(OffsetStyle::HoursOnly)),
        ("Z07:00", Chunk::Offset(OffsetStyle::IsoColon)),
        ("Z0700", Chunk::Offset(OffsetStyle::IsoCompact)),
    ];

    // `_2006` is a literal underscore followed by a year.
    if s.starts_with("_2006") {
        return None;
    }
    if let Some(frac) = fraction_chunk(s) {
        return Some(frac);
    }
    FIXED
        .iter()
        .find(|(pat, _)| s.starts_with(pat))
        .map(|&(pat, chunk)| (chunk, pat.len()))
}

/// `.000` / `,999` style fractional seconds, only when not followed by a digit.
fn fraction_chunk(s: &str) -> Option<(Chunk<'static>, usize)> {
    let bytes = s.as_bytes();
    let sep = *bytes.first()?;
    let digit = *bytes.get(1)?;
    if !matches!(sep, b'.' | b',') || !matches!(digit, b'0' | b'9') {
        return None;
    }
    let digits = bytes[1..].iter().take_while(|&&b| b == digit).count();
    if bytes.get(1 + digits).is_some_and(u8::is_ascii_digit) {
        return None;
    }
    Some((
        Chunk::Fraction {
            sep: sep as char,
            digits,
            optional: digit == b'9',
        },
        1 + digits,
    ))
}

fn tokenize(layout: &str) -> Vec<Chunk<'_>> {
    let mut chunks = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;
    while i < layout.len() {
        match std_chunk(&layout[i..]) {
            Some((chunk, len)) => {
                if literal_start < i {
                    chunks.push(Chunk::Literal(&layout[literal_start..i]));
                }
                chunks.push(chunk);
                i += len;
                literal_start = i;
            }
            None => {
                i += layout[i..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    if literal_start < layout.len() {
        chunks.push(Chunk::Literal(&layout[literal_start..]));
    }
    chunks
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse `text` according to `layout`.
pub fn parse(layout: &str, text: &str) -> Result<Date> {
    parse_fields(layout, text).map_err(|e| Error::parse(text, layout, e.to_string()))
}

#[derive(Default)]
struct Fields {
    year: Option<i32>,
    month: Option<u8>,
    day: Option<u8>,
    year_day: Option<u16>,
}

fn parse_fields(layout: &str, text: &str) -> Step<Date> {
    let chunks = tokenize(layout);
    let mut fields = Fields::default();
    let mut rest = text;

    for (idx, chunk) in chunks.iter().enumerate() {
        let next = chunks.get(idx + 1);
        rest = match *chunk {
            Chunk::Literal(lit) => {
                rest.strip_prefix(lit).ok_or_else(|| ParseFailure::Literal {
                    expected: lit.to_string(),
                    found: rest.chars().take(lit.chars().count()).collect(),
                })?
            }
            Chunk::LongYear => {
                let greedy = next.map_or(true, |c| !c.is_numeric());
                let (negative, body) = match rest.strip_prefix('-') {
                    Some(body) => (true, body),
                    None => (false, rest),
                };
                let max = if greedy { 10 } else { 4 };
                let (v, r) = digits(body, 4, max, "year")?;
                let v = i32::try_from(v).map_err(|_| ParseFailure::OutOfRange("year"))?;
                fields.year = Some(if negative { -v } else { v });
                r
            }
            Chunk::Year => {
                let (v, r) = digits(rest, 2, 2, "year")?;
                let v = v as i32;
                fields.year = Some(if v >= 69 { 1900 + v } else { 2000 + v });
                r
            }
            Chunk::Month | Chunk::ZeroMonth => {
                let min = if *chunk == Chunk::ZeroMonth { 2 } else { 1 };
                let (v, r) = digits(rest, min, 2, "month")?;
                fields.month = Some(in_range(v, 1, 12, "month")? as u8);
                r
            }
            Chunk::MonthShort | Chunk::MonthLong => {
                let (m, r) = lookup(rest, &Month::ALL, |m| {
                    if *chunk == Chunk::MonthShort {
                        m.short_name()
                    } else {
                        m.long_name()
                    }
                })
                .ok_or(ParseFailure::BadValue("month"))?;
                fields.month = Some(m.number());
                r
            }
            Chunk::Day | Chunk::ZeroDay | Chunk::UnderDay => {
                let body = if *chunk == Chunk::UnderDay {
                    rest.strip_prefix(' ').unwrap_or(rest)
                } else {
                    rest
                };
                let min = if *chunk == Chunk::ZeroDay { 2 } else { 1 };
                let (v, r) = digits(body, min, 2, "day")?;
                fields.day = Some(in_range(v, 1, 31, "day")? as u8);
                r
            }
            Chunk::YearDay => {
                let (v, r) = digits(rest, 3, 3, "day of year")?;
                fields.year_day = Some(in_range(v, 1, 366, "day of year")? as u16);
                r
            }
            Chunk::WeekdayShort | Chunk::WeekdayLong => {
                let (_, r) = lookup(rest, &Weekday::ALL, |w| {
                    if *chunk == Chunk::WeekdayShort {
                        w.short_name()
                    } else {
                        w.long_name()
                    }
                })
                .ok_or(ParseFailure::BadValue("weekday"))?;
                r
            }
            Chunk::Hour => {
                let (v, r) = digits(rest, 1, 2, "hour")?;
                in_range(v, 0, 23, "hour")?;
                r
            }
            Chunk::Hour12 | Chunk::ZeroHour12 => {
                let min = if *chunk == Chunk::ZeroHour12 { 2 } else { 1 };
                let (v, r) = digits(rest, min, 2, "hour")?;
                in_range(v, 0, 12, "hour")?;
                r
            }
            Chunk::Minute | Chunk::ZeroMinute => {
                let min = if *chunk == Chunk::ZeroMinute { 2 } else { 1 };
                let (v, r) = digits(rest, min, 2, "minute")?;
                in_range(v, 0, 59, "minute")?;
                r
            }
            Chunk::Second | Chunk::ZeroSecond => {
                let min = if *chunk == Chunk::ZeroSecond { 2 } else { 1 };
                let (v, r) = digits(rest, min, 2, "second")?;
                in_range(v, 0, 59, "second")?;
                // Fractional seconds are accepted even when the layout omits them.
                match next {
                    Some(Chunk::Fraction { .. }) => r,
                    _ => skip_fraction(r),
                }
            }
            Chunk::Meridiem { upper } => {
                let (am, pm) = if upper { ("AM", "PM") } else { ("am", "pm") };
                rest.strip_prefix(am)
                    .or_else(|| rest.strip_prefix(pm))
                    .ok_or(ParseFailure::BadValue("AM/PM"))?
            }
            Chunk::Fraction { digits: n, optional, .. } => {
                if optional {
                    skip_fraction(rest)
                } else {
                    let body = rest
                        .strip_prefix(['.', ','])
                        .ok_or(ParseFailure::BadValue("fractional second"))?;
                    digits(body, n, n, "fractional second")?.1
                }
            }
            Chunk::Offset(style) => parse_offset(rest, style)?,
        };
    }

    if !rest.is_empty() {
        return Err(ParseFailure::ExtraText(rest.to_string()));
    }
    resolve(fields)
}

fn resolve(fields: Fields) -> Step<Date> {
    let year = fields.year.unwrap_or(0);
    let (month, day) = match fields.year_day {
        Some(yd) => {
            let jan1 = Date::from_ymd(year, 1, 1).map_err(|_| ParseFailure::OutOfRange("year"))?;
            let days_in_year = if crate::date::is_leap_year(year) { 366 } else { 365 };
            if yd > days_in_year {
                return Err(ParseFailure::OutOfRange("day of year"));
            }
            let (_, m, d) = (jan1 + i32::from(yd) - 1).ymd();
            if fields.month.is_some_and(|fm| fm != m) || fields.day.is_some_and(|fd| fd != d) {
                return Err(ParseFailure::YearDayMismatch);
            }
            (m, d)
        }
        None => (fields.month.unwrap_or(1), fields.day.unwrap_or(1)),
    };
    if day > days_in_month(year, month) {
        return Err(ParseFailure::OutOfRange("day"));
    }
    Date::from_ymd(year, month, day).map_err(|_| ParseFailure::OutOfRange("year"))
}

/// Read between `min` and `max` ASCII digits.
fn digits<'a>(s: &'a str, min: usize, max: usize, field: &'static str) -> Step<(u64, &'a str)> {
    let n = s.bytes().take(max).take_while(u8::is_ascii_digit).count();
    if n < min {
        return Err(ParseFailure::BadValue(field));
    }
    let value = s[..n]
        .parse::<u64>()
        .map_err(|_| ParseFailure::OutOfRange(field))?;
    Ok((value, &s[n..]))
}

fn in_range(v: u64, lo: u64, hi: u64, field: &'static str) -> Step<u64> {
    if (lo..=hi).contains(&v) {
        Ok(v)
    } else {
        Err(ParseFailure::OutOfRange(field))
    }
}

/// Match one of `items` by name, ignoring ASCII case.
fn lookup<'a, T: Copy>(
    s: &'a str,
    items: &[T],
    name: impl Fn(&T) -> &'static str,
) -> Option<(T, &'a str)> {
    items.iter().find_map(|item| {
        let n = name(item);
        let head = s.get(..n.len())?;
        head.eq_ignore_ascii_case(n).then(|| (*item, &s[n.len()..]))
    })
}

fn skip_fraction(s: &str) -> &str {
    match s.strip_prefix(['.', ',']) {
        Some(body) if body.starts_with(|c: char| c.is_ascii_digit()) => {
            body.trim_start_matches(|c: char| c.is_ascii_digit())
        }
        _ => s,
    }
}

fn parse_offset(s: &str, style: OffsetStyle) -> Step<&str> {
    if style.allows_z() {
        if let Some(r) = s.strip_prefix('Z') {
            return Ok(r);
        }
    }
    let body = s
        .strip_prefix(['+', '-'])
        .ok_or(ParseFailure::BadValue("UTC offset"))?;
    let (hours, mut r) = digits(body, 2, 2, "UTC offset")?;
    in_range(hours, 0, 23, "UTC offset")?;
    match style {
        OffsetStyle::HoursOnly => {}
        OffsetStyle::Colon | OffsetStyle::IsoColon => {
            r = r.strip_prefix(':').ok_or(ParseFailure::BadValue("UTC offset"))?;
            r = digits(r, 2, 2, "UTC offset")?.1;
        }
        OffsetStyle::Compact | OffsetStyle::IsoCompact => {
            r = digits(r, 2, 2, "UTC offset")?.1;
        }
    }
    Ok(r)
}

// ── Formatting ────────────────────────────────────────────────────────────────

/// Render `date` according to `layout`.
///
/// Time-of-day chunks render midnight and offset chunks render UTC.
pub fn format(date: Date, layout: &str) -> String {
    use std::fmt::Write;

    let (y, m, d) = date.ymd();
    let month = date.month();
    let mut out = String::with_capacity(layout.len() + 8);
    for chunk in tokenize(layout) {
        // Writing to a String cannot fail.
        let _ = match chunk {
            Chunk::Literal(lit) => out.write_str(lit),
            Chunk::LongYear if y < 0 => write!(out, "-{:04}", y.unsigned_abs()),
            Chunk::LongYear => write!(out, "{y:04}"),
            Chunk::Year => write!(out, "{:02}", y.rem_euclid(100)),
            Chunk::Month => write!(out, "{m}"),
            Chunk::ZeroMonth => write!(out, "{m:02}"),
            Chunk::MonthShort => out.write_str(month.short_name()),
            Chunk::MonthLong => out.write_str(month.long_name()),
            Chunk::Day => write!(out, "{d}"),
            Chunk::ZeroDay => write!(out, "{d:02}"),
            Chunk::UnderDay => write!(out, "{d:>2}"),
            Chunk::YearDay => write!(out, "{:03}", date.day_of_year()),
            Chunk::WeekdayShort => out.write_str(date.weekday().short_name()),
            Chunk::WeekdayLong => out.write_str(date.weekday().long_name()),
            Chunk::Hour | Chunk::ZeroMinute | Chunk::ZeroSecond => out.write_str("00"),
            Chunk::Minute | Chunk::Second => out.write_str("0"),
            Chunk::Hour12 | Chunk::ZeroHour12 => out.write_str("12"),
            Chunk::Meridiem { upper: true } => out.write_str("AM"),
            Chunk::Meridiem { upper: false } => out.write_str("am"),
            Chunk::Fraction { optional: true, .. } => Ok(()),
            Chunk::Fraction { sep, digits, .. } => {
                out.push(sep);
                out.extend(std::iter::repeat('0').take(digits));
                Ok(())
            }
            Chunk::Offset(style) if style.allows_z() => out.write_str("Z"),
            Chunk::Offset(OffsetStyle::Colon) => out.write_str("+00:00"),
            Chunk::Offset(OffsetStyle::HoursOnly) => out.write_str("+00"),
            Chunk::Offset(_) => out.write_str("+0000"),
        };
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn tokenize_canonical() {
        assert_eq!(
            tokenize(CANONICAL),
            vec![
                Chunk::LongYear,
                Chunk::Literal("-"),
                Chunk::ZeroMonth,
                Chunk::Literal("-"),
                Chunk::ZeroDay,
            ]
        );
    }

    #[test]
    fn tokenize_words_and_fraction() {
        assert_eq!(
            tokenize("Monday, _2 Jan 15:04:05.000 UTC"),
            vec![
                Chunk::WeekdayLong,
                Chunk::Literal(", "),
                Chunk::UnderDay,
                Chunk::Literal(" "),
                Chunk::MonthShort,
                Chunk::Literal(" "),
                Chunk::Hour,
                Chunk::Literal(":"),
                Chunk::ZeroMinute,
                Chunk::Literal(":"),
                Chunk::ZeroSecond,
                Chunk::Fraction { sep: '.', digits: 3, optional: false },
                Chunk::Literal(" UTC"),
            ]
        );
    }

    #[test]
    fn parse_canonical() {
        assert_eq!(parse(CANONICAL, "2017-06-15").unwrap(), date(2017, 6, 15));
        assert_eq!(parse(CANONICAL, "0001-01-01").unwrap(), Date::from_serial(0));
    }

    #[test]
    fn parse_compact_layout_keeps_year_to_four_digits() {
        assert_eq!(parse("20060102", "20170615").unwrap(), date(2017, 6, 15));
    }

    #[test]
    fn parse_long_year_before_literal() {
        assert_eq!(parse(CANONICAL, "12345-01-02").unwrap(), date(12345, 1, 2));
        assert_eq!(parse(CANONICAL, "-0044-03-15").unwrap(), date(-44, 3, 15));
    }

    #[test]
    fn parse_names_and_time() {
        let d = parse("Mon Jan _2 15:04:05 2006", "Thu Jun 15 23:59:59 2017").unwrap();
        assert_eq!(d, date(2017, 6, 15));
        let d = parse("January 2, 2006 3:04pm", "june 5, 2017 11:30pm").unwrap();
        assert_eq!(d, date(2017, 6, 5));
    }

    #[test]
    fn parse_offsets_and_fractions() {
        let layout = "2006-01-02T15:04:05Z07:00";
        assert_eq!(parse(layout, "2017-06-15T10:00:00Z").unwrap(), date(2017, 6, 15));
        assert_eq!(parse(layout, "2017-06-15T10:00:00.123+02:00").unwrap(), date(2017, 6, 15));
        assert_eq!(
            parse("2006-01-02 15:04:05.999 -0700", "2017-06-15 10:00:00 -0130").unwrap(),
            date(2017, 6, 15)
        );
    }

    #[test]
    fn parse_two_digit_year() {
        assert_eq!(parse("02/01/06", "15/06/17").unwrap(), date(2017, 6, 15));
        assert_eq!(parse("02/01/06", "15/06/69").unwrap(), date(1969, 6, 15));
    }

    #[test]
    fn parse_year_day() {
        assert_eq!(parse("2006.002", "2024.061").unwrap(), date(2024, 3, 1));
        assert!(parse("2006.002", "2023.366").is_err());
        assert!(parse("2006-01-02 002", "2024-03-02 061").is_err());
    }

    #[test]
    fn missing_fields_default() {
        assert_eq!(parse("2006", "2017").unwrap(), date(2017, 1, 1));
        assert_eq!(parse("15:04", "10:30").unwrap(), date(0, 1, 1));
    }

    #[test]
    fn parse_errors_carry_input_and_layout() {
        let err = parse(CANONICAL, "2017-02-30").unwrap_err();
        assert_eq!(
            err,
            Error::parse("2017-02-30", CANONICAL, "day out of range")
        );
        assert!(matches!(parse(CANONICAL, "2017-13-01"), Err(Error::Parse { .. })));
        assert!(matches!(parse(CANONICAL, "2017/06/15"), Err(Error::Parse { .. })));
        assert!(matches!(parse(CANONICAL, "2017-06-15x"), Err(Error::Parse { .. })));
        assert!(matches!(parse(CANONICAL, ""), Err(Error::Parse { .. })));
        assert!(matches!(
            parse("2006-01-02 15:04", "2017-06-15 24:00"),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn format_layouts() {
        let d = date(2017, 6, 5);
        assert_eq!(format(d, CANONICAL), "2017-06-05");
        assert_eq!(format(d, "Mon Jan _2 2006"), "Mon Jun  5 2017");
        assert_eq!(format(d, "Monday, January 2, 06"), "Monday, June 5, 17");
        assert_eq!(format(d, "2006.002"), "2017.156");
        assert_eq!(format(d, "2006-01-02T15:04:05.000Z07:00"), "2017-06-05T00:00:00.000Z");
        assert_eq!(format(d, "3:04PM -0700"), "12:00AM +0000");
    }

    #[test]
    fn format_then_parse() {
        let layout = "Monday 02 January 2006";
        let d = date(1066, 10, 14);
        assert_eq!(parse(layout, &format(d, layout)).unwrap(), d);
    }
}

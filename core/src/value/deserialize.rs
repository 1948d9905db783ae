//! Parsing of temporal text values (DA, TM, DT)
//! into their partial precision representations.
//!
//! All functions here require the whole input to be consumed:
//! trailing characters make the value invalid.
use crate::value::partial::{
    check_component, DateComponent, DicomDate, DicomDateTime, DicomTime,
    Error as PartialValuesError,
};
use chrono::FixedOffset;
use snafu::{Backtrace, OptionExt, ResultExt, Snafu};

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Unexpected end of element"))]
    UnexpectedEndOfElement { backtrace: Backtrace },
    #[snafu(display("Invalid number token: got '{}', but must be a digit in '0'..='9'", *value as char))]
    InvalidNumberToken { value: u8, backtrace: Backtrace },
    #[snafu(display("Expected fraction delimiter '.', got '{}'", *value as char))]
    FractionDelimiter { value: u8, backtrace: Backtrace },
    #[snafu(display("Invalid time zone sign token: got '{}', but must be '+' or '-'", *value as char))]
    InvalidTimeZoneSignToken { value: u8, backtrace: Backtrace },
    #[snafu(display("Unexpected trailing content of {} bytes", len))]
    TrailingContent { len: usize, backtrace: Backtrace },
    #[snafu(display("Invalid UTC offset"))]
    InvalidUtcOffset { backtrace: Backtrace },
    #[snafu(display("Failed to construct partial value"))]
    PartialValue {
        #[snafu(backtrace)]
        source: PartialValuesError,
    },
}

type Result<T, E = Error> = std::result::Result<T, E>;

/// Decode a single DICOM Date (DA).
///
/// `YYYY` and `YYYYMM` are accepted with a reduced precision.
pub fn parse_date(buf: &[u8]) -> Result<DicomDate> {
    let (date, rest) = parse_date_partial(buf)?;
    ensure_consumed(rest)?;
    Ok(date)
}

/// Decode a single DICOM Time (TM).
///
/// Accepted forms are `HH`, `HHMM`, `HHMMSS`
/// and `HHMMSS.F` with 1 to 6 fraction digits.
pub fn parse_time(buf: &[u8]) -> Result<DicomTime> {
    let (time, rest) = parse_time_partial(buf)?;
    ensure_consumed(rest)?;
    Ok(time)
}

/// Decode a single DICOM Date Time (DT):
/// `YYYY[MM[DD[HH[MM[SS[.F]]]]]][&ZZXX]`.
pub fn parse_datetime(buf: &[u8]) -> Result<DicomDateTime> {
    let (date, rest) = parse_date_partial(buf)?;
    let (dt, rest) = if date.is_precise() && rest.first().map_or(false, u8::is_ascii_digit) {
        let (time, rest) = parse_time_partial(rest)?;
        (
            DicomDateTime::from_date_and_time(date, time).context(PartialValueSnafu)?,
            rest,
        )
    } else {
        (DicomDateTime::from_date(date), rest)
    };

    if rest.is_empty() {
        return Ok(dt);
    }
    let offset = parse_utc_offset(rest)?;
    Ok(dt.with_offset(offset))
}

/// Decode a date of partial precision,
/// returning the remaining bytes after it.
pub fn parse_date_partial(buf: &[u8]) -> Result<(DicomDate, &[u8])> {
    if buf.len() < 4 {
        return UnexpectedEndOfElementSnafu.fail();
    }
    let year: u16 = read_number(&buf[0..4])?;
    let buf = &buf[4..];
    if !starts_with_digits(buf, 2) {
        return Ok((DicomDate::from_y(year).context(PartialValueSnafu)?, buf));
    }
    let month: u8 = read_number(&buf[0..2])?;
    let buf = &buf[2..];
    if !starts_with_digits(buf, 2) {
        return Ok((
            DicomDate::from_ym(year, month).context(PartialValueSnafu)?,
            buf,
        ));
    }
    let day: u8 = read_number(&buf[0..2])?;
    Ok((
        DicomDate::from_ymd(year, month, day).context(PartialValueSnafu)?,
        &buf[2..],
    ))
}

/// Decode a time of partial precision,
/// returning the remaining bytes after it.
pub fn parse_time_partial(buf: &[u8]) -> Result<(DicomTime, &[u8])> {
    if buf.len() < 2 {
        return UnexpectedEndOfElementSnafu.fail();
    }
    let hour: u8 = read_number(&buf[0..2])?;
    let buf = &buf[2..];
    if !starts_with_digits(buf, 2) {
        return Ok((DicomTime::from_h(hour).context(PartialValueSnafu)?, buf));
    }
    let minute: u8 = read_number(&buf[0..2])?;
    let buf = &buf[2..];
    if !starts_with_digits(buf, 2) {
        return Ok((
            DicomTime::from_hm(hour, minute).context(PartialValueSnafu)?,
            buf,
        ));
    }
    let second: u8 = read_number(&buf[0..2])?;
    let buf = &buf[2..];
    match buf.first() {
        Some(b'.') => {
            let buf = &buf[1..];
            let n = buf.iter().take(6).take_while(|c| c.is_ascii_digit()).count();
            if n == 0 {
                return UnexpectedEndOfElementSnafu.fail();
            }
            let fraction: u32 = read_number(&buf[..n])?;
            let time = DicomTime::from_hmsf(hour, minute, second, fraction, n as u8)
                .context(PartialValueSnafu)?;
            Ok((time, &buf[n..]))
        }
        Some(c) if c.is_ascii_digit() => FractionDelimiterSnafu { value: *c }.fail(),
        _ => Ok((
            DicomTime::from_hms(hour, minute, second).context(PartialValueSnafu)?,
            buf,
        )),
    }
}

fn parse_utc_offset(buf: &[u8]) -> Result<FixedOffset> {
    let sign = match buf[0] {
        b'+' => 1,
        b'-' => -1,
        value => return InvalidTimeZoneSignTokenSnafu { value }.fail(),
    };
    let buf = &buf[1..];
    if buf.len() < 4 {
        return UnexpectedEndOfElementSnafu.fail();
    }
    ensure_consumed(&buf[4..])?;
    let hours: u32 = read_number(&buf[0..2])?;
    let minutes: u32 = read_number(&buf[2..4])?;
    check_component(DateComponent::Minute, minutes).context(PartialValueSnafu)?;
    let seconds = hours * 3600 + minutes * 60;
    check_component(DateComponent::UtcOffset, seconds).context(PartialValueSnafu)?;
    FixedOffset::east_opt(sign * seconds as i32).context(InvalidUtcOffsetSnafu)
}

fn starts_with_digits(buf: &[u8], n: usize) -> bool {
    buf.len() >= n && buf[..n].iter().all(u8::is_ascii_digit)
}

fn ensure_consumed(rest: &[u8]) -> Result<()> {
    if rest.is_empty() {
        Ok(())
    } else {
        TrailingContentSnafu { len: rest.len() }.fail()
    }
}

/// Read an unsigned decimal number made exclusively of ASCII digits.
fn read_number<T>(text: &[u8]) -> Result<T>
where
    T: From<u8> + std::ops::Mul<T, Output = T> + std::ops::Add<T, Output = T>,
{
    if text.is_empty() {
        return UnexpectedEndOfElementSnafu.fail();
    }
    text.iter().try_fold(T::from(0), |acc, &c| {
        if c.is_ascii_digit() {
            Ok(acc * T::from(10) + T::from(c - b'0'))
        } else {
            InvalidNumberTokenSnafu { value: c }.fail()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates() {
        assert_eq!(
            parse_date(b"20240229").unwrap(),
            DicomDate::from_ymd(2024, 2, 29).unwrap()
        );
        assert_eq!(parse_date(b"1971").unwrap(), DicomDate::from_y(1971).unwrap());
        assert!(matches!(
            parse_date(b"2024.02.29"),
            Err(Error::TrailingContent { .. })
        ));
        assert!(matches!(
            parse_date(b"20230229"),
            Err(Error::PartialValue { .. })
        ));
        assert!(matches!(
            parse_date(b"19A1"),
            Err(Error::InvalidNumberToken { value: b'A', .. })
        ));
        assert!(parse_date(b"202").is_err());
    }

    #[test]
    fn times() {
        assert_eq!(parse_time(b"07").unwrap(), DicomTime::from_h(7).unwrap());
        assert_eq!(
            parse_time(b"235959.123456").unwrap(),
            DicomTime::from_hmsf(23, 59, 59, 123_456, 6).unwrap()
        );
        assert_eq!(
            parse_time(b"1015").unwrap(),
            DicomTime::from_hm(10, 15).unwrap()
        );
        // colon-separated legacy notation is not valid
        assert!(parse_time(b"10:15:00").is_err());
        assert!(parse_time(b"2500").is_err());
        assert!(parse_time(b"101500.").is_err());
    }

    #[test]
    fn datetimes() {
        let dt = parse_datetime(b"20201231235959.5+0100").unwrap();
        assert_eq!(dt.date(), &DicomDate::from_ymd(2020, 12, 31).unwrap());
        assert_eq!(
            dt.time(),
            Some(&DicomTime::from_hmsf(23, 59, 59, 5, 1).unwrap())
        );
        assert_eq!(dt.offset(), FixedOffset::east_opt(3600));

        let dt = parse_datetime(b"2020").unwrap();
        assert_eq!(dt.time(), None);
        assert_eq!(dt.offset(), None);

        let dt = parse_datetime(b"202012-0300").unwrap();
        assert_eq!(dt.date(), &DicomDate::from_ym(2020, 12).unwrap());
        assert_eq!(dt.offset(), FixedOffset::west_opt(3 * 3600));

        assert!(parse_datetime(b"20201231T1200").is_err());
        assert!(parse_datetime(b"20201231+01").is_err());
    }
}

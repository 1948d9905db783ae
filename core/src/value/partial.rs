//! Handling of partial precision of Date, Time and DateTime values.

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use snafu::{Backtrace, OptionExt, Snafu};
use std::fmt;
use std::ops::RangeInclusive;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display(
        "{:?} has invalid value: {}, must be in {:?}",
        component,
        value,
        range
    ))]
    InvalidComponent {
        component: DateComponent,
        value: u32,
        range: RangeInclusive<u32>,
        backtrace: Backtrace,
    },
    #[snafu(display("Date {year:04}-{month:02}-{day:02} does not exist"))]
    InvalidDate {
        year: u16,
        month: u8,
        day: u8,
        backtrace: Backtrace,
    },
    #[snafu(display("Fraction digit count must be in 1..=6, got {}", digits))]
    FractionPrecision { digits: u8, backtrace: Backtrace },
    #[snafu(display("A time may only follow a complete date"))]
    DateTimeFromPartials { backtrace: Backtrace },
    #[snafu(display("Value is not precise enough: missing {:?}", component))]
    ImpreciseValue {
        component: DateComponent,
        backtrace: Backtrace,
    },
}

type Result<T, E = Error> = std::result::Result<T, E>;

/// Components of Date, Time and DateTime values.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DateComponent {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Fraction,
    UtcOffset,
}

/// Fail with a detailed `InvalidComponent` error
/// if a Date / Time component is out of range.
pub fn check_component(component: DateComponent, value: u32) -> Result<()> {
    let range = match component {
        DateComponent::Year => 0..=9_999,
        DateComponent::Month => 1..=12,
        DateComponent::Day => 1..=31,
        DateComponent::Hour => 0..=23,
        DateComponent::Minute => 0..=59,
        // 60 admits a leap second
        DateComponent::Second => 0..=60,
        DateComponent::Fraction => 0..=999_999,
        DateComponent::UtcOffset => 0..=50_400,
    };

    if range.contains(&value) {
        Ok(())
    } else {
        InvalidComponentSnafu {
            component,
            value,
            range,
        }
        .fail()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
enum DicomDateImpl {
    Year(u16),
    Month(u16, u8),
    Day(u16, u8, u8),
}

/// A DICOM Date (DA) value with partial precision,
/// where the month and day may be missing.
///
/// ```
/// # use dcmtlv_core::value::DicomDate;
/// let date = DicomDate::from_ymd(2003, 7, 15)?;
/// assert_eq!(date.to_string(), "20030715");
/// assert!(date.is_precise());
/// assert!(!DicomDate::from_ym(2003, 7)?.is_precise());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DicomDate(DicomDateImpl);

impl DicomDate {
    /// A date with year precision (`YYYY`).
    pub fn from_y(year: u16) -> Result<Self> {
        check_component(DateComponent::Year, year.into())?;
        Ok(DicomDate(DicomDateImpl::Year(year)))
    }

    /// A date with month precision (`YYYYMM`).
    pub fn from_ym(year: u16, month: u8) -> Result<Self> {
        check_component(DateComponent::Year, year.into())?;
        check_component(DateComponent::Month, month.into())?;
        Ok(DicomDate(DicomDateImpl::Month(year, month)))
    }

    /// A complete date (`YYYYMMDD`), checked against the calendar.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        check_component(DateComponent::Year, year.into())?;
        check_component(DateComponent::Month, month.into())?;
        check_component(DateComponent::Day, day.into())?;
        NaiveDate::from_ymd_opt(year.into(), month.into(), day.into())
            .context(InvalidDateSnafu { year, month, day })?;
        Ok(DicomDate(DicomDateImpl::Day(year, month, day)))
    }

    pub fn year(&self) -> u16 {
        match self.0 {
            DicomDateImpl::Year(y) | DicomDateImpl::Month(y, _) | DicomDateImpl::Day(y, _, _) => y,
        }
    }

    pub fn month(&self) -> Option<u8> {
        match self.0 {
            DicomDateImpl::Year(_) => None,
            DicomDateImpl::Month(_, m) | DicomDateImpl::Day(_, m, _) => Some(m),
        }
    }

    pub fn day(&self) -> Option<u8> {
        match self.0 {
            DicomDateImpl::Day(_, _, d) => Some(d),
            _ => None,
        }
    }

    /// Whether all date components are present.
    pub fn is_precise(&self) -> bool {
        matches!(self.0, DicomDateImpl::Day(..))
    }

    /// Convert to a chrono date. Only complete dates can be converted.
    pub fn to_naive_date(&self) -> Result<NaiveDate> {
        match self.0 {
            DicomDateImpl::Day(y, m, d) => NaiveDate::from_ymd_opt(y.into(), m.into(), d.into())
                .context(InvalidDateSnafu {
                    year: y,
                    month: m,
                    day: d,
                }),
            DicomDateImpl::Month(..) => ImpreciseValueSnafu {
                component: DateComponent::Day,
            }
            .fail(),
            DicomDateImpl::Year(_) => ImpreciseValueSnafu {
                component: DateComponent::Month,
            }
            .fail(),
        }
    }
}

impl fmt::Display for DicomDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            DicomDateImpl::Year(y) => write!(f, "{:04}", y),
            DicomDateImpl::Month(y, m) => write!(f, "{:04}{:02}", y, m),
            DicomDateImpl::Day(y, m, d) => write!(f, "{:04}{:02}{:02}", y, m, d),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
enum DicomTimeImpl {
    Hour(u8),
    Minute(u8, u8),
    Second(u8, u8, u8),
    /// fraction value and its number of digits
    Fraction(u8, u8, u8, u32, u8),
}

/// A DICOM Time (TM) value with partial precision.
///
/// The second fraction keeps the number of digits it was written with,
/// so that `.5` and `.500000` remain distinguishable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DicomTime(DicomTimeImpl);

impl DicomTime {
    pub fn from_h(hour: u8) -> Result<Self> {
        check_component(DateComponent::Hour, hour.into())?;
        Ok(DicomTime(DicomTimeImpl::Hour(hour)))
    }

    pub fn from_hm(hour: u8, minute: u8) -> Result<Self> {
        check_component(DateComponent::Hour, hour.into())?;
        check_component(DateComponent::Minute, minute.into())?;
        Ok(DicomTime(DicomTimeImpl::Minute(hour, minute)))
    }

    pub fn from_hms(hour: u8, minute: u8, second: u8) -> Result<Self> {
        check_component(DateComponent::Hour, hour.into())?;
        check_component(DateComponent::Minute, minute.into())?;
        check_component(DateComponent::Second, second.into())?;
        Ok(DicomTime(DicomTimeImpl::Second(hour, minute, second)))
    }

    /// A time with a second fraction of `digits` decimal digits.
    pub fn from_hmsf(hour: u8, minute: u8, second: u8, fraction: u32, digits: u8) -> Result<Self> {
        check_component(DateComponent::Hour, hour.into())?;
        check_component(DateComponent::Minute, minute.into())?;
        check_component(DateComponent::Second, second.into())?;
        if !(1..=6).contains(&digits) {
            return FractionPrecisionSnafu { digits }.fail();
        }
        if fraction >= 10_u32.pow(digits.into()) {
            return InvalidComponentSnafu {
                component: DateComponent::Fraction,
                value: fraction,
                range: 0..=10_u32.pow(digits.into()) - 1,
            }
            .fail();
        }
        Ok(DicomTime(DicomTimeImpl::Fraction(
            hour, minute, second, fraction, digits,
        )))
    }

    pub fn hour(&self) -> u8 {
        match self.0 {
            DicomTimeImpl::Hour(h)
            | DicomTimeImpl::Minute(h, _)
            | DicomTimeImpl::Second(h, _, _)
            | DicomTimeImpl::Fraction(h, ..) => h,
        }
    }

    pub fn minute(&self) -> Option<u8> {
        match self.0 {
            DicomTimeImpl::Hour(_) => None,
            DicomTimeImpl::Minute(_, m)
            | DicomTimeImpl::Second(_, m, _)
            | DicomTimeImpl::Fraction(_, m, ..) => Some(m),
        }
    }

    pub fn second(&self) -> Option<u8> {
        match self.0 {
            DicomTimeImpl::Second(_, _, s) | DicomTimeImpl::Fraction(_, _, s, ..) => Some(s),
            _ => None,
        }
    }

    /// The second fraction in microseconds, if present.
    pub fn microsecond(&self) -> Option<u32> {
        match self.0 {
            DicomTimeImpl::Fraction(_, _, _, f, digits) => {
                Some(f * 10_u32.pow(6 - u32::from(digits)))
            }
            _ => None,
        }
    }

    /// Convert to a chrono time.
    /// The value must be precise at least to the second.
    pub fn to_naive_time(&self) -> Result<NaiveTime> {
        let (h, m, s) = match self.0 {
            DicomTimeImpl::Hour(_) => {
                return ImpreciseValueSnafu {
                    component: DateComponent::Minute,
                }
                .fail()
            }
            DicomTimeImpl::Minute(..) => {
                return ImpreciseValueSnafu {
                    component: DateComponent::Second,
                }
                .fail()
            }
            DicomTimeImpl::Second(h, m, s) | DicomTimeImpl::Fraction(h, m, s, ..) => (h, m, s),
        };
        let micro = self.microsecond().unwrap_or(0);
        // chrono represents a leap second as an overflowing fraction of :59
        let (s, micro) = if s == 60 { (59, micro + 1_000_000) } else { (s, micro) };
        NaiveTime::from_hms_micro_opt(h.into(), m.into(), s.into(), micro).context(
            ImpreciseValueSnafu {
                component: DateComponent::Second,
            },
        )
    }
}

impl fmt::Display for DicomTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            DicomTimeImpl::Hour(h) => write!(f, "{:02}", h),
            DicomTimeImpl::Minute(h, m) => write!(f, "{:02}{:02}", h, m),
            DicomTimeImpl::Second(h, m, s) => write!(f, "{:02}{:02}{:02}", h, m, s),
            DicomTimeImpl::Fraction(h, m, s, frac, digits) => write!(
                f,
                "{:02}{:02}{:02}.{:0width$}",
                h,
                m,
                s,
                frac,
                width = usize::from(digits)
            ),
        }
    }
}

/// A DICOM Date Time (DT) value with partial precision
/// and an optional UTC offset.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DicomDateTime {
    date: DicomDate,
    time: Option<DicomTime>,
    offset: Option<FixedOffset>,
}

impl DicomDateTime {
    /// A date-time holding only a date part.
    pub fn from_date(date: DicomDate) -> Self {
        DicomDateTime {
            date,
            time: None,
            offset: None,
        }
    }

    /// A date-time with a time part.
    /// The date must be complete for a time to follow it.
    pub fn from_date_and_time(date: DicomDate, time: DicomTime) -> Result<Self> {
        if !date.is_precise() {
            return DateTimeFromPartialsSnafu.fail();
        }
        Ok(DicomDateTime {
            date,
            time: Some(time),
            offset: None,
        })
    }

    /// Attach a UTC offset to this date-time.
    pub fn with_offset(self, offset: FixedOffset) -> Self {
        DicomDateTime {
            offset: Some(offset),
            ..self
        }
    }

    pub fn date(&self) -> &DicomDate {
        &self.date
    }

    pub fn time(&self) -> Option<&DicomTime> {
        self.time.as_ref()
    }

    pub fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }

    /// Convert to a chrono date-time without time zone,
    /// ignoring the UTC offset if any.
    pub fn to_naive_datetime(&self) -> Result<NaiveDateTime> {
        let date = self.date.to_naive_date()?;
        let time = self
            .time
            .context(ImpreciseValueSnafu {
                component: DateComponent::Hour,
            })?
            .to_naive_time()?;
        Ok(NaiveDateTime::new(date, time))
    }
}

impl fmt::Display for DicomDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date)?;
        if let Some(time) = &self.time {
            write!(f, "{}", time)?;
        }
        if let Some(offset) = self.offset {
            let secs = offset.local_minus_utc();
            let sign = if secs < 0 { '-' } else { '+' };
            let secs = secs.abs();
            write!(f, "{}{:02}{:02}", sign, secs / 3600, (secs % 3600) / 60)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_check_their_components() {
        assert!(DicomDate::from_ymd(2020, 2, 29).is_ok());
        assert!(matches!(
            DicomDate::from_ymd(2021, 2, 29),
            Err(Error::InvalidDate { .. })
        ));
        assert!(matches!(
            DicomDate::from_ym(2021, 13),
            Err(Error::InvalidComponent {
                component: DateComponent::Month,
                ..
            })
        ));
        assert_eq!(DicomDate::from_ym(1999, 1).unwrap().to_string(), "199901");
    }

    #[test]
    fn imprecise_date_does_not_convert() {
        let date = DicomDate::from_y(1990).unwrap();
        assert!(matches!(
            date.to_naive_date(),
            Err(Error::ImpreciseValue {
                component: DateComponent::Month,
                ..
            })
        ));
    }

    #[test]
    fn time_fraction_keeps_precision() {
        let t = DicomTime::from_hmsf(10, 5, 30, 25, 3).unwrap();
        assert_eq!(t.to_string(), "100530.025");
        assert_eq!(t.microsecond(), Some(25_000));
        assert_eq!(
            t.to_naive_time().unwrap(),
            NaiveTime::from_hms_micro_opt(10, 5, 30, 25_000).unwrap()
        );
        assert!(DicomTime::from_hmsf(10, 5, 30, 1000, 3).is_err());
        assert!(DicomTime::from_hms(24, 0, 0).is_err());
    }

    #[test]
    fn datetime_display_with_offset() {
        let dt = DicomDateTime::from_date_and_time(
            DicomDate::from_ymd(2010, 12, 1).unwrap(),
            DicomTime::from_hm(8, 30).unwrap(),
        )
        .unwrap()
        .with_offset(FixedOffset::west_opt(5 * 3600).unwrap());
        assert_eq!(dt.to_string(), "201012010830-0500");

        assert!(DicomDateTime::from_date_and_time(
            DicomDate::from_ym(2010, 12).unwrap(),
            DicomTime::from_h(8).unwrap()
        )
        .is_err());
    }
}

//! Proleptic Gregorian calendar over civil timestamps, unaware of timezone.
//!
//! All functions in this module work on *civil timestamps*: seconds since 0000-01-01 00:00:00,
//! where year 0 exists (it corresponds to 1 BC) and is a leap year. The representable range is
//! restricted to [`DateTime::MIN`]..=[`DateTime::MAX`] so that every representable year is
//! complete, from its first second to its last. Since the calendar functions do not rely on
//! libc's mktime and gmtime functions, they are completely thread safe.
//!
//! Calendar fields are bounded newtypes ([`Year`], [`Month`], [`DayOfMonth`], ...) with a
//! checked [`new`][Month::new] constructor and an unchecked [`new_unchecked`][Month::new_unchecked]
//! constructor for values already known to be valid.
//!
//! # Examples
//!
//! ```
//! # use civiltime::{DateTime, UNIX_EPOCH_SECONDS};
//! let date = DateTime::from_unix(1718617807).unwrap();
//! let c = date.civil();
//! assert_eq!(c.year.get(), 2024);
//! assert_eq!(c.month.get(), 6);
//! assert_eq!(c.day.get(), 17);
//! assert_eq!(c.weekday.get(), 1); // Monday
//! assert_eq!(c.day_of_year.get(), 169);
//! assert_eq!(date.seconds(), 1718617807 + UNIX_EPOCH_SECONDS);
//! ```

use core::fmt;
#[cfg(feature = "now")]
use core::mem::MaybeUninit;
#[cfg(feature = "now")]
use libc::{timespec, clock_gettime, CLOCK_REALTIME};

/// Errors that can occur when constructing calendar values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateError {
	/// Year outside [`Year::MIN`]..=[`Year::MAX`]
	YearOutOfRange,
	/// Month outside 1..=12
	MonthOutOfRange,
	/// Day outside the days of its month
	DayOfMonthOutOfRange,
	/// Day of year outside 1..=365/366
	DayOfYearOutOfRange,
	/// Weekday outside 0..=6
	WeekdayOutOfRange,
	/// Hour outside 0..=23
	HourOutOfRange,
	/// Minute outside 0..=59
	MinuteOutOfRange,
	/// Second outside 0..=59
	SecondOutOfRange,
	/// Week outside [`Week::MIN`]..=[`Week::MAX`]
	WeekOutOfRange,
	/// Week of year outside 1..=52/53
	WeekOfYearOutOfRange,
	/// Timestamp outside [`DateTime::MIN`]..=[`DateTime::MAX`]
	TimestampOutOfRange
}

impl fmt::Display for DateError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			DateError::YearOutOfRange => f.write_str("Year out of range"),
			DateError::MonthOutOfRange => f.write_str("Month must be in the range [1, 12]"),
			DateError::DayOfMonthOutOfRange => f.write_str("Day out of range for its month"),
			DateError::DayOfYearOutOfRange => f.write_str("Day of year out of range"),
			DateError::WeekdayOutOfRange => f.write_str("Weekday must be in the range [0, 6]"),
			DateError::HourOutOfRange => f.write_str("Hour must be in the range [0, 23]"),
			DateError::MinuteOutOfRange => f.write_str("Minute must be in the range [0, 59]"),
			DateError::SecondOutOfRange => f.write_str("Second must be in the range [0, 59]"),
			DateError::WeekOutOfRange => f.write_str("Week out of range"),
			DateError::WeekOfYearOutOfRange => f.write_str("Week of year out of range"),
			DateError::TimestampOutOfRange => f.write_str("Timestamp out of range")
		}
	}
}

impl core::error::Error for DateError {}

/// Seconds per minute.
const SECONDS_PER_MINUTE: i64 = 60;
/// Seconds per hour.
const SECONDS_PER_HOUR: i64 = SECONDS_PER_MINUTE * 60;
/// Seconds per day.
pub(crate) const SECONDS_PER_DAY: i64 = SECONDS_PER_HOUR * 24;
/// Days per non-leap year.
const DAYS_PER_NON_LEAP_YEAR: i64 = 365;
/// Days per 4-year cycle (one leap day).
const DAYS_PER_QUAD: i64 = DAYS_PER_NON_LEAP_YEAR * 4 + 1;
/// Days per 100-year cycle (24 leap days).
const DAYS_PER_CENTURY: i64 = DAYS_PER_QUAD * 25 - 1;
/// Days per 400-year cycle (97 leap days). The calendar repeats after this.
const DAYS_PER_CYCLE: i64 = DAYS_PER_CENTURY * 4 + 1;
/// Days per week.
const DAYS_PER_WEEK: i64 = 7;
/// Days from 0000-01-01 to 1970-01-01.
const UNIX_EPOCH_DAYS: i64 = 719528;
/// Civil timestamp of the Unix epoch (1970-01-01 00:00:00).
pub const UNIX_EPOCH_SECONDS: i64 = UNIX_EPOCH_DAYS * SECONDS_PER_DAY;

/// First representable civil timestamp: 00:00:00 on January 1 of [`Year::MIN`].
const TIMESTAMP_MIN: i64 = -9223372036825430400;
/// Last representable civil timestamp: 23:59:59 on December 31 of [`Year::MAX`].
const TIMESTAMP_MAX: i64 = 9223372036825516799;
/// Day index of January 1 of [`Year::MIN`].
const DAY_MIN: i64 = TIMESTAMP_MIN / SECONDS_PER_DAY;
/// Day index of December 31 of [`Year::MAX`].
const DAY_MAX: i64 = TIMESTAMP_MAX / SECONDS_PER_DAY;

/// Check whether a given `year` is a leap year.
///
/// Works for any year, positive or negative; year 0 is a leap year.
///
/// # Examples
///
/// ```
/// # use civiltime::is_leap_year;
/// assert_eq!(is_leap_year(1900), false);
/// assert_eq!(is_leap_year(2000), true);
/// assert_eq!(is_leap_year(2024), true);
/// assert_eq!(is_leap_year(0), true);
/// assert_eq!(is_leap_year(-100), false);
/// assert_eq!(is_leap_year(-400), true);
/// ```
#[inline(always)]
pub const fn is_leap_year(year: i64) -> bool {
	year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Day index of January 1 of `year`, where day 0 is 0000-01-01.
///
/// Years before the epoch are realigned by whole 400-year cycles so the smaller divisions
/// operate on a non-negative year-of-cycle.
pub(crate) const fn year_start_day(year: i64) -> i64 {
	let cycle = year.div_euclid(400);
	let y = year - cycle * 400; // [0, 399]
	cycle * DAYS_PER_CYCLE + DAYS_PER_NON_LEAP_YEAR * y + (y + 3) / 4 - (y + 99) / 100 + (y + 399) / 400
}

/// Decompose a day index into (year, zero-based day of year).
///
/// The decomposition peels off 400-year cycles, then centuries, then 4-year quads, then years.
/// The first century of each cycle is one day longer (its opening year is a leap year), and
/// within it every quad leads with a leap year; later centuries open with a leap-less quad.
const fn year_from_day(day: i64) -> (i64, u16) {
	let cycle = day.div_euclid(DAYS_PER_CYCLE);
	let d = day - cycle * DAYS_PER_CYCLE; // [0, 146096]
	let (century, dc) = if d < DAYS_PER_CENTURY + 1 {
		(0, d)
	} else {
		((d - 1) / DAYS_PER_CENTURY, (d - 1) % DAYS_PER_CENTURY)
	};
	let (quad, dq) = if century == 0 {
		(dc / DAYS_PER_QUAD, dc % DAYS_PER_QUAD)
	} else if dc < DAYS_PER_QUAD - 1 {
		(0, dc)
	} else {
		((dc + 1) / DAYS_PER_QUAD, (dc + 1) % DAYS_PER_QUAD)
	};
	let (year, doy) = if century == 0 || quad != 0 {
		// Quad leads with a leap year
		if dq < 366 {
			(0, dq)
		} else {
			let y = (dq - 1) / DAYS_PER_NON_LEAP_YEAR;
			(y, dq - 1 - DAYS_PER_NON_LEAP_YEAR * y)
		}
	} else {
		(dq / DAYS_PER_NON_LEAP_YEAR, dq % DAYS_PER_NON_LEAP_YEAR)
	};
	(cycle * 400 + century * 100 + quad * 4 + year, doy as u16)
}

/// Cumulative days before each month in a non-leap year.
const DAYS_BEFORE_MONTH: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Zero-based day of year for a given 1-indexed month and day of month.
pub(crate) const fn day_of_year_from_md(month: u8, day: u8, leap: bool) -> u16 {
	DAYS_BEFORE_MONTH[(month - 1) as usize] + (day - 1) as u16 + (month > 2 && leap) as u16
}

/// (month, day of month) for a zero-based day of year.
///
/// January and February are handled explicitly; March onward uses the linear 153-day
/// month-length pattern.
const fn md_from_day_of_year(doy: u16, leap: bool) -> (u8, u8) {
	let doy = doy as i64;
	let feb_end = 59 + leap as i64;
	if doy < 31 {
		(1, doy as u8 + 1)
	} else if doy < feb_end {
		(2, (doy - 31) as u8 + 1)
	} else {
		let d = doy - feb_end;
		// Linear equations for month from day and day-of-month from month, Mar-Dec
		let m = (5 * d + 2) / 153;
		((m + 3) as u8, (d - (153 * m + 2) / 5) as u8 + 1)
	}
}

macro_rules! bounded_field {
	($(#[$meta:meta])* $name:ident, $repr:ty, $min:literal, $max:literal, $err:ident) => {
		$(#[$meta])*
		#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
		pub struct $name($repr);

		impl $name {
			/// Smallest valid value.
			pub const MIN: $name = $name($min);
			/// Largest valid value.
			pub const MAX: $name = $name($max);

			/// Create a new value, checking that it is in range.
			///
			/// # Errors
			///
			/// Returns [`DateError`] if `value` is out of range.
			#[allow(unused_comparisons)]
			pub const fn new(value: $repr) -> Result<$name, DateError> {
				if value >= $min && value <= $max {
					Ok($name(value))
				} else {
					Err(DateError::$err)
				}
			}

			/// Create a new value without checking bounds.
			///
			/// # Panics
			///
			/// Panics in debug builds if `value` is out of range. In release builds an
			/// out-of-range value leads to unspecified results in later calendar math.
			#[allow(unused_comparisons)]
			pub const fn new_unchecked(value: $repr) -> $name {
				debug_assert!(value >= $min && value <= $max);
				$name(value)
			}

			/// Get the underlying value.
			#[inline(always)]
			pub const fn get(self) -> $repr {
				self.0
			}
		}
	}
}

bounded_field! {
	/// Month of the year, ranged [1, 12].
	Month, u8, 1, 12, MonthOutOfRange
}

bounded_field! {
	/// Day of the week, ranged [0, 6] => [Sunday, Saturday].
	Weekday, u8, 0, 6, WeekdayOutOfRange
}

bounded_field! {
	/// Hour of the day, ranged [0, 23].
	Hour, u8, 0, 23, HourOutOfRange
}

bounded_field! {
	/// Minute of the hour, ranged [0, 59].
	Minute, u8, 0, 59, MinuteOutOfRange
}

bounded_field! {
	/// Second of the minute, ranged [0, 59].
	Second, u8, 0, 59, SecondOutOfRange
}

impl Month {
	/// The number of days in this month, given the leap-ness of the containing year.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::Month;
	/// assert_eq!(Month::new(2).unwrap().days(true), 29);
	/// assert_eq!(Month::new(2).unwrap().days(false), 28);
	/// assert_eq!(Month::new(9).unwrap().days(false), 30);
	/// assert_eq!(Month::new(12).unwrap().days(false), 31);
	/// ```
	pub const fn days(self, leap: bool) -> u8 {
		// For months other than February, bit 3 of the month number flips the
		// odd/even pattern of 30/31-day months
		let m = self.0;
		if m == 2 {
			if leap { 29 } else { 28 }
		} else {
			30 | (m ^ (m >> 3))
		}
	}
}

impl Weekday {
	/// Weekday of a day index, where day 0 (0000-01-01) is a Saturday.
	pub(crate) const fn from_day_index(day: i64) -> Weekday {
		Weekday(((day + 6).rem_euclid(DAYS_PER_WEEK)) as u8)
	}
}

/// A calendar year.
///
/// Year 0 exists (1 BC in AD reckoning) and is a leap year. The valid range is exactly the
/// set of years that [`DateTime`] can represent in full.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Year(i64);

impl Year {
	/// The first fully-representable year.
	pub const MIN: Year = Year(-292277024626);
	/// The last fully-representable year.
	pub const MAX: Year = Year(292277024625);

	/// Create a new year, checking that it is in range.
	///
	/// # Errors
	///
	/// Returns [`DateError::YearOutOfRange`] if `value` is out of range.
	pub const fn new(value: i64) -> Result<Year, DateError> {
		if value >= Year::MIN.0 && value <= Year::MAX.0 {
			Ok(Year(value))
		} else {
			Err(DateError::YearOutOfRange)
		}
	}

	/// Create a new year without checking bounds.
	///
	/// # Panics
	///
	/// Panics in debug builds if `value` is out of range.
	pub const fn new_unchecked(value: i64) -> Year {
		debug_assert!(value >= Year::MIN.0 && value <= Year::MAX.0);
		Year(value)
	}

	/// Get the underlying value.
	#[inline(always)]
	pub const fn get(self) -> i64 {
		self.0
	}

	/// Check whether this year is a leap year.
	#[inline(always)]
	pub const fn is_leap(self) -> bool {
		is_leap_year(self.0)
	}

	/// The number of days in this year (365 or 366).
	pub const fn days(self) -> u16 {
		if self.is_leap() { 366 } else { 365 }
	}

	/// The weekday of January 1 of this year.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::Year;
	/// assert_eq!(Year::new(0).unwrap().first_weekday().get(), 6);    // Saturday
	/// assert_eq!(Year::new(2024).unwrap().first_weekday().get(), 1); // Monday
	/// ```
	pub const fn first_weekday(self) -> Weekday {
		Weekday::from_day_index(year_start_day(self.0))
	}

	/// The number of ISO weeks in this year (52 or 53).
	///
	/// A year has 53 weeks exactly when January 1 falls on a Thursday, or on a Wednesday in
	/// a leap year.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::Year;
	/// assert_eq!(Year::new(0).unwrap().weeks(), 52);
	/// assert_eq!(Year::new(4).unwrap().weeks(), 53);
	/// assert_eq!(Year::new(2020).unwrap().weeks(), 53);
	/// assert_eq!(Year::new(2024).unwrap().weeks(), 52);
	/// ```
	pub const fn weeks(self) -> u8 {
		let wday = self.first_weekday().get();
		if wday == 4 || (wday == 3 && self.is_leap()) { 53 } else { 52 }
	}
}

/// Day of the year, ranged [1, 365] or [1, 366] in leap years.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct DayOfYear(u16);

impl DayOfYear {
	/// Create a new day of year, checking that it is in range for the given leap-ness.
	///
	/// # Errors
	///
	/// Returns [`DateError::DayOfYearOutOfRange`] if `value` is out of range.
	pub const fn new(value: u16, leap: bool) -> Result<DayOfYear, DateError> {
		let max = if leap { 366 } else { 365 };
		if value >= 1 && value <= max {
			Ok(DayOfYear(value))
		} else {
			Err(DateError::DayOfYearOutOfRange)
		}
	}

	/// Create a new day of year without checking bounds.
	///
	/// # Panics
	///
	/// Panics in debug builds if `value` is outside [1, 366].
	pub const fn new_unchecked(value: u16) -> DayOfYear {
		debug_assert!(value >= 1 && value <= 366);
		DayOfYear(value)
	}

	/// Get the underlying value.
	#[inline(always)]
	pub const fn get(self) -> u16 {
		self.0
	}
}

/// Day of the month, ranged [1, 28..31] depending on the month.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct DayOfMonth(u8);

impl DayOfMonth {
	/// Create a new day of month, checking that it is valid for the given month and leap-ness.
	///
	/// # Errors
	///
	/// Returns [`DateError::DayOfMonthOutOfRange`] if `value` is out of range.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::{DayOfMonth, Month, DateError};
	/// let feb = Month::new(2).unwrap();
	/// assert!(DayOfMonth::new(29, feb, true).is_ok());
	/// assert_eq!(DayOfMonth::new(29, feb, false), Err(DateError::DayOfMonthOutOfRange));
	/// ```
	pub const fn new(value: u8, month: Month, leap: bool) -> Result<DayOfMonth, DateError> {
		if value >= 1 && value <= month.days(leap) {
			Ok(DayOfMonth(value))
		} else {
			Err(DateError::DayOfMonthOutOfRange)
		}
	}

	/// Create a new day of month without checking bounds.
	///
	/// # Panics
	///
	/// Panics in debug builds if `value` is outside [1, 31].
	pub const fn new_unchecked(value: u8) -> DayOfMonth {
		debug_assert!(value >= 1 && value <= 31);
		DayOfMonth(value)
	}

	/// Get the underlying value.
	#[inline(always)]
	pub const fn get(self) -> u8 {
		self.0
	}
}

/// An absolute week index.
///
/// Weeks run Monday through Sunday. Week 0 is the week containing 0000-01-01 (a Saturday);
/// it starts on the Monday five days earlier, in year -1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Week(i64);

impl Week {
	/// The week containing the first representable day.
	pub const MIN: Week = Week((DAY_MIN + 5).div_euclid(DAYS_PER_WEEK));
	/// The week containing the last representable day.
	pub const MAX: Week = Week((DAY_MAX + 5).div_euclid(DAYS_PER_WEEK));

	/// Create a new week, checking that it is in range.
	///
	/// # Errors
	///
	/// Returns [`DateError::WeekOutOfRange`] if `value` is out of range.
	pub const fn new(value: i64) -> Result<Week, DateError> {
		if value >= Week::MIN.0 && value <= Week::MAX.0 {
			Ok(Week(value))
		} else {
			Err(DateError::WeekOutOfRange)
		}
	}

	/// Create a new week without checking bounds.
	///
	/// # Panics
	///
	/// Panics in debug builds if `value` is out of range.
	pub const fn new_unchecked(value: i64) -> Week {
		debug_assert!(value >= Week::MIN.0 && value <= Week::MAX.0);
		Week(value)
	}

	/// Get the underlying value.
	#[inline(always)]
	pub const fn get(self) -> i64 {
		self.0
	}

	/// The year this week belongs to: the year containing its Thursday.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::{Week, Year};
	/// assert_eq!(Week::new(0).unwrap().year(), Year::new(-1).unwrap());
	/// ```
	pub const fn year(self) -> Year {
		// The very first and last representable weeks can overhang the year range by a
		// few days; pin those to the rails.
		let y = year_from_day(self.0 * DAYS_PER_WEEK - 2).0;
		if y < Year::MIN.0 {
			Year::MIN
		} else if y > Year::MAX.0 {
			Year::MAX
		} else {
			Year(y)
		}
	}

	/// The 1-indexed week number within [`Week::year`].
	pub const fn week_of_year(self) -> WeekOfYear {
		let year = self.year();
		// Week 1 is the week containing January 4
		let first = (year_start_day(year.0) + 8).div_euclid(DAYS_PER_WEEK);
		let n = self.0 - first + 1;
		let max = year.weeks() as i64;
		WeekOfYear::new_unchecked(if n < 1 { 1 } else if n > max { max as u8 } else { n as u8 })
	}

	/// The first day (Monday) of this week, at midnight.
	///
	/// # Errors
	///
	/// Returns [`DateError::TimestampOutOfRange`] for the first representable week, whose
	/// Monday precedes [`DateTime::MIN`].
	pub const fn first_day(self) -> Result<DateTime, DateError> {
		DateTime::new((self.0 * DAYS_PER_WEEK - 5) * SECONDS_PER_DAY)
	}
}

/// Week of the year, ranged [1, 52] or [1, 53] depending on the year.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct WeekOfYear(u8);

impl WeekOfYear {
	/// Create a new week of year, checking that it is in range for the given year.
	///
	/// # Errors
	///
	/// Returns [`DateError::WeekOfYearOutOfRange`] if `value` is out of range.
	pub const fn new(value: u8, year: Year) -> Result<WeekOfYear, DateError> {
		if value >= 1 && value <= year.weeks() {
			Ok(WeekOfYear(value))
		} else {
			Err(DateError::WeekOfYearOutOfRange)
		}
	}

	/// Create a new week of year without checking bounds.
	///
	/// # Panics
	///
	/// Panics in debug builds if `value` is outside [1, 53].
	pub const fn new_unchecked(value: u8) -> WeekOfYear {
		debug_assert!(value >= 1 && value <= 53);
		WeekOfYear(value)
	}

	/// Get the underlying value.
	#[inline(always)]
	pub const fn get(self) -> u8 {
		self.0
	}
}

/// Broken-down civil calendar time, like the C `tm` structure with wider bounds.
///
/// # Examples
///
/// ```
/// # use civiltime::DateTime;
/// let c = DateTime::from_unix(1718617807).unwrap().civil();
/// assert_eq!(c.year.get(), 2024);
/// assert_eq!(c.month.get(), 6);
/// assert_eq!(c.day.get(), 17);
/// assert_eq!(c.day_of_year.get(), 169);
/// assert_eq!(c.weekday.get(), 1);
/// assert_eq!((c.hour.get(), c.minute.get(), c.second.get()), (9, 50, 7));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Civil {
	/// The year
	pub year: Year,
	/// Month of the year
	pub month: Month,
	/// Day of the month
	pub day: DayOfMonth,
	/// Day of the year
	pub day_of_year: DayOfYear,
	/// Day of the week
	pub weekday: Weekday,
	/// Hour of the day
	pub hour: Hour,
	/// Minute of the hour
	pub minute: Minute,
	/// Second of the minute
	pub second: Second
}

/// A civil timestamp: seconds since 0000-01-01 00:00:00.
///
/// The range is restricted to [`DateTime::MIN`]..=[`DateTime::MAX`] so that every
/// representable year is complete. Use [`DateTime::from_unix`] to convert from Unix time.
///
/// # Examples
///
/// ```
/// # use civiltime::DateTime;
/// let date = DateTime::new(-1).unwrap();
/// let c = date.civil();
/// assert_eq!(c.year.get(), -1);
/// assert_eq!((c.month.get(), c.day.get()), (12, 31));
/// assert_eq!((c.hour.get(), c.minute.get(), c.second.get()), (23, 59, 59));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateTime(i64);

impl DateTime {
	/// The first representable instant: 00:00:00 on January 1 of [`Year::MIN`].
	pub const MIN: DateTime = DateTime(TIMESTAMP_MIN);
	/// The last representable instant: 23:59:59 on December 31 of [`Year::MAX`].
	pub const MAX: DateTime = DateTime(TIMESTAMP_MAX);

	/// Create a new timestamp, checking that it is in range.
	///
	/// # Errors
	///
	/// Returns [`DateError::TimestampOutOfRange`] if `seconds` is out of range.
	pub const fn new(seconds: i64) -> Result<DateTime, DateError> {
		if seconds >= TIMESTAMP_MIN && seconds <= TIMESTAMP_MAX {
			Ok(DateTime(seconds))
		} else {
			Err(DateError::TimestampOutOfRange)
		}
	}

	/// Create a new timestamp without checking bounds.
	///
	/// # Panics
	///
	/// Panics in debug builds if `seconds` is out of range.
	pub const fn new_unchecked(seconds: i64) -> DateTime {
		debug_assert!(seconds >= TIMESTAMP_MIN && seconds <= TIMESTAMP_MAX);
		DateTime(seconds)
	}

	/// Create a timestamp from seconds since the Unix epoch.
	///
	/// # Errors
	///
	/// Returns [`DateError::TimestampOutOfRange`] if the result is out of range.
	pub const fn from_unix(unix: i64) -> Result<DateTime, DateError> {
		match unix.checked_add(UNIX_EPOCH_SECONDS) {
			Some(seconds) => DateTime::new(seconds),
			None => Err(DateError::TimestampOutOfRange)
		}
	}

	/// Seconds since 0000-01-01 00:00:00.
	#[inline(always)]
	pub const fn seconds(self) -> i64 {
		self.0
	}

	/// Seconds since the Unix epoch, saturating near [`DateTime::MIN`] (which precedes
	/// the smallest `i64` Unix timestamp).
	pub const fn to_unix(self) -> i64 {
		self.0.saturating_sub(UNIX_EPOCH_SECONDS)
	}

	/// Days since 0000-01-01.
	const fn day(self) -> i64 {
		self.0.div_euclid(SECONDS_PER_DAY)
	}

	/// Seconds since midnight, ranged [0, 86399].
	const fn time_of_day(self) -> i64 {
		self.0.rem_euclid(SECONDS_PER_DAY)
	}

	/// The year containing this instant.
	pub const fn year(self) -> Year {
		Year::new_unchecked(year_from_day(self.day()).0)
	}

	/// The day of the week, 0-6 => Sunday-Saturday.
	pub const fn weekday(self) -> Weekday {
		Weekday::from_day_index(self.day())
	}

	/// The absolute week containing this instant.
	pub const fn week(self) -> Week {
		Week((self.day() + 5).div_euclid(DAYS_PER_WEEK))
	}

	/// The 1-indexed ISO week number, within the week's year (which can differ from
	/// [`DateTime::year`] by one near January 1).
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::DateTime;
	/// // 2005-01-01 belongs to week 53 of 2004
	/// let d = DateTime::from_parts(2005, 1, 1, 0, 0, 0).unwrap();
	/// assert_eq!(d.week().year().get(), 2004);
	/// assert_eq!(d.week_of_year().get(), 53);
	/// ```
	pub const fn week_of_year(self) -> WeekOfYear {
		self.week().week_of_year()
	}

	/// The hour of the day.
	pub const fn hour(self) -> Hour {
		Hour::new_unchecked((self.time_of_day() / SECONDS_PER_HOUR) as u8)
	}

	/// The minute of the hour.
	pub const fn minute(self) -> Minute {
		Minute::new_unchecked((self.time_of_day() / SECONDS_PER_MINUTE % 60) as u8)
	}

	/// The second of the minute.
	pub const fn second(self) -> Second {
		Second::new_unchecked((self.time_of_day() % 60) as u8)
	}

	/// Break this timestamp down into its civil calendar fields.
	pub const fn civil(self) -> Civil {
		let day = self.day();
		let (year, doy) = year_from_day(day);
		let leap = is_leap_year(year);
		let (month, dom) = md_from_day_of_year(doy, leap);
		let tod = self.time_of_day();
		Civil {
			year: Year::new_unchecked(year),
			month: Month::new_unchecked(month),
			day: DayOfMonth::new_unchecked(dom),
			day_of_year: DayOfYear::new_unchecked(doy + 1),
			weekday: Weekday::from_day_index(day),
			hour: Hour::new_unchecked((tod / SECONDS_PER_HOUR) as u8),
			minute: Minute::new_unchecked((tod / SECONDS_PER_MINUTE % 60) as u8),
			second: Second::new_unchecked((tod % 60) as u8)
		}
	}

	/// Create a timestamp from civil calendar fields.
	///
	/// # Errors
	///
	/// Returns a [`DateError`] naming the first field that is out of range.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::DateTime;
	/// let d = DateTime::from_parts(2024, 6, 17, 9, 50, 7).unwrap();
	/// assert_eq!(d.to_unix(), 1718617807);
	/// ```
	pub fn from_parts(year: i64, month: u8, day: u8, hour: u8, minute: u8, second: u8)
		-> Result<DateTime, DateError>
	{
		let year = Year::new(year)?;
		let month = Month::new(month)?;
		let leap = year.is_leap();
		let day = DayOfMonth::new(day, month, leap)?;
		let hour = Hour::new(hour)?;
		let minute = Minute::new(minute)?;
		let second = Second::new(second)?;
		let doy = day_of_year_from_md(month.get(), day.get(), leap) as i64;
		Ok(DateTime((year_start_day(year.get()) + doy) * SECONDS_PER_DAY
			+ hour.get() as i64 * SECONDS_PER_HOUR
			+ minute.get() as i64 * SECONDS_PER_MINUTE
			+ second.get() as i64))
	}

	/// Create a timestamp from civil calendar fields without checking bounds.
	///
	/// # Panics
	///
	/// Panics in debug builds if any field is out of range. In release builds out-of-range
	/// fields lead to unspecified results.
	pub const fn from_parts_unchecked(year: i64, month: u8, day: u8, hour: u8, minute: u8,
	                                  second: u8) -> DateTime
	{
		let year = Year::new_unchecked(year);
		let month = Month::new_unchecked(month);
		let day = DayOfMonth::new_unchecked(day);
		let hour = Hour::new_unchecked(hour);
		let minute = Minute::new_unchecked(minute);
		let second = Second::new_unchecked(second);
		let doy = day_of_year_from_md(month.get(), day.get(), year.is_leap()) as i64;
		DateTime::new_unchecked((year_start_day(year.get()) + doy) * SECONDS_PER_DAY
			+ hour.get() as i64 * SECONDS_PER_HOUR
			+ minute.get() as i64 * SECONDS_PER_MINUTE
			+ second.get() as i64)
	}

	/// Add a number of seconds (negative to subtract).
	///
	/// # Errors
	///
	/// Returns [`DateError::TimestampOutOfRange`] if the result is out of range.
	pub const fn checked_add_seconds(self, seconds: i64) -> Result<DateTime, DateError> {
		match self.0.checked_add(seconds) {
			Some(s) => DateTime::new(s),
			None => Err(DateError::TimestampOutOfRange)
		}
	}

	/// Add a number of calendar months (negative to subtract), keeping the time of day.
	///
	/// Whole years are split off with truncating division and the remaining month offset is
	/// normalized with flooring division. Days that do not exist in the target month spill
	/// forward into the following month.
	///
	/// # Errors
	///
	/// Returns [`DateError::YearOutOfRange`] if the result is out of range.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::DateTime;
	/// let d = DateTime::from_parts(2023, 1, 31, 0, 0, 0).unwrap();
	/// assert_eq!(d.add_months(1).unwrap().to_string(), "2023-03-03T00:00:00");
	/// let d = DateTime::from_parts(2024, 1, 31, 0, 0, 0).unwrap();
	/// assert_eq!(d.add_months(1).unwrap().to_string(), "2024-03-02T00:00:00");
	/// ```
	pub fn add_months(self, months: i64) -> Result<DateTime, DateError> {
		let c = self.civil();
		let month0 = c.month.get() as i64 - 1 + months % 12; // [-11, 22]
		let year = c.year.get()
			.checked_add(months / 12)
			.and_then(|y| y.checked_add(month0.div_euclid(12)))
			.ok_or(DateError::YearOutOfRange)?;
		let mut year = Year::new(year)?;
		let mut month = Month::new_unchecked(month0.rem_euclid(12) as u8 + 1);
		let mut day = c.day.get();
		let limit = month.days(year.is_leap());
		if day > limit {
			// Spill into the following month (at most 3 days)
			day -= limit;
			if month.get() == 12 {
				year = Year::new(year.get() + 1)?;
				month = Month::new_unchecked(1);
			} else {
				month = Month::new_unchecked(month.get() + 1);
			}
		}
		DateTime::from_parts(year.get(), month.get(), day,
		                     c.hour.get(), c.minute.get(), c.second.get())
	}

	/// Add a number of calendar years (negative to subtract), keeping the month, day, and
	/// time of day. February 29 spills to March 1 in non-leap target years.
	///
	/// # Errors
	///
	/// Returns [`DateError::YearOutOfRange`] if the result is out of range.
	pub fn add_years(self, years: i64) -> Result<DateTime, DateError> {
		let year = self.year().get().checked_add(years).ok_or(DateError::YearOutOfRange)?;
		self.with_year(Year::new(year)?)
	}

	/// Move this instant to another year, keeping the month, day, and time of day.
	/// February 29 spills to March 1 in non-leap target years.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::{DateTime, Year};
	/// let d = DateTime::from_parts(2024, 2, 29, 12, 0, 0).unwrap();
	/// let moved = d.with_year(Year::new(2025).unwrap()).unwrap();
	/// assert_eq!(moved.to_string(), "2025-03-01T12:00:00");
	/// ```
	pub fn with_year(self, year: Year) -> Result<DateTime, DateError> {
		let c = self.civil();
		let (month, day) = if c.month.get() == 2 && c.day.get() == 29 && !year.is_leap() {
			(3, 1)
		} else {
			(c.month.get(), c.day.get())
		};
		DateTime::from_parts(year.get(), month, day, c.hour.get(), c.minute.get(), c.second.get())
	}
}

impl fmt::Display for DateTime {
	/// Format as `YYYY-MM-DDTHH:MM:SS`, with a leading minus and as many year digits as
	/// needed for years outside [0, 9999].
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let c = self.civil();
		let year = c.year.get();
		if year < 0 {
			write!(f, "-{:04}", -year)?;
		} else {
			write!(f, "{:04}", year)?;
		}
		write!(f, "-{:02}-{:02}T{:02}:{:02}:{:02}",
		       c.month.get(), c.day.get(), c.hour.get(), c.minute.get(), c.second.get())
	}
}

/// Get the current time as a civil timestamp.
///
/// This function will return `None` if `libc::clock_gettime` fails.
///
/// This function is thread safe.
///
/// # Examples
///
/// ```
/// # use civiltime::{now, UNIX_EPOCH_SECONDS};
/// let c = now().expect("Failed to get current time");
/// assert!(c.seconds() > UNIX_EPOCH_SECONDS);
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "now")))]
#[cfg(feature = "now")]
pub fn now() -> Option<DateTime> {
	let mut time = MaybeUninit::<timespec>::uninit();
	// Safety:
	// - clock_gettime does not read time, only writes
	// - if clock_gettime returns zero, time is successfully initialized
	let sec = unsafe {
		match clock_gettime(CLOCK_REALTIME, time.as_mut_ptr()) {
			0 => time.assume_init().tv_sec,
			_ => return None
		}
	};
	DateTime::from_unix(sec).ok()
}

#[cfg(test)]
mod tests {
	use super::*;
	use core::mem::MaybeUninit;
	use libc::{time_t, tm};
	use quickcheck::quickcheck;
	use std::string::ToString;

	// Get the libc version of UTC calendar time
	fn utc_time(time: time_t) -> tm {
		unsafe {
			let mut utc = MaybeUninit::<tm>::uninit();
			libc::gmtime_r(&time, utc.as_mut_ptr());
			utc.assume_init()
		}
	}

	fn compare_dates(unix: i64) {
		let d1 = utc_time(unix);
		let d2 = DateTime::from_unix(unix).unwrap().civil();
		assert_eq!(d1.tm_sec, d2.second.get() as i32, "unix: {}", unix);
		assert_eq!(d1.tm_min, d2.minute.get() as i32, "unix: {}", unix);
		assert_eq!(d1.tm_hour, d2.hour.get() as i32, "unix: {}", unix);
		assert_eq!(d1.tm_mday, d2.day.get() as i32, "unix: {}", unix);
		assert_eq!(d1.tm_mon + 1, d2.month.get() as i32, "unix: {}", unix);
		assert_eq!(d1.tm_year as i64 + 1900, d2.year.get(), "unix: {}", unix);
		assert_eq!(d1.tm_wday, d2.weekday.get() as i32, "unix: {}", unix);
		assert_eq!(d1.tm_yday + 1, d2.day_of_year.get() as i32, "unix: {}", unix);
	}

	#[test]
	fn libc_comparison_test() {
		compare_dates(5097600);
		compare_dates(17185926);
		compare_dates(31449600);
		compare_dates(94694400);
		compare_dates(1718617807);
		compare_dates(1655459407);
		compare_dates(1844848207);
		compare_dates(961235407);
		compare_dates(929613007);
		compare_dates(951782400);
		compare_dates(0);
		compare_dates(-1);
		compare_dates(-86400);
		compare_dates(-2208988800); // 1900-01-01
	}

	#[test]
	fn civil_test() {
		let c = DateTime::new(-1).unwrap().civil();
		assert_eq!(c.year.get(), -1);
		assert_eq!(c.month.get(), 12);
		assert_eq!(c.day.get(), 31);
		assert_eq!(c.day_of_year.get(), 365);
		assert_eq!(c.weekday.get(), 5);
		assert_eq!((c.hour.get(), c.minute.get(), c.second.get()), (23, 59, 59));

		let c = DateTime::new(0).unwrap().civil();
		assert_eq!(c.year.get(), 0);
		assert_eq!((c.month.get(), c.day.get()), (1, 1));
		assert_eq!(c.weekday.get(), 6); // 0000-01-01 was a Saturday

		let c = DateTime::MIN.civil();
		assert_eq!(c.year, Year::MIN);
		assert_eq!((c.month.get(), c.day.get()), (1, 1));
		assert_eq!((c.hour.get(), c.minute.get(), c.second.get()), (0, 0, 0));

		let c = DateTime::MAX.civil();
		assert_eq!(c.year, Year::MAX);
		assert_eq!((c.month.get(), c.day.get()), (12, 31));
		assert_eq!((c.hour.get(), c.minute.get(), c.second.get()), (23, 59, 59));
	}

	#[test]
	fn from_parts_test() {
		assert_eq!(DateTime::from_parts(2024, 6, 17, 9, 50, 7).unwrap().to_unix(), 1718617807);
		assert_eq!(DateTime::from_parts(0, 1, 1, 0, 0, 0).unwrap().seconds(), 0);
		assert_eq!(DateTime::from_parts(1970, 1, 1, 0, 0, 0).unwrap().seconds(), UNIX_EPOCH_SECONDS);
		assert_eq!(DateTime::from_parts(-1, 12, 31, 23, 59, 59).unwrap().seconds(), -1);
		assert_eq!(DateTime::from_parts(Year::MIN.get(), 1, 1, 0, 0, 0).unwrap(), DateTime::MIN);
		assert_eq!(DateTime::from_parts(Year::MAX.get(), 12, 31, 23, 59, 59).unwrap(), DateTime::MAX);

		assert_eq!(DateTime::from_parts_unchecked(2024, 6, 17, 9, 50, 7).to_unix(), 1718617807);
		assert_eq!(DateTime::from_parts_unchecked(-1, 12, 31, 23, 59, 59).seconds(), -1);

		assert_eq!(DateTime::from_parts(2023, 2, 29, 0, 0, 0), Err(DateError::DayOfMonthOutOfRange));
		assert_eq!(DateTime::from_parts(2024, 13, 1, 0, 0, 0), Err(DateError::MonthOutOfRange));
		assert_eq!(DateTime::from_parts(2024, 1, 1, 24, 0, 0), Err(DateError::HourOutOfRange));
		assert_eq!(DateTime::from_parts(Year::MAX.get() + 1, 1, 1, 0, 0, 0),
		           Err(DateError::YearOutOfRange));
		assert_eq!(DateTime::from_parts(i64::MAX, 1, 1, 0, 0, 0), Err(DateError::YearOutOfRange));
		assert_eq!(DateTime::from_parts(i64::MIN, 1, 1, 0, 0, 0), Err(DateError::YearOutOfRange));
	}

	#[test]
	fn round_trip_boundaries_test() {
		// Years straddling every kind of leap cycle boundary
		for year in [-401, -400, -399, -101, -100, -99, -5, -4, -1, 0, 1, 3, 4, 5,
		             99, 100, 101, 399, 400, 401, 1899, 1900, 1970, 2000, 2024,
		             Year::MIN.get(), Year::MAX.get()] {
			let leap = is_leap_year(year);
			for (month, day) in [(1u8, 1u8), (2, 28), (3, 1), (6, 17), (12, 31)] {
				let d = DateTime::from_parts(year, month, day, 12, 30, 45).unwrap();
				let c = d.civil();
				assert_eq!(c.year.get(), year);
				assert_eq!(c.month.get(), month, "year: {}", year);
				assert_eq!(c.day.get(), day, "year: {}", year);
				assert_eq!(c.day_of_year.get(), day_of_year_from_md(month, day, leap) + 1);
			}
			if leap {
				let d = DateTime::from_parts(year, 2, 29, 0, 0, 0).unwrap();
				let c = d.civil();
				assert_eq!((c.month.get(), c.day.get()), (2, 29), "year: {}", year);
			}
		}
	}

	#[test]
	fn is_leap_year_test() {
		assert_eq!(is_leap_year(1900), false);
		assert_eq!(is_leap_year(2000), true);
		assert_eq!(is_leap_year(2020), true);
		assert_eq!(is_leap_year(2023), false);
		assert_eq!(is_leap_year(2024), true);
		assert_eq!(is_leap_year(0), true);
		assert_eq!(is_leap_year(-1), false);
		assert_eq!(is_leap_year(-4), true);
		assert_eq!(is_leap_year(-100), false);
		assert_eq!(is_leap_year(-400), true);

		// Make sure extreme inputs cannot panic
		is_leap_year(i64::MIN);
		is_leap_year(i64::MAX);
	}

	#[test]
	fn weeks_test() {
		assert_eq!(Year::new(0).unwrap().weeks(), 52);
		assert_eq!(Year::new(4).unwrap().weeks(), 53);
		assert_eq!(Year::new(2015).unwrap().weeks(), 53);
		assert_eq!(Year::new(2020).unwrap().weeks(), 53);
		assert_eq!(Year::new(2024).unwrap().weeks(), 52);
		assert_eq!(Year::new(1976).unwrap().weeks(), 53);
		assert_eq!(Year::new(2004).unwrap().weeks(), 53);

		assert_eq!(Week::new(0).unwrap().year(), Year::new(-1).unwrap());
		assert_eq!(Week::new(0).unwrap().week_of_year().get(), 52);

		let vectors = [
			((2004, 1, 1), (2004, 1)),
			((2005, 1, 1), (2004, 53)),
			((2005, 1, 3), (2005, 1)),
			((2020, 12, 31), (2020, 53)),
			((1977, 1, 1), (1976, 53)),
			((2024, 6, 17), (2024, 25)),
		];
		for ((y, m, d), (wy, wn)) in vectors {
			let date = DateTime::from_parts(y, m, d, 0, 0, 0).unwrap();
			assert_eq!(date.week().year().get(), wy, "date: {}-{}-{}", y, m, d);
			assert_eq!(date.week_of_year().get(), wn, "date: {}-{}-{}", y, m, d);
		}

		// A week starts on its Monday
		let date = DateTime::from_parts(2024, 6, 17, 13, 0, 0).unwrap();
		assert_eq!(date.week().first_day().unwrap().to_string(), "2024-06-17T00:00:00");
		let date = DateTime::from_parts(2024, 6, 23, 0, 0, 0).unwrap();
		assert_eq!(date.week().first_day().unwrap().to_string(), "2024-06-17T00:00:00");

		// Rails cannot panic
		Week::MIN.year();
		Week::MIN.week_of_year();
		Week::MAX.year();
		Week::MAX.week_of_year();
		assert!(Week::MIN.first_day().is_err());
	}

	#[test]
	fn add_months_test() {
		let d = |y, m, day| DateTime::from_parts(y, m, day, 0, 0, 0).unwrap();
		assert_eq!(d(2023, 1, 31).add_months(1).unwrap(), d(2023, 3, 3));
		assert_eq!(d(2024, 1, 31).add_months(1).unwrap(), d(2024, 3, 2));
		assert_eq!(d(2024, 1, 31).add_months(13).unwrap(), d(2025, 3, 3));
		assert_eq!(d(2024, 3, 31).add_months(-1).unwrap(), d(2024, 3, 2));
		assert_eq!(d(2023, 3, 31).add_months(-13).unwrap(), d(2022, 3, 3));
		assert_eq!(d(2024, 6, 15).add_months(0).unwrap(), d(2024, 6, 15));
		assert_eq!(d(2024, 12, 31).add_months(2).unwrap(), d(2025, 3, 3));
		assert_eq!(d(2024, 1, 15).add_months(-1).unwrap(), d(2023, 12, 15));

		// Time of day is preserved
		let date = DateTime::from_parts(2024, 5, 31, 9, 50, 7).unwrap();
		assert_eq!(date.add_months(1).unwrap().to_string(), "2024-07-01T09:50:07");

		assert_eq!(d(Year::MAX.get(), 12, 31).add_months(1), Err(DateError::YearOutOfRange));
		assert_eq!(d(Year::MIN.get(), 1, 1).add_months(-1), Err(DateError::YearOutOfRange));
		assert!(d(2024, 1, 1).add_months(i64::MAX).is_err());
		assert!(d(2024, 1, 1).add_months(i64::MIN).is_err());
	}

	#[test]
	fn add_years_test() {
		let d = |y, m, day| DateTime::from_parts(y, m, day, 0, 0, 0).unwrap();
		assert_eq!(d(2024, 2, 29).add_years(1).unwrap(), d(2025, 3, 1));
		assert_eq!(d(2024, 2, 29).add_years(4).unwrap(), d(2028, 2, 29));
		assert_eq!(d(2024, 2, 29).add_years(-1).unwrap(), d(2023, 3, 1));
		assert_eq!(d(2023, 6, 17).add_years(2).unwrap(), d(2025, 6, 17));
		assert_eq!(d(2096, 2, 29).add_years(4).unwrap(), d(2100, 3, 1));

		assert_eq!(d(Year::MAX.get(), 6, 1).add_years(1), Err(DateError::YearOutOfRange));
		assert!(d(2024, 1, 1).add_years(i64::MAX).is_err());
		assert!(d(2024, 1, 1).add_years(i64::MIN).is_err());
	}

	#[test]
	fn checked_add_seconds_test() {
		let d = DateTime::new(0).unwrap();
		assert_eq!(d.checked_add_seconds(-1).unwrap().to_string(), "-0001-12-31T23:59:59");
		assert_eq!(DateTime::MAX.checked_add_seconds(1), Err(DateError::TimestampOutOfRange));
		assert_eq!(DateTime::MIN.checked_add_seconds(-1), Err(DateError::TimestampOutOfRange));
		assert_eq!(DateTime::MIN.checked_add_seconds(i64::MIN), Err(DateError::TimestampOutOfRange));
		assert_eq!(DateTime::MAX.checked_add_seconds(i64::MAX), Err(DateError::TimestampOutOfRange));
	}

	#[test]
	fn bounds_test() {
		assert_eq!(DateTime::new(TIMESTAMP_MAX + 1), Err(DateError::TimestampOutOfRange));
		assert_eq!(DateTime::new(TIMESTAMP_MIN - 1), Err(DateError::TimestampOutOfRange));
		assert_eq!(Year::new(Year::MAX.get() + 1), Err(DateError::YearOutOfRange));
		assert_eq!(Year::new(Year::MIN.get() - 1), Err(DateError::YearOutOfRange));
		assert_eq!(Month::new(0), Err(DateError::MonthOutOfRange));
		assert_eq!(Month::new(13), Err(DateError::MonthOutOfRange));
		assert_eq!(DayOfYear::new(366, false), Err(DateError::DayOfYearOutOfRange));
		assert!(DayOfYear::new(366, true).is_ok());
		assert_eq!(WeekOfYear::new(53, Year::new(2024).unwrap()),
		           Err(DateError::WeekOfYearOutOfRange));
		assert!(WeekOfYear::new(53, Year::new(2020).unwrap()).is_ok());
		assert_eq!(Hour::new(24), Err(DateError::HourOutOfRange));
		assert_eq!(Minute::new(60), Err(DateError::MinuteOutOfRange));
		assert_eq!(Second::new(60), Err(DateError::SecondOutOfRange));
		assert_eq!(Weekday::new(7), Err(DateError::WeekdayOutOfRange));

		// The timestamp bounds are exactly the first and last seconds of the year range
		assert_eq!(year_start_day(Year::MIN.get()) * SECONDS_PER_DAY, TIMESTAMP_MIN);
		assert_eq!(year_start_day(Year::MAX.get() + 1) * SECONDS_PER_DAY - 1, TIMESTAMP_MAX);
	}

	#[test]
	fn display_test() {
		assert_eq!(DateTime::from_parts(2024, 6, 17, 9, 50, 7).unwrap().to_string(),
		           "2024-06-17T09:50:07");
		assert_eq!(DateTime::new(-1).unwrap().to_string(), "-0001-12-31T23:59:59");
		assert_eq!(DateTime::new(0).unwrap().to_string(), "0000-01-01T00:00:00");
		assert_eq!(DateTime::from_parts(-44, 3, 15, 12, 0, 0).unwrap().to_string(),
		           "-0044-03-15T12:00:00");
	}

	#[test]
	fn to_unix_saturation_test() {
		// DateTime::MIN precedes the smallest i64 Unix timestamp
		assert_eq!(DateTime::MIN.to_unix(), i64::MIN);
		assert_eq!(DateTime::MAX.to_unix(), TIMESTAMP_MAX - UNIX_EPOCH_SECONDS);
		assert_eq!(DateTime::from_unix(i64::MAX), Err(DateError::TimestampOutOfRange));
		assert!(DateTime::from_unix(i64::MIN).is_err());
	}

	quickcheck! {
		fn civil_round_trip(seconds: i64) -> bool {
			// Fold arbitrary inputs into the valid range
			let span = (TIMESTAMP_MAX as i128 - TIMESTAMP_MIN as i128) as u128 + 1;
			let folded = (seconds as i128 - TIMESTAMP_MIN as i128).rem_euclid(span as i128);
			let seconds = (folded + TIMESTAMP_MIN as i128) as i64;
			let date = DateTime::new(seconds).unwrap();
			let c = date.civil();
			DateTime::from_parts(c.year.get(), c.month.get(), c.day.get(),
			                     c.hour.get(), c.minute.get(), c.second.get())
				== Ok(date)
		}

		fn leap_year_symmetric(year: i64) -> bool {
			let year = year.checked_abs().unwrap_or(0);
			is_leap_year(year) == is_leap_year(-year)
		}

		fn weekdays_advance(seconds: i64) -> bool {
			let seconds = seconds.rem_euclid(UNIX_EPOCH_SECONDS);
			let date = DateTime::new(seconds).unwrap();
			let next = DateTime::new(seconds + SECONDS_PER_DAY).unwrap();
			next.weekday().get() == (date.weekday().get() + 1) % 7
		}
	}
}

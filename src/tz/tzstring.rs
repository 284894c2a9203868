//! Support for parsing TZ strings.
//!
//! This module parses [TZ strings] with a single-pass, character-level state machine: every
//! byte is fed to the current state exactly once, and a byte that terminates a field is
//! re-dispatched to the state it introduces. There is no lookahead and no backtracking, so
//! the parser works directly on the unterminated footer slice of a TZif file.
//!
//! Offsets are stored with the POSIX sign convention: zones *ahead* of UTC have *negative*
//! offsets (`CET-1` stores `-3600`). The resolver in [`super`] negates them when producing
//! [`TzInfo`][super::TzInfo] values, which are added to UTC.
//!
//! Most extended POSIX features are supported, including `<...>`-quoted zone names and hours
//! up to ±167 in both offsets and rule transition times.
//!
//! [TZ strings]: https://www.gnu.org/software/libc/manual/html_node/TZ-Variable.html
//!
//! # Examples
//!
//! ```
//! # use civiltime::tz::tzstring::parse;
//! let tz = parse(b"EST5EDT,M3.2.0,M11.1.0").unwrap();
//! assert_eq!(tz.std.name.as_str(), "EST");
//! assert_eq!(tz.std.offset, 18000);
//! let rule = tz.rule.unwrap();
//! assert_eq!(rule.todst.1, 7200); // default transition time, 02:00 local
//! ```

use core::{error, fmt};
use crate::date::{
	day_of_year_from_md,
	year_start_day,
	Month,
	Weekday,
	Year,
	SECONDS_PER_DAY
};

/// The error type for parsing TZ strings.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TzStringError {
	/// Empty input.
	MissingTzString,
	/// A zone name was empty, too long, or contained an invalid character.
	InvalidZoneName,
	/// A date component of a [`TzDateRule`] was out of range.
	DateOutOfRange,
	/// A time or offset component was out of range.
	TimeOutOfRange,
	/// A [`TzDateRule`] was required but absent.
	MissingTzDateRule,
	/// A byte that no state accepts at its position.
	UnexpectedCharacter(u8),
	/// The input ended in the middle of a field.
	UnexpectedEnd
}

impl fmt::Display for TzStringError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TzStringError::MissingTzString => f.write_str("Missing TZ string"),
			TzStringError::InvalidZoneName => f.write_str("Invalid timezone name"),
			TzStringError::DateOutOfRange => f.write_str("Date component out of range"),
			TzStringError::TimeOutOfRange => f.write_str("Time component out of range"),
			TzStringError::MissingTzDateRule => f.write_str("Missing TZ date rule"),
			TzStringError::UnexpectedCharacter(c) => write!(f, "Unexpected character {:?}", *c as char),
			TzStringError::UnexpectedEnd => f.write_str("Unexpected end of TZ string")
		}
	}
}

impl error::Error for TzStringError {}

/// Maximum zone name length, matching the tzcode abbreviation limit.
const MAX_NAME_LEN: usize = 16;

/// A timezone name, stored inline.
///
/// Names are ASCII by construction: unquoted names are letters only, quoted names letters,
/// digits, `+`, and `-`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ZoneName {
	len: u8,
	bytes: [u8; MAX_NAME_LEN]
}

impl ZoneName {
	const fn new() -> ZoneName {
		ZoneName { len: 0, bytes: [0; MAX_NAME_LEN] }
	}

	fn push(&mut self, b: u8) -> Result<(), TzStringError> {
		if self.len as usize >= MAX_NAME_LEN {
			return Err(TzStringError::InvalidZoneName);
		}
		self.bytes[self.len as usize] = b;
		self.len += 1;
		Ok(())
	}

	/// The name as raw bytes.
	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes[..self.len as usize]
	}

	/// The name as a string slice.
	pub fn as_str(&self) -> &str {
		// Always ASCII, but avoid a panic path regardless
		core::str::from_utf8(self.as_bytes()).unwrap_or("")
	}

	/// The length of the name in bytes.
	pub fn len(&self) -> usize {
		self.len as usize
	}

	/// Whether the name is empty.
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}
}

impl fmt::Debug for ZoneName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:?}", self.as_str())
	}
}

impl fmt::Display for ZoneName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A named zone with its UTC offset in seconds, POSIX-signed (ahead of UTC is negative).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Zone {
	/// The zone name
	pub name: ZoneName,
	/// Offset in seconds, subtracted from local time to get UTC
	pub offset: i32
}

/// A TZ string date rule.
///
/// There are three types of date rules supported in POSIX TZ strings: 1-indexed Julian day
/// ignoring leap days, 0-indexed Julian day, and month/week/day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TzDateRule {
	/// 'J`n`' where `n` is the Julian day between 1 and 365. Leap days are ignored, so day 60
	/// is always March 1st.
	J(u16),
	/// '`n`' where `n` is the Julian day between 0 and 365. Leap day is counted in leap
	/// years, so day 60 is March 1st in leap years but March 2nd in non-leap years.
	N(u16),
	/// 'M`m`.`w`.`d`' where `m` is the month, `d` the day of week, and `w` (1-5) the `w`th
	/// instance of day `d` in the month. If `w` is 5 this rule selects the last instance of
	/// day `d` in the month, which could be the 4th or 5th instance depending on the day and
	/// month.
	M(Month, u8, Weekday)
}

impl TzDateRule {
	/// The civil timestamp of 00:00:00 on the day this rule selects in `year`.
	///
	/// For `N(365)` in a non-leap year the selected day is January 1 of the following year.
	///
	/// # Panics
	///
	/// This function panics in debug mode if the [`TzDateRule`] is configured with ranges
	/// outside those stated in the documentation. Values produced by [`parse`] never panic.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::{Year, Month, Weekday, UNIX_EPOCH_SECONDS};
	/// # use civiltime::tz::tzstring::TzDateRule;
	/// let year = Year::new(2024).unwrap();
	/// assert_eq!(TzDateRule::J(60).as_timestamp(year) - UNIX_EPOCH_SECONDS, 1709251200);
	/// assert_eq!(TzDateRule::N(59).as_timestamp(year) - UNIX_EPOCH_SECONDS, 1709164800);
	/// let last_feb_thu = TzDateRule::M(Month::new(2).unwrap(), 5, Weekday::new(4).unwrap());
	/// assert_eq!(last_feb_thu.as_timestamp(year) - UNIX_EPOCH_SECONDS, 1709164800);
	/// ```
	pub fn as_timestamp(&self, year: Year) -> i64 {
		let leap = year.is_leap();
		let start = year_start_day(year.get());
		let doy = match *self {
			TzDateRule::J(n) => {
				debug_assert!(1 <= n && n <= 365);
				n - 1 + (n > 59 && leap) as u16
			}
			TzDateRule::N(n) => {
				debug_assert!(n <= 365);
				n
			}
			TzDateRule::M(m, w, d) => {
				debug_assert!(1 <= w && w <= 5);
				// Weekday of the 1st of the month, then the offset to the first target
				// weekday, then whole weeks. The 5th instance may not exist; back up one
				// week if it runs past the month.
				let first = day_of_year_from_md(m.get(), 1, leap);
				let wday = Weekday::from_day_index(start + first as i64).get();
				let delta = (d.get() + 7 - wday) % 7;
				let mut day = 1 + delta as u16 + 7 * (w as u16 - 1);
				if day > m.days(leap) as u16 {
					day -= 7;
				}
				first + day - 1
			}
		};
		(start + doy as i64) * SECONDS_PER_DAY
	}
}

/// A TZ string rule set.
///
/// The set consists of four values in two pairs, representing transition times to:
/// * Daylight savings time: date (1) and time (2)
/// * Standard time: date (3) and time (4)
///
/// Times (2, 4) are in seconds of local time and default to 02:00 (7200) if missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TzRule {
	/// Transition from standard time to daylight savings time (date & time)
	pub todst: (TzDateRule, i32),
	/// Transition from daylight savings time to standard time (date & time)
	pub fromdst: (TzDateRule, i32)
}

/// A parsed TZ string.
///
/// Specifies a standard zone, an optional daylight savings zone, and an optional transition
/// rule set. A daylight zone without a rule set is accepted; the resolver treats it as
/// standard time year-round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TzString {
	/// The standard time zone
	pub std: Zone,
	/// The optional daylight savings time zone
	pub dst: Option<Zone>,
	/// The optional transition rule set
	pub rule: Option<TzRule>
}

/// Whose name or offset a state is accumulating.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Field {
	Std,
	Dst
}

/// Which of the two rule slots a state is accumulating.
#[derive(Clone, Copy, PartialEq, Eq)]
enum RulePos {
	Start,
	End
}

/// Accumulator for a signed `h[:mm[:ss]]` value.
#[derive(Clone, Copy)]
struct TimeAcc {
	negative: bool,
	signed: bool,
	/// 0 = hours, 1 = minutes, 2 = seconds
	part: u8,
	/// Digits seen in the current part
	digits: u8,
	parts: [u32; 3]
}

impl TimeAcc {
	const fn new() -> TimeAcc {
		TimeAcc { negative: false, signed: false, part: 0, digits: 0, parts: [0; 3] }
	}

	fn digit(&mut self, d: u8) -> Result<(), TzStringError> {
		let i = self.part as usize;
		let limit = if i == 0 { 167 } else { 59 };
		self.parts[i] = self.parts[i] * 10 + d as u32;
		if self.parts[i] > limit {
			return Err(TzStringError::TimeOutOfRange);
		}
		self.digits = self.digits.saturating_add(1);
		Ok(())
	}

	fn sign(&mut self, b: u8) -> Result<(), TzStringError> {
		if self.signed || self.part != 0 || self.digits != 0 {
			return Err(TzStringError::UnexpectedCharacter(b));
		}
		self.signed = true;
		self.negative = b == b'-';
		Ok(())
	}

	fn colon(&mut self) -> Result<(), TzStringError> {
		if self.digits == 0 || self.part == 2 {
			return Err(TzStringError::UnexpectedCharacter(b':'));
		}
		self.part += 1;
		self.digits = 0;
		Ok(())
	}

	/// The accumulated value in seconds, or `None` if the current part has no digits.
	fn value(&self) -> Option<i32> {
		if self.digits == 0 {
			return None;
		}
		let total = (self.parts[0] * 3600 + self.parts[1] * 60 + self.parts[2]) as i32;
		Some(if self.negative { -total } else { total })
	}
}

/// Accumulator for one of the three date rule forms.
#[derive(Clone, Copy)]
enum DateAcc {
	/// Nothing seen yet
	Empty,
	/// After 'J': value and digit count
	Julian(u16, u8),
	/// Bare digits: value and digit count
	Zero(u16, u8),
	/// After 'M': month value and digit count
	MonthPart(u16, u8),
	/// After 'Mm.': month, then week value and digit count
	WeekPart(u8, u16, u8),
	/// After 'Mm.w.': month, week, then day value and digit count
	DayPart(u8, u8, u16, u8)
}

impl DateAcc {
	fn digit(self, d: u8) -> Result<DateAcc, TzStringError> {
		// Limits are enforced as soon as they are exceeded so the accumulators can't
		// overflow no matter how many digits follow.
		match self {
			DateAcc::Empty => Ok(DateAcc::Zero(d as u16, 1)),
			DateAcc::Julian(v, n) => {
				let v = v * 10 + d as u16;
				if v > 365 { Err(TzStringError::DateOutOfRange) }
				else { Ok(DateAcc::Julian(v, n.saturating_add(1))) }
			}
			DateAcc::Zero(v, n) => {
				let v = v * 10 + d as u16;
				if v > 365 { Err(TzStringError::DateOutOfRange) }
				else { Ok(DateAcc::Zero(v, n.saturating_add(1))) }
			}
			DateAcc::MonthPart(v, n) => {
				let v = v * 10 + d as u16;
				if v > 12 { Err(TzStringError::DateOutOfRange) }
				else { Ok(DateAcc::MonthPart(v, n.saturating_add(1))) }
			}
			DateAcc::WeekPart(m, v, n) => {
				let v = v * 10 + d as u16;
				if v > 5 { Err(TzStringError::DateOutOfRange) }
				else { Ok(DateAcc::WeekPart(m, v, n.saturating_add(1))) }
			}
			DateAcc::DayPart(m, w, v, n) => {
				let v = v * 10 + d as u16;
				if v > 6 { Err(TzStringError::DateOutOfRange) }
				else { Ok(DateAcc::DayPart(m, w, v, n.saturating_add(1))) }
			}
		}
	}

	fn julian(self) -> Result<DateAcc, TzStringError> {
		match self {
			DateAcc::Empty => Ok(DateAcc::Julian(0, 0)),
			_ => Err(TzStringError::UnexpectedCharacter(b'J'))
		}
	}

	fn month(self) -> Result<DateAcc, TzStringError> {
		match self {
			DateAcc::Empty => Ok(DateAcc::MonthPart(0, 0)),
			_ => Err(TzStringError::UnexpectedCharacter(b'M'))
		}
	}

	fn dot(self) -> Result<DateAcc, TzStringError> {
		match self {
			DateAcc::MonthPart(v, n) if n > 0 => {
				if v >= 1 { Ok(DateAcc::WeekPart(v as u8, 0, 0)) }
				else { Err(TzStringError::DateOutOfRange) }
			}
			DateAcc::WeekPart(m, v, n) if n > 0 => {
				if v >= 1 { Ok(DateAcc::DayPart(m, v as u8, 0, 0)) }
				else { Err(TzStringError::DateOutOfRange) }
			}
			_ => Err(TzStringError::UnexpectedCharacter(b'.'))
		}
	}

	/// Finalize the accumulated rule on a terminator. `at` is the terminating byte, or
	/// `None` at end of input.
	fn finish(self, at: Option<u8>) -> Result<TzDateRule, TzStringError> {
		let incomplete = match at {
			Some(b) => TzStringError::UnexpectedCharacter(b),
			None => TzStringError::UnexpectedEnd
		};
		match self {
			DateAcc::Empty => Err(TzStringError::MissingTzDateRule),
			DateAcc::Julian(v, n) => {
				if n == 0 { Err(incomplete) }
				else if v < 1 { Err(TzStringError::DateOutOfRange) }
				else { Ok(TzDateRule::J(v)) }
			}
			DateAcc::Zero(v, _) => Ok(TzDateRule::N(v)),
			DateAcc::MonthPart(..) | DateAcc::WeekPart(..) => Err(incomplete),
			DateAcc::DayPart(m, w, v, n) => {
				if n == 0 { Err(incomplete) }
				else {
					Ok(TzDateRule::M(Month::new_unchecked(m), w, Weekday::new_unchecked(v as u8)))
				}
			}
		}
	}
}

/// The parser state: exactly where in the grammar the next byte lands.
#[derive(Clone, Copy)]
enum State {
	/// Expecting the first character of a zone name
	NameStart(Field),
	/// Inside an unquoted zone name
	Name(Field, ZoneName),
	/// Inside a `<...>`-quoted zone name
	Quoted(Field, ZoneName),
	/// Just past the closing `>` of a quoted name
	QuotedEnd(Field, ZoneName),
	/// Inside an offset following a zone name
	Offset(Field, ZoneName, TimeAcc),
	/// Inside a rule date
	RuleDate(RulePos, DateAcc),
	/// Inside a rule transition time, after `/`
	RuleTime(RulePos, TzDateRule, TimeAcc)
}

/// Default rule transition time: 02:00 local.
const DEFAULT_RULE_TIME: i32 = 7200;
/// Default daylight offset delta when the TZ string omits it: one hour past standard.
const DEFAULT_DST_DELTA: i32 = 3600;

struct Parser {
	state: State,
	std: Option<Zone>,
	dst: Option<Zone>,
	todst: Option<(TzDateRule, i32)>
}

impl Parser {
	const fn new() -> Parser {
		Parser {
			state: State::NameStart(Field::Std),
			std: None,
			dst: None,
			todst: None
		}
	}

	/// Record the daylight zone with the default offset (standard plus one hour).
	fn dst_with_default_offset(&mut self, name: ZoneName) -> Result<(), TzStringError> {
		let std = match self.std {
			Some(z) => z,
			None => return Err(TzStringError::UnexpectedEnd)
		};
		self.dst = Some(Zone { name, offset: std.offset + DEFAULT_DST_DELTA });
		Ok(())
	}

	/// Feed one byte to the state machine.
	///
	/// A byte that terminates a field updates the parser and is then re-dispatched to the
	/// state it introduces, hence the loop.
	fn push(&mut self, b: u8) -> Result<(), TzStringError> {
		loop {
			match self.state {
				State::NameStart(field) => {
					return match b {
						b'A'..=b'Z' | b'a'..=b'z' => {
							let mut name = ZoneName::new();
							name.push(b)?;
							self.state = State::Name(field, name);
							Ok(())
						}
						b'<' => {
							self.state = State::Quoted(field, ZoneName::new());
							Ok(())
						}
						_ => Err(TzStringError::UnexpectedCharacter(b))
					};
				}
				State::Name(field, mut name) => {
					match b {
						b'A'..=b'Z' | b'a'..=b'z' => {
							name.push(b)?;
							self.state = State::Name(field, name);
							return Ok(());
						}
						b'0'..=b'9' | b'+' | b'-' => {
							// The offset starts with this byte; re-dispatch it
							self.state = State::Offset(field, name, TimeAcc::new());
						}
						b',' if field == Field::Dst => {
							self.dst_with_default_offset(name)?;
							self.state = State::RuleDate(RulePos::Start, DateAcc::Empty);
							return Ok(());
						}
						_ => return Err(TzStringError::UnexpectedCharacter(b))
					}
				}
				State::Quoted(field, mut name) => {
					return match b {
						b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'+' | b'-' => {
							name.push(b)?;
							self.state = State::Quoted(field, name);
							Ok(())
						}
						b'>' => {
							if name.is_empty() {
								return Err(TzStringError::InvalidZoneName);
							}
							self.state = State::QuotedEnd(field, name);
							Ok(())
						}
						_ => Err(TzStringError::UnexpectedCharacter(b))
					};
				}
				State::QuotedEnd(field, name) => {
					match b {
						b'0'..=b'9' | b'+' | b'-' => {
							self.state = State::Offset(field, name, TimeAcc::new());
						}
						b',' if field == Field::Dst => {
							self.dst_with_default_offset(name)?;
							self.state = State::RuleDate(RulePos::Start, DateAcc::Empty);
							return Ok(());
						}
						_ => return Err(TzStringError::UnexpectedCharacter(b))
					}
				}
				State::Offset(field, name, mut acc) => {
					match b {
						b'0'..=b'9' => {
							acc.digit(b - b'0')?;
							self.state = State::Offset(field, name, acc);
							return Ok(());
						}
						b'+' | b'-' => {
							acc.sign(b)?;
							self.state = State::Offset(field, name, acc);
							return Ok(());
						}
						b':' => {
							acc.colon()?;
							self.state = State::Offset(field, name, acc);
							return Ok(());
						}
						_ => {
							let offset = acc.value()
								.ok_or(TzStringError::UnexpectedCharacter(b))?;
							match field {
								Field::Std => {
									self.std = Some(Zone { name, offset });
									match b {
										b'A'..=b'Z' | b'a'..=b'z' | b'<' => {
											self.state = State::NameStart(Field::Dst);
										}
										_ => return Err(TzStringError::UnexpectedCharacter(b))
									}
								}
								Field::Dst => {
									self.dst = Some(Zone { name, offset });
									match b {
										b',' => {
											self.state =
												State::RuleDate(RulePos::Start, DateAcc::Empty);
											return Ok(());
										}
										_ => return Err(TzStringError::UnexpectedCharacter(b))
									}
								}
							}
						}
					}
				}
				State::RuleDate(pos, acc) => {
					return match b {
						b'0'..=b'9' => {
							self.state = State::RuleDate(pos, acc.digit(b - b'0')?);
							Ok(())
						}
						b'J' => {
							self.state = State::RuleDate(pos, acc.julian()?);
							Ok(())
						}
						b'M' => {
							self.state = State::RuleDate(pos, acc.month()?);
							Ok(())
						}
						b'.' => {
							self.state = State::RuleDate(pos, acc.dot()?);
							Ok(())
						}
						b'/' => {
							let date = acc.finish(Some(b))?;
							self.state = State::RuleTime(pos, date, TimeAcc::new());
							Ok(())
						}
						b',' if pos == RulePos::Start => {
							let date = acc.finish(Some(b))?;
							self.todst = Some((date, DEFAULT_RULE_TIME));
							self.state = State::RuleDate(RulePos::End, DateAcc::Empty);
							Ok(())
						}
						_ => Err(TzStringError::UnexpectedCharacter(b))
					};
				}
				State::RuleTime(pos, date, mut acc) => {
					return match b {
						b'0'..=b'9' => {
							acc.digit(b - b'0')?;
							self.state = State::RuleTime(pos, date, acc);
							Ok(())
						}
						b'+' | b'-' => {
							acc.sign(b)?;
							self.state = State::RuleTime(pos, date, acc);
							Ok(())
						}
						b':' => {
							acc.colon()?;
							self.state = State::RuleTime(pos, date, acc);
							Ok(())
						}
						b',' if pos == RulePos::Start => {
							let time = acc.value()
								.ok_or(TzStringError::UnexpectedCharacter(b))?;
							self.todst = Some((date, time));
							self.state = State::RuleDate(RulePos::End, DateAcc::Empty);
							Ok(())
						}
						_ => Err(TzStringError::UnexpectedCharacter(b))
					};
				}
			}
		}
	}

	/// Finalize at end of input. Every state that can legally end the string produces a
	/// [`TzString`] here; every other state reports what was still missing.
	fn finish(self) -> Result<TzString, TzStringError> {
		match self.state {
			State::NameStart(_) | State::Quoted(..) => Err(TzStringError::UnexpectedEnd),
			State::Name(Field::Std, _) | State::QuotedEnd(Field::Std, _) => {
				// A standard zone requires an offset
				Err(TzStringError::UnexpectedEnd)
			}
			State::Name(Field::Dst, name) | State::QuotedEnd(Field::Dst, name) => {
				let std = self.std.ok_or(TzStringError::UnexpectedEnd)?;
				let dst = Zone { name, offset: std.offset + DEFAULT_DST_DELTA };
				Ok(TzString { std, dst: Some(dst), rule: None })
			}
			State::Offset(field, name, acc) => {
				let offset = acc.value().ok_or(TzStringError::UnexpectedEnd)?;
				match field {
					Field::Std => Ok(TzString {
						std: Zone { name, offset },
						dst: None,
						rule: None
					}),
					Field::Dst => {
						let std = self.std.ok_or(TzStringError::UnexpectedEnd)?;
						Ok(TzString { std, dst: Some(Zone { name, offset }), rule: None })
					}
				}
			}
			State::RuleDate(pos, acc) => {
				let date = acc.finish(None)?;
				match pos {
					RulePos::Start => Err(TzStringError::UnexpectedEnd),
					RulePos::End => self.build(date, DEFAULT_RULE_TIME)
				}
			}
			State::RuleTime(pos, date, acc) => {
				let time = acc.value().ok_or(TzStringError::UnexpectedEnd)?;
				match pos {
					RulePos::Start => Err(TzStringError::UnexpectedEnd),
					RulePos::End => self.build(date, time)
				}
			}
		}
	}

	/// Assemble the final value once the end rule is complete.
	fn build(&self, date: TzDateRule, time: i32) -> Result<TzString, TzStringError> {
		let std = self.std.ok_or(TzStringError::UnexpectedEnd)?;
		let dst = self.dst.ok_or(TzStringError::UnexpectedEnd)?;
		let todst = self.todst.ok_or(TzStringError::UnexpectedEnd)?;
		Ok(TzString {
			std,
			dst: Some(dst),
			rule: Some(TzRule { todst, fromdst: (date, time) })
		})
	}
}

/// Parse a byte slice containing a TZ string.
///
/// A single trailing newline is allowed, since TZif footers carry one.
///
/// # Errors
///
/// Returns [`TzStringError`] if the TZ string is malformed.
///
/// # Examples
///
/// ```
/// # use civiltime::tz::tzstring::{parse, TzStringError};
/// let tz = parse(b"CET-1CEST,M3.5.0,M10.5.0\n").unwrap();
/// assert_eq!(tz.std.offset, -3600);
/// assert_eq!(tz.dst.unwrap().offset, 0);
/// assert_eq!(parse(b""), Err(TzStringError::MissingTzString));
/// assert_eq!(parse(b"EST"), Err(TzStringError::UnexpectedEnd));
/// ```
pub fn parse(bytes: &[u8]) -> Result<TzString, TzStringError> {
	if bytes.is_empty() {
		return Err(TzStringError::MissingTzString);
	}
	let mut parser = Parser::new();
	for (i, &b) in bytes.iter().enumerate() {
		if b == b'\n' {
			return if i + 1 == bytes.len() {
				parser.finish()
			} else {
				Err(TzStringError::UnexpectedCharacter(b'\n'))
			};
		}
		parser.push(b)?;
	}
	parser.finish()
}

//! Support for resolving timezones.
//!
//! A [`Timezone`] maps civil UTC timestamps to the UT offset, daylight savings state, and
//! leap second correction in effect at that instant. Timezones come from two sources: TZif
//! binary data ([`tzfile`], requires `alloc`) and [TZ strings] ([`tzstring`], available in
//! `no_std`). [`discover`] tries both grammars over a caller-supplied sequence of byte
//! sources, and [`system`] (requires `std`) feeds it the usual system locations.
//!
//! [TZ strings]: https://www.gnu.org/software/libc/manual/html_node/TZ-Variable.html
//!
//! # Examples
//!
//! Resolving US Eastern time from a TZ string.
//! ```
//! # use civiltime::tz::{parse_tzstring, Timezone, TzInfo};
//! let timezone = Timezone::Posix(parse_tzstring(b"EST5EDT4,M3.2.0,M11.1.0").unwrap());
//! let info = timezone.info(62167219200 + 1723433665);
//! assert_eq!(info, TzInfo { utoff: -14400, leap: 0, isdst: true, isleapsecond: false });
//! ```
//!
//! Resolving the system timezone.
//! ```
//! # #[cfg(feature = "std")] {
//! # use civiltime::tz::system;
//! let timezone = system();
//! let date = timezone.localize(62167219200 + 1723433665);
//! # }
//! ```

pub mod tzstring;
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
#[cfg(feature = "alloc")]
pub mod tzfile;

pub use tzstring::parse as parse_tzstring;
pub use tzstring::{TzDateRule, TzRule, TzString, TzStringError, Zone, ZoneName};
#[cfg(feature = "alloc")]
pub use tzfile::{parse_bytes, TzFile, TzFileError};
#[cfg(feature = "std")]
pub use tzfile::parse_file;

use crate::date::DateTime;
#[cfg(feature = "std")]
use std::{env, fs, vec::Vec};

/// Information about a timezone at a particular instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TzInfo {
	/// Seconds to add to UT to get local time
	pub utoff: i32,
	/// Cumulative leap second correction, subtracted from local time
	pub leap: i32,
	/// Whether daylight savings time is in effect
	pub isdst: bool,
	/// Whether the instant is an inserted leap second
	pub isleapsecond: bool
}

/// A resolved timezone.
///
/// Values are immutable after construction. The cheapest way to obtain one is [`discover`]
/// or [`system`]; [`Timezone::File`] and [`Timezone::Posix`] can also be built directly from
/// the output of [`tzfile::parse_bytes`] and [`parse_tzstring`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Timezone {
	/// A timezone backed by decoded TZif data
	#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
	#[cfg(feature = "alloc")]
	File(TzFile),
	/// A timezone backed by a parsed TZ string
	Posix(TzString),
	/// The native platform timezone API. Not currently implemented; resolves like
	/// [`Timezone::Unknown`].
	Native,
	/// An unknown timezone, treated as UTC with no daylight savings
	Unknown
}

impl Timezone {
	/// Get the timezone information in effect at `time` (a civil UTC timestamp).
	///
	/// Out-of-range times are clamped to the supported range before resolution, so this
	/// function never fails.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::tz::{parse_tzstring, Timezone};
	/// let timezone = Timezone::Posix(parse_tzstring(b"CET-1CEST,M3.5.0,M10.5.0").unwrap());
	/// // 2025-01-15 12:00:00 UTC
	/// assert_eq!(timezone.info(63904161600).utoff, 3600);
	/// // 2025-07-01 12:00:00 UTC
	/// assert_eq!(timezone.info(63918590400).utoff, 0);
	/// ```
	pub fn info(&self, time: i64) -> TzInfo {
		let time = time.clamp(DateTime::MIN.seconds(), DateTime::MAX.seconds());
		match self {
			#[cfg(feature = "alloc")]
			Timezone::File(file) => file_info(file, time),
			Timezone::Posix(spec) => posix_info(spec, time),
			Timezone::Native | Timezone::Unknown => TzInfo::default()
		}
	}

	/// Convert a civil UTC timestamp to local wall-clock time.
	///
	/// Applies the UT offset and subtracts the cumulative leap second correction. Returns
	/// `None` only if the result leaves the representable range.
	///
	/// # Examples
	///
	/// ```
	/// # use civiltime::tz::{parse_tzstring, Timezone};
	/// let timezone = Timezone::Posix(parse_tzstring(b"EST5EDT4,M3.2.0,M11.1.0").unwrap());
	/// let date = timezone.localize(62167219200 + 1723433665).unwrap();
	/// assert_eq!(date.to_string(), "2024-08-11T23:34:25");
	/// ```
	pub fn localize(&self, time: i64) -> Option<DateTime> {
		let info = self.info(time);
		let local = time.checked_sub(info.leap as i64)?
			.checked_add(info.utoff as i64)?;
		DateTime::new(local).ok()
	}
}

/// Resolve a TZ string timezone at `time`. `time` must be in the supported range.
fn posix_info(spec: &TzString, time: i64) -> TzInfo {
	let std = TzInfo { utoff: -spec.std.offset, ..TzInfo::default() };
	let (dst, rule) = match (spec.dst, spec.rule) {
		(Some(dst), Some(rule)) => (dst, rule),
		_ => return std
	};

	// Rule boundaries are expressed in the local time on their side of the transition:
	// standard time going in, daylight time coming out
	let year = DateTime::new_unchecked(time).year();
	let start = rule.todst.0.as_timestamp(year)
		.saturating_add((rule.todst.1 + spec.std.offset) as i64);
	let end = rule.fromdst.0.as_timestamp(year)
		.saturating_add((rule.fromdst.1 + dst.offset) as i64);

	// Daylight time can wrap the end of the year (Southern Hemisphere); equal boundaries
	// mean daylight time all year
	let indst = if start < end {
		start <= time && time < end
	} else {
		time < end || start <= time
	};
	if indst {
		TzInfo { utoff: -dst.offset, isdst: true, ..TzInfo::default() }
	} else {
		std
	}
}

/// Resolve a TZif timezone at `time`. `time` must be in the supported range.
#[cfg(feature = "alloc")]
fn file_info(file: &TzFile, time: i64) -> TzInfo {
	let (utoff, isdst) = file_offset(file, time);
	let (leap, isleapsecond) = leap_info(file, time);
	TzInfo { utoff, leap, isdst, isleapsecond }
}

/// The UT offset and daylight flag in effect at `time`.
#[cfg(feature = "alloc")]
fn file_offset(file: &TzFile, time: i64) -> (i32, bool) {
	let from_spec = |spec: &TzString| {
		let info = posix_info(spec, time);
		(info.utoff, info.isdst)
	};

	let last = match file.transitions.last() {
		Some(last) => last,
		None => {
			// No precomputed transitions: the footer rule governs all times, else UTC
			return match &file.spec {
				Some(spec) => from_spec(spec),
				None => (0, false)
			};
		}
	};

	// The footer rule takes over at and after the last transition
	if time >= last.at {
		if let Some(spec) = &file.spec {
			return from_spec(spec);
		}
	}

	// Latest transition at or before `time`; times before the first transition use the
	// first transition's record
	let index = match file.transitions.binary_search_by_key(&time, |t| t.at) {
		Ok(i) => i,
		Err(0) => 0,
		Err(i) => i - 1
	};
	let type_index = file.transitions[index].type_index as usize;
	match file.types.get(type_index) {
		Some(t) => (t.utoff, t.isdst),
		None => (0, false)
	}
}

/// The cumulative leap correction at `time`, and whether `time` is an inserted leap second.
#[cfg(feature = "alloc")]
fn leap_info(file: &TzFile, time: i64) -> (i32, bool) {
	if let Some(expiration) = file.leap_expiration {
		if time > expiration {
			warn!("Leap second table expired before the requested time");
		}
	}
	let i = file.leap_seconds.partition_point(|l| l.occurrence <= time);
	if i == 0 {
		return (0, false);
	}
	let record = &file.leap_seconds[i - 1];
	let prev = if i >= 2 { file.leap_seconds[i - 2].correction } else { 0 };
	(record.correction, record.occurrence == time && record.correction > prev)
}

/// Strip trailing whitespace from a TZ string candidate.
#[cfg(feature = "alloc")]
fn trim_trailing(mut bytes: &[u8]) -> &[u8] {
	while let Some((&last, rest)) = bytes.split_last() {
		match last {
			b'\n' | b'\r' | b'\t' | b' ' => bytes = rest,
			_ => break
		}
	}
	bytes
}

/// Find a timezone among a sequence of byte sources.
///
/// Each candidate is tried first as TZif data, then (if it does not carry the TZif magic) as
/// a TZ string with trailing whitespace trimmed. Empty candidates are skipped. Candidate
/// failures are never surfaced; they are logged when the `logging` feature is enabled, and
/// the next candidate is tried. If no candidate resolves, the result is
/// [`Timezone::Unknown`].
///
/// # Examples
///
/// ```
/// # use civiltime::tz::{discover, Timezone};
/// let timezone = discover([b"EST5EDT,M3.2.0,M11.1.0\n".as_slice()]);
/// assert!(matches!(timezone, Timezone::Posix(_)));
/// assert_eq!(discover([b"not a timezone".as_slice()]), Timezone::Unknown);
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
#[cfg(feature = "alloc")]
pub fn discover<I>(sources: I) -> Timezone
where
	I: IntoIterator,
	I::Item: AsRef<[u8]>
{
	for source in sources {
		let bytes = source.as_ref();
		if bytes.is_empty() {
			continue;
		}
		match tzfile::parse_bytes(bytes) {
			Ok(file) => return Timezone::File(file),
			Err(TzFileError::NotATzFile) => match tzstring::parse(trim_trailing(bytes)) {
				Ok(spec) => return Timezone::Posix(spec),
				Err(e) => debug!("Rejected TZ string candidate: {}", e)
			},
			Err(e) => debug!("Rejected TZif candidate: {}", e)
		}
	}
	Timezone::Unknown
}

/// Find the system timezone.
///
/// Probes `/etc/localtime`, `/etc/timezone`, and the `TZ` environment variable, in that
/// order, reading each lazily and feeding it to [`discover`]. Returns
/// [`Timezone::Unknown`] if none of them resolves.
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub fn system() -> Timezone {
	let candidates: [fn() -> Option<Vec<u8>>; 3] = [
		|| fs::read("/etc/localtime").ok(),
		|| fs::read("/etc/timezone").ok(),
		|| env::var_os("TZ").map(|v| v.into_encoded_bytes())
	];
	discover(candidates.iter().filter_map(|f| f()))
}

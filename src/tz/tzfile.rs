//! Support for parsing TZif files.
//!
//! This module decodes [RFC 8536] TZif binary data, versions 1-4: transition times, local
//! time type records, timezone designations, leap second records (including the version 4
//! expiration marker), standard/wall and UT/local indicators, and the version 2+ footer TZ
//! string. All timestamps in the file are Unix-epoch seconds and are normalized to civil
//! timestamps (seconds since 0000-01-01 00:00:00) at decode time.
//!
//! Unknown future versions are decoded as the newest supported format rather than rejected,
//! and UT offsets outside the POSIX range are kept, since both are advisory concerns. With
//! the `logging` feature enabled they are reported through [`log`].
//!
//! A failed parse never yields a partial [`TzFile`]: every structural rule is checked while
//! decoding, and [`TzFile::is_valid`] can re-check them all afterwards.
//!
//! All functions in this module require the `alloc` feature. The helper function
//! [`parse_file`] additionally requires the `std` feature.
//!
//! [RFC 8536]: https://datatracker.ietf.org/doc/html/rfc8536
//!
//! # Examples
//!
//! ```no_run
//! # use civiltime::tz::tzfile::parse_file;
//! let tzfile = parse_file("/usr/share/zoneinfo/America/Los_Angeles").unwrap();
//! assert_eq!(tzfile.designation(0), Some("LMT"));
//! ```

use core::{error, fmt, slice::SliceIndex};
use alloc::{boxed::Box, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{fs, io, path::Path, string::ToString};
use crate::date::UNIX_EPOCH_SECONDS;
use super::tzstring::{self, TzString, TzStringError};

/// The error type for parsing timezone data (TZif files).
#[derive(Debug, PartialEq, Eq)]
pub enum TzFileError {
	/// Error reading the file. The reason is returned as a payload of this variant.
	#[cfg(feature = "std")]
	FileReadError(String),
	/// The data is not TZif data (missing "TZif" magic bytes).
	NotATzFile,
	/// The data ended before a structure it promised.
	TruncatedData,
	/// The header counts contradict each other.
	InconsistentCounts,
	/// Transition times are not strictly ascending.
	NonAscendingTransitions,
	/// A transition references a local time type that does not exist.
	TypeIndexOutOfRange,
	/// A local time type record has an invalid UT offset or daylight flag.
	InvalidTimeType,
	/// A designation index is out of range, or the designations are not NUL-terminated.
	DesignationOutOfRange,
	/// A leap second record violates the occurrence or correction rules.
	InvalidLeapSecond,
	/// An indicator byte is not 0/1, or a UT indicator is set without its standard indicator.
	InvalidIndicator,
	/// An extended file is missing its newline-enclosed footer.
	MissingFooter,
	/// The footer TZ string is invalid.
	InvalidTzString(TzStringError)
}

#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
impl From<io::Error> for TzFileError {
	/// Wrap an [`io::Error`] in a [`TzFileError::FileReadError`].
	fn from(error: io::Error) -> Self {
		Self::FileReadError(error.to_string())
	}
}

impl From<TzStringError> for TzFileError {
	/// Wrap a [`TzStringError`] in a [`TzFileError::InvalidTzString`].
	fn from(error: TzStringError) -> Self {
		Self::InvalidTzString(error)
	}
}

impl fmt::Display for TzFileError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			#[cfg(feature = "std")]
			TzFileError::FileReadError(s) => write!(f, "{}", s),
			TzFileError::NotATzFile => write!(f, "Not a TZif file"),
			TzFileError::TruncatedData => write!(f, "Truncated TZif data"),
			TzFileError::InconsistentCounts => write!(f, "Inconsistent TZif header counts"),
			TzFileError::NonAscendingTransitions => write!(f, "Transition times not ascending"),
			TzFileError::TypeIndexOutOfRange => write!(f, "Transition type index out of range"),
			TzFileError::InvalidTimeType => write!(f, "Invalid local time type record"),
			TzFileError::DesignationOutOfRange => write!(f, "Invalid timezone designations"),
			TzFileError::InvalidLeapSecond => write!(f, "Invalid leap second record"),
			TzFileError::InvalidIndicator => write!(f, "Invalid std/wall or UT/local indicator"),
			TzFileError::MissingFooter => write!(f, "Missing TZif footer"),
			TzFileError::InvalidTzString(e) => write!(f, "{}", e)
		}
	}
}

impl error::Error for TzFileError {}

/// The TZif magic bytes, 'TZif' big endian.
const MAGIC: u32 = 0x545a6966;
/// Full header length: magic, version, reserved bytes, and six counts.
const HEADER_LEN: usize = 44;
/// Length of the six big-endian count fields.
const COUNTS_LEN: usize = 24;
/// The newest TZif version this module understands.
const NEWEST_VERSION: u8 = b'4';
/// Advisory UT offset range from RFC 8536: -24:59:59 through +25:59:59.
const UTOFF_RANGE: core::ops::RangeInclusive<i32> = -89999..=93599;

/// Read a big endian, unsigned 32-bit number from a byte array.
///
/// # Panics
/// This function must be called with a slice of length 4. Any other input will panic.
#[inline(always)]
fn read_u32(bytes: &[u8]) -> u32 {
	u32::from_be_bytes(bytes.try_into().unwrap())
}

/// Read a big endian, signed 32-bit number from a byte array.
///
/// # Panics
/// This function must be called with a slice of length 4. Any other input will panic.
#[inline(always)]
fn read_i32(bytes: &[u8]) -> i32 {
	i32::from_be_bytes(bytes.try_into().unwrap())
}

/// Read a big endian, signed 64-bit number from a byte array.
///
/// # Panics
/// This function must be called with a slice of length 8. Any other input will panic.
#[inline(always)]
fn read_i64(bytes: &[u8]) -> i64 {
	i64::from_be_bytes(bytes.try_into().unwrap())
}

/// An integral type for parsing timestamps
trait ParseType: Into<i64> {
	/// Read a big endian value from a byte array.
	///
	/// # Panics
	/// This function must be called with a slice of length `size_of::<Self>()`. Any other
	/// input will panic.
	fn read(bytes: &[u8]) -> Self;
}

impl ParseType for i32 {
	#[inline(always)]
	fn read(bytes: &[u8]) -> Self {
		read_i32(bytes)
	}
}

impl ParseType for i64 {
	#[inline(always)]
	fn read(bytes: &[u8]) -> Self {
		read_i64(bytes)
	}
}

/// Get a given index, if valid, or return [`TzFileError::TruncatedData`].
#[inline(always)]
fn get_or_truncated<I>(bytes: &[u8], index: I) -> Result<&I::Output, TzFileError>
where I: SliceIndex<[u8]> {
	bytes.get(index).ok_or(TzFileError::TruncatedData)
}

/// Header for a TZif data block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TzHeader {
	/// Version byte: 0 for version 1, b'2'..=b'4' for versions 2-4
	pub version: u8,
	/// Count of UT/local indicators
	pub isutcnt: u32,
	/// Count of standard/wall indicators
	pub isstdcnt: u32,
	/// Count of leap second records
	pub leapcnt: u32,
	/// Count of transition times
	pub timecnt: u32,
	/// Count of local time type records
	pub typecnt: u32,
	/// Number of bytes used for timezone designations
	pub charcnt: u32
}

impl TzHeader {
	/// Parse the six count fields of a TZif header.
	///
	/// `bytes` should begin at offset +20 of the real header, past the magic number, version
	/// byte, and reserved bytes.
	///
	/// # Errors
	///
	/// Returns [`TzFileError::TruncatedData`] if fewer than 24 bytes remain, or
	/// [`TzFileError::InconsistentCounts`] if the indicator counts are neither zero nor
	/// `typecnt`, or transitions exist without any local time types.
	fn parse(version: u8, bytes: &[u8]) -> Result<TzHeader, TzFileError> {
		let h = TzHeader {
			version,
			isutcnt: read_u32(get_or_truncated(bytes, 0..4)?),
			isstdcnt: read_u32(get_or_truncated(bytes, 4..8)?),
			leapcnt: read_u32(get_or_truncated(bytes, 8..12)?),
			timecnt: read_u32(get_or_truncated(bytes, 12..16)?),
			typecnt: read_u32(get_or_truncated(bytes, 16..20)?),
			charcnt: read_u32(get_or_truncated(bytes, 20..24)?)
		};
		if (h.isutcnt != 0 && h.isutcnt != h.typecnt)
			|| (h.isstdcnt != 0 && h.isstdcnt != h.typecnt)
			|| (h.typecnt == 0 && h.timecnt != 0) {
			return Err(TzFileError::InconsistentCounts);
		}
		Ok(h)
	}

	/// Length in bytes of the data block this header describes, with `T`-sized timestamps.
	fn block_len<T>(&self) -> u64 {
		let ts = size_of::<T>() as u64;
		self.timecnt as u64 * (ts + 1)
			+ self.typecnt as u64 * 6
			+ self.charcnt as u64
			+ self.leapcnt as u64 * (ts + 4)
			+ self.isstdcnt as u64
			+ self.isutcnt as u64
	}
}

/// A transition into a new local time type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
	/// Civil timestamp at which this transition takes effect
	pub at: i64,
	/// Index into [`TzFile::types`]
	pub type_index: u8
}

/// A local time type record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalTimeType {
	/// Seconds to add to UT to get local time
	pub utoff: i32,
	/// Whether this type is daylight savings time
	pub isdst: bool,
	/// Index of the first byte of this type's designation in [`TzFile::designations`]
	pub desig_index: u8
}

/// A leap second record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeapSecond {
	/// Civil timestamp at which the leap second occurs
	pub occurrence: i64,
	/// Cumulative UTC-TAI correction in effect from the occurrence onwards
	pub correction: i32
}

/// A fully decoded TZif file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TzFile {
	/// The header of the decoded data block (the second header for versions 2+)
	pub header: TzHeader,
	/// Transitions in strictly ascending order
	pub transitions: Box<[Transition]>,
	/// Local time type records
	pub types: Box<[LocalTimeType]>,
	/// NUL-terminated designation strings
	pub designations: Box<[u8]>,
	/// Leap second records in strictly ascending order
	pub leap_seconds: Box<[LeapSecond]>,
	/// Civil timestamp at which the leap second table expires, if the file declares one
	pub leap_expiration: Option<i64>,
	/// Standard (true) / wall (false) indicators, empty or one per time type
	pub std_wall: Box<[bool]>,
	/// UT (true) / local (false) indicators, empty or one per time type
	pub ut_local: Box<[bool]>,
	/// The footer TZ string, if present and non-empty
	pub spec: Option<TzString>
}

impl TzFile {
	/// The designation string for a given byte index.
	///
	/// Returns `None` if the index is out of range or the string is not valid UTF-8.
	pub fn designation(&self, index: u8) -> Option<&str> {
		let bytes = self.designations.get(index as usize..)?;
		let end = bytes.iter().position(|&b| b == 0)?;
		core::str::from_utf8(&bytes[..end]).ok()
	}

	/// Re-check every structural invariant [`parse_bytes`] enforces.
	///
	/// Always true for values produced by [`parse_bytes`]; useful for values assembled by
	/// hand.
	pub fn is_valid(&self) -> bool {
		let ascending = self.transitions.windows(2).all(|w| w[0].at < w[1].at);
		let indices = self.transitions.iter().all(|t| (t.type_index as usize) < self.types.len());
		let types = self.types.iter().all(|t| {
			t.utoff != i32::MIN && (t.desig_index as usize) < self.designations.len()
		});
		let designations = match self.designations.last() {
			Some(&last) => last == 0,
			None => self.types.is_empty()
		};
		let leaps = self.leap_seconds.windows(2).all(|w| {
			w[0].occurrence < w[1].occurrence
				&& (w[1].correction as i64 - w[0].correction as i64).abs() == 1
		}) && match self.leap_seconds.first() {
			Some(first) => first.correction.abs() == 1,
			None => true
		};
		let expiration = match (self.leap_expiration, self.leap_seconds.last()) {
			(Some(at), Some(last)) => at > last.occurrence,
			(Some(_), None) => false,
			(None, _) => true
		};
		let counts = (self.std_wall.is_empty() || self.std_wall.len() == self.types.len())
			&& (self.ut_local.is_empty() || self.ut_local.len() == self.types.len());
		let indicators = self.ut_local.iter().enumerate().all(|(i, &ut)| {
			!ut || self.std_wall.get(i).copied().unwrap_or(false)
		});
		ascending && indices && types && designations && leaps && expiration && counts
			&& indicators
	}
}

/// Decode 0/1 indicator bytes into booleans.
fn parse_indicators(bytes: &[u8], count: usize) -> Result<Box<[bool]>, TzFileError> {
	let raw = get_or_truncated(bytes, ..count)?;
	let mut out = Vec::with_capacity(count);
	for &b in raw {
		match b {
			0 => out.push(false),
			1 => out.push(true),
			_ => return Err(TzFileError::InvalidIndicator)
		}
	}
	Ok(out.into_boxed_slice())
}

/// Parse one TZif data block.
///
/// `bytes` should begin immediately after the block's header. `T` determines whether
/// timestamps are 4-byte (version 1) or 8-byte (versions 2+) signed integers; the only valid
/// types are `i32` and `i64`. `with_footer` requires and parses the newline-enclosed footer
/// after the block (versions 2+).
fn parse_block<T>(header: TzHeader, mut bytes: &[u8], with_footer: bool)
	-> Result<TzFile, TzFileError>
where T: ParseType
{
	let ts = size_of::<T>();
	let timecnt = header.timecnt as usize;
	let typecnt = header.typecnt as usize;
	let charcnt = header.charcnt as usize;
	let leapcnt = header.leapcnt as usize;

	// Transition times, normalized to civil timestamps
	let raw = get_or_truncated(bytes, ..timecnt * ts)?;
	let mut transitions: Vec<Transition> = Vec::with_capacity(timecnt);
	for c in raw.chunks_exact(ts) {
		let at = T::read(c).into().saturating_add(UNIX_EPOCH_SECONDS);
		if let Some(prev) = transitions.last() {
			if at <= prev.at {
				return Err(TzFileError::NonAscendingTransitions);
			}
		}
		transitions.push(Transition { at, type_index: 0 });
	}
	bytes = get_or_truncated(bytes, timecnt * ts..)?;

	// Transition time type indices (time -> type mapping)
	let indices = get_or_truncated(bytes, ..timecnt)?;
	for (t, &i) in transitions.iter_mut().zip(indices) {
		if i as usize >= typecnt {
			return Err(TzFileError::TypeIndexOutOfRange);
		}
		t.type_index = i;
	}
	bytes = get_or_truncated(bytes, timecnt..)?;

	// Local time type records
	let raw = get_or_truncated(bytes, ..typecnt * 6)?;
	let mut types = Vec::with_capacity(typecnt);
	for c in raw.chunks_exact(6) {
		let utoff = read_i32(&c[0..4]);
		if utoff == i32::MIN {
			return Err(TzFileError::InvalidTimeType);
		}
		if !UTOFF_RANGE.contains(&utoff) {
			warn!("TZif UT offset {} is outside the POSIX range", utoff);
		}
		let isdst = match c[4] {
			0 => false,
			1 => true,
			_ => return Err(TzFileError::InvalidTimeType)
		};
		if c[5] as usize >= charcnt {
			return Err(TzFileError::DesignationOutOfRange);
		}
		types.push(LocalTimeType { utoff, isdst, desig_index: c[5] });
	}
	bytes = get_or_truncated(bytes, typecnt * 6..)?;

	// Designations, NUL-terminated
	let designations = get_or_truncated(bytes, ..charcnt)?;
	if let Some(&last) = designations.last() {
		if last != 0 {
			return Err(TzFileError::DesignationOutOfRange);
		}
	}
	let designations: Box<[u8]> = designations.into();
	bytes = get_or_truncated(bytes, charcnt..)?;

	// Leap second records. The first correction must be +-1 and successive corrections
	// differ by exactly +-1, except that a repeated final correction marks the expiration
	// of the table (version 4).
	let raw = get_or_truncated(bytes, ..leapcnt * (ts + 4))?;
	let mut leap_seconds: Vec<LeapSecond> = Vec::with_capacity(leapcnt);
	let mut leap_expiration = None;
	for c in raw.chunks_exact(ts + 4) {
		let occurrence = T::read(&c[..ts]).into().saturating_add(UNIX_EPOCH_SECONDS);
		let correction = read_i32(&c[ts..]);
		match leap_seconds.last() {
			None => {
				if correction != 1 && correction != -1 {
					return Err(TzFileError::InvalidLeapSecond);
				}
			}
			Some(prev) => {
				if occurrence <= prev.occurrence || leap_expiration.is_some() {
					return Err(TzFileError::InvalidLeapSecond);
				}
				let delta = correction as i64 - prev.correction as i64;
				if delta == 0 {
					leap_expiration = Some(occurrence);
					continue;
				}
				if delta != 1 && delta != -1 {
					return Err(TzFileError::InvalidLeapSecond);
				}
			}
		}
		leap_seconds.push(LeapSecond { occurrence, correction });
	}
	bytes = get_or_truncated(bytes, leapcnt * (ts + 4)..)?;

	// Standard/wall and UT/local indicators. A UT indicator requires the corresponding
	// standard indicator.
	let std_wall = parse_indicators(bytes, header.isstdcnt as usize)?;
	bytes = get_or_truncated(bytes, header.isstdcnt as usize..)?;
	let ut_local = parse_indicators(bytes, header.isutcnt as usize)?;
	bytes = get_or_truncated(bytes, header.isutcnt as usize..)?;
	for (i, &ut) in ut_local.iter().enumerate() {
		if ut && !std_wall.get(i).copied().unwrap_or(false) {
			return Err(TzFileError::InvalidIndicator);
		}
	}

	// Footer TZ string, enclosed in newlines. An empty body means no footer rule.
	let spec = if with_footer {
		if bytes.first().copied() != Some(b'\n') {
			return Err(TzFileError::MissingFooter);
		}
		let (last, body) = get_or_truncated(bytes, 1..)?
			.split_last()
			.ok_or(TzFileError::MissingFooter)?;
		if *last != b'\n' {
			return Err(TzFileError::MissingFooter);
		}
		if body.is_empty() {
			None
		} else {
			Some(tzstring::parse(body)?)
		}
	} else {
		None
	};

	Ok(TzFile {
		header,
		transitions: transitions.into_boxed_slice(),
		types: types.into_boxed_slice(),
		designations,
		leap_seconds: leap_seconds.into_boxed_slice(),
		leap_expiration,
		std_wall,
		ut_local,
		spec
	})
}

/// Parse a byte slice containing a TZif file.
///
/// Version 1 data is decoded from the legacy 32-bit block. Versions 2-4 skip the legacy
/// block and decode the 64-bit block and its footer. A version byte this module does not
/// recognize is treated as the newest supported format, and a second header claiming the
/// legacy version is treated as extended; both are reported when the `logging` feature is
/// enabled.
///
/// # Errors
///
/// May return the following errors:
/// - [`TzFileError::NotATzFile`] if the data does not begin with the 'TZif' magic bytes
/// - [`TzFileError::TruncatedData`] if the data ends early
/// - [`TzFileError::InvalidTzString`] if the footer TZ string is malformed
/// - other [`TzFileError`] variants naming the structural rule that failed
pub fn parse_bytes(bytes: &[u8]) -> Result<TzFile, TzFileError> {
	if read_u32(get_or_truncated(bytes, 0..4)?) != MAGIC {
		return Err(TzFileError::NotATzFile);
	}
	let version = *get_or_truncated(bytes, 4)?;
	let counts = get_or_truncated(bytes, 20..)?;

	if version == 0 {
		let header = TzHeader::parse(version, counts)?;
		let body = get_or_truncated(counts, COUNTS_LEN..)?;
		return parse_block::<i32>(header, body, false);
	}
	let version = if (b'2'..=NEWEST_VERSION).contains(&version) {
		version
	} else {
		warn!("Unknown TZif version {:#04x}, decoding as the newest format", version);
		NEWEST_VERSION
	};

	// Skip the legacy block to the second header
	let first = TzHeader::parse(version, counts)?;
	let skip = usize::try_from(first.block_len::<i32>())
		.map_err(|_| TzFileError::TruncatedData)?;
	let second = get_or_truncated(get_or_truncated(bytes, HEADER_LEN..)?, skip..)?;
	if read_u32(get_or_truncated(second, 0..4)?) != MAGIC {
		return Err(TzFileError::NotATzFile);
	}
	let version = match *get_or_truncated(second, 4)? {
		0 => {
			warn!("TZif second header claims the legacy version, decoding as extended");
			version
		}
		v => v
	};
	let counts = get_or_truncated(second, 20..)?;
	let header = TzHeader::parse(version, counts)?;
	let body = get_or_truncated(counts, COUNTS_LEN..)?;
	parse_block::<i64>(header, body, true)
}

/// Parse a TZif file.
///
/// # Errors
///
/// Returns [`TzFileError::FileReadError`] if the file could not be read, or any error
/// [`parse_bytes`] returns.
///
/// # Examples
///
/// ```no_run
/// # use civiltime::tz::tzfile::parse_file;
/// let tzfile = parse_file("/usr/share/zoneinfo/America/Los_Angeles").unwrap();
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub fn parse_file<P>(file: P) -> Result<TzFile, TzFileError>
where
	P: AsRef<Path>
{
	let bytes = fs::read(file)?;
	parse_bytes(bytes.as_slice())
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloc::vec;

	fn header(version: u8, isutcnt: u32, isstdcnt: u32, leapcnt: u32, timecnt: u32,
	          typecnt: u32, charcnt: u32) -> Vec<u8> {
		let mut v = Vec::new();
		v.extend_from_slice(b"TZif");
		v.push(version);
		v.extend_from_slice(&[0; 15]);
		for c in [isutcnt, isstdcnt, leapcnt, timecnt, typecnt, charcnt] {
			v.extend_from_slice(&c.to_be_bytes());
		}
		v
	}

	/// Assemble an extended file with an empty legacy block. Transitions and leap second
	/// occurrences are given in Unix seconds; the footer is wrapped in newlines.
	fn v2_file(version: u8, transitions: &[(i64, u8)], types: &[(i32, u8, u8)],
	           desig: &[u8], leaps: &[(i64, i32)], std_wall: &[u8], ut_local: &[u8],
	           footer: &[u8]) -> Vec<u8> {
		let mut v = header(version, 0, 0, 0, 0, 0, 0);
		v.extend_from_slice(&header(version, ut_local.len() as u32, std_wall.len() as u32,
		                            leaps.len() as u32, transitions.len() as u32,
		                            types.len() as u32, desig.len() as u32));
		for &(t, _) in transitions {
			v.extend_from_slice(&t.to_be_bytes());
		}
		for &(_, i) in transitions {
			v.push(i);
		}
		for &(utoff, isdst, di) in types {
			v.extend_from_slice(&utoff.to_be_bytes());
			v.push(isdst);
			v.push(di);
		}
		v.extend_from_slice(desig);
		for &(at, corr) in leaps {
			v.extend_from_slice(&at.to_be_bytes());
			v.extend_from_slice(&corr.to_be_bytes());
		}
		v.extend_from_slice(std_wall);
		v.extend_from_slice(ut_local);
		v.push(b'\n');
		v.extend_from_slice(footer);
		v.push(b'\n');
		v
	}

	#[test]
	fn parse_v1() {
		let mut v = header(0, 0, 0, 0, 1, 1, 4);
		v.extend_from_slice(&0i32.to_be_bytes());
		v.push(0);
		v.extend_from_slice(&(-18000i32).to_be_bytes());
		v.push(0);
		v.push(0);
		v.extend_from_slice(b"LMT\0");
		let f = parse_bytes(&v).unwrap();
		assert_eq!(f.header.version, 0);
		assert_eq!(&*f.transitions, &[Transition { at: UNIX_EPOCH_SECONDS, type_index: 0 }]);
		assert_eq!(&*f.types, &[LocalTimeType { utoff: -18000, isdst: false, desig_index: 0 }]);
		assert_eq!(f.designation(0), Some("LMT"));
		assert_eq!(f.spec, None);
		assert!(f.is_valid());
	}

	#[test]
	fn parse_v2() {
		let v = v2_file(b'2',
		                &[(1710054000, 1), (1730613600, 0)],
		                &[(-18000, 0, 0), (-14400, 1, 4)],
		                b"EST\0EDT\0",
		                &[], &[1, 1], &[1, 1],
		                b"EST5EDT,M3.2.0,M11.1.0");
		let f = parse_bytes(&v).unwrap();
		assert_eq!(f.header.version, b'2');
		assert_eq!(&*f.transitions, &[
			Transition { at: 1710054000 + UNIX_EPOCH_SECONDS, type_index: 1 },
			Transition { at: 1730613600 + UNIX_EPOCH_SECONDS, type_index: 0 }
		]);
		assert_eq!(f.types[1], LocalTimeType { utoff: -14400, isdst: true, desig_index: 4 });
		assert_eq!(f.designation(4), Some("EDT"));
		assert_eq!(&*f.std_wall, &[true, true]);
		assert_eq!(&*f.ut_local, &[true, true]);
		let spec = f.spec.unwrap();
		assert_eq!(spec.std.offset, 18000);
		assert!(spec.rule.is_some());
		assert!(f.is_valid());
	}

	#[test]
	fn parse_empty_footer() {
		let v = v2_file(b'3', &[], &[(0, 0, 0)], b"UTC\0", &[], &[], &[], b"");
		let f = parse_bytes(&v).unwrap();
		assert_eq!(f.spec, None);
		assert_eq!(f.designation(0), Some("UTC"));
	}

	#[test]
	fn parse_unknown_versions() {
		// An unknown version byte decodes as the newest format
		let v = v2_file(b'9', &[], &[(3600, 0, 0)], b"CET\0", &[], &[], &[], b"CET-1");
		let f = parse_bytes(&v).unwrap();
		assert_eq!(f.types[0].utoff, 3600);
		assert_eq!(f.spec.unwrap().std.offset, -3600);

		// A second header claiming the legacy version decodes as extended
		let mut v = header(b'2', 0, 0, 0, 0, 0, 0);
		v.extend_from_slice(&v2_file(0, &[], &[(3600, 0, 0)], b"CET\0", &[], &[], &[], b"")[44..]);
		let f = parse_bytes(&v).unwrap();
		assert_eq!(f.header.version, b'2');
		assert_eq!(f.types[0].utoff, 3600);
	}

	#[test]
	fn parse_leap_seconds() {
		let leaps = [(78796800i64, 1), (94694400, 2), (126230400, 3)];
		let v = v2_file(b'4', &[], &[(0, 0, 0)], b"UTC\0", &leaps, &[], &[], b"");
		let f = parse_bytes(&v).unwrap();
		assert_eq!(f.leap_seconds.len(), 3);
		assert_eq!(f.leap_seconds[0], LeapSecond {
			occurrence: 78796800 + UNIX_EPOCH_SECONDS,
			correction: 1
		});
		assert_eq!(f.leap_expiration, None);
		assert!(f.is_valid());

		// A repeated final correction marks the table expiration
		let leaps = [(78796800i64, 1), (94694400, 2), (1735689600, 2)];
		let v = v2_file(b'4', &[], &[(0, 0, 0)], b"UTC\0", &leaps, &[], &[], b"");
		let f = parse_bytes(&v).unwrap();
		assert_eq!(f.leap_seconds.len(), 2);
		assert_eq!(f.leap_expiration, Some(1735689600 + UNIX_EPOCH_SECONDS));
		assert!(f.is_valid());
	}

	#[test]
	fn parse_bad_leap_seconds() {
		let bad = [
			// First correction must be +-1
			vec![(78796800i64, 2)],
			vec![(78796800, 0)],
			// Occurrences must be strictly ascending
			vec![(94694400, 1), (78796800, 2)],
			vec![(78796800, 1), (78796800, 2)],
			// Corrections must differ by exactly +-1
			vec![(78796800, 1), (94694400, 3)],
			// Nothing may follow the expiration record
			vec![(78796800, 1), (94694400, 1), (126230400, 2)]
		];
		for leaps in &bad {
			let v = v2_file(b'4', &[], &[(0, 0, 0)], b"UTC\0", leaps, &[], &[], b"");
			assert_eq!(parse_bytes(&v), Err(TzFileError::InvalidLeapSecond));
		}
	}

	#[test]
	fn parse_bad_data() {
		assert_eq!(parse_bytes(b""), Err(TzFileError::TruncatedData));
		assert_eq!(parse_bytes(b"GZif"), Err(TzFileError::NotATzFile));
		assert_eq!(parse_bytes(b"TZif2"), Err(TzFileError::TruncatedData));
		assert_eq!(parse_bytes(&header(0, 0, 0, 0, 1, 1, 4)), Err(TzFileError::TruncatedData));

		// Extended data with garbage where the second header should be
		let mut v = header(b'2', 0, 0, 0, 0, 0, 0);
		v.extend_from_slice(&[0; 44]);
		assert_eq!(parse_bytes(&v), Err(TzFileError::NotATzFile));

		// Missing or malformed footer
		let mut v = v2_file(b'2', &[], &[(0, 0, 0)], b"UTC\0", &[], &[], &[], b"");
		v.truncate(v.len() - 2);
		assert_eq!(parse_bytes(&v), Err(TzFileError::MissingFooter));
		let mut v = v2_file(b'2', &[], &[(0, 0, 0)], b"UTC\0", &[], &[], &[], b"");
		v.pop();
		assert_eq!(parse_bytes(&v), Err(TzFileError::MissingFooter));
		let v = v2_file(b'2', &[], &[(0, 0, 0)], b"UTC\0", &[], &[], &[], b"not a tz");
		assert!(matches!(parse_bytes(&v), Err(TzFileError::InvalidTzString(_))));
	}

	#[test]
	fn parse_bad_structures() {
		// Non-ascending transitions
		let v = v2_file(b'2', &[(100, 0), (100, 0)], &[(0, 0, 0)], b"UTC\0",
		                &[], &[], &[], b"");
		assert_eq!(parse_bytes(&v), Err(TzFileError::NonAscendingTransitions));
		let v = v2_file(b'2', &[(100, 0), (50, 0)], &[(0, 0, 0)], b"UTC\0",
		                &[], &[], &[], b"");
		assert_eq!(parse_bytes(&v), Err(TzFileError::NonAscendingTransitions));

		// Type index out of range
		let v = v2_file(b'2', &[(100, 1)], &[(0, 0, 0)], b"UTC\0", &[], &[], &[], b"");
		assert_eq!(parse_bytes(&v), Err(TzFileError::TypeIndexOutOfRange));

		// Invalid time types
		let v = v2_file(b'2', &[], &[(i32::MIN, 0, 0)], b"UTC\0", &[], &[], &[], b"");
		assert_eq!(parse_bytes(&v), Err(TzFileError::InvalidTimeType));
		let v = v2_file(b'2', &[], &[(0, 2, 0)], b"UTC\0", &[], &[], &[], b"");
		assert_eq!(parse_bytes(&v), Err(TzFileError::InvalidTimeType));

		// Designation problems
		let v = v2_file(b'2', &[], &[(0, 0, 4)], b"UTC\0", &[], &[], &[], b"");
		assert_eq!(parse_bytes(&v), Err(TzFileError::DesignationOutOfRange));
		let v = v2_file(b'2', &[], &[(0, 0, 0)], b"UTC!", &[], &[], &[], b"");
		assert_eq!(parse_bytes(&v), Err(TzFileError::DesignationOutOfRange));

		// Indicator problems
		let v = v2_file(b'2', &[], &[(0, 0, 0)], b"UTC\0", &[], &[2], &[], b"");
		assert_eq!(parse_bytes(&v), Err(TzFileError::InvalidIndicator));
		let v = v2_file(b'2', &[], &[(0, 0, 0)], b"UTC\0", &[], &[0], &[1], b"");
		assert_eq!(parse_bytes(&v), Err(TzFileError::InvalidIndicator));

		// Indicator counts must be zero or typecnt
		let v = v2_file(b'2', &[], &[(0, 0, 0), (3600, 1, 0)], b"UTC\0", &[], &[1], &[], b"");
		assert_eq!(parse_bytes(&v), Err(TzFileError::InconsistentCounts));

		// Transitions without any time types
		let mut v = header(b'2', 0, 0, 0, 0, 0, 0);
		v.extend_from_slice(&header(b'2', 0, 0, 0, 1, 0, 0));
		v.extend_from_slice(&100i64.to_be_bytes());
		v.push(0);
		v.extend_from_slice(b"\n\n");
		assert_eq!(parse_bytes(&v), Err(TzFileError::InconsistentCounts));
	}

	#[cfg(feature = "std")]
	#[test]
	fn parse_missing_file() {
		assert!(matches!(parse_file("/definitely/not/a/real/file"),
		                 Err(TzFileError::FileReadError(_))));
	}
}

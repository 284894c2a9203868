//! Utilities for civil (calendar) time and timezones.
//!
//! This crate is divided into two halves: [`date`] deals with converting between civil
//! timestamps (seconds since 0000-01-01 00:00:00) and calendar fields, with no understanding
//! of timezones; [`tz`] deals with parsing and using timezones, and adds support for
//! converting civil UTC timestamps into any arbitrary timezone's calendar time.
//!
//! By default, this crate supports `no_std` for calendar math and [TZ string] based
//! timezones. If [`alloc`] is available and the `alloc` feature is enabled, the [`tz`] module
//! also enables parsing TZif binary data ([`tz::tzfile::parse_bytes`]) and timezone discovery
//! ([`tz::discover`]). Additionally, if [`std`] is available and the `std` feature is
//! enabled, the [`tz`] module enables helpers to parse TZif files directly
//! ([`tz::tzfile::parse_file`]) and to resolve the system timezone ([`tz::system`]).
//!
//! If the `now` feature is enabled, the [`date`] module enables a helper function to get the
//! current time ([`date::now`]). If the `logging` feature is enabled, recoverable oddities
//! found while decoding timezone data are reported through the [`log`] crate.
//!
//! [TZ string]: https://www.gnu.org/software/libc/manual/html_node/TZ-Variable.html
//!
//! # Examples
//!
//! Basic conversion from Unix time to UTC calendar time.
//! ```
//! # use civiltime::DateTime;
//! let date = DateTime::from_unix(1718617807).unwrap();
//! assert_eq!(date.to_string(), "2024-06-17T09:50:07");
//! ```
//!
//! Conversion to US Eastern calendar time.
//! ```
//! # use civiltime::tz::{parse_tzstring, Timezone};
//! let timezone = Timezone::Posix(parse_tzstring(b"EST5EDT4,M3.2.0,M11.1.0").unwrap());
//! let date = timezone.localize(62167219200 + 1723433665).unwrap();
//! assert_eq!(date.to_string(), "2024-08-11T23:34:25");
//! ```

#![no_std]
// only enables the `doc_cfg` feature when
// the `docsrs` configuration attribute is defined
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

#[macro_use]
mod logging;

pub mod date;
pub mod tz;

pub use date::*;

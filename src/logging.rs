// Shims over the `log` crate so call sites can emit diagnostics unconditionally.
// Without the `logging` feature the arguments are still borrowed, keeping the
// call sites warning-free, but nothing is emitted.
#![allow(unused_macros)]

macro_rules! warn {
	($($tt:tt)*) => {{
		#[cfg(feature = "logging")]
		{ log::warn!($($tt)*); }
		#[cfg(not(feature = "logging"))]
		{ _ = core::format_args!($($tt)*); }
	}}
}

macro_rules! debug {
	($($tt:tt)*) => {{
		#[cfg(feature = "logging")]
		{ log::debug!($($tt)*); }
		#[cfg(not(feature = "logging"))]
		{ _ = core::format_args!($($tt)*); }
	}}
}

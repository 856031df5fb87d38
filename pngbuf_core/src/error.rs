/*!
# `PngBuf` - Error
*/

use std::{
	error::Error,
	fmt,
};



#[cfg(feature = "bin")]
/// # Help Text.
const HELP: &str = concat!(r"
   ,--.     ", "\x1b[38;5;199mpngbuf\x1b[0;38;5;69m v", env!("CARGO_PKG_VERSION"), "\x1b[0m", r"
  ( ARGB )  Load PNG images into premultiplied
   `--'     ARGB32 buffers.

USAGE:
    pngbuf [FLAGS] <PATH(S)>...

FLAGS:
    -h, --help        Print help information and exit.
    -v, --verbose     Log which normalization branch each image took.
    -V, --version     Print version information and exit.

TRAILING ARGS:
    <PATH(S)>...      One or more PNG files to load.
");



#[derive(Debug, Copy, Clone, Eq, PartialEq)]
/// # Errors.
pub enum PngError {
	/// # Decoding failed.
	Decode,

	/// # No file name.
	Empty,

	/// # Image dimensions are out of range.
	Overflow,

	/// # I/O read error.
	Read,

	/// # Not a PNG.
	Signature,

	#[cfg(feature = "bin")]
	/// # Nothing Loaded.
	NoImages,

	#[cfg(feature = "bin")]
	/// # Print Help (Not an Error).
	PrintHelp,

	#[cfg(feature = "bin")]
	/// # Print Version (Not an Error).
	PrintVersion,
}

impl Error for PngError {}

impl AsRef<str> for PngError {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for PngError {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl PngError {
	#[must_use]
	/// # As Str.
	///
	/// Return the error as an English string slice.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Decode => "The image could not be decoded.",
			Self::Empty => "No file was specified.",
			Self::Overflow => "The image dimensions are out of range.",
			Self::Read => "Unable to read the source file.",
			Self::Signature => "The file is not a recognised PNG.",

			#[cfg(feature = "bin")]
			Self::NoImages => "No images were loaded.",
			#[cfg(feature = "bin")]
			Self::PrintHelp => HELP,
			#[cfg(feature = "bin")]
			Self::PrintVersion => concat!("pngbuf v", env!("CARGO_PKG_VERSION")),
		}
	}

	#[must_use]
	/// # Is Silent?
	///
	/// Returns `true` for errors that [`load`](crate::load) swallows without
	/// logging anything: a missing file name, or a file that could not be
	/// opened or was too short to sniff.
	pub const fn is_silent(self) -> bool {
		matches!(self, Self::Empty | Self::Read)
	}
}

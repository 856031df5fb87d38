/*!
# `PngBuf` - Pixel Format
*/

use std::fmt;



#[derive(Debug, Copy, Clone, Eq, PartialEq)]
/// # Pixel Format.
///
/// Both formats use four bytes per pixel, stored `[B, G, R, A, B, G, R, A…]`,
/// i.e. each pixel is a little-endian `0xAARRGGBB` word.
///
/// [`ImageBuffer`](crate::ImageBuffer)s are always [`PixelFormat::Argb32`].
/// Decoded [`Surface`](crate::Surface)s can be either.
pub enum PixelFormat {
	/// # ARGB (Premultiplied).
	Argb32,

	/// # RGB.
	///
	/// The alpha byte is unused; every pixel is treated as opaque.
	Rgb24,
}

impl AsRef<str> for PixelFormat {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for PixelFormat {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl PixelFormat {
	#[must_use]
	/// # As Str.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Argb32 => "ARGB32",
			Self::Rgb24 => "RGB24",
		}
	}

	#[must_use]
	/// # Bytes Per Pixel.
	pub const fn bytes_per_pixel(self) -> usize { 4 }

	#[must_use]
	/// # Has Alpha?
	pub const fn has_alpha(self) -> bool { matches!(self, Self::Argb32) }
}

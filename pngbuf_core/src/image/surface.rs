/*!
# `PngBuf` - Surface
*/

use crate::{
	PixelFormat,
	PngError,
};
use imgref::{
	ImgRef,
	ImgVec,
};
use rgb::alt::BGRA8;
use std::fmt;
use super::alpha;



#[derive(Clone)]
/// # Decoded Surface.
///
/// This holds freshly decoded pixels in whatever [`PixelFormat`] best suits
/// the source. Pixels start out with straight alpha; [`Surface::flush`]
/// finalizes them (premultiplying [`PixelFormat::Argb32`] data) so they can
/// be adopted by or painted onto an [`ImageBuffer`](crate::ImageBuffer).
pub struct Surface {
	/// # Pixels.
	img: ImgVec<BGRA8>,

	/// # Format.
	format: PixelFormat,

	/// # Flushed?
	flushed: bool,
}

impl fmt::Debug for Surface {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Surface")
		.field("width", &self.width())
		.field("height", &self.height())
		.field("format", &self.format)
		.field("flushed", &self.flushed)
		.finish()
	}
}

impl Surface {
	/// # New.
	///
	/// Wrap a contiguous, straight-alpha pixel buffer.
	///
	/// ## Errors
	///
	/// This will return an error if either dimension is zero, too big, or
	/// does not match the length of the buffer.
	pub fn new(buf: Vec<BGRA8>, width: usize, height: usize, format: PixelFormat)
	-> Result<Self, PngError> {
		if
			width == 0 ||
			height == 0 ||
			u32::try_from(width).is_err() ||
			u32::try_from(height).is_err() ||
			width.checked_mul(height) != Some(buf.len())
		{
			return Err(PngError::Overflow);
		}

		Ok(Self {
			img: ImgVec::new(buf, width, height),
			format,
			flushed: false,
		})
	}

	/// # Flush.
	///
	/// Finalize the pixel data. For [`PixelFormat::Argb32`] this premultiplies
	/// the color channels; for [`PixelFormat::Rgb24`] there is nothing to do.
	///
	/// Calling this more than once is harmless.
	pub fn flush(&mut self) {
		if ! self.flushed {
			if self.format.has_alpha() {
				alpha::premultiply_slice(self.img.buf_mut());
			}
			self.flushed = true;
		}
	}
}

/// ## Getters.
impl Surface {
	#[inline]
	#[must_use]
	/// # Format.
	pub const fn format(&self) -> PixelFormat { self.format }

	#[inline]
	#[must_use]
	/// # Height.
	pub fn height(&self) -> usize { self.img.height() }

	#[inline]
	#[must_use]
	/// # Is Flushed?
	pub const fn is_flushed(&self) -> bool { self.flushed }

	#[inline]
	#[must_use]
	/// # Width.
	pub fn width(&self) -> usize { self.img.width() }

	#[inline]
	#[must_use]
	/// # Image.
	pub(crate) fn img(&self) -> ImgRef<'_, BGRA8> { self.img.as_ref() }

	#[inline]
	#[must_use]
	/// # Into Image.
	///
	/// Consume the surface, returning its pixels without copying them.
	pub(crate) fn into_img(self) -> ImgVec<BGRA8> { self.img }
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_new() {
		let px = BGRA8 { b: 0, g: 0, r: 0, a: 0 };
		assert!(Surface::new(vec![px; 6], 3, 2, PixelFormat::Rgb24).is_ok());
		assert_eq!(
			Surface::new(vec![px; 5], 3, 2, PixelFormat::Rgb24).unwrap_err(),
			PngError::Overflow,
		);
		assert_eq!(
			Surface::new(Vec::new(), 0, 2, PixelFormat::Rgb24).unwrap_err(),
			PngError::Overflow,
		);
	}

	#[test]
	fn t_flush() {
		let buf = vec![
			BGRA8 { b: 255, g: 255, r: 255, a: 128 },
			BGRA8 { b: 10, g: 20, r: 30, a: 255 },
		];

		// ARGB gets premultiplied, once.
		let mut surface = Surface::new(buf.clone(), 2, 1, PixelFormat::Argb32)
			.expect("Surface failed.");
		assert!(! surface.is_flushed());
		surface.flush();
		surface.flush();
		assert!(surface.is_flushed());
		assert_eq!(surface.img().buf()[0], BGRA8 { b: 128, g: 128, r: 128, a: 128 });
		assert_eq!(surface.img().buf()[1], buf[1]);

		// RGB is left alone.
		let mut surface = Surface::new(buf.clone(), 2, 1, PixelFormat::Rgb24)
			.expect("Surface failed.");
		surface.flush();
		assert!(surface.is_flushed());
		assert_eq!(surface.into_img().into_buf(), buf);
	}
}

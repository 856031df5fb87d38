/*!
# `PngBuf` - Image Buffer
*/

mod alpha;
pub(super) mod pixel;
pub(super) mod surface;

use crate::{
	decode::LodePng,
	PixelFormat,
	PngError,
	Surface,
};
use imgref::{
	ImgRef,
	ImgVec,
};
use rgb::alt::BGRA8;
use std::{
	fmt,
	path::Path,
};



/// # Transparent Pixel.
const TRANSPARENT: BGRA8 = BGRA8 { b: 0, g: 0, r: 0, a: 0 };



#[derive(Clone)]
/// # Image Buffer.
///
/// This holds a fully decoded image as premultiplied [`PixelFormat::Argb32`]
/// pixels, ready for compositing.
///
/// Buffers come from a path via `TryFrom<&Path>` (or, more forgivingly,
/// [`load`](crate::load)), from a flushed ARGB [`Surface`] via
/// [`ImageBuffer::adopt`], or blank via [`ImageBuffer::new`] (in which case
/// [`ImageBuffer::paint`] can be used to draw into it).
///
/// Dropping the buffer releases its memory.
///
/// ## Examples
///
/// ```no_run
/// use pngbuf_core::ImageBuffer;
/// use std::path::Path;
///
/// let img = ImageBuffer::try_from(Path::new("/path/to/button.png")).unwrap();
/// assert!(img.width() > 0);
/// ```
pub struct ImageBuffer {
	/// # Pixels.
	img: ImgVec<BGRA8>,
}

impl fmt::Debug for ImageBuffer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ImageBuffer")
		.field("width", &self.width())
		.field("height", &self.height())
		.field("format", &self.format())
		.finish()
	}
}

impl TryFrom<&Path> for ImageBuffer {
	type Error = PngError;

	#[inline]
	/// # Try From Path.
	///
	/// Sniff, decode, and normalize the PNG at `path`.
	///
	/// ## Errors
	///
	/// See [`PngError`] for the various failure modes. Unlike
	/// [`load`](crate::load), nothing is logged.
	fn try_from(path: &Path) -> Result<Self, Self::Error> {
		crate::load::try_load::<LodePng>(path)
	}
}

/// ## Instantiation.
impl ImageBuffer {
	/// # New (Transparent).
	///
	/// Allocate a new buffer with every pixel fully transparent.
	///
	/// ## Errors
	///
	/// This will return an error if either dimension is zero or the buffer
	/// would be too large to allocate.
	pub fn new(width: usize, height: usize) -> Result<Self, PngError> {
		if
			width == 0 ||
			height == 0 ||
			u32::try_from(width).is_err() ||
			u32::try_from(height).is_err()
		{
			return Err(PngError::Overflow);
		}

		let len = width.checked_mul(height).ok_or(PngError::Overflow)?;
		let mut buf = Vec::new();
		buf.try_reserve_exact(len).map_err(|_| PngError::Overflow)?;
		buf.resize(len, TRANSPARENT);

		Ok(Self { img: ImgVec::new(buf, width, height) })
	}

	/// # Adopt Surface.
	///
	/// Wrap an ARGB surface's pixels directly, without copying them. The
	/// surface is flushed first if it hasn't been already.
	///
	/// ## Errors
	///
	/// If the surface is not [`PixelFormat::Argb32`], it is handed back
	/// unchanged so it can be painted onto a new buffer instead.
	pub fn adopt(mut surface: Surface) -> Result<Self, Surface> {
		if surface.format() != PixelFormat::Argb32 { return Err(surface); }
		surface.flush();
		Ok(Self { img: surface.into_img() })
	}
}

/// ## Drawing.
impl ImageBuffer {
	/// # Paint.
	///
	/// Composite `src` over this buffer with its top-left corner at `(x, y)`.
	/// Anything falling outside the buffer is clipped.
	///
	/// [`PixelFormat::Rgb24`] sources are opaque, so simply replace what was
	/// there. [`PixelFormat::Argb32`] sources are blended; if the source has
	/// not been flushed, its pixels are premultiplied on the fly.
	pub fn paint(&mut self, src: &Surface, x: isize, y: isize) {
		let Some((dst_x, src_x, width)) = span(x, self.width(), src.width())
		else { return; };
		let Some((dst_y, src_y, height)) = span(y, self.height(), src.height())
		else { return; };

		let format = src.format();
		let flushed = src.is_flushed();
		let src = src.img();
		let src_stride = src.stride();
		let src_buf = src.buf();
		let dst_stride = self.img.stride();
		let dst_buf = self.img.buf_mut();

		for row in 0..height {
			let s = (src_y + row) * src_stride + src_x;
			let d = (dst_y + row) * dst_stride + dst_x;
			let src_row = &src_buf[s..s + width];
			let dst_row = &mut dst_buf[d..d + width];

			match format {
				PixelFormat::Rgb24 => {
					for (dp, sp) in dst_row.iter_mut().zip(src_row) {
						*dp = BGRA8 { a: 255, ..*sp };
					}
				},
				PixelFormat::Argb32 => {
					for (dp, &sp) in dst_row.iter_mut().zip(src_row) {
						let sp =
							if flushed { sp }
							else { alpha::premultiply(sp) };
						*dp = alpha::over(*dp, sp);
					}
				},
			}
		}
	}
}

/// ## Getters.
impl ImageBuffer {
	#[inline]
	#[must_use]
	/// # As Bytes.
	///
	/// Return the pixels as a flat byte slice, `[B, G, R, A, B, G, R, A…]`.
	pub fn as_bytes(&self) -> &[u8] { bytemuck::cast_slice(self.pixels()) }

	#[inline]
	#[must_use]
	/// # Format.
	///
	/// This is always [`PixelFormat::Argb32`].
	pub const fn format(&self) -> PixelFormat { PixelFormat::Argb32 }

	#[inline]
	#[must_use]
	/// # Height.
	pub fn height(&self) -> usize { self.img.height() }

	#[inline]
	#[must_use]
	/// # Image.
	///
	/// Borrow the pixels as an [`ImgRef`].
	pub fn img(&self) -> ImgRef<'_, BGRA8> { self.img.as_ref() }

	#[must_use]
	/// # Pixel.
	///
	/// Return the pixel at `(x, y)` as a `0xAARRGGBB` word, or `None` if the
	/// coordinates are out of range.
	pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
		if x < self.width() && y < self.height() {
			let px = self.pixels()[y * self.img.stride() + x];
			Some(u32::from_le_bytes([px.b, px.g, px.r, px.a]))
		}
		else { None }
	}

	#[inline]
	#[must_use]
	/// # Pixels.
	pub fn pixels(&self) -> &[BGRA8] { self.img.buf() }

	#[inline]
	#[must_use]
	/// # Stride.
	///
	/// The number of bytes per row.
	pub fn stride(&self) -> usize {
		self.img.stride() * self.format().bytes_per_pixel()
	}

	#[inline]
	#[must_use]
	/// # Take Pixels.
	///
	/// Consume the instance, stealing the pixels as an owned buffer.
	pub fn take_pixels(self) -> Vec<BGRA8> { self.img.into_buf() }

	#[inline]
	#[must_use]
	/// # Width.
	pub fn width(&self) -> usize { self.img.width() }
}



/// # Clipped Span.
///
/// Work out where a source of length `src` placed at `offset` lands within a
/// destination of length `dst`. Returns the destination start, source start,
/// and overlapping length, or `None` if nothing overlaps.
fn span(offset: isize, dst: usize, src: usize) -> Option<(usize, usize, usize)> {
	let (dst_start, src_start) =
		if offset < 0 { (0, offset.unsigned_abs()) }
		else { (offset.unsigned_abs(), 0) };

	let len = dst.checked_sub(dst_start)?.min(src.checked_sub(src_start)?);
	if len == 0 { None }
	else { Some((dst_start, src_start, len)) }
}

/*!
# `PngBuf` - Decoding
*/

use crate::{
	PixelFormat,
	PngError,
	Surface,
};
use rgb::alt::BGRA8;
use std::path::Path;



/// # Decoder.
///
/// This is implemented for anything capable of turning a PNG file into a
/// [`Surface`].
pub(crate) trait Decoder {
	/// # Decode.
	///
	/// Decode the file at `path` into a (not yet flushed) surface.
	///
	/// ## Errors
	///
	/// Return any errors encountered during decoding.
	fn decode(path: &Path) -> Result<Surface, PngError>;
}



/// # `lodepng` Decoder.
pub(crate) struct LodePng;

impl Decoder for LodePng {
	fn decode(path: &Path) -> Result<Surface, PngError> {
		let raw = std::fs::read(path).map_err(|_| PngError::Decode)?;

		// The raw output mode defaults to 8-bit RGBA, so greyscale, palette,
		// RGB, and 16-bit sources all get expanded/reduced to that.
		let mut decoder = lodepng::Decoder::new();
		let lodepng::Image::RGBA(bitmap) = decoder.decode(&raw)
			.map_err(|_| PngError::Decode)?
		else { return Err(PngError::Decode); };

		// Only sources that can actually carry alpha need ARGB treatment.
		let format =
			if decoder.info_png().color.can_have_alpha() { PixelFormat::Argb32 }
			else { PixelFormat::Rgb24 };

		// Make sure the buffer was actually filled to the right size.
		let lodepng::Bitmap { buffer, width, height, .. } = bitmap;
		if width.checked_mul(height) != Some(buffer.len()) {
			return Err(PngError::Overflow);
		}

		// RGBA8 and BGRA8 share a size and alignment, so this just relabels
		// the allocation; the red and blue channels then need swapping.
		let mut buffer: Vec<BGRA8> = bytemuck::allocation::try_cast_vec(buffer)
			.map_err(|_| PngError::Decode)?;
		for px in &mut buffer { std::mem::swap(&mut px.r, &mut px.b); }

		Surface::new(buffer, width, height, format)
	}
}

/*!
# `PngBuf` - Load
*/

use crate::{
	decode::{
		Decoder,
		LodePng,
	},
	ImageBuffer,
	PngError,
	signature,
};
use log::{
	debug,
	error,
	warn,
};
use std::path::Path;



/// # Load PNG.
///
/// Replace the contents of `buffer` with the PNG found at `filename`.
///
/// Whatever `buffer` held going in is dropped first, unconditionally, so
/// after this returns it is either `None` or a freshly decoded
/// [`PixelFormat::Argb32`](crate::PixelFormat::Argb32) image, never stale.
///
/// Failures are not returned; an empty buffer is the signal. A missing or
/// empty file name, or a file that cannot be opened or is shorter than four
/// bytes, is skipped silently. A file that does not start like a PNG is
/// logged as a warning, and one that fails to decode is logged as an error.
/// Use `ImageBuffer::try_from` instead to get the reason back.
///
/// ## Examples
///
/// ```no_run
/// use std::path::Path;
///
/// let mut buffer = None;
/// pngbuf_core::load(Some(Path::new("/path/to/close.png")), &mut buffer);
/// if let Some(img) = buffer.as_ref() {
///     println!("{}x{}", img.width(), img.height());
/// }
/// ```
pub fn load(filename: Option<&Path>, buffer: &mut Option<ImageBuffer>) {
	load_with::<LodePng>(filename, buffer);
}

/// # Load PNG (Using Decoder).
///
/// This is the actual [`load`], generic over the decoder.
pub(crate) fn load_with<D: Decoder>(filename: Option<&Path>, buffer: &mut Option<ImageBuffer>) {
	drop(buffer.take());

	let Some(path) = filename else { return; };
	match try_load::<D>(path) {
		Ok(img) => { *buffer = Some(img); },
		Err(PngError::Signature) => {
			warn!("file '{}' is not a recognised png file", path.display());
		},
		Err(e) if e.is_silent() => {},
		Err(e) => {
			error!("error reading png file '{}': {e}", path.display());
		},
	}
}

/// # Try Load.
///
/// Sniff, decode, flush, and normalize.
///
/// ## Errors
///
/// Returns [`PngError::Empty`] for an empty path, and passes through any
/// signature, decoding, or allocation errors.
pub(crate) fn try_load<D: Decoder>(path: &Path) -> Result<ImageBuffer, PngError> {
	if path.as_os_str().is_empty() { return Err(PngError::Empty); }

	signature::check(path)?;
	let mut surface = D::decode(path)?;
	surface.flush();

	match ImageBuffer::adopt(surface) {
		Ok(img) => {
			debug!(
				"adopted {}x{} ARGB32 surface from '{}'",
				img.width(),
				img.height(),
				path.display(),
			);
			Ok(img)
		},
		Err(surface) => {
			let mut img = ImageBuffer::new(surface.width(), surface.height())?;
			img.paint(&surface, 0, 0);
			debug!(
				"painted {}x{} {} surface from '{}' onto a new ARGB32 buffer",
				img.width(),
				img.height(),
				surface.format(),
				path.display(),
			);
			Ok(img)
		},
	}
}

/*!
# `PngBuf` - Signature
*/

use crate::PngError;
use std::{
	fs::File,
	io::Read,
	path::Path,
};



/// # PNG Signature.
///
/// Every PNG starts with these eight bytes. Only the first
/// [`SIGNATURE_CHECK`] of them are compared when sniffing.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// # Bytes to Check.
const SIGNATURE_CHECK: usize = 4;



#[must_use]
/// # Is PNG?
///
/// Returns `true` if the slice starts with the (first four bytes of the) PNG
/// signature.
pub fn is_png(src: &[u8]) -> bool {
	src.get(..SIGNATURE_CHECK) == Some(&PNG_SIGNATURE[..SIGNATURE_CHECK])
}

/// # Check File Signature.
///
/// Open the file and make sure it starts like a PNG. Only the first four
/// bytes are read; the handle is closed before returning either way.
///
/// ## Errors
///
/// Returns [`PngError::Read`] if the file cannot be opened or holds fewer
/// than four bytes, and [`PngError::Signature`] if the bytes are wrong.
pub(crate) fn check(path: &Path) -> Result<(), PngError> {
	let mut header = [0_u8; SIGNATURE_CHECK];
	File::open(path)
		.and_then(|mut f| f.read_exact(&mut header))
		.map_err(|_| PngError::Read)?;

	if is_png(&header) { Ok(()) }
	else { Err(PngError::Signature) }
}



#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn t_is_png() {
		assert!(is_png(&PNG_SIGNATURE));
		assert!(is_png(&PNG_SIGNATURE[..4]));
		assert!(is_png(&[0x89, b'P', b'N', b'G', 0, 0]));

		// Too short.
		assert!(! is_png(&PNG_SIGNATURE[..3]));
		assert!(! is_png(&[]));

		// JPEG.
		assert!(! is_png(&[0xFF, 0xD8, 0xFF, 0xE0]));
	}

	#[test]
	fn t_check() {
		let dir = tempfile::tempdir().expect("Tempdir failed.");

		let png = dir.path().join("ok.png");
		std::fs::write(&png, PNG_SIGNATURE).expect("Write failed.");
		assert_eq!(check(&png), Ok(()));

		let jpg = dir.path().join("nope.png");
		let mut f = File::create(&jpg).expect("Create failed.");
		f.write_all(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]).expect("Write failed.");
		drop(f);
		assert_eq!(check(&jpg), Err(PngError::Signature));

		let short = dir.path().join("short.png");
		std::fs::write(&short, &PNG_SIGNATURE[..3]).expect("Write failed.");
		assert_eq!(check(&short), Err(PngError::Read));

		assert_eq!(check(&dir.path().join("missing.png")), Err(PngError::Read));
	}
}

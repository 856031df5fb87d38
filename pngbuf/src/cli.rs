/*!
# `pngbuf` - Cli
*/

use dactyl::NiceU64;
use fyi_msg::Msg;
use pngbuf_core::{
	ImageBuffer,
	PngError,
};
use std::{
	borrow::Cow,
	ffi::OsStr,
	path::{
		Path,
		PathBuf,
	},
};



#[must_use]
/// # File Name.
///
/// This extracts the file name from a path. If for some reason it doesn't have
/// one, "?" is returned so that _something_ can be printed.
pub(super) fn file_name(path: &Path) -> Cow<str> {
	path.file_name().map_or_else(|| Cow::Borrowed("?"), OsStr::to_string_lossy)
}

/// # Initialize Logger.
///
/// Library warnings and errors are shown by default; `--verbose` adds the
/// debug lines. Either way, `RUST_LOG` wins if set.
pub(super) fn init_logger(verbose: bool) {
	let level = if verbose { "debug" } else { "warn" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
		.format_timestamp(None)
		.init();
}

/// # Load All.
///
/// Load each path in turn into the same buffer slot, printing the outcome of
/// each followed by a summary. Returns the number that loaded.
///
/// ## Errors
///
/// Returns [`PngError::NoImages`] if the list is empty or nothing loaded.
pub(super) fn load_all(paths: &[PathBuf]) -> Result<usize, PngError> {
	if paths.is_empty() { return Err(PngError::NoImages); }

	let mut buffer: Option<ImageBuffer> = None;
	let mut loaded = 0_usize;
	for path in paths {
		pngbuf_core::load(Some(path.as_path()), &mut buffer);
		if let Some(img) = buffer.as_ref() {
			loaded += 1;
			print_success(path, img);
		}
		else { print_skipped(path); }
	}

	print_summary(loaded, paths.len());

	if loaded == 0 { Err(PngError::NoImages) }
	else { Ok(loaded) }
}

/// # Print Error.
pub(super) fn print_error(err: PngError) {
	Msg::error(err.as_str()).eprint();
}

/// # Print Skipped.
pub(super) fn print_skipped(path: &Path) {
	Msg::warning(format!("Nothing loaded from \x1b[1m{}\x1b[0m.", file_name(path)))
		.with_indent(1)
		.print();
}

/// # Print Success.
pub(super) fn print_success(path: &Path, img: &ImageBuffer) {
	Msg::success(format!(
		"Loaded \x1b[1m{}\x1b[0m \x1b[2m({}x{} {}, {} bytes.)\x1b[0m",
		file_name(path),
		NiceU64::from(img.width()).as_str(),
		NiceU64::from(img.height()).as_str(),
		img.format(),
		NiceU64::from(img.as_bytes().len()).as_str(),
	))
		.with_indent(1)
		.print();
}

/// # Print Summary.
pub(super) fn print_summary(loaded: usize, total: usize) {
	println!(
		"\x1b[2m{} of {} image(s) loaded.\x1b[0m",
		NiceU64::from(loaded).as_str(),
		NiceU64::from(total).as_str(),
	);
}

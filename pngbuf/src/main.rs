/*!
# `pngbuf`

Load one or more PNG files into premultiplied ARGB32 buffers and report what
came out.
*/

#![warn(clippy::filetype_is_file)]
#![warn(clippy::integer_division)]
#![warn(clippy::needless_borrow)]
#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::suboptimal_flops)]
#![warn(clippy::unneeded_field_pattern)]
#![warn(macro_use_extern_crate)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_crate_dependencies)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]

#![allow(clippy::module_name_repetitions)]



mod cli;

use argyle::Argument;
use pngbuf_core::PngError;
use std::path::PathBuf;



/// # Flag: Verbose Logging.
const FLAG_VERBOSE: u8 = 0b0000_0001;



/// # Main.
///
/// This lets us bubble up startup errors so they can be pretty-printed.
fn main() {
	match _main() {
		Ok(()) => {},
		Err(e @ (PngError::PrintHelp | PngError::PrintVersion)) => {
			println!("{e}");
		},
		Err(e) => {
			cli::print_error(e);
			std::process::exit(1);
		},
	}
}

#[inline]
/// # Actual Main.
///
/// Parse the arguments, then hand the paths off to be loaded.
fn _main() -> Result<(), PngError> {
	let mut flags = 0_u8;
	let mut paths: Vec<PathBuf> = Vec::new();

	let args = argyle::args()
		.with_keywords(include!(concat!(env!("OUT_DIR"), "/argyle.rs")));
	for arg in args {
		match arg {
			Argument::Key("-h" | "--help") => return Err(PngError::PrintHelp),
			Argument::Key("-v" | "--verbose") => { flags |= FLAG_VERBOSE; },
			Argument::Key("-V" | "--version") => return Err(PngError::PrintVersion),

			// Assume paths.
			Argument::Other(s) => { paths.push(PathBuf::from(s)); },
			Argument::InvalidUtf8(s) => { paths.push(PathBuf::from(s)); },

			// Nothing else is relevant.
			_ => {},
		}
	}

	if paths.is_empty() { return Err(PngError::NoImages); }

	cli::init_logger(FLAG_VERBOSE == flags & FLAG_VERBOSE);
	cli::load_all(&paths).map(|_| ())
}

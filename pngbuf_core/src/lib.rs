/*!
# `PngBuf` - Library

This crate loads PNG files into premultiplied ARGB32 pixel buffers suitable
for compositing.

The main entrypoint is [`load`], which replaces an `Option<ImageBuffer>` slot
in place, logging (rather than returning) any problems. For a
`Result`-returning alternative, use `ImageBuffer::try_from(&Path)`.
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



mod decode;
mod error;
mod image;
mod load;
mod signature;

pub use error::PngError;
pub use image::{
	ImageBuffer,
	pixel::PixelFormat,
	surface::Surface,
};
pub use load::load;
pub use rgb::alt::BGRA8;
pub use signature::{
	is_png,
	PNG_SIGNATURE,
};

/*!
# `PngBuf` - Alpha Operations.

Premultiplication and Porter-Duff OVER for `B, G, R, A` pixels.
*/

use rgb::alt::BGRA8;



#[allow(clippy::cast_possible_truncation)] // Values are in range.
#[inline]
/// # Multiply Channel by Alpha.
///
/// This returns `c * a / 255`, rounded to nearest, without any division.
pub(crate) const fn mul_alpha(c: u8, a: u8) -> u8 {
	let t = c as u16 * a as u16 + 0x80;
	((t + (t >> 8)) >> 8) as u8
}

#[must_use]
#[inline]
/// # Premultiply Pixel.
///
/// Scale the color channels of a straight-alpha pixel by its alpha.
pub(crate) const fn premultiply(px: BGRA8) -> BGRA8 {
	match px.a {
		255 => px,
		0 => BGRA8 { b: 0, g: 0, r: 0, a: 0 },
		a => BGRA8 {
			b: mul_alpha(px.b, a),
			g: mul_alpha(px.g, a),
			r: mul_alpha(px.r, a),
			a,
		},
	}
}

/// # Premultiply Slice.
pub(crate) fn premultiply_slice(buf: &mut [BGRA8]) {
	for px in buf { *px = premultiply(*px); }
}

#[must_use]
#[inline]
/// # Over.
///
/// Composite the (premultiplied) source pixel over the (premultiplied)
/// destination: `src + dst * (1 - src.a)`.
pub(crate) const fn over(dst: BGRA8, src: BGRA8) -> BGRA8 {
	match src.a {
		255 => src,
		0 if src.b == 0 && src.g == 0 && src.r == 0 => dst,
		a => {
			let inv = 255 - a;
			BGRA8 {
				b: src.b.saturating_add(mul_alpha(dst.b, inv)),
				g: src.g.saturating_add(mul_alpha(dst.g, inv)),
				r: src.r.saturating_add(mul_alpha(dst.r, inv)),
				a: a.saturating_add(mul_alpha(dst.a, inv)),
			}
		},
	}
}

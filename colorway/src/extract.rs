//! Dominant color extraction from image pixels.
//!
//! Extraction is a bucket histogram: sampled pixels are quantized into coarse RGB buckets,
//! buckets are counted, and the most frequent buckets become the palette.
//! The pixel slice is decoded RGBA data; this module never touches image files.

use palette::Srgba;
use std::collections::HashMap;

use crate::{Color, Palette, PaletteKind, Rgb};

/// Every nth pixel is sampled
pub const DEFAULT_SAMPLE_STRIDE: usize = 10;

/// Pixels with an alpha below this are skipped
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 128;

/// Channel values are floored to multiples of this bucket size
pub const DEFAULT_BUCKET_SIZE: u8 = 32;

/// At most this many colors are returned
pub const DEFAULT_MAX_COLORS: usize = 8;

/// Extracts the dominant colors from a slice of RGBA pixels using the default parameters.
///
/// Samples every [`DEFAULT_SAMPLE_STRIDE`]th pixel, ignores pixels with an alpha below
/// [`DEFAULT_ALPHA_THRESHOLD`], groups the rest into buckets of [`DEFAULT_BUCKET_SIZE`]
/// per channel, and returns up to [`DEFAULT_MAX_COLORS`] bucket colors ordered by
/// decreasing pixel count.
///
/// The returned palette is empty when every sampled pixel is skipped,
/// including for an empty pixel slice.
#[must_use]
pub fn dominant_palette(pixels: &[Srgba<u8>]) -> Palette {
	dominant_palette_with(
		pixels,
		DEFAULT_SAMPLE_STRIDE,
		DEFAULT_ALPHA_THRESHOLD,
		DEFAULT_BUCKET_SIZE,
		DEFAULT_MAX_COLORS,
	)
}

/// Extracts the dominant colors from a slice of RGBA pixels.
///
/// Like [`dominant_palette`] but with every parameter exposed.
/// A `stride` or `bucket_size` of `0` is treated as `1`.
#[must_use]
pub fn dominant_palette_with(
	pixels: &[Srgba<u8>],
	stride: usize,
	alpha_threshold: u8,
	bucket_size: u8,
	max_colors: usize,
) -> Palette {
	let stride = stride.max(1);
	let bucket_size = bucket_size.max(1);

	let mut ranked: Vec<(Rgb, u32)> = bucket_counts(pixels, stride, alpha_threshold, bucket_size)
		.into_iter()
		.collect();

	// Ties on count break toward the lower channel triple
	ranked.sort_by_key(|&(rgb, count)| (std::cmp::Reverse(count), rgb.r, rgb.g, rgb.b));
	ranked.truncate(max_colors);

	Palette::new(
		PaletteKind::Image,
		ranked.into_iter().map(|(rgb, _)| Color::from_rgb(rgb)).collect(),
	)
}

/// Counts sampled pixels per bucket color
#[cfg(not(feature = "threads"))]
fn bucket_counts(pixels: &[Srgba<u8>], stride: usize, alpha_threshold: u8, bucket_size: u8) -> HashMap<Rgb, u32> {
	let mut counts = HashMap::new();

	for pixel in pixels.iter().step_by(stride) {
		if pixel.alpha < alpha_threshold {
			continue;
		}
		*counts.entry(bucket(*pixel, bucket_size)).or_insert(0) += 1;
	}

	counts
}

/// Counts sampled pixels per bucket color
#[cfg(feature = "threads")]
fn bucket_counts(pixels: &[Srgba<u8>], stride: usize, alpha_threshold: u8, bucket_size: u8) -> HashMap<Rgb, u32> {
	use rayon::prelude::*;

	pixels
		.par_iter()
		.step_by(stride)
		.filter(|pixel| pixel.alpha >= alpha_threshold)
		.fold(HashMap::new, |mut counts, pixel| {
			*counts.entry(bucket(*pixel, bucket_size)).or_insert(0) += 1;
			counts
		})
		.reduce(HashMap::new, |mut merged, counts| {
			for (rgb, count) in counts {
				*merged.entry(rgb).or_insert(0) += count;
			}
			merged
		})
}

/// Maps a pixel to the color representing its bucket
const fn bucket(pixel: Srgba<u8>, bucket_size: u8) -> Rgb {
	Rgb {
		r: quantize(pixel.color.red, bucket_size),
		g: quantize(pixel.color.green, bucket_size),
		b: quantize(pixel.color.blue, bucket_size),
	}
}

/// Floors a channel value to a multiple of the bucket size
const fn quantize(value: u8, bucket_size: u8) -> u8 {
	(value / bucket_size) * bucket_size
}

#[cfg(test)]
mod tests {
	use super::*;

	fn opaque(r: u8, g: u8, b: u8) -> Srgba<u8> {
		Srgba::new(r, g, b, 255)
	}

	fn hexes(palette: &Palette) -> Vec<&str> {
		palette.colors().iter().map(Color::hex).collect()
	}

	#[test]
	fn single_color_image_yields_its_bucket_color() {
		let pixels = vec![opaque(255, 0, 0); 4];
		let palette = dominant_palette(&pixels);

		assert_eq!(hexes(&palette), ["#E00000"]);
		assert_eq!(palette.kind(), PaletteKind::Image);
	}

	#[test]
	fn bucket_representative_is_the_floored_triple() {
		let palette = dominant_palette_with(&[opaque(31, 64, 100)], 1, 128, 32, 8);
		assert_eq!(hexes(&palette), ["#004060"]);

		let palette = dominant_palette_with(&[opaque(255, 255, 255)], 1, 128, 32, 8);
		assert_eq!(hexes(&palette), ["#E0E0E0"]);
	}

	#[test]
	fn colors_rank_by_frequency() {
		let mut pixels = vec![opaque(0, 255, 0); 10];
		pixels.extend(vec![opaque(255, 0, 0); 5]);
		pixels.push(opaque(0, 0, 255));

		let palette = dominant_palette_with(&pixels, 1, 128, 32, 8);
		assert_eq!(hexes(&palette), ["#00E000", "#E00000", "#0000E0"]);
	}

	#[test]
	fn count_ties_rank_lower_triples_first() {
		let pixels = [opaque(255, 0, 0), opaque(0, 0, 255)];
		let palette = dominant_palette_with(&pixels, 1, 128, 32, 8);
		assert_eq!(hexes(&palette), ["#0000E0", "#E00000"]);
	}

	#[test]
	fn transparent_pixels_are_skipped() {
		let pixels = [Srgba::new(255, 0, 0, 127), opaque(0, 0, 255)];
		let palette = dominant_palette_with(&pixels, 1, 128, 32, 8);
		assert_eq!(hexes(&palette), ["#0000E0"]);
	}

	#[test]
	fn fully_transparent_image_yields_an_empty_palette() {
		let pixels = vec![Srgba::new(255, 0, 0, 0); 100];
		let palette = dominant_palette(&pixels);

		assert!(palette.is_empty());
		assert_eq!(palette.kind(), PaletteKind::Image);
	}

	#[test]
	fn empty_input_yields_an_empty_palette() {
		assert!(dominant_palette(&[]).is_empty());
	}

	#[test]
	fn stride_samples_every_nth_pixel() {
		// Indices 0, 2, and 4 are sampled: one red, two blue
		let pixels = [
			opaque(255, 0, 0),
			opaque(0, 0, 255),
			opaque(0, 0, 255),
			opaque(0, 0, 255),
			opaque(0, 0, 255),
			opaque(0, 0, 255),
		];
		let palette = dominant_palette_with(&pixels, 2, 128, 32, 8);
		assert_eq!(hexes(&palette), ["#0000E0", "#E00000"]);
	}

	#[test]
	fn zero_stride_and_bucket_size_are_clamped_to_one() {
		let palette = dominant_palette_with(&[opaque(59, 130, 246)], 0, 128, 0, 8);
		assert_eq!(hexes(&palette), ["#3B82F6"]);
	}

	#[test]
	fn palette_is_capped_at_max_colors() {
		let mut pixels = Vec::new();
		for r in (0..=192).step_by(64) {
			for g in (0..=128).step_by(64) {
				pixels.push(opaque(r, g, 0));
			}
		}
		assert_eq!(pixels.len(), 12);

		let palette = dominant_palette_with(&pixels, 1, 128, 32, 8);
		assert_eq!(palette.len(), 8);
	}
}

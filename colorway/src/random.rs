//! Random palette generation with seeded, reproducible output.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoroshiro128PlusPlus;

use crate::{harmony, Color, HarmonyKind, Hsl, Palette, PaletteKind, BASE_LIGHTNESS, BASE_SATURATION};

/// Generates a palette from a random base color and harmony kind.
///
/// The base color is `hsl(hue, 70%, 50%)` with a uniformly random hue,
/// and the kind is drawn from [`HarmonyKind::RANDOM_POOL`].
/// The same seed always yields the same palette.
#[must_use]
pub fn random_palette(seed: u64) -> Palette {
	random_palette_with(&mut Xoroshiro128PlusPlus::seed_from_u64(seed))
}

/// Generates a palette from a random base color using the provided generator.
///
/// The hue is drawn before the harmony kind, so the output for a given
/// generator state is stable across releases.
#[must_use]
pub fn random_palette_with(rng: &mut impl Rng) -> Palette {
	let hue = rng.gen_range(0..360);
	let kind = HarmonyKind::RANDOM_POOL[rng.gen_range(0..HarmonyKind::RANDOM_POOL.len())];

	let base = Color::from_hsl(Hsl {
		h: hue,
		s: BASE_SATURATION,
		l: BASE_LIGHTNESS,
	});

	Palette::new(PaletteKind::Random, harmony::harmony_colors(&base, kind))
}

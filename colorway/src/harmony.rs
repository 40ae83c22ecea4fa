//! Harmony palettes derived from a base color by hue and lightness offsets.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{convert, Color, Hsl, Palette, PaletteKind};

/// Lightness ladder used for monochromatic palettes, darkest first
const LIGHTNESS_LADDER: [u8; 5] = [20, 40, 60, 80, 90];

/// A color harmony rule mapping one base color to a palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyKind {
	/// The base color and its opposite on the hue wheel
	Complementary,
	/// Three colors spaced evenly around the hue wheel
	Triadic,
	/// Five colors in a tight band around the base hue
	Analogous,
	/// The base hue at five lightness levels
	Monochromatic,
	/// The base color plus the two hues flanking its complement
	SplitComplementary,
	/// Four colors spaced a quarter turn apart
	Tetradic,
}

impl HarmonyKind {
	/// Every harmony kind, in definition order
	pub const ALL: [Self; 6] = [
		Self::Complementary,
		Self::Triadic,
		Self::Analogous,
		Self::Monochromatic,
		Self::SplitComplementary,
		Self::Tetradic,
	];

	/// The kinds random palettes draw from; monochromatic is excluded
	pub const RANDOM_POOL: [Self; 5] = [
		Self::Complementary,
		Self::Triadic,
		Self::Analogous,
		Self::SplitComplementary,
		Self::Tetradic,
	];

	/// Hue offsets in degrees applied to the base hue, in palette order
	///
	/// Monochromatic palettes vary lightness instead and have no hue offsets.
	#[must_use]
	pub const fn offsets(self) -> &'static [i32] {
		match self {
			Self::Complementary => &[0, 180],
			Self::Triadic => &[0, 120, 240],
			Self::Analogous => &[-60, -30, 0, 30, 60],
			Self::Monochromatic => &[],
			Self::SplitComplementary => &[0, 150, 210],
			Self::Tetradic => &[0, 90, 180, 270],
		}
	}

	/// Number of colors a palette of this kind contains
	#[must_use]
	pub const fn palette_len(self) -> usize {
		match self {
			Self::Monochromatic => LIGHTNESS_LADDER.len(),
			_ => self.offsets().len(),
		}
	}

	/// Kebab-case name matching the serialized form
	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::Complementary => "complementary",
			Self::Triadic => "triadic",
			Self::Analogous => "analogous",
			Self::Monochromatic => "monochromatic",
			Self::SplitComplementary => "split-complementary",
			Self::Tetradic => "tetradic",
		}
	}
}

impl fmt::Display for HarmonyKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Generates a palette from `base` according to `kind`.
///
/// Hue-based kinds rotate the base hue by [`HarmonyKind::offsets`] while keeping its
/// saturation and lightness; the offset `0` slot carries the base color through unchanged.
/// Monochromatic keeps the base hue and saturation and walks a fixed lightness ladder.
#[must_use]
pub fn harmony_palette(base: &Color, kind: HarmonyKind) -> Palette {
	Palette::new(PaletteKind::Harmony(kind), harmony_colors(base, kind))
}

/// Generates the colors of a harmony palette without wrapping them in a [`Palette`].
pub(crate) fn harmony_colors(base: &Color, kind: HarmonyKind) -> Vec<Color> {
	let hsl = base.hsl();
	match kind {
		HarmonyKind::Monochromatic => LIGHTNESS_LADDER
			.iter()
			.map(|&lightness| {
				Color::from_hsl(Hsl {
					h: hsl.h,
					s: hsl.s,
					l: lightness,
				})
			})
			.collect(),
		_ => kind
			.offsets()
			.iter()
			.map(|&offset| {
				if offset == 0 {
					base.clone()
				} else {
					let h = convert::normalize_hue(i32::from(hsl.h) + offset);
					Color::from_hsl(Hsl { h, s: hsl.s, l: hsl.l })
				}
			})
			.collect(),
	}
}

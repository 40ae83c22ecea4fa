//! Curated keyword palettes with a hashed hue fallback.

use crate::{harmony, Color, HarmonyKind, Hsl, Palette, PaletteKind, BASE_LIGHTNESS, BASE_SATURATION};

/// Curated five-color palettes by theme keyword
pub const KEYWORD_PALETTES: [(&str, [&str; 5]); 10] = [
	("ocean", ["#013A63", "#01497C", "#2A6F97", "#61A5C2", "#89C2D9"]),
	("sunset", ["#355070", "#6D597A", "#B56576", "#E56B6F", "#EAAC8B"]),
	("forest", ["#081C15", "#1B4332", "#2D6A4F", "#52B788", "#95D5B2"]),
	("autumn", ["#6A040F", "#9D0208", "#D00000", "#E85D04", "#FFBA08"]),
	("winter", ["#CAF0F8", "#ADE8F4", "#90E0EF", "#48CAE4", "#0096C7"]),
	("vintage", ["#797D62", "#9B9B7A", "#D9AE94", "#F1DCA7", "#FFCB69"]),
	("modern", ["#0D1B2A", "#1B263B", "#415A77", "#778DA9", "#E0E1DD"]),
	("pastel", ["#FFADAD", "#FFD6A5", "#FDFFB6", "#CAFFBF", "#A0C4FF"]),
	("neon", ["#FF006E", "#FB5607", "#FFBE0B", "#8338EC", "#3A86FF"]),
	("earth", ["#582F0E", "#7F4F24", "#936639", "#A68A64", "#B6AD90"]),
];

/// Builds a palette for a theme keyword.
///
/// Known keywords map to their entry in [`KEYWORD_PALETTES`];
/// lookup trims surrounding whitespace and is case-insensitive.
/// Unknown keywords hash to a hue and get an analogous palette around
/// `hsl(hue, 70%, 50%)`, so the same keyword always yields the same palette.
///
/// Returns `None` when the keyword is empty or whitespace-only.
#[must_use]
pub fn keyword_palette(keyword: &str) -> Option<Palette> {
	let normalized = keyword.trim().to_lowercase();
	if normalized.is_empty() {
		return None;
	}

	let colors = match curated(&normalized) {
		Some(hexes) => hexes.iter().map(|hex| Color::from_hex(hex)).collect(),
		None => {
			let base = Color::from_hsl(Hsl {
				h: keyword_hue(&normalized),
				s: BASE_SATURATION,
				l: BASE_LIGHTNESS,
			});
			harmony::harmony_colors(&base, HarmonyKind::Analogous)
		}
	};

	Some(Palette::new(PaletteKind::Keyword, colors))
}

/// Looks up the curated palette for a normalized keyword
fn curated(keyword: &str) -> Option<&'static [&'static str; 5]> {
	KEYWORD_PALETTES
		.iter()
		.find(|(name, _)| *name == keyword)
		.map(|(_, hexes)| hexes)
}

/// Hashes a normalized keyword to a hue in `0..360`.
///
/// The hash runs over UTF-16 code units with wrapping 32-bit arithmetic,
/// so any Unicode keyword maps to a stable hue.
fn keyword_hue(keyword: &str) -> u16 {
	let mut hash: i32 = 0;
	for code in keyword.encode_utf16() {
		hash = i32::from(code).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
	}

	// unsigned_abs() % 360 is always in 0..360
	#[allow(clippy::cast_possible_truncation)]
	let hue = (hash.unsigned_abs() % 360) as u16;
	hue
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn known_keywords_return_their_curated_palette() {
		let palette = keyword_palette("ocean").unwrap();
		let hexes: Vec<&str> = palette.colors().iter().map(Color::hex).collect();

		assert_eq!(hexes, ["#013A63", "#01497C", "#2A6F97", "#61A5C2", "#89C2D9"]);
		assert_eq!(palette.kind(), PaletteKind::Keyword);
	}

	#[test]
	fn lookup_trims_and_ignores_case() {
		let expected = keyword_palette("ocean").unwrap();
		assert_eq!(keyword_palette("  OCEAN  ").unwrap(), expected);
		assert_eq!(keyword_palette("Ocean").unwrap(), expected);
	}

	#[test]
	fn blank_keywords_return_none() {
		assert_eq!(keyword_palette(""), None);
		assert_eq!(keyword_palette("   "), None);
		assert_eq!(keyword_palette("\t\n"), None);
	}

	#[test]
	fn hash_matches_known_values() {
		assert_eq!(keyword_hue("dusk"), 289);
		assert_eq!(keyword_hue("lava"), 240);
		// Long enough to wrap the 32-bit accumulator
		assert_eq!(keyword_hue("galaxy"), 0);
		// Hashed as a single UTF-16 code unit
		assert_eq!(keyword_hue("ä"), 228);
	}

	#[test]
	fn unknown_keywords_get_a_stable_analogous_palette() {
		let palette = keyword_palette("lava").unwrap();
		let hues: Vec<u16> = palette.colors().iter().map(|color| color.hsl().h).collect();

		assert_eq!(hues, [180, 210, 240, 270, 300]);
		for color in palette.colors() {
			let hsl = color.hsl();
			assert_eq!((hsl.s, hsl.l), (BASE_SATURATION, BASE_LIGHTNESS));
		}
		assert_eq!(palette.kind(), PaletteKind::Keyword);

		assert_eq!(keyword_palette("lava").unwrap(), palette);
	}

	#[test]
	fn curated_table_is_well_formed() {
		for (keyword, hexes) in KEYWORD_PALETTES {
			assert_eq!(keyword.trim().to_lowercase(), keyword);
			assert!(!keyword.is_empty());
			for hex in hexes {
				assert!(crate::parse_hex(hex).is_some(), "{keyword}: {hex}");
			}
		}
	}
}

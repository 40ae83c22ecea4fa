//! Convert colors between representations and generate palettes from them.
//!
//! Every color is carried as a [`Color`]: the hex, sRGB, HSL, and CMYK forms of one color,
//! derived once at construction and immutable afterwards.
//! Palettes are ordered lists of colors tagged with how they were generated.
//!
//! # Examples
//!
//! ## Convert a hex color between representations.
//!
//! ```
//! use colorway::Color;
//!
//! let blue = Color::from_hex("#3b82f6");
//! let hsl = blue.hsl();
//!
//! assert_eq!(blue.hex(), "#3B82F6");
//! assert_eq!((hsl.h, hsl.s, hsl.l), (217, 91, 60));
//! ```
//!
//! ## Generate a harmony palette from a base color.
//!
//! ```
//! use colorway::{harmony_palette, Color, HarmonyKind};
//!
//! let base = Color::from_hex("#E11D48");
//! let palette = harmony_palette(&base, HarmonyKind::Triadic);
//!
//! assert_eq!(palette.len(), 3);
//! assert_eq!(palette.colors()[0].hex(), base.hex());
//! ```
//!
//! ## Extract the dominant colors from image pixels.
//!
//! ```
//! use palette::Srgba;
//!
//! let pixels = vec![Srgba::new(230u8, 20, 20, 255); 64];
//! let palette = colorway::dominant_palette(&pixels);
//!
//! assert_eq!(palette.colors()[0].hex(), "#E00000");
//! ```
//!
//! ## Generate palettes without an image.
//!
//! ```
//! let ocean = colorway::keyword_palette("ocean").unwrap();
//! let random = colorway::random_palette(42);
//!
//! assert_eq!(ocean.len(), 5);
//! assert!(matches!(random.len(), 2..=5));
//! ```
//!
//! # Input policy
//!
//! Hex parsing is tolerant by default: [`Color::from_hex`] and [`hex_to_rgb`] fall back to black
//! for anything that is not six hex digits with an optional `#` prefix.
//! Pipelines that must reject bad input instead can call [`parse_hex`], which returns an `Option`.
//!
//! The library never decodes image files itself.
//! Decode with the image library of your choice and cast the raw RGBA buffer with
//! `palette::cast::from_component_slice`, then hand the pixel slice to [`dominant_palette`].
//!
//! # Extraction parameters
//!
//! [`dominant_palette`] samples every [`DEFAULT_SAMPLE_STRIDE`]th pixel, skips pixels with an
//! alpha below [`DEFAULT_ALPHA_THRESHOLD`], quantizes the rest into buckets of
//! [`DEFAULT_BUCKET_SIZE`] per channel, and keeps the [`DEFAULT_MAX_COLORS`] most frequent
//! buckets. [`dominant_palette_with`] exposes all four knobs.
//!
//! Larger strides are faster but may miss small accents; larger buckets merge more shades into
//! one palette entry. A stride or bucket size of `0` is treated as `1`.
//!
//! # Seeds
//!
//! [`random_palette`] is deterministic in its seed: the same seed always yields the same
//! palette. Pass any arbitrary value like `0`, `42`, or `123456789`, or a fresh random number
//! when independent results are wanted.

#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::cargo)]
#![warn(clippy::use_debug, clippy::dbg_macro, clippy::todo, clippy::unimplemented)]
#![warn(clippy::unwrap_used, clippy::unwrap_in_result)]
#![warn(clippy::unneeded_field_pattern, clippy::rest_pat_in_fully_bound_structs)]
#![warn(clippy::unnecessary_self_imports)]
#![warn(clippy::str_to_string, clippy::string_to_string, clippy::string_slice)]
#![warn(missing_docs, clippy::missing_docs_in_private_items, rustdoc::all)]
#![warn(clippy::float_cmp_const, clippy::lossy_float_literal)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::enum_glob_use)]
#![allow(clippy::unreadable_literal)]

use std::fmt;

mod convert;
mod extract;
mod format;
mod harmony;
mod keyword;
mod random;

pub use convert::{hex_to_rgb, hsl_to_hex, hsl_to_rgb, normalize_hue, parse_hex, rgb_to_cmyk, rgb_to_hex, rgb_to_hsl};
pub use extract::{
	dominant_palette, dominant_palette_with, DEFAULT_ALPHA_THRESHOLD, DEFAULT_BUCKET_SIZE, DEFAULT_MAX_COLORS,
	DEFAULT_SAMPLE_STRIDE,
};
pub use format::{export_palette, format_color, to_css, to_json, to_scss, ColorFormat, ExportFormat};
pub use harmony::{harmony_palette, HarmonyKind};
pub use keyword::{keyword_palette, KEYWORD_PALETTES};
pub use random::{random_palette, random_palette_with};

/// Saturation used for generated base colors (keyword fallback and random palettes)
pub const BASE_SATURATION: u8 = 70;

/// Lightness used for generated base colors (keyword fallback and random palettes)
pub const BASE_LIGHTNESS: u8 = 50;

/// An sRGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
	/// Red channel in `0..=255`
	pub r: u8,
	/// Green channel in `0..=255`
	pub g: u8,
	/// Blue channel in `0..=255`
	pub b: u8,
}

/// A color in hue, saturation, and lightness components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
	/// Hue in degrees in `0..360`
	pub h: u16,
	/// Saturation as a percentage in `0..=100`
	pub s: u8,
	/// Lightness as a percentage in `0..=100`
	pub l: u8,
}

/// A color in cyan, magenta, yellow, and key components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cmyk {
	/// Cyan as a percentage in `0..=100`
	pub c: u8,
	/// Magenta as a percentage in `0..=100`
	pub m: u8,
	/// Yellow as a percentage in `0..=100`
	pub y: u8,
	/// Key (black) as a percentage in `0..=100`
	pub k: u8,
}

/// One color in all four of its representations
///
/// Built from any single representation via [`Color::from_hex`], [`Color::from_rgb`],
/// or [`Color::from_hsl`]; the other representations are derived at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Color {
	/// Canonical uppercase `#RRGGBB` form
	hex: String,
	/// sRGB channels
	rgb: Rgb,
	/// HSL components, kept exactly as given when built via [`Color::from_hsl`]
	hsl: Hsl,
	/// CMYK components derived from the sRGB channels
	cmyk: Cmyk,
}

impl Color {
	/// Parses a hex string like `"#3B82F6"` or `"3b82f6"` into a [`Color`].
	///
	/// Malformed input falls back to black, matching [`hex_to_rgb`].
	/// Call [`parse_hex`] first if bad input should be rejected instead.
	#[must_use]
	pub fn from_hex(hex: &str) -> Self {
		Self::from_rgb(convert::hex_to_rgb(hex))
	}

	/// Builds a [`Color`] from sRGB channels, deriving the other representations.
	#[must_use]
	pub fn from_rgb(rgb: Rgb) -> Self {
		Self {
			hex: convert::rgb_to_hex(rgb),
			rgb,
			hsl: convert::rgb_to_hsl(rgb),
			cmyk: convert::rgb_to_cmyk(rgb),
		}
	}

	/// Builds a [`Color`] from HSL components, deriving the other representations.
	///
	/// The hue is wrapped into `0..360` and saturation and lightness are clamped to `100`.
	/// The stored HSL form keeps the wrapped input rather than a value re-derived from sRGB,
	/// so in-range components survive the round trip exactly.
	#[must_use]
	pub fn from_hsl(hsl: Hsl) -> Self {
		let hsl = Hsl {
			h: convert::normalize_hue(i32::from(hsl.h)),
			s: hsl.s.min(100),
			l: hsl.l.min(100),
		};
		let rgb = convert::hsl_to_rgb(hsl);
		Self {
			hex: convert::rgb_to_hex(rgb),
			rgb,
			hsl,
			cmyk: convert::rgb_to_cmyk(rgb),
		}
	}

	/// Canonical uppercase `#RRGGBB` string
	#[must_use]
	pub fn hex(&self) -> &str {
		&self.hex
	}

	/// sRGB channels
	#[must_use]
	pub const fn rgb(&self) -> Rgb {
		self.rgb
	}

	/// HSL components
	#[must_use]
	pub const fn hsl(&self) -> Hsl {
		self.hsl
	}

	/// CMYK components
	#[must_use]
	pub const fn cmyk(&self) -> Cmyk {
		self.cmyk
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.hex)
	}
}

/// How a [`Palette`] was generated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKind {
	/// Derived from a base color by hue or lightness offsets
	Harmony(HarmonyKind),
	/// Extracted from image pixels
	Image,
	/// Looked up or derived from a keyword
	Keyword,
	/// Generated from a random base color
	Random,
}

impl PaletteKind {
	/// Kebab-case tag for this kind, e.g. `"split-complementary"` or `"image"`
	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::Harmony(kind) => kind.name(),
			Self::Image => "image",
			Self::Keyword => "keyword",
			Self::Random => "random",
		}
	}
}

/// An ordered sequence of colors tagged with how it was generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
	/// Palette colors in generation order
	colors: Vec<Color>,
	/// How the palette was generated
	kind: PaletteKind,
}

impl Palette {
	/// Creates a palette over the given colors
	pub(crate) fn new(kind: PaletteKind, colors: Vec<Color>) -> Self {
		Self { colors, kind }
	}

	/// Palette colors in generation order
	#[must_use]
	pub fn colors(&self) -> &[Color] {
		&self.colors
	}

	/// How the palette was generated
	#[must_use]
	pub const fn kind(&self) -> PaletteKind {
		self.kind
	}

	/// Number of colors in the palette
	#[must_use]
	pub fn len(&self) -> usize {
		self.colors.len()
	}

	/// Whether the palette has no colors
	///
	/// Only extraction can produce an empty palette,
	/// when every sampled pixel falls below the alpha threshold.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn from_hex_canonicalizes_case_and_prefix() {
		for input in ["#3B82F6", "#3b82f6", "3B82F6", "3b82f6"] {
			let color = Color::from_hex(input);
			assert_eq!(color.hex(), "#3B82F6");
			assert_eq!(color.rgb(), Rgb { r: 59, g: 130, b: 246 });
		}
	}

	#[test]
	fn from_hex_falls_back_to_black() {
		for input in ["", "#", "#12", "3B82F", "#3B82F6A1", "#GGGGGG", "not a color"] {
			let color = Color::from_hex(input);
			assert_eq!(color.hex(), "#000000");
			assert_eq!(color.rgb(), Rgb { r: 0, g: 0, b: 0 });
			assert_eq!(color.cmyk(), Cmyk { c: 0, m: 0, y: 0, k: 100 });
		}
	}

	#[test]
	fn from_hsl_preserves_in_range_components() {
		let hsl = Hsl { h: 217, s: 91, l: 60 };
		assert_eq!(Color::from_hsl(hsl).hsl(), hsl);
	}

	#[test]
	fn from_hsl_wraps_hue_and_clamps_percentages() {
		let color = Color::from_hsl(Hsl { h: 400, s: 120, l: 250 });
		assert_eq!(color.hsl(), Hsl { h: 40, s: 100, l: 100 });
	}

	#[test]
	fn display_uses_canonical_hex() {
		assert_eq!(Color::from_hex("e11d48").to_string(), "#E11D48");
	}

	#[test]
	fn kind_names_are_kebab_case() {
		assert_eq!(PaletteKind::Harmony(HarmonyKind::SplitComplementary).name(), "split-complementary");
		assert_eq!(PaletteKind::Harmony(HarmonyKind::Monochromatic).name(), "monochromatic");
		assert_eq!(PaletteKind::Image.name(), "image");
		assert_eq!(PaletteKind::Keyword.name(), "keyword");
		assert_eq!(PaletteKind::Random.name(), "random");
	}
}

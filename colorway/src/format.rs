//! Formatting single colors and exporting palettes as stylesheet or JSON text.

use serde_json::json;

use crate::{Color, Palette};

/// Output representation for a single color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
	/// Canonical `#RRGGBB`
	Hex,
	/// `rgb(r, g, b)`
	Rgb,
	/// `hsl(h, s%, l%)`
	Hsl,
	/// `cmyk(c%, m%, y%, k%)`
	Cmyk,
}

/// Stylesheet or data format for exporting a whole palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
	/// CSS custom properties on `:root`
	Css,
	/// SCSS variables
	Scss,
	/// A JSON object with a `palette` array
	Json,
}

/// Formats one color in the requested representation.
#[must_use]
pub fn format_color(color: &Color, format: ColorFormat) -> String {
	match format {
		ColorFormat::Hex => color.hex().to_owned(),
		ColorFormat::Rgb => {
			let rgb = color.rgb();
			format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b)
		}
		ColorFormat::Hsl => {
			let hsl = color.hsl();
			format!("hsl({}, {}%, {}%)", hsl.h, hsl.s, hsl.l)
		}
		ColorFormat::Cmyk => {
			let cmyk = color.cmyk();
			format!("cmyk({}%, {}%, {}%, {}%)", cmyk.c, cmyk.m, cmyk.y, cmyk.k)
		}
	}
}

/// Renders the palette as CSS custom properties on `:root`.
///
/// Variables are named `--color-1` through `--color-n` in palette order.
#[must_use]
pub fn to_css(palette: &Palette, format: ColorFormat) -> String {
	let mut out = String::from(":root {\n");
	for (index, color) in palette.colors().iter().enumerate() {
		out.push_str(&format!("  --color-{}: {};\n", index + 1, format_color(color, format)));
	}
	out.push_str("}\n");
	out
}

/// Renders the palette as SCSS variables `$color-1` through `$color-n`.
#[must_use]
pub fn to_scss(palette: &Palette, format: ColorFormat) -> String {
	let mut out = String::new();
	for (index, color) in palette.colors().iter().enumerate() {
		out.push_str(&format!("$color-{}: {};\n", index + 1, format_color(color, format)));
	}
	out
}

/// Renders the palette as a JSON object with a `palette` array of formatted values.
#[must_use]
pub fn to_json(palette: &Palette, format: ColorFormat) -> String {
	let values: Vec<String> = palette
		.colors()
		.iter()
		.map(|color| format_color(color, format))
		.collect();
	json!({ "palette": values }).to_string()
}

/// Renders the palette in the requested export format.
#[must_use]
pub fn export_palette(palette: &Palette, format: ColorFormat, export: ExportFormat) -> String {
	match export {
		ExportFormat::Css => to_css(palette, format),
		ExportFormat::Scss => to_scss(palette, format),
		ExportFormat::Json => to_json(palette, format),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{harmony_palette, HarmonyKind};

	fn blue() -> Color {
		Color::from_hex("#3B82F6")
	}

	fn complementary() -> Palette {
		harmony_palette(&blue(), HarmonyKind::Complementary)
	}

	#[test]
	fn formats_every_representation() {
		let color = blue();
		assert_eq!(format_color(&color, ColorFormat::Hex), "#3B82F6");
		assert_eq!(format_color(&color, ColorFormat::Rgb), "rgb(59, 130, 246)");
		assert_eq!(format_color(&color, ColorFormat::Hsl), "hsl(217, 91%, 60%)");
		assert_eq!(format_color(&color, ColorFormat::Cmyk), "cmyk(76%, 47%, 0%, 4%)");
	}

	#[test]
	fn css_export_uses_root_custom_properties() {
		let css = to_css(&complementary(), ColorFormat::Hex);
		assert_eq!(css, ":root {\n  --color-1: #3B82F6;\n  --color-2: #F6AF3C;\n}\n");
	}

	#[test]
	fn scss_export_numbers_variables_in_order() {
		let scss = to_scss(&complementary(), ColorFormat::Rgb);
		assert_eq!(scss, "$color-1: rgb(59, 130, 246);\n$color-2: rgb(246, 175, 60);\n");
	}

	#[test]
	fn json_export_wraps_a_palette_array() {
		let json = to_json(&complementary(), ColorFormat::Hex);
		assert_eq!(json, r##"{"palette":["#3B82F6","#F6AF3C"]}"##);
	}

	#[test]
	fn export_dispatches_on_format() {
		let palette = complementary();
		for format in [ColorFormat::Hex, ColorFormat::Hsl] {
			assert_eq!(export_palette(&palette, format, ExportFormat::Css), to_css(&palette, format));
			assert_eq!(export_palette(&palette, format, ExportFormat::Scss), to_scss(&palette, format));
			assert_eq!(export_palette(&palette, format, ExportFormat::Json), to_json(&palette, format));
		}
	}

	#[test]
	fn empty_palette_exports_cleanly() {
		let palette = crate::dominant_palette(&[]);
		assert_eq!(to_css(&palette, ColorFormat::Hex), ":root {\n}\n");
		assert_eq!(to_scss(&palette, ColorFormat::Hex), "");
		assert_eq!(to_json(&palette, ColorFormat::Hex), r#"{"palette":[]}"#);
	}
}

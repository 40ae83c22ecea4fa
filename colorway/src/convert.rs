//! Conversions between hex, sRGB, HSL, and CMYK representations.
//!
//! Hex parsing comes in two flavors: [`parse_hex`] rejects malformed input with `None`,
//! while [`hex_to_rgb`] falls back to black so callers handling arbitrary user input
//! never have to deal with a failure path.

use crate::{Cmyk, Hsl, Rgb};

/// Parses a six-digit hex string with an optional `#` prefix, case-insensitively.
///
/// Returns `None` for anything else: wrong length, non-hex digits, or stray whitespace.
#[must_use]
pub fn parse_hex(hex: &str) -> Option<Rgb> {
	let digits = hex.strip_prefix('#').unwrap_or(hex);
	if digits.len() != 6 || !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
		return None;
	}

	let value = u32::from_str_radix(digits, 16).ok()?;

	// Six hex digits, so every shifted component fits in eight bits
	#[allow(clippy::cast_possible_truncation)]
	let rgb = Rgb {
		r: (value >> 16) as u8,
		g: (value >> 8) as u8,
		b: value as u8,
	};
	Some(rgb)
}

/// Converts a hex string to sRGB channels.
///
/// Malformed input falls back to black instead of failing.
/// Call [`parse_hex`] to reject bad input instead.
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Rgb {
	parse_hex(hex).unwrap_or(Rgb { r: 0, g: 0, b: 0 })
}

/// Formats sRGB channels as a canonical uppercase `#RRGGBB` string.
#[must_use]
pub fn rgb_to_hex(rgb: Rgb) -> String {
	format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

/// Converts sRGB channels to HSL components.
///
/// Achromatic colors report a hue of `0` and a saturation of `0`.
/// Components are quantized to whole degrees and percentages, so converting back through
/// [`hsl_to_rgb`] reproduces each channel only to within a few units.
#[must_use]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
	let r = f64::from(rgb.r) / 255.0;
	let g = f64::from(rgb.g) / 255.0;
	let b = f64::from(rgb.b) / 255.0;

	let max = r.max(g).max(b);
	let min = r.min(g).min(b);
	let lightness = (max + min) / 2.0;

	if rgb.r == rgb.g && rgb.g == rgb.b {
		return Hsl {
			h: 0,
			s: 0,
			l: round_percent(lightness),
		};
	}

	let delta = max - min;
	let saturation = if lightness > 0.5 {
		delta / (2.0 - max - min)
	} else {
		delta / (max + min)
	};

	// max is exactly one of the three channels
	#[allow(clippy::float_cmp)]
	let hue = 60.0
		* if max == r {
			(g - b) / delta
		} else if max == g {
			(b - r) / delta + 2.0
		} else {
			(r - g) / delta + 4.0
		};

	Hsl {
		h: normalize_hue(round_i32(hue)),
		s: round_percent(saturation),
		l: round_percent(lightness),
	}
}

/// Converts HSL components to sRGB channels.
///
/// Each output channel is rounded to the nearest integer and clamped to `0..=255`.
#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
	let hue = f64::from(hsl.h);
	let sat = f64::from(hsl.s) / 100.0;
	let light = f64::from(hsl.l) / 100.0;

	// Saturation scaled by how far the lightness sits from the extremes
	let a = sat * light.min(1.0 - light);

	let channel = |shift: f64| {
		let phase = (shift + hue / 30.0) % 12.0;
		let value = light - a * (phase - 3.0).min(9.0 - phase).clamp(-1.0, 1.0);

		// value is in 0.0..=1.0, so the scaled cast cannot truncate or lose sign
		#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
		let byte = (value * 255.0).round().clamp(0.0, 255.0) as u8;
		byte
	};

	Rgb {
		r: channel(0.0),
		g: channel(8.0),
		b: channel(4.0),
	}
}

/// Converts HSL components straight to a canonical hex string.
#[must_use]
pub fn hsl_to_hex(hsl: Hsl) -> String {
	rgb_to_hex(hsl_to_rgb(hsl))
}

/// Converts sRGB channels to CMYK components.
///
/// Pure black maps to `cmyk(0%, 0%, 0%, 100%)` without dividing by zero.
#[must_use]
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
	let max = rgb.r.max(rgb.g).max(rgb.b);
	if max == 0 {
		return Cmyk { c: 0, m: 0, y: 0, k: 100 };
	}

	let r = f64::from(rgb.r) / 255.0;
	let g = f64::from(rgb.g) / 255.0;
	let b = f64::from(rgb.b) / 255.0;
	let white = f64::from(max) / 255.0;

	Cmyk {
		c: round_percent((white - r) / white),
		m: round_percent((white - g) / white),
		y: round_percent((white - b) / white),
		k: round_percent(1.0 - white),
	}
}

/// Wraps a hue in degrees into `0..360`, mapping negative angles like `-30` to `330`.
#[must_use]
pub fn normalize_hue(hue: i32) -> u16 {
	// rem_euclid(360) is always in 0..360
	#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
	let wrapped = hue.rem_euclid(360) as u16;
	wrapped
}

/// Rounds to the nearest integer with halves away from zero.
#[allow(clippy::cast_possible_truncation)]
fn round_i32(value: f64) -> i32 {
	value.round() as i32
}

/// Rounds a unit interval value to an integer percentage with halves away from zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_percent(value: f64) -> u8 {
	(value * 100.0).round() as u8
}

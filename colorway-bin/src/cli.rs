//! Specifies the CLI and handles arg parsing

use clap::{Parser, Subcommand, ValueEnum};
use colorway::{ColorFormat, ExportFormat, HarmonyKind};
use std::path::PathBuf;

/// Supported output formats for palette colors
#[derive(Copy, Clone, ValueEnum)]
pub enum FormatOutput {
	/// sRGB hexcode
	Hex,
	/// rgb() triple
	Rgb,
	/// hsl() triple
	Hsl,
	/// cmyk() quad
	Cmyk,
}

impl FormatOutput {
	/// The library color format this argument selects
	pub fn format(self) -> ColorFormat {
		match self {
			FormatOutput::Hex => ColorFormat::Hex,
			FormatOutput::Rgb => ColorFormat::Rgb,
			FormatOutput::Hsl => ColorFormat::Hsl,
			FormatOutput::Cmyk => ColorFormat::Cmyk,
		}
	}
}

/// Ways to colorize the output text
#[derive(Copy, Clone, ValueEnum)]
pub enum ColorizeOutput {
	/// Foreground
	Fg,
	/// Background
	Bg,
}

/// Supported palette export formats
#[derive(Copy, Clone, ValueEnum)]
pub enum ExportOutput {
	/// CSS custom properties on :root
	Css,
	/// SCSS variables
	Scss,
	/// A JSON object with a palette array
	Json,
}

impl ExportOutput {
	/// The library export format this argument selects
	pub fn format(self) -> ExportFormat {
		match self {
			ExportOutput::Css => ExportFormat::Css,
			ExportOutput::Scss => ExportFormat::Scss,
			ExportOutput::Json => ExportFormat::Json,
		}
	}
}

/// Harmony rules for the color subcommand
#[derive(Copy, Clone, ValueEnum)]
pub enum HarmonyArg {
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

impl HarmonyArg {
	/// The harmony kind this argument selects
	pub fn kind(self) -> HarmonyKind {
		match self {
			HarmonyArg::Complementary => HarmonyKind::Complementary,
			HarmonyArg::Triadic => HarmonyKind::Triadic,
			HarmonyArg::Analogous => HarmonyKind::Analogous,
			HarmonyArg::Monochromatic => HarmonyKind::Monochromatic,
			HarmonyArg::SplitComplementary => HarmonyKind::SplitComplementary,
			HarmonyArg::Tetradic => HarmonyKind::Tetradic,
		}
	}
}

/// Build color palettes from a base color, an image, a keyword, or at random.
///
/// Palettes print as a line of colors in the chosen format,
/// or as CSS, SCSS, or JSON text via the --export option.
#[derive(Parser)]
#[command(version)]
pub struct Options {
	/// What to build the palette from
	#[command(subcommand)]
	pub command: Command,

	/// The format to print the colors in
	#[arg(short, long, default_value = "hex", global = true)]
	pub output: FormatOutput,

	/// Color the foreground or background for each printed color
	#[arg(short, long, global = true)]
	pub colorize: Option<ColorizeOutput>,

	/// Export the palette as stylesheet or JSON text instead of a color line
	#[arg(short, long, global = true)]
	pub export: Option<ExportOutput>,

	/// Print additional information, such as the palette kind and timings
	#[arg(long, global = true)]
	pub verbose: bool,

	/// The number of threads to use, or 0 to match the number of cpus
	#[cfg(feature = "threads")]
	#[arg(short, long, default_value_t = 0, global = true)]
	pub threads: u8,
}

/// The palette source and its arguments
#[derive(Subcommand)]
pub enum Command {
	/// Generate a harmony palette from a base color
	Color {
		/// The base color as a hex string like '#3B82F6'
		///
		/// Malformed input falls back to black.
		hex: String,

		/// The harmony rule to apply
		#[arg(short = 'a', long, default_value = "complementary")]
		harmony: HarmonyArg,
	},

	/// Extract the dominant colors from an image
	Image {
		/// The path to the input image
		path: PathBuf,

		/// Sample every nth pixel
		#[arg(long, default_value_t = colorway::DEFAULT_SAMPLE_STRIDE)]
		stride: usize,

		/// Skip pixels with an alpha below this value
		#[arg(long, default_value_t = colorway::DEFAULT_ALPHA_THRESHOLD)]
		alpha_threshold: u8,

		/// Floor channel values to multiples of this bucket size
		#[arg(long, default_value_t = colorway::DEFAULT_BUCKET_SIZE)]
		bucket_size: u8,

		/// The maximum number of colors to return
		#[arg(long, default_value_t = colorway::DEFAULT_MAX_COLORS)]
		max_colors: usize,

		/// The seed for the random palette used when no pixels survive extraction
		#[arg(long)]
		seed: Option<u64>,
	},

	/// Look up or derive a palette for a theme keyword
	Keyword {
		/// The theme keyword, like 'ocean' or 'forest'
		word: String,
	},

	/// Generate a palette from a random base color
	Random {
		/// The seed for the random number generator; drawn at random when omitted
		#[arg(long)]
		seed: Option<u64>,
	},
}

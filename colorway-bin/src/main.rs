//! Build color palettes from a base color, an image, a keyword, or at random.

#![deny(unsafe_code, unsafe_op_in_unsafe_fn)]
#![warn(
    clippy::pedantic,
    clippy::cargo,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,
    clippy::unwrap_in_result,
    clippy::unneeded_field_pattern,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unnecessary_self_imports,
    clippy::str_to_string,
    clippy::string_to_string,
    clippy::string_slice,
    missing_docs,
    clippy::missing_docs_in_private_items,
    rustdoc::all,
    clippy::float_cmp_const,
    clippy::lossy_float_literal
)]
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::many_single_char_names,
    clippy::missing_panics_doc,
    clippy::unreadable_literal
)]

mod cli;

#[allow(clippy::wildcard_imports)]
use cli::*;

use std::{
    fmt::{self, Display},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use clap::Parser;
use colored::Colorize;
use colorway::{format_color, Color, Palette};
use image::DynamicImage;

/// Record the running time of a function and print the elapsed time
macro_rules! time {
    ($name: literal, $verbose: expr, $func_call: expr) => {{
        let start = Instant::now();
        let result = $func_call;
        if $verbose {
            println!("{} took {}ms", $name, start.elapsed().as_millis());
        }
        result
    }};
}

/// Error cases for building a palette
#[derive(Debug)]
enum PaletteError {
    /// Failed to read or decode the image file
    ImageLoad(image::ImageError),
    /// The keyword was empty or whitespace-only
    BlankKeyword,
}

impl Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PaletteError::ImageLoad(e) => write!(f, "Failed to load the image file: {e}"),
            PaletteError::BlankKeyword => write!(f, "The keyword must not be empty"),
        }
    }
}

fn main() -> ExitCode {
    let options = Options::parse();

    let result = run_generate_and_print_palette(&options);

    // Returning Result<_> uses Debug printing instead of Display
    if let Err(e) = result {
        eprintln!("{e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Builds a thread pool and then runs `generate_and_print_palette`
#[cfg(feature = "threads")]
fn run_generate_and_print_palette(options: &Options) -> Result<(), PaletteError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(usize::from(options.threads))
        .build()
        .expect("initialized thread pool");

    pool.install(|| generate_and_print_palette(options))
}

/// Runs `generate_and_print_palette` on a single thread
#[cfg(not(feature = "threads"))]
fn run_generate_and_print_palette(options: &Options) -> Result<(), PaletteError> {
    generate_and_print_palette(options)
}

/// Build the palette for the chosen subcommand and print it using the given options
fn generate_and_print_palette(options: &Options) -> Result<(), PaletteError> {
    let palette = generate_palette(options)?;

    if options.verbose {
        println!(
            "Generated a {} palette with {} colors",
            palette.kind().name(),
            palette.len()
        );
    }

    print_palette(&palette, options);

    Ok(())
}

/// Build a palette according to the subcommand arguments
fn generate_palette(options: &Options) -> Result<Palette, PaletteError> {
    match &options.command {
        Command::Color { hex, harmony } => {
            Ok(colorway::harmony_palette(&Color::from_hex(hex), harmony.kind()))
        }

        Command::Image {
            path,
            stride,
            alpha_threshold,
            bucket_size,
            max_colors,
            seed,
        } => {
            let img = time!("Image loading", options.verbose, load_image(path))?;
            let img = time!("Pixel conversion", options.verbose, img.into_rgba8());

            if options.verbose {
                println!("Decoded a {}x{} image", img.width(), img.height());
            }

            let pixels = palette::cast::from_component_slice(img.as_raw());
            let palette = time!(
                "Color extraction",
                options.verbose,
                colorway::dominant_palette_with(pixels, *stride, *alpha_threshold, *bucket_size, *max_colors)
            );

            if palette.is_empty() {
                eprintln!("No pixels survived extraction; generating a random palette instead");
                Ok(colorway::random_palette(resolve_seed(*seed)))
            } else {
                Ok(palette)
            }
        }

        Command::Keyword { word } => colorway::keyword_palette(word).ok_or(PaletteError::BlankKeyword),

        Command::Random { seed } => Ok(colorway::random_palette(resolve_seed(*seed))),
    }
}

/// Use the provided seed, or draw one when absent
fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}

/// Load the image at the given path
fn load_image(path: &PathBuf) -> Result<DynamicImage, PaletteError> {
    image::open(path).map_err(PaletteError::ImageLoad)
}

/// Print the palette as a color line or in the chosen export format
fn print_palette(palette: &Palette, options: &Options) {
    if let Some(export) = options.export {
        let text = colorway::export_palette(palette, options.output.format(), export.format());
        if text.ends_with('\n') {
            print!("{text}");
        } else {
            println!("{text}");
        }
    } else {
        println!("{}", palette_line(palette, options));
    }
}

/// Format all palette colors as a single line of text
fn palette_line(palette: &Palette, options: &Options) -> String {
    let format = options.output.format();
    palette
        .colors()
        .iter()
        .map(|color| colorized(format_color(color, format), color, options.colorize))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Colorize the formatted text using the color it describes
fn colorized(text: String, color: &Color, colorize: Option<ColorizeOutput>) -> String {
    let rgb = color.rgb();
    match colorize {
        Some(ColorizeOutput::Fg) => text.truecolor(rgb.r, rgb.g, rgb.b).to_string(),
        Some(ColorizeOutput::Bg) => text.on_truecolor(rgb.r, rgb.g, rgb.b).to_string(),
        None => text,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Options {
        Options::try_parse_from(std::iter::once("colorway").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn color_command_generates_the_requested_harmony() {
        let options = parse(&["color", "#3B82F6", "--harmony", "triadic"]);
        let palette = generate_palette(&options).unwrap();

        assert_eq!(palette.len(), 3);
        assert_eq!(palette.kind().name(), "triadic");
        assert_eq!(palette.colors()[0].hex(), "#3B82F6");
    }

    #[test]
    fn color_command_defaults_to_complementary() {
        let options = parse(&["color", "e11d48"]);
        let palette = generate_palette(&options).unwrap();

        assert_eq!(palette.len(), 2);
        assert_eq!(palette.kind().name(), "complementary");
    }

    #[test]
    fn harmony_arg_parses_kebab_case_names() {
        let options = parse(&["color", "#E11D48", "--harmony", "split-complementary"]);
        let palette = generate_palette(&options).unwrap();

        assert_eq!(palette.kind().name(), "split-complementary");
    }

    #[test]
    fn keyword_command_resolves_curated_words() {
        let options = parse(&["keyword", "ocean"]);
        let palette = generate_palette(&options).unwrap();

        assert_eq!(palette.len(), 5);
        assert_eq!(palette.colors()[0].hex(), "#013A63");
    }

    #[test]
    fn keyword_command_rejects_blank_words() {
        let options = parse(&["keyword", "   "]);
        assert!(generate_palette(&options).is_err());
    }

    #[test]
    fn random_command_is_deterministic_with_a_seed() {
        let first = generate_palette(&parse(&["random", "--seed", "42"])).unwrap();
        let second = generate_palette(&parse(&["random", "--seed", "42"])).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_image_file_is_an_error() {
        let options = parse(&["image", "no-such-file.png"]);
        assert!(generate_palette(&options).is_err());
    }

    #[test]
    fn line_output_joins_formatted_colors() {
        let options = parse(&["color", "#3B82F6", "--output", "rgb"]);
        let palette = generate_palette(&options).unwrap();

        assert_eq!(palette_line(&palette, &options), "rgb(59, 130, 246) rgb(246, 175, 60)");
    }
}

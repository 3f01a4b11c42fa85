use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use store_crop::config::{self, Config};
use store_crop::presets::{Platform, Preset};
use store_crop::{batch, output};

#[derive(Clone, Copy, ValueEnum)]
enum PlatformArg {
    Ios,
    Android,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Ios => Platform::Ios,
            PlatformArg::Android => Platform::Android,
        }
    }
}

#[derive(Parser)]
#[command(name = "store-crop")]
#[command(about = "Batch center-crop and resize images into app store presets")]
#[command(long_about = "\
Batch center-crop and resize images into app store presets

Every .png, .jpg and .jpeg directly inside SOURCE is cropped to the preset's
aspect ratio around its center, resized to the exact preset size, and written
to OUTPUT as <name>_<preset>_<w>x<h>.png. Files that cannot be decoded are
reported and skipped.

Presets:
  ios-icon         1024x1024   iphone-se        750x1334
  android-icon      512x512    iphone-12       1170x2532
  play-feature     1024x500    iphone-15-pro   1290x2796
  android-phone    1080x1920   ipad-pro        2048x2732
  android-phone-h  1920x1080   ipad-10         1640x2360
  android-7        1200x1920   android-10      1600x2560

Extra presets and PNG compression can be set in store-crop.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing the source images
    #[arg(required_unless_present = "list_presets")]
    source: Option<PathBuf>,

    /// Directory to write the resized PNGs into (created if missing)
    #[arg(required_unless_present = "list_presets")]
    output: Option<PathBuf>,

    /// Preset id, e.g. ios-icon or iphone-15-pro
    #[arg(required_unless_present = "list_presets")]
    preset: Option<String>,

    /// Config file (default: ./store-crop.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// List available presets and exit
    #[arg(long)]
    list_presets: bool,

    /// With --list-presets: only this platform's presets
    #[arg(long, value_enum, requires = "list_presets")]
    platform: Option<PlatformArg>,

    /// With --list-presets: print JSON instead of a table
    #[arg(long, requires = "list_presets")]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli.config.as_deref())?;
    let presets = config.preset_table()?;

    if cli.list_presets {
        let selected: Vec<&Preset> = match cli.platform {
            Some(platform) => presets.by_platform(platform.into()),
            None => presets.all().iter().collect(),
        };
        if cli.json {
            println!("{}", output::format_preset_json(&selected)?);
        } else {
            output::print_preset_list(&selected);
        }
        return Ok(());
    }

    // clap guarantees all three positionals when not listing
    let (Some(source), Some(out_dir), Some(preset_id)) = (cli.source, cli.output, cli.preset)
    else {
        return Err("missing arguments: <SOURCE> <OUTPUT> <PRESET>".into());
    };

    let summary = batch::run_batch(
        &source,
        &out_dir,
        &preset_id,
        &presets,
        config.output.compression,
        |event| output::print_batch_event(&event),
    )?;
    output::print_summary(&summary);

    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config, config::ConfigError> {
    match path {
        Some(path) => config::load_config(path),
        None => config::load_default_config(&std::env::current_dir()?),
    }
}

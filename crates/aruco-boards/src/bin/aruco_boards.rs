//! aruco-boards CLI: inspect ChArUco board configurations.

use aruco_boards::charuco::{
    charuco_hash_code_with, ArucoCharucoBoard, CharucoBoardConfig, CharucoBoardReport, HashScheme,
};
use aruco_boards::core::PredefinedDictionary;
use clap::{Args, Parser, Subcommand};
use log::{info, LevelFilter};
use std::path::PathBuf;

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "aruco-boards")]
#[command(about = "Describe ChArUco boards: layout, image size and content hash")]
#[command(version)]
struct Cli {
    /// Log debug output to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe the board stored in a JSON config.
    Describe {
        /// Path to the board config (JSON).
        #[arg(long)]
        config: PathBuf,

        /// Print the report as JSON instead of text.
        #[arg(long)]
        json: bool,

        /// Also write the JSON report to this path.
        #[arg(long)]
        out: Option<PathBuf>,

        /// Hash with the legacy scheme (marker length mixed twice).
        #[arg(long)]
        legacy_hash: bool,
    },

    /// Print the content hash of a board.
    Hash {
        #[arg(long)]
        squares_x: u32,

        #[arg(long)]
        squares_y: u32,

        #[arg(long)]
        marker_length: f32,

        #[arg(long)]
        square_length: f32,

        /// Use the legacy scheme (marker length mixed twice).
        #[arg(long)]
        legacy: bool,
    },

    /// List predefined dictionaries.
    Dictionaries,

    /// Write a board config (JSON).
    Init(InitArgs),
}

#[derive(Debug, Clone, Args)]
struct InitArgs {
    /// Output path for the config.
    #[arg(long)]
    out: PathBuf,

    #[arg(long, default_value = "5")]
    squares_x: u32,

    #[arg(long, default_value = "7")]
    squares_y: u32,

    /// Square side length (pixels for printing, metres for tracking).
    #[arg(long, default_value = "100.0")]
    square_length: f32,

    /// Marker side length, same unit as the square length.
    #[arg(long, default_value = "80.0")]
    marker_length: f32,

    /// Image margins in pixels.
    #[arg(long, default_value = "0")]
    margins: u32,

    #[arg(long, default_value = "DICT_4X4_50")]
    dictionary: PredefinedDictionary,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    aruco_boards::init_logging(level).map_err(|e| e.to_string())?;

    match cli.command {
        Commands::Describe {
            config,
            json,
            out,
            legacy_hash,
        } => run_describe(config, json, out, legacy_hash),
        Commands::Hash {
            squares_x,
            squares_y,
            marker_length,
            square_length,
            legacy,
        } => {
            let scheme = scheme(legacy);
            let hash =
                charuco_hash_code_with(scheme, squares_x, squares_y, marker_length, square_length);
            println!("{hash}");
            Ok(())
        }
        Commands::Dictionaries => run_dictionaries(),
        Commands::Init(args) => run_init(&args),
    }
}

fn scheme(legacy: bool) -> HashScheme {
    if legacy {
        HashScheme::Legacy
    } else {
        HashScheme::Content
    }
}

#[cfg_attr(feature = "tracing", tracing::instrument(level = "info", skip(out)))]
fn run_describe(
    config: PathBuf,
    json: bool,
    out: Option<PathBuf>,
    legacy_hash: bool,
) -> CliResult<()> {
    let cfg = CharucoBoardConfig::load_json(&config)?;
    info!("loaded {}", config.display());

    let board = ArucoCharucoBoard::new(cfg).with_hash_scheme(scheme(legacy_hash));
    let report = CharucoBoardReport::from_board(&board);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    if let Some(path) = out {
        report.write_json(&path)?;
        info!("report written to {}", path.display());
    }

    board.board()?;
    Ok(())
}

fn print_report(report: &CharucoBoardReport) {
    let cfg = &report.config;
    println!("charuco board {}x{}", cfg.squares_x, cfg.squares_y);
    println!("  dictionary:     {}", cfg.base.dictionary);
    println!("  square length:  {}", cfg.square_side_length);
    println!("  marker length:  {}", cfg.base.marker_side_length);
    println!("  margins:        {} px", cfg.base.margins_size);
    println!(
        "  image size:     {}x{} px",
        report.image_size.width, report.image_size.height
    );
    println!("  axis length:    {}", report.axis_length);
    println!("  hash:           {}", report.aruco_hash_code);
    match (report.marker_count, report.charuco_corner_count) {
        (Some(markers), Some(corners)) => {
            println!("  markers:        {markers}");
            println!("  corners:        {corners}");
        }
        _ => {
            let reason = report.error.as_deref().unwrap_or("unknown error");
            println!("  board:          invalid ({reason})");
        }
    }
}

fn run_dictionaries() -> CliResult<()> {
    for dict in PredefinedDictionary::ALL {
        println!(
            "{:>2}  {:<22} {}x{} bits, {} markers",
            dict.opencv_id(),
            dict.name(),
            dict.marker_size(),
            dict.marker_size(),
            dict.marker_count()
        );
    }
    Ok(())
}

fn run_init(args: &InitArgs) -> CliResult<()> {
    let cfg = CharucoBoardConfig::new(
        args.squares_x,
        args.squares_y,
        args.square_length,
        args.marker_length,
    )
    .with_margins(args.margins)
    .with_dictionary(args.dictionary);
    cfg.write_json(&args.out)?;
    println!("wrote {}", args.out.display());
    Ok(())
}

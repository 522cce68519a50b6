use clap::{Parser, Subcommand};
use qr_cheatsheet::layout::GridLayout;
use qr_cheatsheet::raster::{MAX_SCALE, save_module_image};
use qr_cheatsheet::{MaskPattern, Result, SheetConfig, Version, grid_document, render_page, tile_document};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "qrsheet", version, about = "QR code cheat sheet generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the full cheat sheet page
    Page {
        /// Output HTML file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=6))]
        max_version: Option<u8>,
        #[arg(long)]
        title: Option<String>,
        /// Leave out the zig-zag turn-around arrows
        #[arg(long)]
        no_arrows: bool,
    },
    /// Write one annotated grid as a standalone SVG
    Grid {
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=6))]
        version: u8,
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=7))]
        mask: u8,
        /// Output SVG file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Also write a PNG preview of the masked modules
        #[arg(long)]
        png: Option<PathBuf>,
        /// Pixels per module for the PNG preview
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=MAX_SCALE as i64))]
        scale: u32,
        #[arg(long)]
        no_arrows: bool,
    },
    /// Write one mask tile legend as a standalone SVG
    Tile {
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=7))]
        mask: u8,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the codeword numbering of one grid
    Dump {
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=6))]
        version: u8,
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=7))]
        mask: u8,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Page {
            out,
            max_version,
            title,
            no_arrows,
        } => page_cmd(out.as_deref(), max_version, title, no_arrows),
        Command::Grid {
            version,
            mask,
            out,
            png,
            scale,
            no_arrows,
        } => grid_cmd(version, mask, out.as_deref(), png.as_deref(), scale, no_arrows),
        Command::Tile { mask, out } => tile_cmd(mask, out.as_deref()),
        Command::Dump { version, mask } => dump_cmd(version, mask),
    };

    if let Err(err) = result {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn write_output(out: Option<&Path>, contents: &str) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, contents)?;
            log::info!("wrote {} bytes to {}", contents.len(), path.display());
        }
        None => println!("{contents}"),
    }
    Ok(())
}

fn page_cmd(
    out: Option<&Path>,
    max_version: Option<u8>,
    title: Option<String>,
    no_arrows: bool,
) -> Result<()> {
    let mut config = SheetConfig::from_env();
    if let Some(max_version) = max_version {
        config = config.with_max_version(max_version);
    }
    if let Some(title) = title {
        config.title = title;
    }
    if no_arrows {
        config.turn_arrows = false;
    }
    log::debug!("page config: {config:?}");
    write_output(out, &render_page(&config))
}

fn grid_cmd(
    version: u8,
    mask: u8,
    out: Option<&Path>,
    png: Option<&Path>,
    scale: u32,
    no_arrows: bool,
) -> Result<()> {
    let version = Version::try_from(version)?;
    let mask = MaskPattern::try_from(mask)?;
    write_output(out, &grid_document(version, mask, !no_arrows))?;
    if let Some(png) = png {
        save_module_image(&GridLayout::build(version, mask), scale, png)?;
    }
    Ok(())
}

fn tile_cmd(mask: u8, out: Option<&Path>) -> Result<()> {
    let mask = MaskPattern::try_from(mask)?;
    write_output(out, &tile_document(mask))
}

fn dump_cmd(version: u8, mask: u8) -> Result<()> {
    let version = Version::try_from(version)?;
    let mask = MaskPattern::try_from(mask)?;
    let layout = GridLayout::build(version, mask);
    let bytes = layout.bytes();

    println!(
        "Version {} ({}x{}), mask {} (reference {:03b})",
        version,
        layout.size(),
        layout.size(),
        mask,
        mask.reference()
    );
    println!(
        "Dark modules: {}, last codeword: {}",
        layout.modules().count_ones(),
        bytes
            .last_codeword()
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    print!("{}", bytes.dump());
    Ok(())
}

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use scanicon::{Error, GeneratedIcon, IconConfig};

/// Generate the scan tab bar icons (scan.png and scan-active.png).
#[derive(Parser, Debug)]
#[command(name = "scanicon", version, about)]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Canvas side length in pixels
    #[arg(long)]
    size: Option<u32>,

    /// Stroke width in pixels
    #[arg(long)]
    line_width: Option<u32>,

    /// Directory to write the icons into
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Print a JSON report of the generated files instead of status lines
    #[arg(long)]
    json: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    fn icon_config(&self) -> anyhow::Result<IconConfig> {
        let mut cfg = match &self.config {
            Some(path) => IconConfig::from_json_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => IconConfig::default(),
        };
        if let Some(size) = self.size {
            cfg.size = size;
        }
        if let Some(width) = self.line_width {
            cfg.line_width = width;
        }
        if let Some(dir) = &self.output_dir {
            cfg.output_dir = dir.clone();
        }
        Ok(cfg)
    }
}

fn init_logging(level: LevelFilter) {
    let config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();
    // A logger may already be installed when embedded; keep going without ours.
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

/// `dir` as an absolute path, resolved against the working directory when it
/// cannot be canonicalized.
fn absolute_dir(dir: &Path) -> PathBuf {
    std::fs::canonicalize(dir)
        .or_else(|_| std::env::current_dir().map(|cwd| cwd.join(dir)))
        .unwrap_or_else(|_| dir.to_path_buf())
}

fn write_summary<W: Write>(out: &mut W, cfg: &IconConfig, icons: &[GeneratedIcon]) -> io::Result<()> {
    for icon in icons {
        let name = icon
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| icon.path.display().to_string());
        writeln!(out, "[OK] Generated {}", name)?;
    }
    writeln!(out)?;
    writeln!(out, "[SUCCESS] Icons generated successfully!")?;
    writeln!(out, "[PATH] {}", absolute_dir(&cfg.output_dir).display())
}

/// A missing capability goes to `out` with its remediation hint; anything
/// else goes to `err` with its context chain.
fn write_error<O: Write, E: Write>(out: &mut O, err: &mut E, e: &anyhow::Error) -> io::Result<()> {
    if let Some(cap @ Error::MissingCapability { .. }) = e.downcast_ref::<Error>() {
        writeln!(out, "[ERROR] {}", cap)?;
        if let Some(hint) = cap.hint() {
            writeln!(out, "{}", hint)?;
        }
        Ok(())
    } else {
        writeln!(err, "[ERROR] {:#}", e)
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let cfg = cli.icon_config()?;
    let icons = scanicon::generate_icons(&cfg)?;
    let mut stdout = io::stdout().lock();
    if cli.json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&icons)?)?;
    } else {
        write_summary(&mut stdout, &cfg, &icons)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = write_error(&mut io::stdout(), &mut io::stderr(), &e);
            ExitCode::FAILURE
        }
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

const HELP: &str = "\
svgpi samples SVG paths into point lists.

USAGE:
  svgpi [OPTIONS] <config-json> <in-svg> [out-json]

  svgpi config.json in.svg
  svgpi config.json in.svg out/points.json

  The result is printed to stdout when <out-json> is not set.

OPTIONS:
  -h, --help      Prints help information
  -V, --version   Prints version information
  -v, --verbose   Prints debug messages
  -q, --quiet     Disables warnings

ARGS:
  <config-json>   A JSON job config. Keys: trim, minDistance, roundToNearest,
                  sampleFrequency, joinPathData, pretty, prettyIndent
  <in-svg>        Input file
  [out-json]      Output file. Parent directories are created
";

struct Args {
    config: PathBuf,
    input: PathBuf,
    output: Option<PathBuf>,
    log_level: log::LevelFilter,
}

fn main() {
    if let Err(e) = process() {
        eprintln!("Error: {:#}.", e);
        std::process::exit(1);
    }
}

fn process() -> anyhow::Result<()> {
    let args = match parse_args()? {
        Some(args) => args,
        None => return Ok(()),
    };

    log::set_logger(&LOGGER).map_err(|e| anyhow::anyhow!("{}", e))?;
    log::set_max_level(args.log_level);

    let config_text = fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read '{}'", args.config.display()))?;
    let config = svgpi_svg::Config::from_json(&config_text)
        .with_context(|| format!("invalid config '{}'", args.config.display()))?;

    let svg_text = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read '{}'", args.input.display()))?;

    let json = svgpi_svg::process_svg_str_to_json(&svg_text, &config)
        .with_context(|| format!("failed to process '{}'", args.input.display()))?;

    match args.output {
        Some(ref path) => write_output(path, &json)?,
        None => println!("{}", json),
    }

    Ok(())
}

fn parse_args() -> anyhow::Result<Option<Args>> {
    let mut input = pico_args::Arguments::from_env();

    if input.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return Ok(None);
    }

    if input.contains(["-V", "--version"]) {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(None);
    }

    let log_level = if input.contains(["-q", "--quiet"]) {
        log::LevelFilter::Off
    } else if input.contains(["-v", "--verbose"]) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    let mut free = input.free().map_err(|e| anyhow::anyhow!("{}", e))?.into_iter();
    let (config, svg) = match (free.next(), free.next()) {
        (Some(config), Some(svg)) => (config, svg),
        _ => anyhow::bail!("<config-json> and <in-svg> must be set. See --help"),
    };
    let output = free.next().map(PathBuf::from);

    if let Some(extra) = free.next() {
        anyhow::bail!("unexpected argument '{}'", extra);
    }

    Ok(Some(Args {
        config: PathBuf::from(config),
        input: PathBuf::from(svg),
        output,
        log_level,
    }))
}

fn write_output(path: &Path, json: &str) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create '{}'", dir.display()))?;
        }
    }

    fs::write(path, json).with_context(|| format!("failed to write '{}'", path.display()))
}


static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let target = if !record.target().is_empty() {
                record.target()
            } else {
                record.module_path().unwrap_or_default()
            };

            let line = record.line().unwrap_or(0);

            match record.level() {
                log::Level::Error => eprintln!("Error (in {}:{}): {}", target, line, record.args()),
                log::Level::Warn  => eprintln!("Warning (in {}:{}): {}", target, line, record.args()),
                log::Level::Info  => eprintln!("Info (in {}:{}): {}", target, line, record.args()),
                log::Level::Debug => eprintln!("Debug (in {}:{}): {}", target, line, record.args()),
                log::Level::Trace => eprintln!("Trace (in {}:{}): {}", target, line, record.args()),
            }
        }
    }

    fn flush(&self) {}
}

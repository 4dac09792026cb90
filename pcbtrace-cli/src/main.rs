use clap::{Parser, Subcommand, ValueEnum};
use pcbtrace::io::load_occupancy_grid;
use pcbtrace::{
    analyze, format_connectivity, format_detections, Connectivity, Detection, MatchConfig,
    Matcher, OccupancyGrid, TemplateLibrary,
};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Locate PCB parts by template and trace their connections")]
struct Cli {
    #[command(subcommand)]
    command: Command,
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,
    /// Write output to a file instead of stdout.
    #[arg(short, long, value_name = "FILE", global = true)]
    output: Option<PathBuf>,
    /// Scan anchor rows in parallel.
    #[arg(long, global = true)]
    parallel: bool,
    /// Enable tracing output for the pipeline stages.
    #[arg(long, global = true)]
    trace: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one template from a library.
    Template {
        /// Template library file.
        library: PathBuf,
        /// Zero-based template index.
        index: usize,
    },
    /// List every exact template match in an image.
    Locate {
        /// Template library file.
        library: PathBuf,
        /// Board image (BMP or PNG).
        image: PathBuf,
    },
    /// List matches, then which matches are connected to each other.
    Connect {
        /// Template library file.
        library: PathBuf,
        /// Board image (BMP or PNG).
        image: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct DetectionRecord {
    template_index: usize,
    row: usize,
    col: usize,
}

impl From<Detection> for DetectionRecord {
    fn from(value: Detection) -> Self {
        Self {
            template_index: value.template_index,
            row: value.row,
            col: value.col,
        }
    }
}

#[derive(Debug, Serialize)]
struct ConnectionRecord {
    component: usize,
    connected_to: Vec<usize>,
}

#[derive(Debug, Serialize)]
struct TemplateOutput {
    index: usize,
    rows: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Output {
    detections: Vec<DetectionRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    connections: Option<Vec<ConnectionRecord>>,
}

fn load_library(path: &Path) -> Result<TemplateLibrary, Box<dyn std::error::Error>> {
    let bytes = fs::read(path)
        .map_err(|err| format!("can't load template file {}: {err}", path.display()))?;
    Ok(TemplateLibrary::load(&bytes)?)
}

fn detect(
    library: &Path,
    image: &Path,
    parallel: bool,
) -> Result<(OccupancyGrid, Vec<Detection>), Box<dyn std::error::Error>> {
    let library = load_library(library)?;
    let grid = load_occupancy_grid(image)?;
    let detections = Matcher::new(&library)
        .with_config(MatchConfig { parallel })
        .match_grid(&grid);
    tracing::info!(
        width = grid.width(),
        height = grid.height(),
        detections = detections.len(),
        "detection finished"
    );
    Ok((grid, detections))
}

fn render_output(
    format: Format,
    detections: Vec<Detection>,
    connectivity: Option<&Connectivity>,
) -> Result<String, Box<dyn std::error::Error>> {
    match format {
        Format::Text => {
            let mut text = format_detections(&detections);
            if let Some(conn) = connectivity {
                text.push_str(&format_connectivity(conn));
            }
            Ok(text)
        }
        Format::Json => {
            let connections = connectivity.map(|conn| {
                conn.iter()
                    .map(|(component, peers)| ConnectionRecord {
                        component,
                        connected_to: peers.to_vec(),
                    })
                    .collect()
            });
            let output = Output {
                detections: detections.into_iter().map(DetectionRecord::from).collect(),
                connections,
            };
            Ok(serde_json::to_string_pretty(&output)? + "\n")
        }
    }
}

/// Formats an error and its source chain from their `Display` messages.
fn error_report(err: &dyn std::error::Error) -> String {
    let mut out = format!("error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(&format!("\n  caused by: {cause}"));
        source = cause.source();
    }
    out
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error_report(err.as_ref()));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("pcbtrace=info".parse()?))
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    let text = match &cli.command {
        Command::Template { library, index } => {
            let library = load_library(library)?;
            let template = library.get(*index)?;
            match cli.format {
                Format::Text => format!("Template data:\n{}", template.render()),
                Format::Json => {
                    let output = TemplateOutput {
                        index: *index,
                        rows: template.render().lines().map(str::to_owned).collect(),
                    };
                    serde_json::to_string_pretty(&output)? + "\n"
                }
            }
        }
        Command::Locate { library, image } => {
            let (_, detections) = detect(library, image, cli.parallel)?;
            render_output(cli.format, detections, None)?
        }
        Command::Connect { library, image } => {
            let (mut grid, detections) = detect(library, image, cli.parallel)?;
            let connectivity = analyze(&mut grid, &detections)?;
            render_output(cli.format, detections, Some(&connectivity))?
        }
    };

    match cli.output {
        Some(path) => fs::write(path, text)?,
        None => print!("{text}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::error_report;
    use pcbtrace::PcbError;

    #[test]
    fn error_report_uses_display_message() {
        let err = PcbError::IndexOutOfRange {
            index: 7,
            len: 3,
            context: "template",
        };
        assert_eq!(
            error_report(&err),
            "error: template index 7 out of range (len 3)"
        );
    }

    #[derive(Debug)]
    struct LoadFailed(PcbError);

    impl std::fmt::Display for LoadFailed {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "can't load template file lib.bin")
        }
    }

    impl std::error::Error for LoadFailed {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn error_report_lists_sources() {
        let err = LoadFailed(PcbError::MalformedLibrary { needed: 129, got: 40 });
        assert_eq!(
            error_report(&err),
            "error: can't load template file lib.bin\n  caused by: malformed template library: need 129 bytes, got 40"
        );
    }
}

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use dispatch_ops::{Config, OperatorExtractor, OutputFormat, ProfileRegistry, REGISTRY};

#[derive(Parser)]
#[command(name = "dispatch-ops")]
#[command(about = "Extract the operator names of an interpreter's dispatch switch as an HTML fragment")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Scan the default source (src/weblisp.js)
    dispatch-ops

    # Scan the typed source, profile picked from the extension
    dispatch-ops src/weblisp.ts

    # Force a profile and emit JSON
    dispatch-ops src/weblisp.ts --profile javascript --format json

    # Use extra profiles from a TOML file
    dispatch-ops ops.lua --config dispatch-ops.toml

    # Write the fragment next to the docs
    dispatch-ops --output docs/operators.html
"#)]
pub struct Cli {
    /// Interpreter source file to scan
    #[arg(default_value = "src/weblisp.js")]
    pub input: PathBuf,

    /// Scan profile to use (default: chosen by file extension)
    #[arg(long)]
    pub profile: Option<String>,

    /// TOML file with additional scan profiles
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// List known profiles and exit
    #[arg(long)]
    pub list_profiles: bool,
}

pub fn load_registry(config: Option<&Path>) -> anyhow::Result<ProfileRegistry> {
    match config {
        Some(path) => {
            let config = Config::load(path)
                .with_context(|| format!("loading profiles from {}", path.display()))?;
            Ok(config.registry())
        }
        None => Ok(REGISTRY.clone()),
    }
}

pub fn list_profiles(registry: &ProfileRegistry) -> anyhow::Result<()> {
    write_profiles(registry, &mut io::stdout().lock())?;
    Ok(())
}

/// One line per profile: name, region kind, claimed extensions
pub fn write_profiles<W: Write>(registry: &ProfileRegistry, out: &mut W) -> io::Result<()> {
    for name in registry.profile_names() {
        if let Some(profile) = registry.get_by_name(name) {
            let region = if profile.is_bounded() { "bounded" } else { "unbounded" };
            let extensions = if profile.extensions.is_empty() {
                "-".to_string()
            } else {
                profile
                    .extensions
                    .iter()
                    .map(|ext| format!(".{ext}"))
                    .collect::<Vec<_>>()
                    .join(" ")
            };
            writeln!(out, "{:<12} {:<10} {}", name, region, extensions)?;
        }
    }
    Ok(())
}

/// Scans `input` and renders it in the requested format, without a trailing newline.
pub fn render(
    registry: &ProfileRegistry,
    input: &Path,
    profile: Option<&str>,
    format: &str,
) -> anyhow::Result<String> {
    let format = OutputFormat::from_name(format)
        .with_context(|| format!("unsupported output format '{format}'"))?;
    let extractor = OperatorExtractor::for_file(registry, input, profile)?;

    let rendered = match format {
        OutputFormat::Text => extractor.extract_file(input)?.to_html(),
        OutputFormat::Json => serde_json::to_string_pretty(&extractor.report(input)?)?,
    };

    Ok(rendered)
}

pub fn write_rendered<W: Write>(out: &mut W, rendered: &str) -> io::Result<()> {
    writeln!(out, "{rendered}")?;
    out.flush()
}

pub fn extract(
    registry: &ProfileRegistry,
    input: &Path,
    profile: Option<&str>,
    format: &str,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let rendered = render(registry, input, profile, format)?;

    match output {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            write_rendered(&mut file, &rendered)
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!("wrote {}", path.display());
        }
        None => write_rendered(&mut io::stdout().lock(), &rendered)?,
    }

    Ok(())
}

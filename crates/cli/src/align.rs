//! `skosalign align`: label-based alignment of two concept schemes.

use std::path::{Path, PathBuf};

use clap::Args;
use skosalign_align::{AlignConfig, AlignResult};
use skosalign_io::{guess_format, load_graph, save_graph, IoError, RdfFormat};
use tracing::info;

use crate::exit_codes::{
    io_exit_code, EXIT_ALIGN_INVALID_CONFIG, EXIT_ALIGN_WRITE, EXIT_ERROR, EXIT_USAGE,
};
use crate::CliError;

#[derive(Args, Debug)]
pub struct AlignArgs {
    /// Left-hand concept scheme (its format is also the output format)
    #[arg(long, short = 'l')]
    pub left: PathBuf,

    /// Right-hand concept scheme
    #[arg(long, short = 'r')]
    pub right: PathBuf,

    /// File to write the same-entity assertions to
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Alignment config (TOML); flags below override its values
    #[arg(long, short = 'c', env = "SKOSALIGN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Minimum number of agreeing labels required to emit a pair
    #[arg(long)]
    pub min_score: Option<u32>,

    /// Relation carrying the labels
    #[arg(long, value_name = "IRI")]
    pub label_relation: Option<String>,

    /// Relation emitted between aligned resources
    #[arg(long, value_name = "IRI")]
    pub same_as_relation: Option<String>,

    /// Left input format (default: inferred from extension)
    #[arg(long, value_name = "FORMAT")]
    pub left_format: Option<String>,

    /// Right input format (default: inferred from extension)
    #[arg(long, value_name = "FORMAT")]
    pub right_format: Option<String>,

    /// Write the JSON run report to file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Print the JSON run report to stdout
    #[arg(long)]
    pub json: bool,
}

fn align_err(code: u8, msg: impl Into<String>) -> CliError {
    CliError { code, message: msg.into(), hint: None }
}

fn io_err(err: IoError) -> CliError {
    let hint = match &err {
        IoError::UnsupportedFormat(_) => Some(format!(
            "use --left-format/--right-format with one of: {}",
            RdfFormat::ALL.map(|f| f.name()).join(", ")
        )),
        _ => None,
    };
    CliError { code: io_exit_code(&err), message: err.to_string(), hint }
}

/// Read the config file (if any), apply flag overrides, validate.
pub(crate) fn resolve_config(args: &AlignArgs) -> Result<AlignConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => read_config(path)?,
        None => AlignConfig::default(),
    };

    if let Some(min_score) = args.min_score {
        config.min_score = min_score;
    }
    if let Some(ref iri) = args.label_relation {
        config.preferred_label = iri.clone();
    }
    if let Some(ref iri) = args.same_as_relation {
        config.symmetric_relation = iri.clone();
    }

    config
        .validate()
        .map_err(|e| align_err(EXIT_ALIGN_INVALID_CONFIG, e.to_string()))?;
    Ok(config)
}

pub(crate) fn read_config(path: &Path) -> Result<AlignConfig, CliError> {
    let config_str = std::fs::read_to_string(path).map_err(|e| {
        align_err(EXIT_ALIGN_INVALID_CONFIG, format!("cannot read config {}: {e}", path.display()))
    })?;
    AlignConfig::from_toml(&config_str)
        .map_err(|e| align_err(EXIT_ALIGN_INVALID_CONFIG, format!("{}: {e}", path.display())))
}

fn resolve_format(path: &Path, explicit: Option<&str>) -> Result<RdfFormat, CliError> {
    match explicit {
        Some(name) => RdfFormat::from_name(name).map_err(|e| {
            align_err(EXIT_USAGE, e.to_string()).with_hint(format!(
                "supported formats: {}",
                RdfFormat::ALL.map(|f| f.name()).join(", ")
            ))
        }),
        None => guess_format(path).map_err(io_err),
    }
}

pub fn cmd_align(args: AlignArgs, quiet: bool) -> Result<(), CliError> {
    let config = resolve_config(&args)?;

    let left_format = resolve_format(&args.left, args.left_format.as_deref())?;
    let right_format = resolve_format(&args.right, args.right_format.as_deref())?;

    if !quiet {
        eprintln!("loading {} ({left_format})", args.left.display());
    }
    let left = load_graph(&args.left, left_format).map_err(io_err)?;
    if !quiet {
        eprintln!("loading {} ({right_format})", args.right.display());
    }
    let right = load_graph(&args.right, right_format).map_err(io_err)?;

    let result = skosalign_align::run(&config, &left, &right)
        .map_err(|e| align_err(EXIT_ALIGN_INVALID_CONFIG, e.to_string()))?;

    save_graph(&result.output, &args.output, left_format).map_err(io_err)?;
    if !quiet {
        eprintln!("wrote {}", args.output.display());
    }

    if args.report.is_some() || args.json {
        let json_str = serde_json::to_string_pretty(&result)
            .map_err(|e| align_err(EXIT_ERROR, format!("JSON serialization error: {e}")))?;

        if let Some(ref path) = args.report {
            write_report(path, &json_str)?;
            if !quiet {
                eprintln!("wrote {}", path.display());
            }
        }

        if args.json {
            println!("{json_str}");
        }
    }

    info!(
        promoted = result.summary.promoted,
        emitted = result.summary.emitted_triples,
        "alignment finished"
    );

    if !quiet {
        print_advisory(&result);
    }

    Ok(())
}

/// Atomic report save: write `<name>.tmp`, then rename over the target.
/// Runs after the output graph is in place.
fn write_report(path: &Path, json: &str) -> Result<(), CliError> {
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    let result = std::fs::write(&tmp_path, json).and_then(|()| std::fs::rename(&tmp_path, path));
    if let Err(e) = result {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(align_err(
            EXIT_ALIGN_WRITE,
            format!("cannot write report {}: {e}", path.display()),
        ));
    }
    Ok(())
}

/// Human summary to stderr: exclusions, unmatched resources, totals.
fn print_advisory(result: &AlignResult) {
    let s = &result.summary;

    for c in &result.excluded {
        eprintln!(
            "  excluded  {} <-> {} (score {} < {})",
            c.left, c.right, c.score, result.meta.min_score
        );
    }
    for resource in &result.unmatched {
        eprintln!("  unmatched {resource}");
    }

    if s.left_index.overwritten > 0 || s.right_index.overwritten > 0 {
        eprintln!(
            "note: {} left and {} right label keys were shared by several resources (last kept)",
            s.left_index.overwritten, s.right_index.overwritten,
        );
    }

    eprintln!(
        "aligned: {} candidates, {} promoted ({} triples), {} excluded below {}, {} unmatched",
        s.candidates,
        s.promoted,
        s.emitted_triples,
        s.excluded,
        result.meta.min_score,
        s.unmatched,
    );
}

pub fn cmd_validate(config_path: PathBuf) -> Result<(), CliError> {
    let config = read_config(&config_path)?;
    eprintln!(
        "valid: alignment '{}' (labels {}, emits {}, min_score {})",
        config.name, config.preferred_label, config.symmetric_relation, config.min_score,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> AlignArgs {
        AlignArgs {
            left: "left.ttl".into(),
            right: "right.nt".into(),
            output: "out.ttl".into(),
            config: None,
            min_score: None,
            label_relation: None,
            same_as_relation: None,
            left_format: None,
            right_format: None,
            report: None,
            json: false,
        }
    }

    #[test]
    fn defaults_without_config() {
        let config = resolve_config(&args()).unwrap();
        assert_eq!(config, AlignConfig::default());
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("align.toml");
        std::fs::write(&path, "name = \"t\"\nmin_score = 5\n").unwrap();

        let mut a = args();
        a.config = Some(path);
        a.min_score = Some(1);
        let config = resolve_config(&a).unwrap();
        assert_eq!(config.name, "t");
        assert_eq!(config.min_score, 1);
    }

    #[test]
    fn invalid_override_is_config_error() {
        let mut a = args();
        a.label_relation = Some("prefLabel".into());
        let err = resolve_config(&a).unwrap_err();
        assert_eq!(err.code, EXIT_ALIGN_INVALID_CONFIG);
    }

    #[test]
    fn explicit_format_beats_extension() {
        let f = resolve_format(Path::new("scheme.data"), Some("nt")).unwrap();
        assert_eq!(f, RdfFormat::NTriples);
    }

    #[test]
    fn unknown_extension_has_hint() {
        let err = resolve_format(Path::new("scheme.data"), None).unwrap_err();
        assert_eq!(err.code, crate::exit_codes::EXIT_ALIGN_LOAD);
        assert!(err.hint.unwrap().contains("turtle"));
    }

    #[test]
    fn report_write_failure_leaves_no_temp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        std::fs::create_dir(&path).unwrap();

        let err = write_report(&path, "{}").unwrap_err();
        assert_eq!(err.code, EXIT_ALIGN_WRITE);
        assert!(!dir.path().join("report.json.tmp").exists());
        assert!(path.is_dir());
    }

    #[test]
    fn report_replaces_previous() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        std::fs::write(&path, "old").unwrap();

        write_report(&path, "{\"new\":true}").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\"new\":true}");
        assert!(!dir.path().join("report.json.tmp").exists());
    }

    #[test]
    fn unknown_format_name_is_usage_error() {
        let err = resolve_format(Path::new("scheme.ttl"), Some("jsonld")).unwrap_err();
        assert_eq!(err.code, EXIT_USAGE);
    }
}

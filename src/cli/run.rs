use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};

use super::{args::Arguments, report};
use crate::collect::{CollectOptions, Collection, collect_includes};
use crate::config::{Config, ConfigLoadResult, load_config, validate_extension, validate_guard};

/// Outcome of one CLI invocation, used for the verbose summary.
#[derive(Debug)]
pub struct RunResult {
    pub collection: Collection,
    pub config_path: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Settings after merging defaults, config file and command-line flags.
#[derive(Debug, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub options: CollectOptions,
    pub guard: Option<String>,
}

/// Merge `config` with the command-line flags; flags win.
///
/// `--ext` replaces the configured extensions, `--ignore` extends the
/// configured ignores.
pub fn resolve_settings(args: &Arguments, config: Config) -> Result<ResolvedSettings> {
    let extensions = if args.extensions.is_empty() {
        config.extensions
    } else {
        for ext in &args.extensions {
            validate_extension(ext).with_context(|| format!("Invalid --ext value: \"{}\"", ext))?;
        }
        args.extensions.clone()
    };

    let mut ignores = config.ignores;
    ignores.extend(args.ignores.iter().cloned());

    let guard = args.guard.clone().or(config.guard);
    if let Some(guard) = &guard {
        validate_guard(guard).context("Invalid --guard value")?;
    }

    Ok(ResolvedSettings {
        options: CollectOptions {
            extensions,
            ignores,
            keep_going: args.keep_going,
        },
        guard,
    })
}

/// Collect includes and write them out.
///
/// Nothing is written until the whole tree has been scanned, so a failed
/// run leaves stdout (or the output file) untouched.
pub fn run(args: &Arguments) -> Result<RunResult> {
    let ConfigLoadResult {
        config,
        path: config_path,
    } = if args.no_config {
        ConfigLoadResult {
            config: Config::default(),
            path: None,
        }
    } else {
        load_config(&args.root)?
    };

    let settings = resolve_settings(args, config)?;
    let collection = collect_includes(&args.root, &settings.options)?;
    let guard = settings.guard.as_deref();

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            report::render_to(&collection.headers, guard, &mut writer)
                .and_then(|()| writer.flush())
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
        }
        None => {
            let mut writer = BufWriter::new(io::stdout().lock());
            report::render_to(&collection.headers, guard, &mut writer)
                .and_then(|()| writer.flush())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(RunResult {
        collection,
        config_path,
        output: args.output.clone(),
    })
}

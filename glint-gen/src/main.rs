use std::{
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::{bail, Context};
use glint_shader::BuildOptions;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod pair;

use config::{Command, Config};
use pair::ShaderPair;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match config::parse_args(std::env::args().skip(1))? {
        Command::Help => {
            println!("{}", config::USAGE);
            return Ok(());
        }
        Command::Run(config) => config,
    };

    let paths = if config.paths.is_empty() {
        match prompt_path()? {
            Some(path) => vec![path],
            None => return Ok(()),
        }
    } else {
        config.paths.clone()
    };

    let (pairs, mut failed) = collect_pairs(&paths);
    let total = pairs.len() + failed;
    for pair in &pairs {
        match process(pair, &config) {
            Ok(output) => info!(shader = %pair.base_name, output = %output.display(), "wrote bindings"),
            Err(err) => {
                error!(shader = %pair.base_name, "{err:#}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {total} shader inputs failed");
    }
    Ok(())
}

fn prompt_path() -> anyhow::Result<Option<PathBuf>> {
    print!("shader path : ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading shader path from stdin")?;

    let path = config::clean_path(&line);
    Ok((!path.as_os_str().is_empty()).then_some(path))
}

/// Pairs for every usable path, plus how many paths could not be turned
/// into pairs. Bad paths are logged and skipped.
fn collect_pairs(paths: &[PathBuf]) -> (Vec<ShaderPair>, usize) {
    let mut pairs = Vec::new();
    let mut failed = 0;
    for path in paths {
        let found = if path.is_dir() {
            pair::discover(path)
        } else {
            ShaderPair::from_file(path)
                .map(|pair| vec![pair])
                .map_err(anyhow::Error::from)
        };
        match found {
            Ok(found) => pairs.extend(found),
            Err(err) => {
                error!(path = %path.display(), "{err:#}");
                failed += 1;
            }
        }
    }
    (pairs, failed)
}

fn process(pair: &ShaderPair, config: &Config) -> anyhow::Result<PathBuf> {
    let source = pair.read_source()?;
    let build_options = BuildOptions {
        strict: config.strict,
    };
    let generated = glint_shader::generate(&pair.base_name, &source, &build_options, &config.emit)
        .with_context(|| format!("generating bindings for {}", pair.primary.display()))?;

    let output = pair.output_path(&generated.file_name, config.out_dir.as_deref());
    write_output(&output, &generated.source)?;
    Ok(output)
}

fn write_output(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
}

use std::path::PathBuf;

use anyhow::{bail, Context};
use glint_shader::EmitOptions;

pub const USAGE: &str = "\
usage: glint-gen [--strict] [--out-dir DIR] [--module NAME] [--runtime PATH] [PATH...]

Generates Rust bindings for GLSL .vert/.frag pairs. Each PATH is a shader
file (its partner is picked up automatically) or a directory of shaders.
Without a PATH the shader path is read from stdin.

  --strict         reject duplicate uniforms/locations and unsized attribute types
  --out-dir DIR    write bindings to DIR instead of next to the shaders
  --module NAME    module wrapping the generated type (default: shaders)
  --runtime PATH   crate providing the binding prelude (default: glint_lib)
  -h, --help       print this message

Log verbosity follows RUST_LOG (default: info).";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub paths: Vec<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub strict: bool,
    pub emit: EmitOptions,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(Config),
    Help,
}

pub fn parse_args<I>(args: I) -> anyhow::Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut config = Config::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--strict" => config.strict = true,
            "--out-dir" => {
                let dir = args.next().context("--out-dir expects a directory")?;
                config.out_dir = Some(PathBuf::from(dir));
            }
            "--module" => {
                config.emit.module = args.next().context("--module expects a name")?;
            }
            "--runtime" => {
                config.emit.runtime = args.next().context("--runtime expects a crate path")?;
            }
            flag if flag.starts_with("--") => bail!("unknown option {flag}\n\n{USAGE}"),
            path => config.paths.push(clean_path(path)),
        }
    }

    Ok(Command::Run(config))
}

/// Strips the quotes file managers add when a path is pasted or dropped.
pub fn clean_path(raw: &str) -> PathBuf {
    PathBuf::from(raw.trim().replace('"', ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<Command> {
        parse_args(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn test_defaults() {
        let Command::Run(config) = parse(&[]).unwrap() else {
            panic!("expected a run command");
        };
        assert!(config.paths.is_empty());
        assert!(!config.strict);
        assert_eq!(config.out_dir, None);
        assert_eq!(config.emit, EmitOptions::default());
    }

    #[test]
    fn test_all_options() {
        let command = parse(&[
            "--strict",
            "--out-dir",
            "gen",
            "--module",
            "bindings",
            "--runtime",
            "crate::gfx",
            "shaders/basic.vert",
            "\"shaders/lit\"",
        ])
        .unwrap();

        let expected = Config {
            paths: vec![PathBuf::from("shaders/basic.vert"), PathBuf::from("shaders/lit")],
            out_dir: Some(PathBuf::from("gen")),
            strict: true,
            emit: EmitOptions {
                module: "bindings".to_string(),
                runtime: "crate::gfx".to_string(),
            },
        };
        assert_eq!(command, Command::Run(expected));
    }

    #[test]
    fn test_help() {
        assert_eq!(parse(&["shader.vert", "--help"]).unwrap(), Command::Help);
    }

    #[test]
    fn test_bad_arguments() {
        assert!(parse(&["--out-dir"]).is_err());
        assert!(parse(&["--verbose"]).is_err());
    }

    #[test]
    fn test_clean_path() {
        assert_eq!(clean_path("  \"C:\\shaders\\basic.vert\"\n"), PathBuf::from("C:\\shaders\\basic.vert"));
    }
}

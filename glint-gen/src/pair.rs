use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::Context;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum PairError {
    #[error("{shader} has no paired shader, expected {expected}")]
    MissingPairedFile { shader: PathBuf, expected: PathBuf },

    #[error("{0} is not a .vert or .frag shader")]
    UnsupportedExtension(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Vertex,
    Fragment,
}

impl Stage {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("vert") {
            Some(Stage::Vertex)
        } else if extension.eq_ignore_ascii_case("frag") {
            Some(Stage::Fragment)
        } else {
            None
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Stage::Vertex => "vert",
            Stage::Fragment => "frag",
        }
    }

    pub fn partner(self) -> Self {
        match self {
            Stage::Vertex => Stage::Fragment,
            Stage::Fragment => Stage::Vertex,
        }
    }
}

/// One `.vert`/`.frag` pair sharing a file stem. `primary` is read first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderPair {
    pub base_name: String,
    pub primary: PathBuf,
    pub partner: PathBuf,
}

impl ShaderPair {
    pub fn from_file(path: &Path) -> Result<Self, PairError> {
        let stage =
            Stage::from_path(path).ok_or_else(|| PairError::UnsupportedExtension(path.to_path_buf()))?;
        let base_name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            base_name,
            primary: path.to_path_buf(),
            partner: path.with_extension(stage.partner().extension()),
        })
    }

    /// Primary text followed by the partner's.
    pub fn read_source(&self) -> anyhow::Result<String> {
        let mut source = std::fs::read_to_string(&self.primary)
            .with_context(|| format!("reading {}", self.primary.display()))?;

        if !self.partner.is_file() {
            return Err(PairError::MissingPairedFile {
                shader: self.primary.clone(),
                expected: self.partner.clone(),
            }
            .into());
        }
        let partner = std::fs::read_to_string(&self.partner)
            .with_context(|| format!("reading {}", self.partner.display()))?;
        source.push_str(&partner);

        Ok(source)
    }

    pub fn output_path(&self, file_name: &str, out_dir: Option<&Path>) -> PathBuf {
        let dir = match out_dir {
            Some(dir) => dir,
            None => self.primary.parent().unwrap_or_else(|| Path::new("")),
        };
        dir.join(file_name)
    }
}

/// Every distinct shader stem in `dir`, sorted by stem. Pairs start from the
/// vertex shader when one exists.
pub fn discover(dir: &Path) -> anyhow::Result<Vec<ShaderPair>> {
    let mut by_stem = BTreeMap::<String, PathBuf>::new();

    let entries =
        std::fs::read_dir(dir).with_context(|| format!("reading directory {}", dir.display()))?;
    for entry in entries {
        let path = entry
            .with_context(|| format!("reading directory {}", dir.display()))?
            .path();
        if !path.is_file() {
            continue;
        }
        let Some(stage) = Stage::from_path(&path) else {
            continue;
        };
        let Some(stem) = path.file_stem().map(|stem| stem.to_string_lossy().into_owned()) else {
            continue;
        };

        if stage == Stage::Vertex || !by_stem.contains_key(&stem) {
            by_stem.insert(stem, path);
        }
    }

    let pairs = by_stem
        .values()
        .map(|path| ShaderPair::from_file(path))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(dir = %dir.display(), pairs = pairs.len(), "discovered shaders");
    Ok(pairs)
}

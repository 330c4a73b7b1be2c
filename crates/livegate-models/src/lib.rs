//! Liveness model manifest and on-disk integrity verification.

use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use std::{fs, io};
use thiserror::Error;

/// Model file descriptor: URL, expected filename, SHA-256 checksum,
/// human-readable size.
pub struct ModelFile {
    pub name: &'static str,
    pub url: &'static str,
    pub sha256: &'static str,
    pub size_display: &'static str,
}

/// The liveness classifier. Checksum taken from the release's SHA256SUMS.
pub const LIVENESS_MODEL: ModelFile = ModelFile {
    name: "liveness_s10_40.onnx",
    url: "https://github.com/sovren-software/livegate/releases/download/models-v1/liveness_s10_40.onnx",
    sha256: "9c41d0f7a2be8a63f5dd14c29e7b14870a9255dc36e01a48cc0f6de23a8be77d",
    size_display: "1.9 MB",
};

/// Every model the pipeline needs at runtime.
pub const MODELS: &[ModelFile] = &[LIVENESS_MODEL];

#[derive(Error, Debug)]
pub enum ModelIntegrityError {
    #[error("model file not found: {name} ({path})")]
    MissingModel { name: &'static str, path: PathBuf },

    #[error("failed to read model file: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "model checksum mismatch for {name} ({path})\n  expected: {expected}\n  got:      {got}"
    )]
    ChecksumMismatch {
        name: &'static str,
        path: PathBuf,
        expected: String,
        got: String,
    },
}

impl ModelFile {
    /// Where this model lives inside a model directory.
    pub fn path_in(&self, model_dir: &Path) -> PathBuf {
        model_dir.join(self.name)
    }

    /// Verify that the file in `model_dir` exists and matches the manifest
    /// checksum.
    pub fn verify_in(&self, model_dir: &Path) -> Result<(), ModelIntegrityError> {
        let path = self.path_in(model_dir);
        if !path.exists() {
            return Err(ModelIntegrityError::MissingModel {
                name: self.name,
                path,
            });
        }

        let digest = sha256_file_hex(&path)?;
        if digest != self.sha256 {
            return Err(ModelIntegrityError::ChecksumMismatch {
                name: self.name,
                path,
                expected: self.sha256.to_string(),
                got: digest,
            });
        }

        Ok(())
    }
}

/// Compute SHA-256 hex digest of a file.
pub fn sha256_file_hex(path: &Path) -> Result<String, ModelIntegrityError> {
    let io_err = |source| ModelIntegrityError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = fs::File::open(path).map_err(io_err)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher).map_err(io_err)?;

    Ok(format!("{:x}", hasher.finalize()))
}

/// Verify every manifest model under `model_dir`, failing on the first
/// missing or corrupt file.
pub fn verify_models_dir(model_dir: &Path) -> Result<(), ModelIntegrityError> {
    for model in MODELS {
        model.verify_in(model_dir)?;
    }

    Ok(())
}

//! Resolve `previous_commit` from git for the exporter's source artifact.
//! Everything else is delegated to the wrapped provider.

use std::path::Path;
use std::process::Command;

use super::{RevisionError, RevisionProvider, VocabularyRevision};

#[derive(Debug, Clone)]
pub struct GitFileHistory<P> {
    inner: P,
    git: String,
}

impl<P: RevisionProvider> GitFileHistory<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            git: "git".to_string(),
        }
    }

    /// Use a specific git executable instead of the one on `PATH`.
    pub fn with_git_binary(mut self, git: impl Into<String>) -> Self {
        self.git = git.into();
        self
    }

    fn last_commit_for(&self, file: &Path) -> Result<Option<String>, RevisionError> {
        let mut command = Command::new(&self.git);
        if let Some(dir) = file.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            command.current_dir(dir);
        }
        let output = command
            .args(["log", "-n", "1", "--format=%H", "--"])
            .arg(file.file_name().unwrap_or(file.as_os_str()))
            .output()
            .map_err(|err| RevisionError::Git(format!("unable to run '{}': {err}", self.git)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RevisionError::Git(format!(
                "'{} log' exited with {}: {}",
                self.git,
                output.status,
                stderr.trim()
            )));
        }
        Ok(parse_log_output(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// First non-empty line of `git log --format=%H`, if any.
fn parse_log_output(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

impl<P: RevisionProvider> RevisionProvider for GitFileHistory<P> {
    fn collection_version(&self) -> Result<String, RevisionError> {
        self.inner.collection_version()
    }

    fn previous_commit(&self, source_artifact: &Path) -> Result<Option<String>, RevisionError> {
        match self.last_commit_for(source_artifact)? {
            Some(commit) => Ok(Some(commit)),
            None => self.inner.previous_commit(source_artifact),
        }
    }

    fn vocabulary_revision(&self, name: &str) -> Result<VocabularyRevision, RevisionError> {
        self.inner.vocabulary_revision(name)
    }
}

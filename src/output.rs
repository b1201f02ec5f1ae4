use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::codec::CorpusWriter;
use crate::error::{FilterError, Result};

/// An output that is written under `<target>_` and only appears at `target`
/// once [`PendingOutput::commit`] succeeds.
///
/// Dropping an uncommitted output removes the temporary file; whatever
/// already exists at `target` is left alone.
pub struct PendingOutput {
    target: PathBuf,
    temp: PathBuf,
    writer: Option<CorpusWriter>,
    committed: bool,
}

pub fn temp_path_for(target: &Path) -> PathBuf {
    let mut name = target.as_os_str().to_os_string();
    name.push("_");
    PathBuf::from(name)
}

impl PendingOutput {
    pub fn create(target: &Path) -> Result<Self> {
        let temp = temp_path_for(target);
        let writer = CorpusWriter::create(&temp)?;
        Ok(Self {
            target: target.to_path_buf(),
            temp,
            writer: Some(writer),
            committed: false,
        })
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn temp_path(&self) -> &Path {
        &self.temp
    }

    /// Flush and close the stream, leaving the data under the temporary name.
    pub fn close(&mut self) -> Result<()> {
        if let Some(writer) = self.writer.take() {
            writer.finish().map_err(|source| FilterError::Write {
                path: self.temp.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// Close the stream if still open and rename it into place.
    pub fn commit(mut self) -> Result<()> {
        self.close()?;
        fs::rename(&self.temp, &self.target).map_err(|source| FilterError::Rename {
            from: self.temp.clone(),
            to: self.target.clone(),
            source,
        })?;
        info!(action = "commit", component = "output", target = ?self.target, "Output renamed into place");
        self.committed = true;
        Ok(())
    }
}

impl Write for PendingOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.writer.as_mut() {
            Some(w) => w.write(buf),
            None => Err(io::Error::new(io::ErrorKind::Other, "output already closed")),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.writer.as_mut() {
            Some(w) => w.flush(),
            None => Ok(()),
        }
    }
}

impl Drop for PendingOutput {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        drop(self.writer.take());
        if let Err(e) = fs::remove_file(&self.temp) {
            if e.kind() != io::ErrorKind::NotFound {
                warn!(action = "cleanup", component = "output", path = ?self.temp, error = %e, "Failed to remove temporary file");
            }
        }
    }
}

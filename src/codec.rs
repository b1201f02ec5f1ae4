//! Transparent compression selected by file name suffix.
//!
//! `.gz` / `.gz_` is gzip, `.bz2` / `.bz2_` is bzip2, anything else is plain
//! text. The trailing-underscore forms match the temporary names used while
//! outputs are being written.

use bzip2::read::MultiBzDecoder;
use bzip2::write::BzEncoder;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{FilterError, Result};

const BUFFER_SIZE: usize = 64 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    Plain,
    Gzip,
    Bzip2,
}

impl Codec {
    pub fn from_path(path: &Path) -> Self {
        let name = path.to_string_lossy();
        if name.ends_with(".gz") || name.ends_with(".gz_") {
            Codec::Gzip
        } else if name.ends_with(".bz2") || name.ends_with(".bz2_") {
            Codec::Bzip2
        } else {
            Codec::Plain
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Codec::Plain => "plain",
            Codec::Gzip => "gzip",
            Codec::Bzip2 => "bzip2",
        };
        f.write_str(name)
    }
}

/// Open `path` for line-wise reading, decompressing according to its suffix.
pub fn open_reader(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|source| FilterError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let reader: Box<dyn BufRead> = match Codec::from_path(path) {
        Codec::Plain => Box::new(BufReader::with_capacity(BUFFER_SIZE, file)),
        Codec::Gzip => Box::new(BufReader::with_capacity(
            BUFFER_SIZE,
            MultiGzDecoder::new(file),
        )),
        Codec::Bzip2 => Box::new(BufReader::with_capacity(
            BUFFER_SIZE,
            MultiBzDecoder::new(file),
        )),
    };
    Ok(reader)
}

/// Output stream whose compression trailer is only written by [`CorpusWriter::finish`].
pub enum CorpusWriter {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
    Bzip2(BzEncoder<BufWriter<File>>),
}

impl CorpusWriter {
    /// Create `path`, compressing according to its suffix.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| FilterError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        let buffered = BufWriter::with_capacity(BUFFER_SIZE, file);

        Ok(match Codec::from_path(path) {
            Codec::Plain => CorpusWriter::Plain(buffered),
            Codec::Gzip => {
                CorpusWriter::Gzip(GzEncoder::new(buffered, flate2::Compression::default()))
            }
            Codec::Bzip2 => {
                CorpusWriter::Bzip2(BzEncoder::new(buffered, bzip2::Compression::default()))
            }
        })
    }

    /// Write any compression trailer, flush, and sync the file to disk.
    pub fn finish(self) -> io::Result<()> {
        let buffered = match self {
            CorpusWriter::Plain(w) => w,
            CorpusWriter::Gzip(enc) => enc.finish()?,
            CorpusWriter::Bzip2(enc) => enc.finish()?,
        };
        let file = buffered.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()
    }
}

impl Write for CorpusWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            CorpusWriter::Plain(w) => w.write(buf),
            CorpusWriter::Gzip(w) => w.write(buf),
            CorpusWriter::Bzip2(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            CorpusWriter::Plain(w) => w.flush(),
            CorpusWriter::Gzip(w) => w.flush(),
            CorpusWriter::Bzip2(w) => w.flush(),
        }
    }
}

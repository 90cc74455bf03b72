use alloc::vec::Vec;
use embedded_io::{Write, WriteFmtError};
use log::{debug, info, warn};

use crate::{
    declaration::Declaration,
    error::EmbedError,
    fs::{self, Filesystem},
    image::ImageSpec,
};

pub const STDINT_INCLUDE: &str = "#include <stdint.h>\n\n";

/// What a single [`ImageEmbedder::emit`] run produced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EmitSummary {
    pub embedded: usize,
    pub missing: usize,
    pub placeholders: usize,
    /// Sum of the `_len` constants.
    pub bytes: u64,
}

impl EmitSummary {
    /// Number of C declarations written: an array and a length per identifier.
    pub fn declarations(&self) -> usize {
        2 * (self.embedded + self.missing + self.placeholders)
    }

    fn record(&mut self, declaration: &Declaration<'_>) {
        match declaration {
            Declaration::Image { .. } => self.embedded += 1,
            Declaration::Missing { .. } => self.missing += 1,
            Declaration::Placeholder { .. } => self.placeholders += 1,
        }
        self.bytes += declaration.len();
    }
}

/// Turns image files into C declarations. Real images come first in the
/// order given, followed by the dummy placeholders.
pub struct ImageEmbedder<'fs, FS: Filesystem> {
    fs: &'fs FS,
    stdint_include: bool,
}

impl<'fs, FS: Filesystem> ImageEmbedder<'fs, FS> {
    pub fn new(fs: &'fs FS) -> Self {
        ImageEmbedder {
            fs,
            stdint_include: false,
        }
    }

    /// Prefix the output with `#include <stdint.h>`.
    pub fn with_stdint_include(mut self, enabled: bool) -> Self {
        self.stdint_include = enabled;
        self
    }

    pub fn read_image(&self, spec: &ImageSpec<'_>) -> Result<Vec<u8>, EmbedError> {
        let mut file = self
            .fs
            .open_file(spec.path)
            .map_err(EmbedError::from_io_error)?;
        fs::read_to_end(&mut file).map_err(EmbedError::from_io_error)
    }

    /// Reads `spec`, falling back to a placeholder if the file is not available.
    pub fn declare<'a>(&self, spec: &ImageSpec<'a>) -> Declaration<'a> {
        match self.read_image(spec) {
            Ok(data) => {
                info!("Embedding {} from {} ({} bytes)", spec.name, spec.path, data.len());
                Declaration::Image {
                    name: spec.name,
                    data,
                }
            }
            Err(e) => {
                warn!("{} not embedded, {}: {e}", spec.name, spec.path);
                Declaration::Missing {
                    name: spec.name,
                    path: spec.path,
                }
            }
        }
    }

    /// Lazily yields the declarations in output order. Each image is read when
    /// its declaration is pulled.
    pub fn declarations<'a>(
        &self,
        specs: &[ImageSpec<'a>],
        dummies: &[&'a str],
    ) -> impl Iterator<Item = Declaration<'a>> {
        let images = specs.iter().map(|spec| self.declare(spec));
        let placeholders = dummies.iter().map(|&name| {
            debug!("Placeholder for {name}");
            Declaration::Placeholder { name }
        });
        images.chain(placeholders)
    }

    pub fn collect<'a>(&self, specs: &[ImageSpec<'a>], dummies: &[&'a str]) -> Vec<Declaration<'a>> {
        self.declarations(specs, dummies).collect()
    }

    /// Writes the whole generated source to `out`, one declaration at a time.
    /// Unavailable images never fail the run, only errors from `out` are
    /// returned.
    pub fn emit<W: Write>(
        &self,
        specs: &[ImageSpec<'_>],
        dummies: &[&str],
        out: &mut W,
    ) -> Result<EmitSummary, WriteFmtError<W::Error>> {
        if self.stdint_include {
            out.write_all(STDINT_INCLUDE.as_bytes())
                .map_err(WriteFmtError::Other)?;
        }
        let mut summary = EmitSummary::default();
        for declaration in self.declarations(specs, dummies) {
            write!(out, "{declaration}")?;
            summary.record(&declaration);
        }
        out.flush().map_err(WriteFmtError::Other)?;
        info!(
            "Emitted {} declarations: {} embedded ({} bytes), {} missing, {} placeholders",
            summary.declarations(),
            summary.embedded,
            summary.bytes,
            summary.missing,
            summary.placeholders
        );
        Ok(summary)
    }
}

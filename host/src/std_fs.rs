use std::{
    fs,
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

use embedded_io::ErrorType;
use log::{debug, info};

/// Resolves image paths against a base directory on the host.
pub struct StdFilesystem {
    base_dir: PathBuf,
}

impl StdFilesystem {
    pub fn rooted_at(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        info!("Reading images relative to {}", base_dir.display());
        StdFilesystem { base_dir }
    }
}

impl ErrorType for StdFilesystem {
    type Error = embedded_io::ErrorKind;
}

impl imgembed_core::fs::Filesystem for StdFilesystem {
    type File = StdFile;

    fn open_file(&self, path: &str) -> Result<StdFile, embedded_io::ErrorKind> {
        let path = self.base_dir.join(path);
        debug!("Opening image {}", path.display());
        StdFile::open(&path).map_err(|e| embedded_io::Error::kind(&e))
    }
}

/// A regular file opened for reading.
pub struct StdFile {
    file: BufReader<fs::File>,
    size: usize,
}

impl StdFile {
    /// Opens `path`, refusing directories and other non-regular files.
    pub fn open(path: &Path) -> std::io::Result<Self> {
        let file = fs::File::open(path)?;
        let metadata = file.metadata()?;
        if !metadata.is_file() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} is not a regular file", path.display()),
            ));
        }
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        Ok(StdFile {
            file: BufReader::new(file),
            size,
        })
    }
}

impl imgembed_core::fs::File for StdFile {
    fn size(&self) -> usize {
        self.size
    }
}

impl ErrorType for StdFile {
    type Error = std::io::Error;
}

impl embedded_io::Read for StdFile {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        use std::io::Read;
        self.file.read(buf)
    }
}

/// Buffered sink for the generated source: stdout or a file.
pub struct StdWriter {
    out: BufWriter<Box<dyn std::io::Write>>,
}

impl StdWriter {
    pub fn stdout() -> Self {
        StdWriter {
            out: BufWriter::new(Box::new(std::io::stdout().lock())),
        }
    }

    pub fn create(path: &Path) -> std::io::Result<Self> {
        info!("Writing declarations to {}", path.display());
        let file = fs::File::create(path)?;
        Ok(StdWriter {
            out: BufWriter::new(Box::new(file)),
        })
    }
}

impl ErrorType for StdWriter {
    type Error = std::io::Error;
}

impl embedded_io::Write for StdWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        use std::io::Write;
        self.out.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        use std::io::Write;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imgembed_core::fs::{Filesystem, read_to_end};
    use imgembed_core::{DUMMY_IMAGES, ImageEmbedder, USER_IMAGES};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("imgembed-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("build-arm")).unwrap();
        dir
    }

    #[test]
    fn test_reads_file_under_base_path() {
        let dir = scratch_dir("read");
        let data: Vec<u8> = (0u8..=0x0c).collect();
        fs::write(dir.join("build-arm/hello"), &data).unwrap();

        let filesystem = StdFilesystem::rooted_at(&dir);
        let mut file = filesystem.open_file("build-arm/hello").unwrap();
        assert_eq!(imgembed_core::fs::File::size(&file), 13);
        assert_eq!(read_to_end(&mut file).unwrap(), data);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = scratch_dir("missing");
        let filesystem = StdFilesystem::rooted_at(&dir);
        assert!(matches!(
            filesystem.open_file("build-arm/init"),
            Err(embedded_io::ErrorKind::NotFound)
        ));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = scratch_dir("directory");
        fs::create_dir_all(dir.join("build-arm/hello")).unwrap();
        let filesystem = StdFilesystem::rooted_at(&dir);
        assert!(matches!(
            filesystem.open_file("build-arm/hello"),
            Err(embedded_io::ErrorKind::InvalidInput)
        ));

        let mut out = Vec::new();
        let summary = ImageEmbedder::new(&filesystem)
            .emit(&USER_IMAGES[..1], &[], &mut out)
            .unwrap();
        assert_eq!(summary.missing, 1);
        assert_eq!(summary.embedded, 0);
        assert!(String::from_utf8(out)
            .unwrap()
            .starts_with("/* build-arm/hello not found */\n"));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_emits_images_from_disk() {
        let dir = scratch_dir("emit");
        fs::write(dir.join("build-arm/hello"), [0xde, 0xad, 0xbe, 0xef]).unwrap();
        fs::write(dir.join("build-arm/shell"), b"").unwrap();
        let output = dir.join("user_images.c");

        let filesystem = StdFilesystem::rooted_at(&dir);
        let mut writer = StdWriter::create(&output).unwrap();
        let summary = ImageEmbedder::new(&filesystem)
            .emit(USER_IMAGES, DUMMY_IMAGES, &mut writer)
            .unwrap();
        drop(writer);

        assert_eq!(summary.embedded, 2);
        assert_eq!(summary.missing, 1);
        assert_eq!(summary.placeholders, 4);
        let text = fs::read_to_string(&output).unwrap();
        assert!(text.starts_with(
            "const uint8_t user_image_hello[] = {\n  0xde, 0xad, 0xbe, 0xef,\n};\n\
             const uint64_t user_image_hello_len = 4;\n\n\
             /* build-arm/init not found */\n"
        ));
        assert!(text.contains("const uint8_t user_image_shell[] = {\n};\n"));
        assert!(text.ends_with("const uint64_t user_image_fuzz_len = 0;\n\n"));

        fs::remove_dir_all(dir).unwrap();
    }
}

use alloc::vec::Vec;
use embedded_io::{ErrorType, Read};

/// A readable file whose total size is known up front.
pub trait File: Read {
    /// Expected length in bytes. Only a hint, the file is read until EOF.
    fn size(&self) -> usize;
}

/// Upper bound on the buffer preallocated from [`File::size`].
pub const MAX_PREALLOC: usize = 1 << 20;

pub trait Filesystem: ErrorType {
    type File: File;

    fn open_file(&self, path: &str) -> Result<Self::File, Self::Error>;
}

/// Reads `file` until EOF.
pub fn read_to_end<F: File>(file: &mut F) -> Result<Vec<u8>, F::Error> {
    let mut data = Vec::with_capacity(file.size().min(MAX_PREALLOC));
    let mut chunk = [0u8; 4096];
    loop {
        let read = file.read(&mut chunk)?;
        if read == 0 {
            break;
        }
        data.extend_from_slice(&chunk[..read]);
    }
    Ok(data)
}

use alloc::vec::Vec;
use core::fmt;

/// Hex values written per line of an array literal.
pub const BYTES_PER_LINE: usize = 12;

/// One identifier's worth of generated C: the byte array and its `_len`
/// constant, followed by an empty line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration<'a> {
    /// Contents of an image that was read successfully.
    Image { name: &'a str, data: Vec<u8> },
    /// An image whose file could not be read. Rendered as a placeholder
    /// preceded by a comment naming `path`.
    Missing { name: &'a str, path: &'a str },
    /// A name with no backing file.
    Placeholder { name: &'a str },
}

impl<'a> Declaration<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Declaration::Image { name, .. }
            | Declaration::Missing { name, .. }
            | Declaration::Placeholder { name } => *name,
        }
    }

    /// Value of the emitted `_len` constant.
    pub fn len(&self) -> u64 {
        match self {
            Declaration::Image { data, .. } => data.len() as u64,
            Declaration::Missing { .. } | Declaration::Placeholder { .. } => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn write_placeholder(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    writeln!(f, "const uint8_t {name}[] = {{ 0 }};")?;
    writeln!(f, "const uint64_t {name}_len = 0;")
}

impl fmt::Display for Declaration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Declaration::Image { name, data } => {
                writeln!(f, "const uint8_t {name}[] = {{")?;
                for line in data.chunks(BYTES_PER_LINE) {
                    f.write_str(" ")?;
                    for byte in line {
                        write!(f, " 0x{byte:02x},")?;
                    }
                    f.write_str("\n")?;
                }
                writeln!(f, "}};")?;
                writeln!(f, "const uint64_t {name}_len = {};", data.len())?;
            }
            Declaration::Missing { name, path } => {
                writeln!(f, "/* {path} not found */")?;
                write_placeholder(f, name)?;
            }
            Declaration::Placeholder { name } => write_placeholder(f, name)?,
        }
        f.write_str("\n")
    }
}

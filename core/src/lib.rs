#![no_std]

pub mod declaration;
pub mod embed;
pub mod error;
pub mod fs;
pub mod image;

pub use declaration::Declaration;
pub use embed::{EmitSummary, ImageEmbedder};
pub use error::EmbedError;
pub use image::{DUMMY_IMAGES, ImageSpec, USER_IMAGES};

extern crate alloc;

use std::path::Path;

use argh::FromArgs;
use imgembed_core::{DUMMY_IMAGES, ImageEmbedder, USER_IMAGES};

use crate::std_fs::{StdFilesystem, StdWriter};

mod std_fs;

#[derive(FromArgs)]
/// Emit the prebuilt user images as C byte arrays for the kernel build
struct Args {
    /// directory the image paths are resolved against
    #[argh(option, short = 'C', default = "String::from(\".\")")]
    base_dir: String,

    /// write the declarations to this file instead of stdout
    #[argh(option, short = 'o')]
    output: Option<String>,

    /// start the output with `#include <stdint.h>`
    #[argh(switch)]
    stdint: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    let fs = StdFilesystem::rooted_at(&args.base_dir);
    let mut out = match &args.output {
        Some(path) => StdWriter::create(Path::new(path)).expect("Failed to create output file"),
        None => StdWriter::stdout(),
    };

    ImageEmbedder::new(&fs)
        .with_stdint_include(args.stdint)
        .emit(USER_IMAGES, DUMMY_IMAGES, &mut out)
        .expect("Failed to write declarations");
}

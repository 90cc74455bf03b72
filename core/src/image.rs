/// A user image compiled into the kernel: the C identifier it is declared
/// under and the build output it is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSpec<'a> {
    pub name: &'a str,
    pub path: &'a str,
}

impl<'a> ImageSpec<'a> {
    pub const fn new(name: &'a str, path: &'a str) -> Self {
        ImageSpec { name, path }
    }
}

pub static USER_IMAGES: &[ImageSpec<'static>] = &[
    ImageSpec::new("user_image_hello", "build-arm/hello"),
    ImageSpec::new("user_image_init", "build-arm/init"),
    ImageSpec::new("user_image_shell", "build-arm/shell"),
];

/// Images the kernel links against but which have no arm build yet.
pub static DUMMY_IMAGES: &[&str] = &[
    "user_image_echo",
    "user_image_ls",
    "user_image_cat",
    "user_image_fuzz",
];

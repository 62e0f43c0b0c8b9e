mod registry;

pub use registry::{ALLOWED_EXTENSIONS, Language, has_allowed_extension};

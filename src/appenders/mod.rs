//! Output writers

pub mod multi;
pub mod rotating_file;

pub use multi::MultiWriter;
pub use rotating_file::{Backup, RotatingFileAppender, RotationPolicy, RotationStrategy};

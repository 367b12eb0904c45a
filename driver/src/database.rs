pub use self::file::*;

mod file;

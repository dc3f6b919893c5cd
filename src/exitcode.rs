/// Standard Unix exit codes for the bm CLI application.
///
/// Failed commands (unknown bookmark, invalid name, I/O errors) are printed and the
/// process still terminates with 0. Only a store that cannot be created at startup
/// ends the process with a non-zero code.
///
/// The bookmark store file could not be created
pub const CANTCREAT: i32 = 73;

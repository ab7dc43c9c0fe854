//! Leaf actions
//!
//! Each action renders its output into a `Write` sink. Nothing here touches
//! the files named on the command line: analysis, processing and backup are
//! simulated.

pub mod file;
pub mod greet;
pub mod system;
pub mod user;

#[cfg(test)]
pub(crate) fn render(f: impl FnOnce(&mut Vec<u8>) -> crate::cli::CliResult<()>) -> String {
    let mut buf = Vec::new();
    f(&mut buf).expect("action should succeed");
    String::from_utf8(buf).expect("utf8 output")
}

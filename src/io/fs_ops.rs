use std::env;
use std::fs::{self, OpenOptions};
use std::io;
#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

/// Directory entry names in the order the OS hands them back.
pub fn list_files(path: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    Ok(names)
}

pub fn change_directory(path: &Path) -> io::Result<()> {
    env::set_current_dir(path)
}

/// Creates an empty file (truncating an existing one) with mode 0644.
pub fn create_file(path: &Path) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o644);
    options.open(path)?;

    Ok(())
}

pub fn remove_file(path: &Path) -> io::Result<()> {
    fs::remove_file(path)
}

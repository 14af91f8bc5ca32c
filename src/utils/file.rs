use std::fs;
use std::io;
use std::path::Path;

/// Writes `content` to `path` via a sibling temporary file and a rename, so
/// an interrupted run never leaves a partially written file at `path`.
pub fn write_atomically(path: &Path, content: &str) -> io::Result<()> {
    let tmp = match path.file_name() {
        Some(name) => {
            let mut tmp_name = name.to_os_string();
            tmp_name.push(".tmp");
            path.with_file_name(tmp_name)
        }
        None => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("not a file path: {}", path.display()),
            ))
        }
    };

    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)
}

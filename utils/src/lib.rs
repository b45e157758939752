use std::path::Path;
use std::fs::File;
use std::io::{self, Write, Read};

/// Read the file at `filepath` after swapping its extension for `extension`.
pub fn read_to_string(filepath:&Path,extension:&str) -> io::Result<String> {
    let p = filepath.with_extension(extension);
    let mut f = File::open(&p)?;
    let mut s = String::new();
    f.read_to_string(&mut s)?;
    Ok(s)
}

pub fn write_to_file(filepath:&Path,extension:&str,string:&str) -> io::Result<()> {
    let p = filepath.with_extension(extension);
    let mut f = File::create(p)?;
    f.write_all(string.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_swapped_on_both_ends() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("plan.txt");
        write_to_file(&base,"scan_plan","rows = []").unwrap();
        assert!(dir.path().join("plan.scan_plan").exists());
        assert_eq!(read_to_string(&dir.path().join("plan"),"scan_plan").unwrap(),"rows = []");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let e = read_to_string(&dir.path().join("absent"),"toml").unwrap_err();
        assert_eq!(e.kind(),io::ErrorKind::NotFound);
    }
}

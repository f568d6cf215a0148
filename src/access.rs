use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of asking for read access to the mount point.
///
/// The probe only accepts a `Granted` token, so a measurement is
/// unreachable until access has been confirmed.
#[derive(Debug)]
pub enum Access {
    Unauthorized,
    Authorized(Granted),
}

/// Proof that the mount point was a readable directory when checked.
#[derive(Debug, Clone)]
pub struct Granted {
    path: PathBuf,
}

impl Granted {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Check the path; grant only for an existing, readable directory.
pub fn request(path: &Path) -> Access {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Access::Authorized(Granted { path: path.to_path_buf() }),
        _ => Access::Unauthorized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn directory_is_authorized() {
        let dir = tempdir().unwrap();
        match request(dir.path()) {
            Access::Authorized(grant) => assert_eq!(grant.path(), dir.path()),
            Access::Unauthorized => panic!("expected grant for {}", dir.path().display()),
        }
    }

    #[test]
    fn missing_path_is_unauthorized() {
        let dir = tempdir().unwrap();
        let gone = dir.path().join("not-here");
        assert!(matches!(request(&gone), Access::Unauthorized));
    }

    #[test]
    fn plain_file_is_unauthorized() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("f");
        fs::write(&file, b"x").unwrap();
        assert!(matches!(request(&file), Access::Unauthorized));
    }
}

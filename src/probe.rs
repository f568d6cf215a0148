use crate::access::Granted;
use crate::models::snapshot::StorageSnapshot;
use anyhow::Result;

/// Measure the volume behind the granted mount point.
///
/// One fresh statvfs per call — no caching, no retries. Total and free come
/// out of the same statvfs result, but the kernel does not freeze the
/// filesystem for us, so a reading taken during heavy writes is advisory.
pub fn read_snapshot(grant: &Granted) -> Result<StorageSnapshot> {
    use nix::sys::statvfs::statvfs;
    let stat = statvfs(grant.path())?;

    let frsize = stat.fragment_size() as u64;
    let total_bytes = stat.blocks() * frsize;
    // blocks_available: what an unprivileged caller can actually use
    // (excludes the root reserve that blocks_free would count).
    let free_bytes = stat.blocks_available() * frsize;

    Ok(StorageSnapshot::new(total_bytes, free_bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{self, Access};
    use tempfile::tempdir;

    fn grant_for(path: &std::path::Path) -> Granted {
        match access::request(path) {
            Access::Authorized(g) => g,
            Access::Unauthorized => panic!("no access to {}", path.display()),
        }
    }

    #[test]
    fn snapshot_holds_sum_invariant() {
        let dir = tempdir().unwrap();
        let snap = read_snapshot(&grant_for(dir.path())).unwrap();
        assert!(snap.total_bytes > 0);
        assert_eq!(snap.used_bytes + snap.free_bytes, snap.total_bytes);
        let pct = snap.used_pct();
        assert!((0.0..=100.0).contains(&pct));
    }

    #[test]
    fn capacity_stable_across_probes() {
        // Free space can move under us; total capacity cannot.
        let dir = tempdir().unwrap();
        let grant = grant_for(dir.path());
        let a = read_snapshot(&grant).unwrap();
        let b = read_snapshot(&grant).unwrap();
        assert_eq!(a.total_bytes, b.total_bytes);
    }

    #[test]
    fn removed_path_is_an_error() {
        let dir = tempdir().unwrap();
        let grant = grant_for(dir.path());
        drop(dir);
        assert!(read_snapshot(&grant).is_err());
    }
}

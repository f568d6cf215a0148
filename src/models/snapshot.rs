/// One point-in-time reading of a volume's capacity.
///
/// Built fresh on every refresh and never mutated; the previous reading is
/// replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageSnapshot {
    pub total_bytes: u64,
    pub used_bytes:  u64,
    pub free_bytes:  u64,
}

impl StorageSnapshot {
    /// Build from total capacity and capacity available to us.
    /// `used + free == total` holds by construction.
    pub fn new(total_bytes: u64, free_bytes: u64) -> Self {
        let free_bytes = free_bytes.min(total_bytes);
        Self {
            total_bytes,
            used_bytes: total_bytes - free_bytes,
            free_bytes,
        }
    }

    /// Usage percentage, 0.0 for a zero-capacity volume.
    pub fn used_pct(&self) -> f64 {
        if self.total_bytes == 0 { return 0.0; }
        self.used_bytes as f64 * 100.0 / self.total_bytes as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_invariant() {
        let snap = StorageSnapshot::new(1_000_000, 250_000);
        assert_eq!(snap.used_bytes, 750_000);
        assert_eq!(snap.used_bytes + snap.free_bytes, snap.total_bytes);
    }

    #[test]
    fn used_pct_matches_formula() {
        let snap = StorageSnapshot::new(2048, 512);
        let expect = snap.used_bytes as f64 * 100.0 / snap.total_bytes as f64;
        assert!((snap.used_pct() - expect).abs() < 1e-9);
        assert!((snap.used_pct() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn used_pct_stays_in_range() {
        for (total, free) in [(1u64, 0u64), (1, 1), (u64::MAX, 0), (u64::MAX, u64::MAX)] {
            let pct = StorageSnapshot::new(total, free).used_pct();
            assert!((0.0..=100.0).contains(&pct), "pct {} out of range", pct);
        }
    }

    #[test]
    fn zero_capacity_is_zero_pct() {
        let snap = StorageSnapshot::new(0, 0);
        assert_eq!(snap.used_pct(), 0.0);
    }

    #[test]
    fn free_clamped_to_total() {
        // Some fuse filesystems report avail > blocks; the invariant must survive.
        let snap = StorageSnapshot::new(100, 200);
        assert_eq!(snap.free_bytes, 100);
        assert_eq!(snap.used_bytes, 0);
    }
}

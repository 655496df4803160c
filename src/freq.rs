//! Per-byte-value frequency counting over a fixed 256-slot table.

/// Occurrence counts for each byte value seen in an input.
///
/// Backed by a dense array but presented sparsely: iteration and
/// `distinct()` only see byte values with a non-zero count, in ascending
/// byte order.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: [u64; 256],
}

impl FrequencyTable {
    /// Scan `data` and tally every byte value. Empty input yields an
    /// empty table.
    pub fn count(data: &[u8]) -> Self {
        let mut counts = [0u64; 256];
        for &b in data {
            counts[b as usize] += 1;
        }
        Self { counts }
    }

    /// Number of distinct byte values present.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Present `(byte, count)` pairs in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .map(|(b, &c)| (b as u8, c))
    }

    /// Shannon entropy of the counted distribution in bits per byte.
    pub fn entropy_bits(&self) -> f64 {
        let total: u64 = self.counts.iter().sum();
        if total == 0 {
            return 0.0;
        }
        let total = total as f64;
        let mut entropy = 0.0;
        for &c in &self.counts {
            if c > 0 {
                let p = c as f64 / total;
                entropy -= p * p.log2();
            }
        }
        entropy
    }
}

/// Byte frequencies of one input. Only symbols that occur are reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; 256],
}

impl FrequencyTable {
    /// Count every byte of the input in a single pass.
    pub fn analyze(data: &[u8]) -> Self {
        let mut counts = [0_u64; 256];
        data.iter().for_each(|&el| counts[el as usize] += 1);
        Self { counts }
    }

    /// Occurrences of a symbol (0 if it is absent).
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Number of distinct symbols present.
    pub fn len(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Total number of bytes counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// (symbol, count) pairs in ascending symbol order, skipping absent symbols.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, c)| **c > 0)
            .map(|(sym, &c)| (sym as u8, c))
    }
}

impl FromIterator<(u8, u64)> for FrequencyTable {
    /// Build a table from explicit counts. Repeated symbols accumulate.
    fn from_iter<I: IntoIterator<Item = (u8, u64)>>(iter: I) -> Self {
        let mut counts = [0_u64; 256];
        for (sym, c) in iter {
            counts[sym as usize] += c;
        }
        Self { counts }
    }
}

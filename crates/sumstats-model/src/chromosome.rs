//! Chromosome label standardization table.
//!
//! Summary statistics arrive with chromosome labels in several spellings
//! (`1`, `X`, `MT`, `chr23`, ...). [`ChromosomeMap`] maps each known raw
//! label to a canonical `chr`-prefixed label. Sex chromosomes and
//! mitochondria use the letter form (`chrX`, `chrY`, `chrXY`, `chrM`).

use std::collections::HashMap;

/// Default exclusive upper bound for autosome numbering (autosomes 1..=22).
pub const DEFAULT_MAX_CHROM: u32 = 23;

/// Fixed entries overlaid on top of the autosomes, applied in order.
///
/// `chr26` appears twice; both assignments agree so the overlay is a no-op.
const FIXED_LABELS: [(&str, &str); 10] = [
    ("X", "chrX"),
    ("Y", "chrY"),
    ("XY", "chrXY"),
    ("M", "chrM"),
    ("MT", "chrM"),
    ("chr23", "chrX"),
    ("chr24", "chrY"),
    ("chr25", "chrXY"),
    ("chr26", "chrM"),
    ("chr26", "chrM"),
];

/// Immutable lookup from raw chromosome label to canonical label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromosomeMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
    max_chrom: u32,
}

impl ChromosomeMap {
    /// Build the map for autosomes `1..max_chrom` plus the fixed sex/mito entries.
    ///
    /// A duplicate key keeps the last value assigned to it.
    pub fn build(max_chrom: u32) -> Self {
        let mut map = Self {
            entries: Vec::with_capacity(max_chrom as usize + FIXED_LABELS.len()),
            index: HashMap::new(),
            max_chrom,
        };
        for i in 1..max_chrom {
            map.insert(i.to_string(), format!("chr{i}"));
        }
        for (raw, canonical) in FIXED_LABELS {
            map.insert(raw.to_string(), canonical.to_string());
        }
        map
    }

    fn insert(&mut self, raw: String, canonical: String) {
        if let Some(&pos) = self.index.get(&raw) {
            self.entries[pos].1 = canonical;
        } else {
            self.index.insert(raw.clone(), self.entries.len());
            self.entries.push((raw, canonical));
        }
    }

    /// Canonical label for a raw label, if known.
    pub fn get(&self, raw: &str) -> Option<&str> {
        self.index
            .get(raw)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    /// Returns true if `label` is one of the canonical labels this map produces.
    pub fn is_canonical(&self, label: &str) -> bool {
        self.entries.iter().any(|(_, canonical)| canonical == label)
    }

    /// Resolve a label: known raw labels map, canonical labels pass through.
    pub fn normalize<'a>(&'a self, label: &'a str) -> Option<&'a str> {
        self.get(label)
            .or_else(|| self.is_canonical(label).then_some(label))
    }

    /// The exclusive autosome bound this map was built with.
    pub fn max_chrom(&self) -> u32 {
        self.max_chrom
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in construction order (autosomes first, then fixed labels).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(raw, canonical)| (raw.as_str(), canonical.as_str()))
    }
}

/// Build a fresh chromosome map. Callers that need it repeatedly should keep the result.
pub fn build_chromosome_map(max_chrom: u32) -> ChromosomeMap {
    ChromosomeMap::build(max_chrom)
}

#[cfg(test)]
#[path = "knowledge_table_test.rs"]
mod tests;

use std::collections::BTreeMap;

use crate::domain::models::KnownResult;

const A1: &str = "o";
const A2: &str = "o---o";
const A3: &str = "o---o---o";
const D4: &str = r#"
    o
    |
o---o---o
"#;
const E8: &str = r#"
o---o---o---o---o---o---o
                |
                o
"#;
const LEECH: &str = "(No Coxeter diagram exists)";

/// Immutable lookup of published kissing number results, keyed by dimension.
#[derive(Debug, Clone)]
pub struct KnowledgeTable {
    entries: BTreeMap<u64, KnownResult>,
}

impl KnowledgeTable {
    pub fn new(entries: impl IntoIterator<Item = KnownResult>) -> KnowledgeTable {
        KnowledgeTable {
            entries: entries
                .into_iter()
                .map(|entry| (entry.dimension, entry))
                .collect(),
        }
    }

    /// Exact values for dimensions 1-4, 8 and 24; bounds for 5-7.
    pub fn reference() -> KnowledgeTable {
        KnowledgeTable::new([
            KnownResult::exact(1, 2, "A1", A1),
            KnownResult::exact(2, 6, "A2", A2),
            KnownResult::exact(3, 12, "A3", A3),
            KnownResult::exact(4, 24, "D4", D4),
            KnownResult::bounded(5, 40, 44),
            KnownResult::bounded(6, 72, 78),
            KnownResult::bounded(7, 126, 134),
            KnownResult::exact(8, 240, "E8", E8),
            KnownResult::exact(24, 196560, "Leech lattice", LEECH),
        ])
    }

    pub fn lookup(&self, dimension: u64) -> Option<&KnownResult> {
        self.entries.get(&dimension)
    }
}

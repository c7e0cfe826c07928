/// What is known about the kissing number of a single dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KissingData {
    /// Proven value, with the lattice or root system realising it.
    Exact {
        value: u64,
        root_system: &'static str,
        diagram: Option<&'static str>,
    },
    /// Best published bounds while the exact value remains open.
    Bounded { lower: u64, upper: u64 },
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownResult {
    pub dimension: u64,
    pub data: KissingData,
}

impl KnownResult {
    pub fn exact(
        dimension: u64,
        value: u64,
        root_system: &'static str,
        diagram: &'static str,
    ) -> KnownResult {
        KnownResult {
            dimension,
            data: KissingData::Exact {
                value,
                root_system,
                diagram: Some(diagram.trim_matches('\n')),
            },
        }
    }

    pub fn bounded(dimension: u64, lower: u64, upper: u64) -> KnownResult {
        KnownResult {
            dimension,
            data: KissingData::Bounded { lower, upper },
        }
    }

    pub fn unknown(dimension: u64) -> KnownResult {
        KnownResult {
            dimension,
            data: KissingData::Unknown,
        }
    }
}

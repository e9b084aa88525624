use std::fmt;

/// Width of the zero-padded sequence suffix.
pub const SEQUENCE_WIDTH: usize = 12;

const SEPARATOR: char = '|';

/// Sort key of the measurement log: `<runStartTimestamp>|<zero-padded sequence>`.
///
/// Within one run, lexicographic key order equals sequence order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct StorageKey {
    run_started_at: String,
    sequence: u64,
}

impl StorageKey {
    pub fn new(run_started_at: impl Into<String>, sequence: u64) -> Self {
        Self {
            run_started_at: run_started_at.into(),
            sequence,
        }
    }

    pub fn run_started_at(&self) -> &str {
        &self.run_started_at
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let (ts, seq) = raw.rsplit_once(SEPARATOR)?;
        if seq.len() != SEQUENCE_WIDTH || !seq.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self::new(ts, seq.parse().ok()?))
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{:0width$}",
            self.run_started_at,
            SEPARATOR,
            self.sequence,
            width = SEQUENCE_WIDTH
        )
    }
}

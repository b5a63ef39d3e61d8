use std::fmt;

/// Depth of the delegation walk, used for logging and loop bookkeeping.
///
/// The progression is monotonic: `Root -> Tld -> Auth`, and `Auth` stays
/// `Auth` however deep the hierarchy turns out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ResolutionStage {
    #[default]
    Root,
    Tld,
    Auth,
}

impl ResolutionStage {
    pub fn next(self) -> Self {
        match self {
            ResolutionStage::Root => ResolutionStage::Tld,
            ResolutionStage::Tld | ResolutionStage::Auth => ResolutionStage::Auth,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionStage::Root => "ROOT",
            ResolutionStage::Tld => "TLD",
            ResolutionStage::Auth => "AUTH",
        }
    }
}

impl fmt::Display for ResolutionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

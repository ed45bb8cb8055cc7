/// How a scan resolves two different markers found at the same ancestor depth,
/// one on a class ancestor and one on an interface ancestor.
///
/// Neither ancestor dominates naturally, so the choice is explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerTieBreak {
    /// The class ancestor's marker wins.
    PreferBase,
    /// The interface ancestor's marker wins.
    PreferInterface,
    /// The conflict is a configuration error and the scan fails for that candidate.
    Reject,
}

/// Config for a scan
/// ## Fields
/// - `tie_break`:
///   Resolution of same-depth marker conflicts between a class ancestor and an
///   interface ancestor. Defaults to [`MarkerTieBreak::Reject`].
///
///   Two ancestors carrying the *same* marker are never a conflict, and sibling
///   interfaces at the same depth are ordered by declaration, so only the
///   class-versus-interface case is affected.
#[derive(Debug, Clone, Copy)]
pub struct ScanConfig {
    pub tie_break: MarkerTieBreak,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            tie_break: MarkerTieBreak::Reject,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MarkerTieBreak, ScanConfig};

    #[test]
    fn test_default_rejects_conflicts() {
        assert_eq!(ScanConfig::default().tie_break, MarkerTieBreak::Reject);
    }
}

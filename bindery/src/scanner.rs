use tracing::{debug, debug_span};

use crate::{
    any::TypeInfo,
    catalog::Catalog,
    config::ScanConfig,
    errors::{ScanError, ScanErrorKind},
    hierarchy::TypeGraph,
    resolver::resolve,
    walker::find_marker,
};

/// Discovers service bindings by walking each candidate's ancestor chain for a marker
/// and resolving the marker's policy into bindings.
#[derive(Debug, Clone, Copy)]
pub struct Scanner {
    config: ScanConfig,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ScanConfig::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_config(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Scans every concrete type described in the graph, in registration order.
    ///
    /// # Errors
    /// Returns a [`ScanError`] on the first configuration error, naming the candidate
    /// it occurred for. Candidates without a marker are skipped, not errors.
    pub fn scan(&self, graph: &TypeGraph) -> Result<Catalog, ScanError> {
        self.scan_types(graph, graph.concrete_types())
    }

    /// Scans an explicit candidate list, in the caller's order. Non-concrete entries are
    /// filtered out the same way the full enumeration filters abstract and interface types.
    ///
    /// # Errors
    /// Like [`Scanner::scan`], plus [`ScanErrorKind::UnknownType`] for a candidate the
    /// graph doesn't describe.
    pub fn scan_types(&self, graph: &TypeGraph, candidates: impl IntoIterator<Item = TypeInfo>) -> Result<Catalog, ScanError> {
        let span = debug_span!("scan");
        let _enter = span.enter();

        let mut catalog = Catalog::new();
        for candidate in candidates {
            let Some(node) = graph.node(candidate.id) else {
                return Err(ScanError {
                    candidate,
                    kind: ScanErrorKind::UnknownType,
                });
            };
            if !node.is_concrete() {
                debug!(candidate = candidate.short_name(), "Not a concrete type, skipped");
                continue;
            }

            match find_marker(graph, node, &self.config) {
                Ok(Some(marker)) => {
                    let bindings = resolve(graph, node, marker).map_err(|kind| ScanError { candidate, kind })?;
                    for binding in bindings {
                        catalog.append(binding, graph);
                    }
                }
                Ok(None) => debug!(candidate = candidate.short_name(), "No marker in ancestor chain, skipped"),
                Err(kind) => return Err(ScanError { candidate, kind }),
            }
        }

        Ok(catalog)
    }
}

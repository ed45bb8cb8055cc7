use alloc::{collections::BTreeSet, vec, vec::Vec};
use tracing::debug;

use crate::{
    any::TypeInfo,
    config::{MarkerTieBreak, ScanConfig},
    errors::ScanErrorKind,
    hierarchy::{TypeDef, TypeGraph, TypeKind},
    marker::Marker,
};

/// Finds the nearest marker in the candidate's ancestor chain.
///
/// Traversal is breadth-first in a fixed order: the type itself, then its direct base,
/// then its interfaces in declared order, then upward through each of those. The first
/// marker found wins and the walk stops; an exhausted chain yields `Ok(None)`.
///
/// The one case the order doesn't decide is a class ancestor and an interface ancestor
/// carrying *different* markers at the same depth; that is resolved per
/// [`ScanConfig::tie_break`].
pub(crate) fn find_marker<'a>(
    graph: &'a TypeGraph,
    candidate: &'a TypeDef,
    config: &ScanConfig,
) -> Result<Option<Marker>, ScanErrorKind> {
    let mut visited = BTreeSet::new();
    visited.insert(candidate.info.id);

    let mut level: Vec<&'a TypeDef> = vec![candidate];
    while !level.is_empty() {
        let mut first_hit: Option<Marker> = None;
        let mut class_hit: Option<(Marker, TypeInfo)> = None;
        let mut interface_hit: Option<(Marker, TypeInfo)> = None;

        for node in &level {
            let Some(marker) = node.marker() else { continue };
            if first_hit.is_none() {
                first_hit = Some(marker);
            }
            match node.kind {
                TypeKind::Interface if interface_hit.is_none() => interface_hit = Some((marker, node.info)),
                TypeKind::Concrete | TypeKind::Abstract if class_hit.is_none() => class_hit = Some((marker, node.info)),
                _ => {}
            }
        }

        match (class_hit, interface_hit) {
            (Some((class_marker, base)), Some((interface_marker, interface))) if class_marker != interface_marker => {
                let marker = match config.tie_break {
                    MarkerTieBreak::PreferBase => class_marker,
                    MarkerTieBreak::PreferInterface => interface_marker,
                    MarkerTieBreak::Reject => {
                        return Err(ScanErrorKind::AmbiguousMarker {
                            base,
                            base_policy: class_marker.policy,
                            interface,
                            interface_policy: interface_marker.policy,
                        })
                    }
                };
                debug!(
                    candidate = candidate.info.short_name(),
                    marker = marker.declaring_type.short_name(),
                    "Marker conflict resolved by tie break"
                );
                return Ok(Some(marker));
            }
            _ => {
                if first_hit.is_some() {
                    return Ok(first_hit);
                }
            }
        }

        let mut next = Vec::new();
        for node in level {
            for edge in node.base.iter().chain(node.interfaces.iter()) {
                if !visited.insert(edge.info.id) {
                    continue;
                }
                // An edge to a type the graph doesn't describe ends that branch.
                if let Some(parent) = graph.node(edge.info.id) {
                    next.push(parent);
                }
            }
        }
        level = next;
    }

    Ok(None)
}

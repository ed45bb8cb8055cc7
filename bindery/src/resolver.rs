use alloc::{collections::BTreeSet, vec, vec::Vec};
use tracing::debug;

use crate::{
    any::TypeInfo,
    catalog::ServiceBinding,
    errors::ScanErrorKind,
    hierarchy::{TypeDef, TypeGraph},
    marker::{BindingPolicy, Marker},
};

/// Turns a candidate and the marker found for it into service bindings.
///
/// Never deduplicates: two candidates resolving to the same pair produce two entries,
/// and resolving which one wins belongs to the host container.
pub(crate) fn resolve(graph: &TypeGraph, candidate: &TypeDef, marker: Marker) -> Result<Vec<ServiceBinding>, ScanErrorKind> {
    let implementation_type = candidate.info;

    let bindings = match marker.policy {
        BindingPolicy::Decorated => vec![ServiceBinding {
            service_type: marker.declaring_type,
            implementation_type,
        }],
        BindingPolicy::Implementation => vec![ServiceBinding {
            service_type: implementation_type,
            implementation_type,
        }],
        BindingPolicy::DecoratedAndImplementation => vec![
            ServiceBinding {
                service_type: marker.declaring_type,
                implementation_type,
            },
            ServiceBinding {
                service_type: implementation_type,
                implementation_type,
            },
        ],
        BindingPolicy::FirstGeneric => {
            let declaring_is_generic = graph
                .node(marker.declaring_type.id)
                .is_some_and(|node| node.type_params > 0);
            if !declaring_is_generic {
                return Err(ScanErrorKind::FirstGenericNotGeneric {
                    declaring_type: marker.declaring_type,
                });
            }

            let Some(service_type) = first_closing_argument(graph, candidate, marker.declaring_type) else {
                return Err(ScanErrorKind::FirstGenericNotClosed {
                    declaring_type: marker.declaring_type,
                });
            };

            vec![ServiceBinding {
                service_type,
                implementation_type,
            }]
        }
    };

    debug!(
        candidate = implementation_type.short_name(),
        count = bindings.len(),
        "Resolved"
    );

    Ok(bindings)
}

/// First type argument of the nearest edge that closes `declaring` for the candidate,
/// searched in the same fixed order the ancestor walk uses.
fn first_closing_argument(graph: &TypeGraph, candidate: &TypeDef, declaring: TypeInfo) -> Option<TypeInfo> {
    let mut visited = BTreeSet::new();
    visited.insert(candidate.info.id);

    let mut level = vec![candidate];
    while !level.is_empty() {
        let mut next = Vec::new();
        for node in level {
            for edge in node.base.iter().chain(node.interfaces.iter()) {
                if edge.info.id == declaring.id {
                    if let Some(argument) = edge.type_args.first() {
                        return Some(*argument);
                    }
                }
                if !visited.insert(edge.info.id) {
                    continue;
                }
                if let Some(parent) = graph.node(edge.info.id) {
                    next.push(parent);
                }
            }
        }
        level = next;
    }

    None
}

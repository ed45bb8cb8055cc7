use crate::{any::TypeInfo, marker::BindingPolicy};

#[derive(thiserror::Error, Debug, Clone, Copy)]
pub enum ScanErrorKind {
    #[error("Candidate type isn't described in the type graph")]
    UnknownType,
    #[error(
        "\
        Markers conflict at the same ancestor depth. \
        Base class {} declares {:?}, interface {} declares {:?}; \
        configure a tie break to resolve this\
        ",
        base.name, base_policy,
        interface.name, interface_policy,
    )]
    AmbiguousMarker {
        base: TypeInfo,
        base_policy: BindingPolicy,
        interface: TypeInfo,
        interface_policy: BindingPolicy,
    },
    #[error("`FirstGeneric` marker declared on non-generic type {}", declaring_type.name)]
    FirstGenericNotGeneric { declaring_type: TypeInfo },
    #[error("Candidate doesn't close the generic marked type {} with a type argument", declaring_type.name)]
    FirstGenericNotClosed { declaring_type: TypeInfo },
}

/// A [`ScanErrorKind`] together with the candidate the scan failed for.
#[derive(thiserror::Error, Debug, Clone, Copy)]
#[error("Scan failed for candidate {}: {}", candidate.name, kind)]
pub struct ScanError {
    pub candidate: TypeInfo,
    pub kind: ScanErrorKind,
}

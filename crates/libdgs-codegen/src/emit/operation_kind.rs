use crate::java::ClassName;

const DGS_PACKAGE: &str = "com.netflix.graphql.dgs";

/// The root operation types that produce fetcher methods. Only the names
/// `Query` and `Mutation` are recognized; `Subscription` and custom root type
/// names declared via `schema { ... }` are not.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    Mutation,
    Query,
}
impl OperationKind {
    pub fn from_root_type_name(type_name: &str) -> Option<Self> {
        match type_name {
            "Mutation" => Some(Self::Mutation),
            "Query" => Some(Self::Query),
            _ => None,
        }
    }

    pub fn is_root_type_name(type_name: &str) -> bool {
        Self::from_root_type_name(type_name).is_some()
    }

    pub fn marker_annotation(&self) -> ClassName {
        match self {
            Self::Mutation => ClassName::new(DGS_PACKAGE, "DgsMutation"),
            Self::Query => ClassName::new(DGS_PACKAGE, "DgsQuery"),
        }
    }
}

pub(crate) fn component_annotation() -> ClassName {
    ClassName::new(DGS_PACKAGE, "DgsComponent")
}

pub(crate) fn input_argument_annotation() -> ClassName {
    ClassName::new(DGS_PACKAGE, "InputArgument")
}

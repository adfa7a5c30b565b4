//! Error catalog of the metadata catalog.
//!
//! One static definition per [`ErrorKind`]. The response assembler is the
//! only consumer: it reads status, class name and actions from here.

use metadata_catalog_sdk::ErrorKind;

use crate::api::rest::envelope::FailureDetail;

/// Static error definition from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrDef {
    pub status: u16,
    pub class_name: &'static str,
    pub message_id: &'static str,
    pub system_action: &'static str,
    pub user_action: &'static str,
}

pub const INVALID_ENTITY: ErrDef = ErrDef {
    status: 400,
    class_name: ErrorKind::InvalidEntity.class_name(),
    message_id: "METADATA-CATALOG-400-001",
    system_action: "The request was rejected because the entity does not match the requested type or carries invalid attribute values.",
    user_action: "Check the GUID and type of the requested element, then correct the entity in the metadata repository.",
};

pub const UNAUTHORIZED: ErrDef = ErrDef {
    status: 403,
    class_name: ErrorKind::Unauthorized.class_name(),
    message_id: "METADATA-CATALOG-403-001",
    system_action: "The request was rejected because the caller may not perform this operation.",
    user_action: "Ask the catalog administrator for access.",
};

pub const REPOSITORY_ACCESS: ErrDef = ErrDef {
    status: 404,
    class_name: ErrorKind::RepositoryAccess.class_name(),
    message_id: "METADATA-CATALOG-404-001",
    system_action: "The metadata repository did not return the requested entity.",
    user_action: "Check that the GUID exists and the metadata repository is reachable, then retry.",
};

/// Catalog entry for `kind`.
#[must_use]
pub const fn err_def(kind: ErrorKind) -> &'static ErrDef {
    match kind {
        ErrorKind::InvalidEntity => &INVALID_ENTITY,
        ErrorKind::Unauthorized => &UNAUTHORIZED,
        ErrorKind::RepositoryAccess => &REPOSITORY_ACCESS,
    }
}

impl ErrDef {
    /// Builds the failure fields of an envelope with the given message.
    #[must_use]
    pub fn as_failure(&self, message: impl Into<String>) -> FailureDetail {
        FailureDetail {
            related_http_code: self.status,
            class_name: self.class_name.to_owned(),
            message_id: Some(self.message_id.to_owned()),
            error_message: message.into(),
            system_action: Some(self.system_action.to_owned()),
            user_action: Some(self.user_action.to_owned()),
        }
    }
}

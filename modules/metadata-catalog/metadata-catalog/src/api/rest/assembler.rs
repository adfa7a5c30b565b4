//! Response assembler: the single place where errors become envelopes.

use metadata_catalog_sdk::MetadataCatalogError;

use super::envelope::ResponseEnvelope;
use crate::errors::err_def;

/// Wraps a payload in a success envelope.
#[must_use]
pub const fn wrap_success<P>(payload: P) -> ResponseEnvelope<P> {
    ResponseEnvelope::success(payload)
}

/// Wraps an error in a failure envelope using the error catalog.
#[must_use]
pub fn wrap_failure<P>(error: &MetadataCatalogError) -> ResponseEnvelope<P> {
    let def = err_def(error.kind());
    tracing::warn!(
        status = def.status,
        class_name = def.class_name,
        message = error.message(),
        "request failed"
    );
    ResponseEnvelope::failure(def.as_failure(error.message()))
}

/// Wraps either side of `result`.
#[must_use]
pub fn assemble<P, E>(result: Result<P, E>) -> ResponseEnvelope<P>
where
    E: Into<MetadataCatalogError>,
{
    match result {
        Ok(payload) => wrap_success(payload),
        Err(e) => wrap_failure(&e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::rest::dto::SupportedTypesPayload;
    use crate::domain::error::DomainError;
    use crate::errors::REPOSITORY_ACCESS;
    use serde_json::json;
    use metadata_catalog_sdk::RepositoryError;

    #[test]
    fn test_wrap_success() {
        let envelope = wrap_success("payload");
        assert_eq!(envelope.related_http_code(), 200);
        assert_eq!(envelope.payload(), Some(&"payload"));
        assert!(envelope.failure_detail().is_none());
    }

    #[test]
    fn test_wrap_success_with_empty_payload() {
        let envelope = wrap_success(SupportedTypesPayload { types: Vec::new() });
        assert_eq!(envelope.related_http_code(), 200);
        assert!(envelope.failure_detail().is_none());

        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value, json!({ "relatedHTTPCode": 200, "types": [] }));
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert!(keys.iter().all(|key| !key.starts_with("exception")));
    }

    #[test]
    fn test_wrap_failure_per_kind() {
        let cases = [
            (MetadataCatalogError::invalid_entity("x"), 400, "InvalidEntityError"),
            (MetadataCatalogError::unauthorized("x"), 403, "UnauthorizedError"),
            (MetadataCatalogError::repository_access("x"), 404, "RepositoryAccessError"),
        ];
        for (error, code, class_name) in cases {
            let envelope: ResponseEnvelope<()> = wrap_failure(&error);
            let failure = envelope.failure_detail().unwrap();
            assert_eq!(failure.related_http_code, code);
            assert_eq!(failure.class_name, class_name);
            assert_eq!(failure.error_message, "x");
        }
    }

    #[test]
    fn test_assemble_domain_error() {
        let result: Result<(), DomainError> = Err(RepositoryError::not_found("g7").into());
        let envelope = assemble(result);
        assert_eq!(
            envelope.failure_detail(),
            Some(&REPOSITORY_ACCESS.as_failure("Entity not found: g7"))
        );
    }

    #[test]
    fn test_assemble_is_idempotent() {
        let error = || -> Result<u8, MetadataCatalogError> {
            Err(MetadataCatalogError::invalid_entity("broken"))
        };
        assert_eq!(assemble(error()), assemble(error()));
        assert_eq!(
            assemble::<_, MetadataCatalogError>(Ok(5_u8)),
            assemble::<_, MetadataCatalogError>(Ok(5_u8))
        );
    }
}

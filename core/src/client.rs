//! Stateless HTTP request builder and response parser for the Medware API.
//!
//! # Design
//! `ApiClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`; a
//! `Transport` (or any host) executes the round-trip in between. Both sides
//! are generic over [`Resource`], so members and benefits share one code
//! path distinguished only by `R::PATH` and the DTO types.

use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Resource;

/// Synchronous, stateless client for the Medware API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the list request for a collection: `GET {base}{R::PATH}`.
    pub fn build_list<R: Resource>(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}{}", self.base_url, R::PATH),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Build the create request for a draft: `POST {base}{R::PATH}` with a
    /// JSON body.
    pub fn build_create<R: Resource>(&self, draft: &R::Draft) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(draft).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}{}", self.base_url, R::PATH),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Interpret a list response.
    ///
    /// Reads gate on body shape alone; the status code is not consulted.
    /// A JSON array deserializes element-wise, preserving server order;
    /// any other well-formed JSON value degrades to an empty collection.
    /// Only an unparseable body is an error.
    pub fn parse_list<R: Resource>(&self, response: HttpResponse) -> Result<Vec<R>, ApiError> {
        let value: Value = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;
        match value {
            Value::Array(_) => {
                serde_json::from_value(value).map_err(|e| ApiError::Deserialization(e.to_string()))
            }
            _ => Ok(Vec::new()),
        }
    }

    /// Interpret a create response. Any 2xx status is success; the body is
    /// not consumed. Non-2xx maps to `ApiError::Http`.
    pub fn parse_create(&self, response: HttpResponse) -> Result<(), ApiError> {
        if response.is_success() {
            return Ok(());
        }
        Err(ApiError::Http {
            status: response.status,
            body: response.body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Benefit, BenefitDraft, Member, MemberDraft};

    fn client() -> ApiClient {
        ApiClient::new("http://localhost:3000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_members_produces_correct_request() {
        let req = client().build_list::<Member>();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/members");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_list_benefits_produces_correct_request() {
        let req = client().build_list::<Benefit>();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/benefits");
    }

    #[test]
    fn build_create_member_produces_correct_request() {
        let draft = MemberDraft {
            m_member: "Alice".to_string(),
            ..MemberDraft::default()
        };
        let req = client().build_create::<Member>(&draft).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/members");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["mMember"], "Alice");
        assert_eq!(body["mSubsType"], "S");
        assert_eq!(body["mVip"], "Y");
    }

    #[test]
    fn build_create_benefit_serializes_numeric_defaults() {
        let req = client().build_create::<Benefit>(&BenefitDraft::default()).unwrap();
        let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["bnDtEnt"], 1);
        assert_eq!(body["bnDeps"], 1);
        assert_eq!(body["bnPct"], 1);
    }

    #[test]
    fn parse_list_preserves_server_order() {
        let body = r#"[
            {"id":"2","mMember":"Bob","gGroup":"","mSubsType":"S","mReasonRes":"","mCatch":"","mVip":"N"},
            {"id":"1","mMember":"Alice","gGroup":"","mSubsType":"S","mReasonRes":"","mCatch":"","mVip":"Y"}
        ]"#;
        let members: Vec<Member> = client().parse_list(response(200, body)).unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].id, "2");
        assert_eq!(members[1].id, "1");
    }

    #[test]
    fn parse_list_non_array_degrades_to_empty() {
        let cases = [r#"{"error":"oops"}"#, r#""hello""#, "42", "null", "true"];
        for body in cases {
            let members: Vec<Member> = client().parse_list(response(200, body)).unwrap();
            assert!(members.is_empty(), "body {body:?} should yield empty");
        }
    }

    #[test]
    fn parse_list_ignores_status_code() {
        let members: Vec<Member> = client().parse_list(response(500, "[]")).unwrap();
        assert!(members.is_empty());
    }

    #[test]
    fn parse_list_bad_json_is_an_error() {
        let err = client().parse_list::<Member>(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_create_accepts_any_2xx() {
        assert!(client().parse_create(response(200, "")).is_ok());
        assert!(client().parse_create(response(201, r#"{"id":"x"}"#)).is_ok());
        assert!(client().parse_create(response(204, "")).is_ok());
    }

    #[test]
    fn parse_create_rejects_non_success() {
        let err = client().parse_create(response(500, "boom")).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
        let err = client().parse_create(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 404, .. }));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = ApiClient::new("http://localhost:3000/");
        let req = client.build_list::<Benefit>();
        assert_eq!(req.path, "http://localhost:3000/benefits");
    }
}

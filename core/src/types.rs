//! Domain DTOs for the Medware API.
//!
//! # Design
//! The wire format uses the API's camelCase field names (`mMember`,
//! `bnDtEnt`, ...); Rust code uses snake_case via `rename_all`. Records are
//! server-owned — `id` is assigned on create and the client never mutates
//! or deletes a record. Drafts hold the client-editable subset with the
//! defaults the creation forms pre-fill.
//!
//! The `Resource` trait is the per-kind strategy the generic controller
//! and client are parameterized over: endpoint path, log label, draft type,
//! and whether a successful create resets the draft.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A record kind the API exposes as a collection endpoint.
pub trait Resource: DeserializeOwned {
    /// The editable form state submitted on create.
    type Draft: Serialize + Default;

    /// Collection path relative to the base URL, e.g. `"/members"`.
    const PATH: &'static str;

    /// Singular label used in log messages.
    const NAME: &'static str;

    /// Whether a successful create resets the draft back to its defaults.
    /// The member screen keeps its draft; the benefit screen clears it.
    const RESETS_DRAFT_ON_CREATE: bool;
}

/// A member record as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub m_member: String,
    pub g_group: String,
    pub m_subs_type: String,
    pub m_reason_res: String,
    pub m_catch: String,
    pub m_vip: String,
}

/// Editable form state for a new member. No field is validated client-side;
/// an all-empty draft is submittable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDraft {
    pub m_member: String,
    pub g_group: String,
    pub m_subs_type: String,
    pub m_reason_res: String,
    pub m_catch: String,
    pub m_vip: String,
}

impl Default for MemberDraft {
    fn default() -> Self {
        Self {
            m_member: String::new(),
            g_group: String::new(),
            m_subs_type: "S".to_string(),
            m_reason_res: String::new(),
            m_catch: String::new(),
            m_vip: "Y".to_string(),
        }
    }
}

impl Resource for Member {
    type Draft = MemberDraft;
    const PATH: &'static str = "/members";
    const NAME: &'static str = "member";
    const RESETS_DRAFT_ON_CREATE: bool = false;
}

/// A benefit record as returned by the API. `m_member` is a free-text
/// association; it is not checked against the member collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Benefit {
    pub id: String,
    pub m_member: String,
    pub bn_dt_ent: i64,
    pub bn_id: String,
    pub bn_desc: String,
    pub bn_deps: i64,
    pub bn_pct: i64,
}

/// Editable form state for a new benefit. Numeric fields come from free
/// text input; use [`parse_numeric`] to apply the fallback-to-1 policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitDraft {
    pub m_member: String,
    pub bn_dt_ent: i64,
    pub bn_id: String,
    pub bn_desc: String,
    pub bn_deps: i64,
    pub bn_pct: i64,
}

impl Default for BenefitDraft {
    fn default() -> Self {
        Self {
            m_member: String::new(),
            bn_dt_ent: 1,
            bn_id: String::new(),
            bn_desc: String::new(),
            bn_deps: 1,
            bn_pct: 1,
        }
    }
}

impl Resource for Benefit {
    type Draft = BenefitDraft;
    const PATH: &'static str = "/benefits";
    const NAME: &'static str = "benefit";
    const RESETS_DRAFT_ON_CREATE: bool = true;
}

/// Parse a numeric form field, falling back to exactly 1 when the text is
/// blank, non-numeric, or zero. Negative values pass through unclamped.
pub fn parse_numeric(input: &str) -> i64 {
    match input.trim().parse::<i64>() {
        Ok(0) | Err(_) => 1,
        Ok(n) => n,
    }
}

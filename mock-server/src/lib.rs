//! In-memory stand-in for the Medware records API.
//!
//! Serves `GET`/`POST` on `/members` and `/benefits`. Records live in
//! `Vec`s so list responses keep insertion order, which the client-side
//! tests rely on. Ids are server-assigned UUID strings.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
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

/// Create payload. Every field defaults so partial drafts are accepted —
/// the real API performs no validation and neither does the client.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMember {
    #[serde(default)]
    pub m_member: String,
    #[serde(default)]
    pub g_group: String,
    #[serde(default)]
    pub m_subs_type: String,
    #[serde(default)]
    pub m_reason_res: String,
    #[serde(default)]
    pub m_catch: String,
    #[serde(default)]
    pub m_vip: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
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

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBenefit {
    #[serde(default)]
    pub m_member: String,
    #[serde(default)]
    pub bn_dt_ent: i64,
    #[serde(default)]
    pub bn_id: String,
    #[serde(default)]
    pub bn_desc: String,
    #[serde(default)]
    pub bn_deps: i64,
    #[serde(default)]
    pub bn_pct: i64,
}

#[derive(Debug, Default)]
pub struct Store {
    members: Vec<Member>,
    benefits: Vec<Benefit>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/members", get(list_members).post(create_member))
        .route("/benefits", get(list_benefits).post(create_benefit))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_members(State(db): State<Db>) -> Json<Vec<Member>> {
    Json(db.read().await.members.clone())
}

async fn create_member(
    State(db): State<Db>,
    Json(input): Json<CreateMember>,
) -> (StatusCode, Json<Member>) {
    let member = Member {
        id: Uuid::new_v4().to_string(),
        m_member: input.m_member,
        g_group: input.g_group,
        m_subs_type: input.m_subs_type,
        m_reason_res: input.m_reason_res,
        m_catch: input.m_catch,
        m_vip: input.m_vip,
    };
    db.write().await.members.push(member.clone());
    (StatusCode::CREATED, Json(member))
}

async fn list_benefits(State(db): State<Db>) -> Json<Vec<Benefit>> {
    Json(db.read().await.benefits.clone())
}

async fn create_benefit(
    State(db): State<Db>,
    Json(input): Json<CreateBenefit>,
) -> (StatusCode, Json<Benefit>) {
    let benefit = Benefit {
        id: Uuid::new_v4().to_string(),
        m_member: input.m_member,
        bn_dt_ent: input.bn_dt_ent,
        bn_id: input.bn_id,
        bn_desc: input.bn_desc,
        bn_deps: input.bn_deps,
        bn_pct: input.bn_pct,
    };
    db.write().await.benefits.push(benefit.clone());
    (StatusCode::CREATED, Json(benefit))
}

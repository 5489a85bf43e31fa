//! Client core for the Medware records API.
//!
//! # Overview
//! Implements the list/create/refresh data-sync contract shared by the
//! members and benefits screens: each [`CollectionController`] holds the
//! displayed collection, a busy flag, and an editable draft, and drives a
//! stateless [`ApiClient`] over plain-data HTTP values (host-does-IO
//! pattern). A [`Transport`] executes the actual round-trips.
//!
//! # Design
//! - `ApiClient` is stateless — it holds only `base_url` — and splits every
//!   operation into `build_*` / `parse_*`.
//! - The two record kinds share one generic controller; everything
//!   kind-specific lives in the [`Resource`] impls.
//! - Fetches carry generation tokens so overlapping requests settle
//!   deterministically instead of last-write-wins.
//! - All failures come back as [`ApiError`] at the operation boundary;
//!   nothing panics.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use controller::{BenefitController, CollectionController, FetchOutcome, FetchToken, MemberController};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{parse_numeric, Benefit, BenefitDraft, Member, MemberDraft, Resource};

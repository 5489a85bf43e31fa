//! Per-collection screen controller: list, create, refresh.
//!
//! # Design
//! One generic `CollectionController<R>` serves both record kinds;
//! everything kind-specific comes from the [`Resource`] impl. State is
//! explicit and injected (no globals), so each controller is unit-testable
//! in isolation.
//!
//! Operations follow the same split as `ApiClient`: `begin_fetch` /
//! `complete_fetch` bracket the I/O the host performs, and the
//! transport-driven `refresh` / `create` conveniences compose the two for
//! callers that just want the round-trip done.
//!
//! Every fetch carries a generation token and completions from superseded
//! generations are discarded outright, so overlapping fetches settle
//! deterministically instead of last-write-wins.

use tracing::{debug, error};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{Benefit, Member, Resource};

/// Identifies one in-flight fetch. Returned by `begin_fetch` and consumed
/// by `complete_fetch`; a token whose fetch has been superseded by a newer
/// `begin_fetch` is stale and its completion is a no-op.
#[derive(Debug)]
pub struct FetchToken {
    generation: u64,
}

/// What `complete_fetch` did with the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The collection was replaced with the response.
    Applied,
    /// The fetch was superseded; nothing changed.
    Stale,
}

/// Screen state and operations for one collection endpoint.
pub struct CollectionController<R: Resource> {
    client: ApiClient,
    collection: Vec<R>,
    busy: bool,
    draft: R::Draft,
    generation: u64,
}

pub type MemberController = CollectionController<Member>;
pub type BenefitController = CollectionController<Benefit>;

impl<R: Resource> CollectionController<R> {
    /// A fresh controller: empty collection, default draft, not busy. The
    /// caller issues the initial `refresh`.
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            collection: Vec::new(),
            busy: false,
            draft: R::Draft::default(),
            generation: 0,
        }
    }

    /// The currently displayed records, in server order.
    pub fn collection(&self) -> &[R] {
        &self.collection
    }

    /// True while a fetch is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn draft(&self) -> &R::Draft {
        &self.draft
    }

    /// Mutable access for form edits; fields are replaced directly with no
    /// per-field validation.
    pub fn draft_mut(&mut self) -> &mut R::Draft {
        &mut self.draft
    }

    /// Start a fetch: raise the busy flag and hand back the list request
    /// together with its generation token.
    pub fn begin_fetch(&mut self) -> (HttpRequest, FetchToken) {
        self.busy = true;
        self.generation += 1;
        let token = FetchToken {
            generation: self.generation,
        };
        (self.client.build_list::<R>(), token)
    }

    /// Settle a fetch. Stale tokens are discarded without touching any
    /// state. For the current generation the busy flag drops regardless of
    /// outcome; on success the collection is replaced wholesale, on failure
    /// it is left as-is and the error is returned.
    pub fn complete_fetch(
        &mut self,
        token: FetchToken,
        result: Result<HttpResponse, ApiError>,
    ) -> Result<FetchOutcome, ApiError> {
        if token.generation != self.generation {
            return Ok(FetchOutcome::Stale);
        }
        self.busy = false;
        let records = self.client.parse_list::<R>(result?)?;
        self.collection = records;
        Ok(FetchOutcome::Applied)
    }

    /// Build the create request for the current draft.
    pub fn build_create(&self) -> Result<HttpRequest, ApiError> {
        self.client.build_create::<R>(&self.draft)
    }

    /// Settle a create. On success the draft resets to defaults when the
    /// record kind calls for it; on failure the draft is left untouched so
    /// the user can correct and resubmit.
    pub fn complete_create(&mut self, result: Result<HttpResponse, ApiError>) -> Result<(), ApiError> {
        self.client.parse_create(result?)?;
        if R::RESETS_DRAFT_ON_CREATE {
            self.draft = R::Draft::default();
        }
        Ok(())
    }

    /// Fetch the collection through `transport` and apply the result.
    pub fn refresh<T: Transport>(&mut self, transport: &T) -> Result<FetchOutcome, ApiError> {
        debug!(kind = R::NAME, "fetching collection");
        let (request, token) = self.begin_fetch();
        let result = transport.execute(request);
        self.complete_fetch(token, result).inspect_err(|e| {
            error!(kind = R::NAME, error = %e, "failed to fetch collection");
        })
    }

    /// Submit the current draft through `transport`. A successful create is
    /// followed by exactly one `refresh`; any failure triggers none.
    pub fn create<T: Transport>(&mut self, transport: &T) -> Result<FetchOutcome, ApiError> {
        debug!(kind = R::NAME, "creating record");
        let request = self.build_create()?;
        let result = transport.execute(request);
        self.complete_create(result).inspect_err(|e| {
            error!(kind = R::NAME, error = %e, "failed to create record");
        })?;
        self.refresh(transport)
    }
}

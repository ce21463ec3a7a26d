//! Stub Service - reports where each stub resolves.

use serde::Serialize;

use crate::{
    application::ports::{StubOrigin, StubSource},
    domain::StubId,
};

/// One row of `stratagen list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StubInfo {
    pub id: StubId,
    pub file_name: String,
    /// `None` when no source provides the stub.
    pub origin: Option<StubOrigin>,
}

pub struct StubService {
    stubs: Box<dyn StubSource>,
}

impl StubService {
    pub fn new(stubs: Box<dyn StubSource>) -> Self {
        Self { stubs }
    }

    /// Every known stub, in generation order.
    pub fn list(&self) -> Vec<StubInfo> {
        StubId::ALL
            .into_iter()
            .map(|id| StubInfo {
                id,
                file_name: id.file_name(),
                origin: self.stubs.locate(id),
            })
            .collect()
    }

    pub fn missing(&self) -> Vec<StubId> {
        self.list()
            .into_iter()
            .filter(|info| info.origin.is_none())
            .map(|info| info.id)
            .collect()
    }
}

use std::sync::Arc;

use serde::Serialize;

use super::{AddOutcome, ListKind, ListStore};
use crate::activity::ActivityEntry;
use crate::auth::Identity;
use crate::catalog::Title;
use crate::metrics;
use crate::store::StoreError;

/// Whether a toggle adds or removes the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleDirection {
    Add,
    Remove,
}

impl ToggleDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToggleDirection::Add => "add",
            ToggleDirection::Remove => "remove",
        }
    }
}

/// What a toggle hands back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToggleOutcome {
    /// After an add: the caller's full list of that kind.
    List(Vec<Title>),
    /// After a remove: the entry recording it.
    Removed(ActivityEntry),
}

/// Applies list toggles on behalf of an authenticated user.
pub struct ListCoordinator {
    store: Arc<dyn ListStore>,
}

impl ListCoordinator {
    pub fn new(store: Arc<dyn ListStore>) -> Self {
        Self { store }
    }

    /// The caller's list of the given kind.
    pub fn titles(&self, identity: &Identity, kind: ListKind) -> Result<Vec<Title>, StoreError> {
        self.store.list(identity.user_id, kind)
    }

    /// Add or remove `imdb_id` on the caller's list.
    ///
    /// An add of a title already on the list succeeds without writing
    /// anything. A remove of a title not on the list is
    /// [`StoreError::NotFound`].
    pub fn toggle(
        &self,
        identity: &Identity,
        imdb_id: &str,
        kind: ListKind,
        direction: ToggleDirection,
    ) -> Result<ToggleOutcome, StoreError> {
        let result = match direction {
            ToggleDirection::Add => self.add(identity, imdb_id, kind),
            ToggleDirection::Remove => self.remove(identity, imdb_id, kind),
        };

        if let Err(e) = &result {
            let outcome = match e {
                StoreError::NotFound(_) => "not_found",
                _ => "error",
            };
            record(kind, direction, outcome);
            tracing::debug!(
                user = %identity.username,
                imdb_id,
                list = kind.as_str(),
                direction = direction.as_str(),
                error = %e,
                "List toggle failed"
            );
        }

        result
    }

    fn add(
        &self,
        identity: &Identity,
        imdb_id: &str,
        kind: ListKind,
    ) -> Result<ToggleOutcome, StoreError> {
        match self.store.add(identity.user_id, imdb_id, kind)? {
            AddOutcome::Added(entry) => {
                record(kind, ToggleDirection::Add, "added");
                metrics::ACTIVITY_ENTRIES
                    .with_label_values(&[entry.activity_type.as_str()])
                    .inc();
                tracing::info!(
                    user = %identity.username,
                    imdb_id,
                    list = kind.as_str(),
                    activity_id = entry.id,
                    "Added title to list"
                );
            }
            AddOutcome::AlreadyPresent => {
                record(kind, ToggleDirection::Add, "already_present");
                tracing::debug!(
                    user = %identity.username,
                    imdb_id,
                    list = kind.as_str(),
                    "Title already on list"
                );
            }
        }

        Ok(ToggleOutcome::List(self.store.list(identity.user_id, kind)?))
    }

    fn remove(
        &self,
        identity: &Identity,
        imdb_id: &str,
        kind: ListKind,
    ) -> Result<ToggleOutcome, StoreError> {
        let entry = self.store.remove(identity.user_id, imdb_id, kind)?;

        record(kind, ToggleDirection::Remove, "removed");
        metrics::ACTIVITY_ENTRIES
            .with_label_values(&[entry.activity_type.as_str()])
            .inc();
        tracing::info!(
            user = %identity.username,
            imdb_id,
            list = kind.as_str(),
            activity_id = entry.id,
            "Removed title from list"
        );

        Ok(ToggleOutcome::Removed(entry))
    }
}

fn record(kind: ListKind, direction: ToggleDirection, outcome: &str) {
    metrics::LIST_MUTATIONS
        .with_label_values(&[kind.as_str(), direction.as_str(), outcome])
        .inc();
}

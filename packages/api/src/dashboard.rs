//! Summaries the landing page draws from the cached document list.
//!
//! Everything here is computed locally from whatever
//! [`DocumentSync`](crate::sync::DocumentSync) last listed; nothing extra is
//! requested from the backend.

use std::collections::BTreeMap;

use crate::models::{sort_newest_first, Document};

/// How many documents the "recent" card lists.
pub const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploaderCount {
    pub user_id: String,
    pub documents: usize,
}

/// Documents per `user_id`, busiest uploader first. Equal counts are ordered by id.
pub fn uploads_per_user(documents: &[Document]) -> Vec<UploaderCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for document in documents {
        *counts.entry(document.user_id.as_str()).or_default() += 1;
    }
    let mut counts: Vec<UploaderCount> = counts
        .into_iter()
        .map(|(user_id, documents)| UploaderCount {
            user_id: user_id.to_string(),
            documents,
        })
        .collect();
    // Stable sort keeps the id order from the map for ties.
    counts.sort_by(|a, b| b.documents.cmp(&a.documents));
    counts
}

/// The `n` newest documents, newest first.
pub fn recent(documents: &[Document], n: usize) -> Vec<Document> {
    let mut documents = documents.to_vec();
    sort_newest_first(&mut documents);
    documents.truncate(n);
    documents
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSummary {
    pub total: usize,
    pub per_user: Vec<UploaderCount>,
    pub recent: Vec<Document>,
}

impl DashboardSummary {
    pub fn from_documents(documents: &[Document]) -> Self {
        Self {
            total: documents.len(),
            per_user: uploads_per_user(documents),
            recent: recent(documents, RECENT_LIMIT),
        }
    }
}

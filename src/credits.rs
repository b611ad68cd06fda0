//! Assembly of the sorted, render-ready credits model.

use crate::error::Result;
use crate::patch::PatchRecord;
use indexmap::IndexMap;
use serde::Serialize;

/// Patch records sorted by subject, ready to be handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditsModel {
    records: Vec<PatchRecord>,
}

/// Template-facing view of a [`PatchRecord`].
///
/// `parent` and `from` duplicate `group` and `author` so templates written
/// against either naming keep working.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordView<'a> {
    pub group: &'a str,
    pub parent: &'a str,
    pub author: &'a str,
    pub from: &'a str,
    pub subject: &'a str,
    pub co_authors: &'a [String],
    pub co_author_string: String,
}

impl<'a> From<&'a PatchRecord> for RecordView<'a> {
    fn from(record: &'a PatchRecord) -> Self {
        Self {
            group: &record.group,
            parent: &record.group,
            author: &record.author,
            from: &record.author,
            subject: &record.subject,
            co_authors: &record.co_authors,
            co_author_string: record.co_author_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CreditsContext<'a> {
    patches: &'a [RecordView<'a>],
    records: &'a [RecordView<'a>],
    groups: IndexMap<&'a str, Vec<&'a RecordView<'a>>>,
    count: usize,
}

impl CreditsModel {
    /// Sorts `records` by subject and wraps them in a model.
    ///
    /// Returns `None` for an empty collection, meaning there is nothing to generate.
    /// The sort is stable: patches with equal subjects keep their scan order.
    pub fn assemble(mut records: Vec<PatchRecord>) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        records.sort_by(|a, b| a.subject.cmp(&b.subject));
        Some(Self { records })
    }

    pub fn records(&self) -> &[PatchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Builds the template context.
    ///
    /// # Returns
    /// * `Result<serde_json::Value>` - Object with `patches` (and its alias `records`),
    ///   `groups` keyed by group name in first-seen order, and `count`
    pub fn context(&self) -> Result<serde_json::Value> {
        let views: Vec<RecordView> = self.records.iter().map(RecordView::from).collect();

        let mut groups: IndexMap<&str, Vec<&RecordView>> = IndexMap::new();
        for view in &views {
            groups.entry(view.group).or_default().push(view);
        }

        let context =
            CreditsContext { patches: &views, records: &views, groups, count: views.len() };
        Ok(serde_json::to_value(&context)?)
    }
}

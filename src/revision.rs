use crate::EntityContent;

/// One fetched snapshot of an entity: its typed content plus the page and
/// revision identifiers the wiki reported for it. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Revision {
    content: EntityContent,
    page_id: u64,
    revision_id: u64,
    timestamp: Option<String>,
}

impl Revision {
    pub const fn new(
        content: EntityContent,
        page_id: u64,
        revision_id: u64,
        timestamp: Option<String>,
    ) -> Self {
        Self {
            content,
            page_id,
            revision_id,
            timestamp,
        }
    }

    /// Returns the content of the revision.
    pub const fn content(&self) -> &EntityContent {
        &self.content
    }

    /// Returns the wiki page ID the entity lives on.
    pub const fn page_id(&self) -> u64 {
        self.page_id
    }

    /// Returns the latest revision ID of the page.
    pub const fn revision_id(&self) -> u64 {
        self.revision_id
    }

    /// Returns the modification timestamp, verbatim as the wiki reported it.
    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }
}

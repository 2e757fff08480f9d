//! Document arena
//!
//! Holds the corpus in the caller's iteration order. Every derived map is
//! keyed by [`DocId`], which is the position in that order, so alias
//! last-write-wins and backlink ordering follow it exactly.

use super::document::{DocId, DocumentRecord};

#[derive(Debug, Clone, Default)]
pub struct Corpus {
    docs: Vec<DocumentRecord>,
}

impl Corpus {
    pub fn new(docs: Vec<DocumentRecord>) -> Self {
        Self { docs }
    }

    pub fn push(&mut self, doc: DocumentRecord) -> DocId {
        self.docs.push(doc);
        DocId(self.docs.len() - 1)
    }

    pub fn get(&self, id: DocId) -> Option<&DocumentRecord> {
        self.docs.get(id.index())
    }

    pub fn get_mut(&mut self, id: DocId) -> Option<&mut DocumentRecord> {
        self.docs.get_mut(id.index())
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = DocId> + '_ {
        (0..self.docs.len()).map(DocId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (DocId, &DocumentRecord)> {
        self.docs.iter().enumerate().map(|(i, d)| (DocId(i), d))
    }

    pub fn docs(&self) -> &[DocumentRecord] {
        &self.docs
    }

    pub fn docs_mut(&mut self) -> &mut [DocumentRecord] {
        &mut self.docs
    }

    /// First document whose path equals `path`
    pub fn find_by_path(&self, path: &str) -> Option<DocId> {
        self.docs.iter().position(|d| d.path == path).map(DocId)
    }
}

impl std::ops::Index<DocId> for Corpus {
    type Output = DocumentRecord;

    fn index(&self, id: DocId) -> &DocumentRecord {
        &self.docs[id.index()]
    }
}

impl FromIterator<DocumentRecord> for Corpus {
    fn from_iter<I: IntoIterator<Item = DocumentRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

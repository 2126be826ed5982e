use super::RecordStore;
use crate::model::Record;

/// Vec-backed storage for a single run. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Vec<Record>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryStore {
    fn append(&mut self, record: Record) {
        self.records.push(record);
    }

    fn remove_where<F>(&mut self, mut predicate: F) -> Vec<Record>
    where
        F: FnMut(&Record) -> bool,
    {
        let (removed, kept): (Vec<Record>, Vec<Record>) = std::mem::take(&mut self.records)
            .into_iter()
            .partition(|record| predicate(record));
        self.records = kept;
        removed
    }

    fn records(&self) -> &[Record] {
        &self.records
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Aphorism, Proverb};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_aphorism(mut self, content: &str, author: &str) -> Self {
            self.store.append(Record::Aphorism(Aphorism {
                content: content.to_string(),
                author: author.to_string(),
            }));
            self
        }

        pub fn with_proverb(mut self, content: &str, country: &str) -> Self {
            self.store.append(Record::Proverb(Proverb {
                content: content.to_string(),
                country: country.to_string(),
            }));
            self
        }

        /// A mixed store: two aphorisms followed by two proverbs.
        pub fn with_sample_records(self) -> Self {
            self.with_aphorism("Knowledge is power", "Francis Bacon")
                .with_aphorism("I think, therefore I am", "Rene Descartes")
                .with_proverb("No pain, no gain", "USA")
                .with_proverb("East or West, home is best", "Russia")
        }
    }
}

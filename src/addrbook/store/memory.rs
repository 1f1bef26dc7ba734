use super::{DataStore, RejectedLine};
use crate::error::Result;
use chrono::{DateTime, Utc};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    content: Option<Vec<u8>>,
    modified: Option<DateTime<Utc>>,
    quarantined: Vec<RejectedLine>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `content`, as if a file had been saved earlier.
    pub fn with_content(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: Some(content.into()),
            modified: Some(Utc::now()),
            quarantined: Vec::new(),
        }
    }

    /// Stored text; `None` when nothing was saved or the bytes aren't UTF-8.
    pub fn content(&self) -> Option<&str> {
        self.content
            .as_deref()
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    pub fn quarantined(&self) -> &[RejectedLine] {
        &self.quarantined
    }
}

impl DataStore for InMemoryStore {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.content.clone())
    }

    fn write(&mut self, content: &str) -> Result<()> {
        self.content = Some(content.as_bytes().to_vec());
        self.modified = Some(Utc::now());
        Ok(())
    }

    fn quarantine(&mut self, lines: &[RejectedLine]) -> Result<()> {
        self.quarantined.extend_from_slice(lines);
        Ok(())
    }

    fn last_modified(&self) -> Result<Option<DateTime<Utc>>> {
        Ok(self.modified)
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::ContactFields;
    use crate::store::codec;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        lines: Vec<String>,
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
                lines: Vec::new(),
            }
        }

        pub fn with_contact(mut self, first: &str, last: &str) -> Self {
            let fields = ContactFields::new(
                first,
                last,
                format!("{} Street", last),
                "0700 000000",
                "",
                format!("{}@example.com", first.to_lowercase()),
            );
            self.lines.push(codec::encode_line(&fields));
            self.sync();
            self
        }

        pub fn with_raw_line(mut self, raw: &str) -> Self {
            self.lines.push(raw.to_string());
            self.sync();
            self
        }

        fn sync(&mut self) {
            let mut content = self.lines.join("\n");
            content.push('\n');
            self.store = InMemoryStore::with_content(content);
        }
    }
}

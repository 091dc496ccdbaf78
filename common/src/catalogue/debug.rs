//! Decorator marking resolved text to expose untranslated strings.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::debug;

use super::Catalogue;
use crate::render::RenderOptions;

/// Wraps another catalogue and marks every lookup result.
///
/// Text found in the inner catalogue is rendered as `**text**`; keys the inner
/// catalogue does not define are rendered as `??key??`. Each looked-up key is
/// recorded as either used or orphaned so translators can audit coverage after
/// exercising an application.
///
/// ```
/// use std::sync::Arc;
/// use glossa_common::{Catalogue, DebugCatalogue, MessageCatalogue, RenderOptions};
///
/// let mut messages = MessageCatalogue::new("en-GB")?;
/// messages.add_message("SAVE", "Save");
/// let catalogue = DebugCatalogue::new(Arc::new(messages));
///
/// assert_eq!(catalogue.lookup("SAVE", RenderOptions::default()), "**Save**");
/// assert_eq!(catalogue.lookup("CANCEL", RenderOptions::default()), "??CANCEL??");
/// assert_eq!(catalogue.orphans(), vec!["CANCEL".to_string()]);
/// # Ok::<(), glossa_common::CatalogueError>(())
/// ```
pub struct DebugCatalogue {
    inner: Arc<dyn Catalogue>,
    record: Mutex<LookupRecord>,
}

#[derive(Debug, Default)]
struct LookupRecord {
    used: BTreeSet<String>,
    orphans: BTreeSet<String>,
}

impl DebugCatalogue {
    /// Decorate `inner`.
    #[must_use]
    pub fn new(inner: Arc<dyn Catalogue>) -> Self {
        Self {
            inner,
            record: Mutex::new(LookupRecord::default()),
        }
    }

    /// Return the decorated catalogue.
    #[must_use]
    pub fn inner(&self) -> &Arc<dyn Catalogue> {
        &self.inner
    }

    /// Keys looked up that the inner catalogue defines, sorted.
    #[must_use]
    pub fn used(&self) -> Vec<String> {
        self.record().used.iter().cloned().collect()
    }

    /// Keys looked up that the inner catalogue lacks, sorted.
    #[must_use]
    pub fn orphans(&self) -> Vec<String> {
        self.record().orphans.iter().cloned().collect()
    }

    /// Forget every recorded lookup.
    pub fn clear(&self) {
        let mut record = self.record();
        record.used.clear();
        record.orphans.clear();
    }

    fn record(&self) -> MutexGuard<'_, LookupRecord> {
        // A panic while recording cannot leave the sets inconsistent.
        self.record.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Catalogue for DebugCatalogue {
    fn has_key(&self, key: &str) -> bool {
        self.inner.has_key(key)
    }

    fn lookup(&self, key: &str, options: RenderOptions) -> String {
        if key.is_empty() {
            return String::new();
        }

        let text = self.inner.lookup(key, options);
        if self.inner.has_key(key) {
            self.record().used.insert(key.to_owned());
            format!("**{text}**")
        } else {
            debug!(
                target: "glossa_common::catalogue::debug",
                "orphan key `{key}` looked up without a translation",
            );
            self.record().orphans.insert(key.to_owned());
            format!("??{text}??")
        }
    }

    fn plural_suffixes(&self, count: i64) -> Vec<String> {
        self.inner.plural_suffixes(count)
    }
}

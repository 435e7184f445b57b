use log::{debug, info, warn};
use std::time::Instant;

use crate::catalog::Catalog;
use crate::config::SearchConfig;
use crate::filter::ItemFilter;
use crate::i18n::{self, Language, NameKind, TranslationTables};
use crate::index::{ProducingItem, SortPolicy};
use crate::model::Item;
use crate::search::{
    rank_materials, resolve, sanitize_query, Candidate, Debouncer, RankedMatch, Resolution,
};
use crate::storage::{self, KeyValueStore, Selection, SELECTION_KEY};

/// A loaded catalog plus the user's state: selection, language and the
/// pending autocomplete query.
///
/// Created through [`crate::MaterialLookup::builder`]. Every change to the
/// selection or language is mirrored into the session's store; write
/// failures are logged and otherwise ignored.
pub struct LookupSession {
    catalog: Catalog,
    tables: TranslationTables,
    language: Language,
    store: Box<dyn KeyValueStore>,
    selection: Selection,
    search: SearchConfig,
    sort_policy: SortPolicy,
    debouncer: Debouncer<String>,
}

impl LookupSession {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        catalog: Catalog,
        tables: TranslationTables,
        language: Language,
        store: Box<dyn KeyValueStore>,
        selection: Selection,
        search: SearchConfig,
        sort_policy: SortPolicy,
    ) -> Self {
        let debouncer = Debouncer::new(search.debounce());
        Self {
            catalog,
            tables,
            language,
            store,
            selection,
            search,
            sort_policy,
            debouncer,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn materials(&self) -> &[String] {
        self.catalog.materials()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn sort_policy(&self) -> SortPolicy {
        self.sort_policy
    }

    pub fn set_sort_policy(&mut self, policy: SortPolicy) {
        self.sort_policy = policy;
    }

    pub fn search_config(&self) -> &SearchConfig {
        &self.search
    }

    /// Switch the display language and remember it.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        if let Err(e) = storage::save_language(self.store.as_mut(), language) {
            warn!("Failed to save language: {}", e);
        }
    }

    /// Select a material and remember it. The name is stored as given.
    pub fn select_material(&mut self, material: impl Into<String>) {
        self.selection.material = material.into();
        debug!("Selected material {:?}", self.selection.material);
        self.persist_selection();
    }

    /// Set the target quantity, clamped to at least 1.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.selection.quantity = Some(quantity.max(1));
        self.persist_selection();
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::default();
        self.debouncer.cancel();
        if let Err(e) = self.store.remove(SELECTION_KEY) {
            warn!("Failed to clear saved selection: {}", e);
        }
    }

    fn persist_selection(&mut self) {
        if let Err(e) = storage::save_selection(self.store.as_mut(), &self.selection) {
            warn!("Failed to save selection: {}", e);
        }
    }

    /// Display name of a catalog name in the current language.
    pub fn display_name<'a>(&'a self, name: &'a str, kind: NameKind) -> &'a str {
        self.tables.translate(name, kind, self.language)
    }

    /// UI message in the current language.
    pub fn message(&self, key: &str, params: &[(&str, &str)]) -> String {
        i18n::t(key, self.language, params)
    }

    /// The vocabulary paired with localized display names.
    pub fn candidates(&self) -> Vec<Candidate> {
        self.materials()
            .iter()
            .map(|material| {
                Candidate::new(
                    material.as_str(),
                    self.display_name(material, NameKind::Material),
                )
            })
            .collect()
    }

    /// Ranked autocomplete entries for a raw query.
    pub fn suggestions(&self, raw_query: &str) -> Vec<RankedMatch> {
        let query = sanitize_query(raw_query, self.search.max_query_len);
        rank_materials(&query, &self.candidates(), self.search.max_results)
    }

    /// Resolve a raw query immediately, selecting the material on a unique
    /// match.
    pub fn resolve_now(&mut self, raw_query: &str) -> Resolution {
        let query = sanitize_query(raw_query, self.search.max_query_len);
        let resolution = resolve(
            &query,
            &self.candidates(),
            self.search.min_query_len,
            self.search.max_results,
        );
        if let Resolution::Selected(material) = &resolution {
            info!("Resolved {:?} to {}", query, material);
            self.select_material(material.clone());
        }
        resolution
    }

    /// Record a keystroke. Replaces any query still waiting for the debounce
    /// delay.
    pub fn input(&mut self, raw_query: &str, now: Instant) {
        let query = sanitize_query(raw_query, self.search.max_query_len);
        self.debouncer.schedule(query, now);
    }

    /// Run live resolution for the pending query once its delay has elapsed.
    /// Returns `None` while nothing is due.
    pub fn poll(&mut self, now: Instant) -> Option<Resolution> {
        let query = self.debouncer.poll(now)?;
        Some(self.resolve_now(&query))
    }

    pub fn has_pending_input(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Items producing the selected material, ranked by the session's policy.
    pub fn results(&self) -> Vec<ProducingItem<'_>> {
        if self.selection.is_empty() {
            return Vec::new();
        }
        self.catalog.producing(
            &self.selection.material,
            self.sort_policy,
            self.selection.target(),
        )
    }

    /// Items matching `filter`, in catalog order.
    pub fn items(&self, filter: &ItemFilter) -> Vec<&Item> {
        filter.apply(self.catalog.items())
    }
}

use crate::comparator::EntityComparator;
use crate::error::Result;
use crate::metrics;
use crate::relation::{MappingError, RelationRegistry};
use linguist_adapters::TranslationQuery;
use linguist_adapters::locale::LocaleAdapter;
use linguist_adapters::store::StoreAdapter;
use linguist_model::{EntityRef, EntityType, Locale, Translatable, Translation};
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{debug, trace};

/// The repository that queries translations for translatable items and assigns them.
///
/// All operations accept one or many items. A single item is passed as a one-element array (or
/// [Option]). Items are grouped by their translation type and one query is issued per group, so the
/// number of queries does not grow with the number of items.
///
/// The repository keeps no state between calls. If two calls target the same items concurrently,
/// the last assignment wins.
#[derive(Debug)]
pub struct TranslationRepository<Store, Locales> {
    store: Store,
    locales: Locales,
    relations: RelationRegistry,
    comparator: EntityComparator,
}

impl<Store, Locales> TranslationRepository<Store, Locales>
where
    Store: StoreAdapter,
    Locales: LocaleAdapter,
{
    pub fn new(store: Store, locales: Locales, relations: RelationRegistry) -> Self {
        Self {
            store,
            locales,
            relations,
            comparator: EntityComparator,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn locales(&self) -> &Locales {
        &self.locales
    }

    pub fn relations(&self) -> &RelationRegistry {
        &self.relations
    }

    /// Searches the translations of the items. If any locales are given, only translations for
    /// those locales are loaded.
    ///
    /// The result contains the translations of all groups, in group order and then in storage
    /// order.
    ///
    /// # Errors
    ///
    /// Will return [Error::Mapping](crate::Error::Mapping) before any query is issued if the type
    /// of any item has no valid translation type. Store errors are passed through.
    #[tracing::instrument(skip_all)]
    pub async fn find_translations<'i, 'l, I, L>(
        &self,
        items: I,
        locales: L,
    ) -> Result<Vec<Arc<dyn Translation>>>
    where
        I: IntoIterator<Item = &'i dyn Translatable>,
        L: IntoIterator<Item = &'l Locale>,
    {
        let started = Instant::now();
        let result = self.query_grouped(items, locales).await;
        metrics::resolution_duration::record(
            started,
            if result.is_ok() { "success" } else { "failure" },
        );
        result
    }

    /// Searches the translations of the items for the locale of the running request.
    #[tracing::instrument(skip_all)]
    pub async fn find_translation_for_current_locale<'i, I>(
        &self,
        items: I,
    ) -> Result<Vec<Arc<dyn Translation>>>
    where
        I: IntoIterator<Item = &'i dyn Translatable>,
    {
        let current = self.locales.current_locale().await?;
        self.find_translations(items, [&current]).await
    }

    /// Assigns the translation for the locale of the running request to every item. Items that have
    /// no translation for that locale get their translation for the default locale.
    #[tracing::instrument(skip_all)]
    pub async fn find_and_set_translation_for_current_locale<'a, I>(&self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a mut dyn Translatable>,
    {
        let items: Vec<&'a mut dyn Translatable> = items.into_iter().collect();
        let current = self.locales.current_locale().await?;
        let default = self.locales.default_locale().await?;
        debug!(current = %current, default = %default, items = items.len(), "resolving current locale");

        let translations = self
            .find_translations(
                items.iter().map(|item| &**item as &dyn Translatable),
                [&current, &default],
            )
            .await?;
        self.set_items_translated(items, &translations, Some(&default));
        Ok(())
    }

    /// Assigns the translation for exactly one locale to every item. Items that have no translation
    /// for that locale get their current translation unset.
    #[tracing::instrument(skip_all)]
    pub async fn find_and_set_translation_for_locale<'a, I>(
        &self,
        items: I,
        locale: &Locale,
    ) -> Result<()>
    where
        I: IntoIterator<Item = &'a mut dyn Translatable>,
    {
        let items: Vec<&'a mut dyn Translatable> = items.into_iter().collect();
        let translations = self
            .find_translations(items.iter().map(|item| &**item as &dyn Translatable), [locale])
            .await?;
        self.set_items_translated(items, &translations, None);
        Ok(())
    }

    /// Assigns the matching translation of `translations` to every item.
    ///
    /// The translations of an item are the ones it owns. The first owned translation that is not
    /// in the fallback locale is assigned. If there is none, the first owned translation in the
    /// fallback locale is assigned. An exact match therefore wins over a fallback even if the
    /// fallback comes first. Items without any owned translation get their translation unset.
    pub fn set_items_translated<'a, I>(
        &self,
        items: I,
        translations: &[Arc<dyn Translation>],
        fallback_locale: Option<&Locale>,
    ) where
        I: IntoIterator<Item = &'a mut dyn Translatable>,
    {
        for item in items {
            let mut primary = None;
            let mut fallback = None;
            for translation in translations {
                let Some(owner) = translation.translatable() else {
                    continue;
                };
                if !self.comparator.is_equal(&*item, owner) {
                    continue;
                }
                if fallback_locale.is_some_and(|locale| locale == translation.locale()) {
                    fallback.get_or_insert(translation);
                    continue;
                }
                primary = Some(translation);
                break;
            }

            let result = match (primary, fallback) {
                (Some(_), _) => "exact",
                (None, Some(_)) => "fallback",
                (None, None) => "missing",
            };
            trace!(item = %EntityRef::of(&*item), result, "assigning translation");
            metrics::resolved_translations::inc(result);
            item.set_current_translation(primary.or(fallback).cloned());
        }
    }

    async fn query_grouped<'i, 'l, I, L>(
        &self,
        items: I,
        locales: L,
    ) -> Result<Vec<Arc<dyn Translation>>>
    where
        I: IntoIterator<Item = &'i dyn Translatable>,
        L: IntoIterator<Item = &'l Locale>,
    {
        let groups = self.group_by_translation_type(items)?;
        if groups.is_empty() {
            trace!("no items to query translations for");
            return Ok(Vec::new());
        }

        let locales = locale_strings(locales);
        let mut result = Vec::new();
        for (translation_type, translatables) in groups {
            let query = TranslationQuery {
                translation_type,
                translatables,
                locales: locales.clone(),
            };
            debug!(
                translation_type = %query.translation_type,
                translatables = query.translatables.len(),
                locales = ?query.locales,
                "querying translations"
            );
            metrics::translation_queries::inc(query.translation_type.to_string());
            result.extend(self.store.find(&query).await?);
        }
        Ok(result)
    }

    /// Groups the items by their translation type, in order of first appearance.
    fn group_by_translation_type<'i, I>(
        &self,
        items: I,
    ) -> Result<Vec<(EntityType, Vec<EntityRef>)>, MappingError>
    where
        I: IntoIterator<Item = &'i dyn Translatable>,
    {
        let mut groups: Vec<(EntityType, Vec<EntityRef>)> = Vec::new();
        for item in items {
            let translation_type = self.relations.translation_type_for_entity(item)?;
            let reference = EntityRef::of(item);
            match groups.iter_mut().find(|(t, _)| *t == translation_type) {
                Some((_, translatables)) => translatables.push(reference),
                None => groups.push((translation_type, vec![reference])),
            }
        }
        Ok(groups)
    }
}

/// Converts locales to their deduplicated canonical strings, keeping the first occurrence.
fn locale_strings<'l>(locales: impl IntoIterator<Item = &'l Locale>) -> Vec<String> {
    let mut strings: Vec<String> = Vec::new();
    for locale in locales {
        if !strings.iter().any(|s| s == locale.full()) {
            strings.push(locale.full().to_string());
        }
    }
    strings
}

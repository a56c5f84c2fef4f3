use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use linguist_adapters::{FixedLocaleAdapter, FixedStoreAdapter};
use linguist_model::{EntityRef, Locale, Record, Translatable, Translation, TranslationRecord};
use linguist_resolver::{RelationRegistry, TranslationRepository};
use std::sync::Arc;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    let current = Locale::new("fr-FR").unwrap();
    let default = Locale::new("en-US").unwrap();
    let repository = TranslationRepository::new(
        FixedStoreAdapter::default(),
        FixedLocaleAdapter::new(current.clone(), default.clone()),
        RelationRegistry::new()
            .with_translatable("Article")
            .with_translation("ArticleTranslation"),
    );

    for size in [10, 100, 1000] {
        let mut translations: Vec<Arc<dyn Translation>> = Vec::new();
        for id in 0..size {
            let owner = EntityRef::new("Article", id);
            translations.push(Arc::new(
                TranslationRecord::new("ArticleTranslation", id * 2, default.clone())
                    .with_translatable(owner.clone()),
            ));
            // every other article only has the fallback translation
            if id % 2 == 0 {
                translations.push(Arc::new(
                    TranslationRecord::new("ArticleTranslation", id * 2 + 1, current.clone())
                        .with_translatable(owner),
                ));
            }
        }
        let mut articles: Vec<Record> = (0..size).map(|id| Record::new("Article", id)).collect();

        group.bench_function(BenchmarkId::new("set_items_translated", size), |b| {
            b.iter(|| {
                repository.set_items_translated(
                    articles
                        .iter_mut()
                        .map(|article| article as &mut dyn Translatable),
                    &translations,
                    Some(&default),
                );
            });
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

use opentelemetry::metrics::Meter;
use opentelemetry::{InstrumentationScope, global};
use std::sync::LazyLock;

static METER: LazyLock<Meter> = LazyLock::new(|| {
    let scope = InstrumentationScope::builder(env!("CARGO_PKG_NAME"))
        .with_version(env!("CARGO_PKG_VERSION"))
        .build();
    global::meter_with_scope(scope)
});

/// Generates exponential histogram buckets. Panics if `start` <= 0 or `factor` <= 1
///
/// # Arguments
/// * `start` - The value of the first bucket (must be > 0)
/// * `factor` - The exponential factor (must be > 1)
/// * `count` - The number of buckets to generate
fn exponential_buckets(start: f64, factor: f64, count: usize) -> Vec<f64> {
    assert!(start > 0.0, "start must be greater than 0");
    assert!(factor > 1.0, "factor must be greater than 1");

    (0..count).map(|i| start * factor.powi(i as i32)).collect()
}

pub(crate) mod translation_queries {
    use crate::metrics::METER;
    use opentelemetry::KeyValue;
    use opentelemetry::metrics::Counter;
    use std::sync::LazyLock;

    static INSTRUMENT: LazyLock<Counter<u64>> = LazyLock::new(|| {
        METER
            .u64_counter("translation_queries")
            .with_description("The number of queries issued for translation records")
            .build()
    });

    pub(crate) fn inc(translation_type: String) {
        INSTRUMENT.add(1, &[KeyValue::new("translation_type", translation_type)])
    }
}

pub(crate) mod resolved_translations {
    use crate::metrics::METER;
    use opentelemetry::KeyValue;
    use opentelemetry::metrics::Counter;
    use std::sync::LazyLock;

    static INSTRUMENT: LazyLock<Counter<u64>> = LazyLock::new(|| {
        METER
            .u64_counter("resolved_translations")
            .with_description("The number of items that got a translation assigned")
            .build()
    });

    pub(crate) fn inc(result: &'static str) {
        INSTRUMENT.add(1, &[KeyValue::new("result", result)])
    }
}

pub(crate) mod resolution_duration {
    use crate::metrics::{METER, exponential_buckets};
    use opentelemetry::KeyValue;
    use opentelemetry::metrics::Histogram;
    use std::sync::LazyLock;
    use tokio::time::Instant;

    static INSTRUMENT: LazyLock<Histogram<f64>> = LazyLock::new(|| {
        METER
            .f64_histogram("resolution_duration")
            .with_description("The time a translation lookup took to complete")
            .with_unit("seconds")
            .with_boundaries(exponential_buckets(0.001, 2.0, 12))
            .build()
    });

    pub(crate) fn record(started: Instant, result: &'static str) {
        INSTRUMENT.record(
            started.elapsed().as_secs_f64(),
            &[KeyValue::new("result", result)],
        )
    }
}

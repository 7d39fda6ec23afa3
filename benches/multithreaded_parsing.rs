use criterion::Criterion;
use nordic_nin::{NinParser, ParserConfig};
use std::sync::Arc;
use threadpool::ThreadPool;

pub fn multithread_parsing(c: &mut Criterion) {
    let parser = Arc::new(NinParser::new(ParserConfig::default()));
    let sample_inputs = Arc::new(sample_inputs());
    let expected_valid = sample_inputs
        .iter()
        .filter(|(raw, country_code)| parser.parse(raw, country_code).is_ok())
        .count();

    let num_threads = 32;
    // There are more jobs than threads to test things that may take longer the first time
    // a thread does something (e.g. lazy regex initialization)
    let num_jobs = num_threads * 25;
    let thread_pool = ThreadPool::new(num_threads);

    c.bench_function("parse numbers (multi-threaded)", |b| {
        b.iter(|| {
            for _ in 0..num_jobs {
                let sample_inputs = Arc::clone(&sample_inputs);
                let parser = Arc::clone(&parser);
                thread_pool.execute(move || {
                    let valid = sample_inputs
                        .iter()
                        .filter(|(raw, country_code)| parser.parse(raw, country_code).is_ok())
                        .count();
                    assert_eq!(valid, expected_valid);
                });
            }
            thread_pool.join();
        })
    });

    c.bench_function("detect country (multi-threaded)", |b| {
        b.iter(|| {
            for _ in 0..num_jobs {
                let sample_inputs = Arc::clone(&sample_inputs);
                let parser = Arc::clone(&parser);
                thread_pool.execute(move || {
                    for (raw, _) in sample_inputs.iter() {
                        parser.detect_country(raw);
                    }
                });
            }
            thread_pool.join();
        })
    });

    c.bench_function("parse numbers (single-threaded)", |b| {
        b.iter(|| {
            for _ in 0..num_jobs {
                // The clones aren't required here, but are kept to be more comparable to the multi-threaded versions
                let sample_inputs = Arc::clone(&sample_inputs);
                let parser = Arc::clone(&parser);
                let valid = sample_inputs
                    .iter()
                    .filter(|(raw, country_code)| parser.parse(raw, country_code).is_ok())
                    .count();
                assert_eq!(valid, expected_valid);
            }
        })
    });
}

// Valid and invalid numbers of every supported country.
fn sample_inputs() -> Vec<(String, String)> {
    vec![
        ("790315-0667", "SE"),
        ("790315-0668", "SE"),
        ("197903150667", "SE"),
        ("200374-4352", "SE"),
        ("15121015649", "NO"),
        ("15121015648", "NO"),
        ("42059199212", "NO"),
        ("03498443531", "NO"),
        ("211062-5629", "DK"),
        ("211062-5628", "DK"),
        ("220550-6218", "DK"),
        ("131052-308T", "FI"),
        ("131052-308A", "FI"),
        ("010594Y9032", "FI"),
        ("1201603389", "IS"),
        ("1201603386", "IS"),
        ("", "PL"),
        ("", "xx"),
    ]
    .into_iter()
    .map(|(raw, country_code)| (raw.to_string(), country_code.to_string()))
    .collect()
}

criterion::criterion_group!(benches, multithread_parsing);

criterion::criterion_main!(benches);

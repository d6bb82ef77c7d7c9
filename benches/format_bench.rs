use criterion::{Criterion, black_box, criterion_group, criterion_main};
use strum::IntoEnumIterator;

use rphonemask::{PHONE_INPUT, PhoneNumberFormat};

type TestEntity = (&'static str, &'static str);

fn setup_numbers() -> Vec<TestEntity> {
    vec![
        ("(650) 253-0000", "US"),
        ("+1 650 253 0000", "US"),
        ("+44 20 8765 4321", "GB"),
        ("020 8765 4321", "GB"),
        ("02 12345678", "IT"),
        ("+7 916 123-45-67", "RU"),
        ("0155 1234 5678", "MX"),
        ("12345", "DE"),
        ("206", "US"),
    ]
}

fn formatting_benchmark(c: &mut Criterion) {
    let numbers = setup_numbers()
        .into_iter()
        .map(|(number, iso_code)| (number, PHONE_INPUT.get_region(iso_code).unwrap()))
        .collect::<Vec<_>>();

    let mut group = c.benchmark_group("Formatting");
    for number_format in PhoneNumberFormat::iter() {
        group.bench_function(format!("format({:?})", number_format), |b| {
            b.iter(|| {
                for (number, region) in &numbers {
                    PHONE_INPUT.format(black_box(number), region, black_box(number_format));
                }
            })
        });
    }
    group.finish();
}

fn region_lookup_benchmark(c: &mut Criterion) {
    let numbers = setup_numbers();
    c.bench_function("find_country_from_number", |b| {
        b.iter(|| {
            for (number, _) in &numbers {
                PHONE_INPUT.find_country_from_number(black_box(number));
            }
        })
    });
}

criterion_group!(benches, formatting_benchmark, region_lookup_benchmark);
criterion_main!(benches);

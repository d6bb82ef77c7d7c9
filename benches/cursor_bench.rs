use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rphonemask::{PHONE_INPUT, get_updated_cursor_position};

/// Every value an input field shows while a number is typed digit by digit.
fn typing_history(keys: &str, iso_code: &str) -> Vec<String> {
    let region = PHONE_INPUT.get_region(iso_code).unwrap();
    let mut value = String::new();
    keys.chars()
        .map(|key| {
            value.push(key);
            value = PHONE_INPUT.format_number(&value, region).into_owned();
            value.clone()
        })
        .collect()
}

fn cursor_benchmark(c: &mut Criterion) {
    let history = typing_history("+442087654321", "GB");

    c.bench_function("get_updated_cursor_position", |b| {
        b.iter(|| {
            let mut cursor = 0;
            for pair in history.windows(2) {
                cursor = get_updated_cursor_position(
                    black_box(&pair[0]),
                    black_box(&pair[1]),
                    cursor,
                );
            }
            cursor
        })
    });

    let region = PHONE_INPUT.get_region("US").unwrap();
    c.bench_function("type and reposition", |b| {
        b.iter(|| {
            let mut value = String::new();
            let mut cursor = 0;
            for key in black_box("2065551234").chars() {
                let mut raw = value.clone();
                raw.push(key);
                let masked = PHONE_INPUT.format_number(&raw, region).into_owned();
                cursor = get_updated_cursor_position(&value, &masked, cursor);
                value = masked;
            }
            (value, cursor)
        })
    });
}

criterion_group!(benches, cursor_benchmark);
criterion_main!(benches);

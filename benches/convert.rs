use criterion::{black_box, criterion_group, criterion_main, Criterion};
use snaker::Converter;

const CAMEL_INPUTS: &[&str] = &[
    "",
    "One",
    "ONE",
    "ID",
    "i",
    "I",
    "ThisHasToBeConvertedCorrectlyID",
    "ThisIDIsFine",
    "ThisHTTPSConnection",
    "HelloHTTPSConnectionID",
    "HTTPSID",
];

const SNAKE_INPUTS: &[&str] = &[
    "",
    "potato_",
    "this_is_a_test",
    "this_is_an_id",
    "this_is_an_identifier",
    "id",
    "oauth_client",
];

fn bench_camel_to_snake(c: &mut Criterion) {
    let converter = Converter::new_default();
    c.bench_function("camel_to_snake", |b| {
        b.iter(|| {
            for input in CAMEL_INPUTS {
                black_box(converter.camel_to_snake(black_box(input)));
            }
        })
    });

    let empty = Converter::default();
    c.bench_function("camel_to_snake/no_initialisms", |b| {
        b.iter(|| {
            for input in CAMEL_INPUTS {
                black_box(empty.camel_to_snake(black_box(input)));
            }
        })
    });
}

fn bench_snake_to_camel(c: &mut Criterion) {
    let converter = Converter::new_default();
    c.bench_function("snake_to_camel", |b| {
        b.iter(|| {
            for input in SNAKE_INPUTS {
                black_box(converter.snake_to_camel(black_box(input)));
            }
        })
    });
    c.bench_function("snake_to_camel_lower", |b| {
        b.iter(|| {
            for input in SNAKE_INPUTS {
                black_box(converter.snake_to_camel_lower(black_box(input)));
            }
        })
    });
}

criterion_group!(benches, bench_camel_to_snake, bench_snake_to_camel);
criterion_main!(benches);

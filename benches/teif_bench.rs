use criterion::{Criterion, black_box, criterion_group, criterion_main};
use serde_json::{Value, json};

use teif::core::*;
use teif::xml::{self, ConvertOptions, XmlOptions};

/// Sample mapping with `lines` items spread over ten line groups.
fn large_fields(lines: usize) -> Value {
    let mut fields = sample_fields();
    let sections: Vec<Value> = (0..10)
        .map(|group| {
            let items: Vec<Value> = (0..lines / 10)
                .map(|i| {
                    json!({
                        "ItemIdentifier": format!("PRD-{group}-{i}"),
                        "Description": format!("Service item {i}"),
                        "Quantity": 5,
                        "UnitPrice": 120.5,
                        "LineTotal": 602.5
                    })
                })
                .collect();
            json!({ "Lin": items })
        })
        .collect();
    fields["LinSection"] = Value::Array(sections);
    fields
}

fn bench_validate_sample(c: &mut Criterion) {
    let fields = sample_fields();
    c.bench_function("validate_sample", |b| {
        b.iter(|| black_box(validate(black_box(&fields))));
    });
}

fn bench_validate_invalid(c: &mut Criterion) {
    let fields = json!({});
    c.bench_function("validate_empty_mapping", |b| {
        b.iter(|| black_box(validate(black_box(&fields))));
    });
}

fn bench_serialize_sample(c: &mut Criterion) {
    let doc = validate(&sample_fields()).unwrap();
    let options = XmlOptions::new().include_partners(true);
    c.bench_function("teif_serialize_sample", |b| {
        b.iter(|| black_box(xml::to_teif_xml_with(black_box(&doc), &options)));
    });
}

fn bench_convert_1000_lines(c: &mut Criterion) {
    let fields = large_fields(1000);
    let options = ConvertOptions::default();
    c.bench_function("convert_1000_lines", |b| {
        b.iter(|| black_box(xml::convert(black_box(&fields), &options)));
    });
}

criterion_group!(
    benches,
    bench_validate_sample,
    bench_validate_invalid,
    bench_serialize_sample,
    bench_convert_1000_lines,
);
criterion_main!(benches);

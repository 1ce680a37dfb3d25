use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use serde_json::{Value, json};

use offerkit_offerings::{Diagnostic, OfferingsParser};
use offerkit_products::{Price, ProductCatalog, ProductType, StoreBackend, StoreProduct};

fn store_product(id: &str) -> StoreProduct {
    StoreProduct {
        id: id.to_string(),
        product_type: ProductType::OneTime,
        title: id.to_string(),
        description: String::new(),
        price: Price {
            formatted: "$0.99".to_string(),
            amount_micros: 990_000,
            currency_code: "USD".to_string(),
        },
        period: None,
        base_plan_id: None,
        presented_offering_context: None,
    }
}

/// `offering_count` offerings of 4 packages each; every 4th package has no product.
fn build_input(offering_count: usize) -> (Value, ProductCatalog) {
    let mut catalog = ProductCatalog::new();
    let mut offerings = Vec::with_capacity(offering_count);

    for o in 0..offering_count {
        let mut packages = Vec::new();
        for p in 0..4 {
            let sku = format!("sku_{o}_{p}");
            if p != 3 {
                catalog.insert(sku.clone(), store_product(&sku));
            }
            packages.push(json!({
                "identifier": format!("package_{p}"),
                "platform_product_identifier": sku,
            }));
        }
        offerings.push(json!({
            "identifier": format!("offering_{o}"),
            "description": "bench",
            "metadata": { "index": o },
            "packages": packages,
        }));
    }

    let document = json!({
        "offerings": offerings,
        "current_offering_id": "offering_0",
        "targeting": { "revision": 1, "rule_id": "bench" },
        "placements": { "offering_ids_by_placement": { "home": "offering_1" } },
    });
    (document, catalog)
}

fn bench_create_offerings(c: &mut Criterion) {
    let parser = OfferingsParser::for_store(StoreBackend::Amazon);
    let mut group = c.benchmark_group("create_offerings");

    for offering_count in [10usize, 100, 1_000] {
        let (document, catalog) = build_input(offering_count);
        group.throughput(Throughput::Elements(offering_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(offering_count),
            &(document, catalog),
            |b, (document, catalog)| {
                b.iter(|| {
                    let mut sink: Vec<Diagnostic> = Vec::new();
                    let offerings = parser
                        .create_offerings_with(black_box(document), catalog, &mut sink)
                        .unwrap();
                    black_box((offerings, sink))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_create_offerings);
criterion_main!(benches);

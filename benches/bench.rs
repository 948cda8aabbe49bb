// Criterion benchmarks for Kitchen Store

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kitchen_store::core::{filter_and_sort, CategoryFilter, PriceRange, Recommender, SortKey};
use kitchen_store::data::default_questions;
use kitchen_store::models::{AnswerSet, Product};

const CATEGORIES: [&str; 4] = ["Faucets", "Sinks", "Kitchen Sets", "Hoods"];

fn create_product(id: usize) -> Product {
    Product {
        id: id as u32,
        name: format!("Kitchen Product {}", id),
        price: 5000.0 + (id * 997 % 60000) as f64,
        image: String::new(),
        category: CATEGORIES[id % CATEGORIES.len()].to_string(),
        rating: 4.0 + (id % 10) as f64 / 10.0,
        slug: format!("kitchen-product-{}", id),
    }
}

fn create_answers() -> AnswerSet {
    let mut answers = AnswerSet::new();
    answers.set("budget", vec!["medium".to_string()]);
    answers.set("category", vec!["sinks".to_string()]);
    answers.set("priority", vec!["quality".to_string(), "price".to_string()]);
    answers.set("usage", vec!["rarely".to_string()]);
    answers
}

fn bench_filter_and_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");

    for product_count in [12, 100, 1000].iter() {
        let products: Vec<Product> = (0..*product_count).map(create_product).collect();
        let range = PriceRange { min: Some(10000.0), max: Some(50000.0) };

        group.bench_with_input(
            BenchmarkId::new("filter_and_sort", product_count),
            product_count,
            |b, _| {
                b.iter(|| {
                    filter_and_sort(
                        black_box(&products),
                        black_box("kitchen"),
                        black_box(&CategoryFilter::All),
                        black_box(&range),
                        black_box(SortKey::NameAsc),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_recommend(c: &mut Criterion) {
    let recommender = Recommender::with_defaults();
    let questions = default_questions();
    let answers = create_answers();

    let mut group = c.benchmark_group("recommendation");

    for product_count in [12, 100, 1000].iter() {
        let products: Vec<Product> = (0..*product_count).map(create_product).collect();

        group.bench_with_input(
            BenchmarkId::new("recommend", product_count),
            product_count,
            |b, _| {
                b.iter(|| {
                    recommender.recommend(
                        black_box(&products),
                        black_box(&questions),
                        black_box(&answers),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_filter_and_sort, bench_recommend);
criterion_main!(benches);

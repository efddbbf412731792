use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_decimal::Decimal;
use smallvec::smallvec;
use std::sync::Arc;

use scholarship_advisor::domain::{Action, Condition, Decision, Facts, Field, Operator, Rule};
use scholarship_advisor::policy::PolicyLoader;
use scholarship_advisor::rules::{evaluate, Evaluator, RuleStore, StaticRuleStore};

fn create_facts(cgpa: i64, income: i64, co: u32, disc: u32) -> Facts {
    Facts {
        cgpa: Decimal::new(cgpa, 2),
        family_income: Decimal::from(income),
        co_curricular_score: co,
        disciplinary_actions: disc,
    }
}

fn bench_builtin_rules(c: &mut Criterion) {
    let store = PolicyLoader::new(None).load().unwrap();
    let evaluator = Evaluator::new(Arc::new(store));

    let award = create_facts(380, 5000, 85, 0);
    let no_match = create_facts(300, 20000, 10, 0);

    c.bench_function("builtin_evaluate_award_full", |b| {
        b.iter(|| evaluator.evaluate(black_box(&award)))
    });

    c.bench_function("builtin_evaluate_no_match", |b| {
        b.iter(|| evaluator.evaluate(black_box(&no_match)))
    });
}

fn bench_large_rule_book(c: &mut Criterion) {
    let rules: Vec<Rule> = (0..500)
        .map(|i| Rule {
            name: format!("R{}", i),
            priority: i % 50,
            conditions: smallvec![
                Condition::new(Field::Cgpa, Operator::Ge, Decimal::new(i % 400, 2)),
                Condition::new(Field::FamilyIncome, Operator::Le, Decimal::from(i * 100)),
            ],
            action: Action {
                decision: Decision::Review,
                reason: "bench".to_string(),
            },
        })
        .collect();
    let store = StaticRuleStore::new(rules);

    let facts = create_facts(250, 10000, 50, 0);

    c.bench_function("evaluate_500_rules", |b| {
        b.iter(|| evaluate(black_box(store.all_rules()), black_box(&facts)))
    });
}

criterion_group!(benches, bench_builtin_rules, bench_large_rule_book);
criterion_main!(benches);

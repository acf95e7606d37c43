mod common;

use std::collections::HashSet;

use common::{date, sample_ledger, spend};
use expense_core::{
    core::{BudgetForm, TransactionForm},
    Budget, CategorySet, Config, DashboardService, InputError, InsightService, Ledger,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn additions_only_grow_the_collection() {
    let mut ledger = Ledger::new();
    let mut seen = Vec::new();
    for day in 1..=20 {
        let stored = ledger.add_transaction(spend("Shopping", dec!(1), date(2025, 3, day)));
        seen.push(stored);
        assert_eq!(ledger.transactions(), seen.as_slice());
    }
    let ids: HashSet<_> = ledger.transactions().iter().map(|t| t.id).collect();
    assert_eq!(ids.len(), 20);
}

#[test]
fn upsert_is_idempotent_and_keeps_position() {
    let mut ledger = Ledger::new();
    ledger.upsert_budget(Budget::new("Food & Dining", dec!(200)));
    ledger.upsert_budget(Budget::new("Shopping", dec!(75)));
    let once = ledger.budgets().to_vec();

    ledger.upsert_budget(Budget::new("Food & Dining", dec!(200)));
    ledger.upsert_budget(Budget::new("Food & Dining", dec!(200)));
    assert_eq!(ledger.budgets(), once.as_slice());

    ledger.upsert_budget(Budget::new("Shopping", dec!(90)));
    assert_eq!(ledger.budgets()[0].category.as_str(), "Food & Dining");
    assert_eq!(ledger.budgets()[1].amount, dec!(90));
}

#[test]
fn food_over_budget_scenario() {
    let mut ledger = Ledger::new();
    ledger.upsert_budget(Budget::new("Food", dec!(100)));
    ledger.add_transaction(spend("Food", dec!(80), date(2025, 4, 1)));
    ledger.add_transaction(spend("Food", dec!(40), date(2025, 4, 2)));

    let comparisons = ledger.budget_comparisons();
    let food = &comparisons[0];
    assert_eq!(food.spent, dec!(120));
    assert_eq!(food.budget, dec!(100));
    assert_eq!(food.remaining, dec!(-20));
    assert_eq!(food.percentage, dec!(120));

    let insights = ledger.insights(&Default::default());
    assert_eq!(insights.over_budget.len(), 1);
    assert!(insights.under_budget.is_empty());
    assert_eq!(InsightService::over_budget(&comparisons).len(), 1);
}

#[test]
fn zero_budget_with_no_spend_has_finite_percentage() {
    let mut ledger = Ledger::new();
    ledger.upsert_budget(Budget::new("Food", Decimal::ZERO));
    let comparisons = ledger.budget_comparisons();
    assert_eq!(comparisons[0].percentage, Decimal::ZERO);
    assert!(ledger.insights(&Default::default()).is_empty());
}

#[test]
fn derived_views_track_the_collections() {
    let mut ledger = sample_ledger();
    let before = ledger.monthly_totals();
    assert_eq!(before.len(), 3);
    assert_eq!(before[0].month.label(), "Dec 2024");

    ledger.add_transaction(spend("Other", dec!(5), date(2024, 10, 31)));
    let after = ledger.monthly_totals();
    assert_eq!(after.len(), 4);
    assert_eq!(after[0].month.label(), "Oct 2024");
    assert_eq!(ledger.category_totals().get("Food & Dining"), Some(dec!(120)));
}

#[test]
fn forms_feed_the_ledger() {
    let config = Config::default();
    let mut ledger = Ledger::new();

    let budget = BudgetForm {
        category: "Entertainment".into(),
        amount: "60".into(),
    }
    .validate(&config.categories)
    .unwrap();
    ledger.upsert_budget(budget);

    let draft = TransactionForm {
        description: "Cinema".into(),
        amount: "12.50".into(),
        date: "2025-06-07".into(),
        category: "Entertainment".into(),
    }
    .validate(&config.categories)
    .unwrap();
    let stored = ledger.add_transaction(draft);
    assert_eq!(stored.amount, dec!(12.50));

    let dashboard = DashboardService::snapshot(&ledger, &config);
    assert_eq!(
        dashboard.alert_messages,
        vec!["Entertainment: $47.50 remaining".to_string()]
    );
}

#[test]
fn custom_categories_restrict_forms() {
    let categories = CategorySet::new(["Rent", "Groceries"]);
    let rejected = TransactionForm {
        description: "Bus".into(),
        amount: "2".into(),
        date: "2025-01-01".into(),
        category: "Transportation".into(),
    }
    .validate(&categories);
    assert_eq!(
        rejected,
        Err(InputError::UnknownCategory("Transportation".into()))
    );
}

#[test]
fn dashboard_serializes_for_the_renderer() {
    let ledger = sample_ledger();
    let dashboard = DashboardService::snapshot(&ledger, &Config::default());
    let json = serde_json::to_value(&dashboard).unwrap();
    assert_eq!(json["monthly"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["category_slices"][0]["category"], "Food & Dining");
}

use chrono::NaiveDate;
use fintrack_core::{
    analytics::AggregateOptions,
    currency::CurrencyCode,
    dates::MonthKey,
    errors::TrackerError,
    model::{Category, CategoryKind, EntryKind, Transaction, UserPreferences},
    store::FinanceStore,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn march_store() -> FinanceStore {
    FinanceStore::from_parts(
        Vec::new(),
        Vec::new(),
        UserPreferences::default(),
        MonthKey::new(2024, 3).unwrap(),
    )
}

#[test]
fn transaction_crud_round_trip() {
    let mut store = march_store();
    let food = store.add_category(Category::new(
        "Food",
        "#f00",
        "utensils",
        CategoryKind::Expense,
    ));

    let id = store.add_transaction(Transaction::new(
        42.0,
        food,
        "groceries",
        ymd(2024, 3, 8),
        EntryKind::Expense,
    ));
    assert_eq!(store.transactions().len(), 1);
    assert_eq!(store.monthly_data().total_expenses, 42.0);

    let replacement = Transaction::new(50.0, food, "more groceries", ymd(2024, 3, 8), EntryKind::Expense);
    store.update_transaction(id, replacement).unwrap();
    assert_eq!(store.transactions()[0].id, id);
    assert_eq!(store.monthly_data().total_expenses, 50.0);

    store.delete_transaction(id).unwrap();
    assert!(store.transactions().is_empty());
    assert_eq!(store.monthly_data().total_expenses, 0.0);

    let missing = store.delete_transaction(id).unwrap_err();
    assert!(matches!(missing, TrackerError::UnknownId(_)));
}

#[test]
fn category_deletion_guard_releases_after_transactions_go() {
    let mut store = march_store();
    let food = store.add_category(Category::new(
        "Food",
        "#f00",
        "utensils",
        CategoryKind::Expense,
    ));
    let tx = store.add_transaction(Transaction::new(
        5.0,
        food,
        "coffee",
        ymd(2024, 3, 1),
        EntryKind::Expense,
    ));

    assert!(matches!(
        store.delete_category(food),
        Err(TrackerError::CategoryInUse(_))
    ));

    store.delete_transaction(tx).unwrap();
    store.delete_category(food).unwrap();
    assert!(store.categories().is_empty());
}

#[test]
fn current_category_totals_scope_to_selected_month() {
    let mut store = march_store();
    let food = store.add_category(Category::new(
        "Food",
        "#f00",
        "utensils",
        CategoryKind::Expense,
    ));
    store.add_transaction(Transaction::new(
        30.0,
        food,
        "march",
        ymd(2024, 3, 10),
        EntryKind::Expense,
    ));
    store.add_transaction(Transaction::new(
        99.0,
        food,
        "april",
        ymd(2024, 4, 10),
        EntryKind::Expense,
    ));

    let totals = store.current_category_totals(AggregateOptions {
        with_percentage: true,
    });
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].amount, 30.0);
    assert_eq!(totals[0].percentage, Some(100.0));
}

#[test]
fn export_is_a_raw_dump_of_state() {
    let mut store = march_store();
    let food = store.add_category(Category::new(
        "Food",
        "#f00",
        "utensils",
        CategoryKind::Expense,
    ));
    store.add_transaction(Transaction::new(
        12.0,
        food,
        "snack",
        ymd(2024, 3, 2),
        EntryKind::Expense,
    ));
    store.update_preferences(UserPreferences {
        currency: CurrencyCode::new("EUR"),
        monthly_budget: 1500.0,
        dark_mode: true,
    });

    let export = store.export();
    assert_eq!(export.transactions.len(), 1);
    assert_eq!(export.categories.len(), 1);
    assert_eq!(export.preferences.currency, CurrencyCode::new("EUR"));

    let json = export.to_json_pretty().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value.get("transactions").is_some());
    assert!(value.get("categories").is_some());
    assert!(value.get("preferences").is_some());
    assert_eq!(value["transactions"][0]["kind"], "expense");
}

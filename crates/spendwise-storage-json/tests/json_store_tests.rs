use std::sync::Arc;

use chrono::NaiveDate;
use spendwise_core::{BudgetSource, DashboardService, ExpenseSource, SeedData};
use spendwise_domain::{Budget, Expense, ExpenseCategory, Frequency};
use spendwise_storage_json::{DataFile, JsonDataStore};
use tempfile::tempdir;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn missing_file_reads_as_empty() {
    let dir = tempdir().expect("tempdir");
    let store = JsonDataStore::open(dir.path().join("spendwise.json"));

    assert_eq!(store.load().await.expect("load"), DataFile::default());
    assert!(store.fetch_budgets().await.expect("budgets").is_empty());
}

#[tokio::test]
async fn saved_data_round_trips_with_camel_case_fields() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("spendwise.json");
    let store = JsonDataStore::open(&path);

    let budget = Budget::new("Food", 200.0)
        .with_start_date("2024-01-01")
        .with_frequency(Frequency::Monthly);
    let expense = Expense::new("Groceries", ExpenseCategory::Food, 50.0, "2024-01-10");
    let data = DataFile {
        budgets: vec![budget],
        expenses: vec![expense],
    };
    store.save(&data).await.expect("save");

    let raw = std::fs::read_to_string(&path).expect("read");
    assert!(raw.contains("\"startDate\": \"2024-01-01\""), "{raw}");
    assert!(raw.contains("\"frequency\": \"Monthly\""), "{raw}");
    assert!(!path.with_extension("json.tmp").exists());

    assert_eq!(store.load().await.expect("load"), data);
}

#[tokio::test]
async fn hand_written_fixture_is_accepted() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("spendwise.json");
    std::fs::write(
        &path,
        r#"{
            "budgets": [
                {"category": "Transport", "amount": 60, "startDate": "2024-01-01", "frequency": "weekly"},
                {"category": "Bills", "amount": 900}
            ],
            "expenses": [
                {"name": "Bus", "category": "Transport", "amount": 2.5, "date": "01/08/2024"}
            ]
        }"#,
    )
    .expect("write fixture");

    let store = JsonDataStore::open(&path);
    let budgets = store.fetch_budgets().await.expect("budgets");
    assert_eq!(budgets.len(), 2);
    assert_eq!(budgets[0].frequency, Some(Frequency::Weekly));
    assert_eq!(budgets[1].start_date, None);

    let expenses = store.fetch_expenses().await.expect("expenses");
    assert_eq!(expenses[0].parsed_date(), Some(ymd(2024, 1, 8)));
}

#[tokio::test]
async fn malformed_file_is_a_serde_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("spendwise.json");
    std::fs::write(&path, "{ not json").expect("write");

    let err = JsonDataStore::open(&path).load().await.unwrap_err();
    assert!(err.to_string().contains("Serialization"), "{err}");
}

#[tokio::test]
async fn append_expense_rejects_duplicate_ids() {
    let dir = tempdir().expect("tempdir");
    let store = JsonDataStore::open(dir.path().join("spendwise.json"));
    let expense = Expense::new("Lunch", ExpenseCategory::Food, 12.5, "2024-03-01");

    store.append_expense(expense.clone()).await.expect("append");
    assert!(store.append_expense(expense).await.is_err());
    assert_eq!(store.fetch_expenses().await.expect("expenses").len(), 1);
}

#[tokio::test]
async fn seeding_only_fills_empty_collections() {
    let dir = tempdir().expect("tempdir");
    let today = ymd(2024, 3, 6);
    let store =
        JsonDataStore::open(dir.path().join("spendwise.json")).with_seed(SeedData::sample(today));

    let coffee = Expense::new("Coffee", ExpenseCategory::Food, 3.0, "2024-03-05");
    store.append_expense(coffee).await.expect("append");

    store.seed_budgets_if_empty().await.expect("seed budgets");
    store.seed_expenses_if_empty().await.expect("seed expenses");

    let data = store.load().await.expect("load");
    assert_eq!(data.budgets.len(), SeedData::sample(today).budgets.len());
    assert_eq!(data.expenses.len(), 1);
    assert!(!store.seed_if_empty().await.expect("seed again"));
}

#[tokio::test]
async fn dashboard_service_reads_through_the_store() {
    let dir = tempdir().expect("tempdir");
    let store = Arc::new(JsonDataStore::open(dir.path().join("spendwise.json")));
    store
        .save(&DataFile {
            budgets: vec![Budget::new("Food", 200.0)
                .with_start_date("2024-01-01")
                .with_frequency(Frequency::Monthly)],
            expenses: vec![
                Expense::new("Groceries", ExpenseCategory::Food, 50.0, "2024-01-10"),
                Expense::new("Takeaway", ExpenseCategory::Food, 30.0, "2024-02-05"),
            ],
        })
        .await
        .expect("save");

    let service = DashboardService::from_source(store);
    let dashboard = service.refresh(ymd(2024, 1, 20)).await.expect("refresh");
    assert_eq!(dashboard.summary.total_spent, 50.0);
    assert_eq!(dashboard.summary.total_budget, 200.0);
    assert_eq!(dashboard.summary.total_remaining, 150.0);
}

#[tokio::test]
async fn unreadable_records_are_skipped_and_kept_on_disk() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("spendwise.json");
    std::fs::write(
        &path,
        r#"{
            "budgets": [
                {"category": "Food", "amount": 200, "startDate": "2024-01-01", "frequency": "Monthly"},
                {"category": "Food"}
            ],
            "expenses": [
                {"name": "Groceries", "category": "Food", "amount": 50.0, "date": "2024-01-10"},
                {"name": "Kibble", "category": "Pets", "amount": 20.0, "date": "2024-01-11"},
                {"name": "Lunch", "category": "Food", "date": "2024-01-12"}
            ]
        }"#,
    )
    .expect("write fixture");

    let store = Arc::new(JsonDataStore::open(&path));
    let data = store.load().await.expect("load");
    assert_eq!(data.budgets.len(), 1);
    assert_eq!(data.expenses.len(), 1);
    assert_eq!(data.expenses[0].name, "Groceries");

    let dashboard = DashboardService::from_source(store.clone())
        .refresh(ymd(2024, 1, 20))
        .await
        .expect("refresh");
    assert_eq!(dashboard.summary.total_spent, 50.0);

    let snack = Expense::new("Snack", ExpenseCategory::Food, 4.0, "2024-01-13");
    store.append_expense(snack).await.expect("append");
    let raw = std::fs::read_to_string(&path).expect("read");
    assert!(raw.contains("\"Pets\""), "{raw}");
    assert_eq!(store.fetch_expenses().await.expect("expenses").len(), 2);
}

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

const FOOD_FIXTURE: &str = r#"{
  "budgets": [
    {"category": "Food", "amount": 200.0, "startDate": "2024-01-01", "frequency": "Monthly"},
    {"category": "Transport", "amount": 60.0, "frequency": "Weekly"}
  ],
  "expenses": [
    {"name": "Groceries", "category": "Food", "amount": 50.0, "date": "2024-01-10"},
    {"name": "Takeaway", "category": "Food", "amount": 30.0, "date": "2024-02-05"}
  ]
}"#;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("spendwise_cli").expect("binary exists");
    cmd.env_remove("SPENDWISE_HOME").arg("--no-color");
    cmd
}

#[test]
fn dashboard_prints_totals_for_fixture() {
    let home = tempdir().expect("tempdir");
    std::fs::write(home.path().join("spendwise.json"), FOOD_FIXTURE).expect("fixture");

    cli()
        .args(["--home", home.path().to_str().unwrap()])
        .args(["dashboard", "--date", "2024-01-20"])
        .assert()
        .success()
        .stdout(contains("Total Spent: $50.00"))
        .stdout(contains("Total Budget: $200.00"))
        .stdout(contains("Remaining: $150.00"))
        .stdout(contains("Skipped 1 record(s):"));
}

#[test]
fn home_can_come_from_the_environment() {
    let home = tempdir().expect("tempdir");
    std::fs::write(home.path().join("spendwise.json"), FOOD_FIXTURE).expect("fixture");

    cli()
        .env("SPENDWISE_HOME", home.path())
        .args(["dashboard", "--date", "2024-02-10"])
        .assert()
        .success()
        .stdout(contains("Total Spent: $30.00"));
}

#[test]
fn simulated_date_drives_the_dashboard() {
    let home = tempdir().expect("tempdir");
    let home_arg = home.path().to_str().unwrap();
    std::fs::write(home.path().join("spendwise.json"), FOOD_FIXTURE).expect("fixture");

    cli()
        .args(["--home", home_arg, "set-date", "2024-01-20"])
        .assert()
        .success()
        .stdout(contains("Current date set to 2024-01-20"));

    cli()
        .args(["--home", home_arg, "dashboard"])
        .assert()
        .success()
        .stdout(contains("Dashboard for 2024-01-20"))
        .stdout(contains("Total Spent: $50.00"));

    cli()
        .args(["--home", home_arg, "clear-date"])
        .assert()
        .success()
        .stdout(contains("Simulated date cleared"));
}

#[test]
fn seed_then_add_expense_updates_data_file() {
    let home = tempdir().expect("tempdir");
    let home_arg = home.path().to_str().unwrap();

    cli()
        .args(["--home", home_arg, "seed"])
        .assert()
        .success()
        .stdout(contains("Seeded sample data"))
        .stdout(contains("spendwise.json"));

    cli()
        .args(["--home", home_arg, "seed"])
        .assert()
        .success()
        .stdout(contains("already has data"));

    cli()
        .args(["--home", home_arg, "add-expense"])
        .args(["Taxi", "18.40", "transport"])
        .args(["--date", "03/06/2024", "--notes", "airport"])
        .assert()
        .success()
        .stdout(contains("Added Taxi (Transport) $18.40 on 2024-03-06"));

    let raw = std::fs::read_to_string(home.path().join("spendwise.json")).expect("data file");
    assert!(raw.contains("\"airport\""), "{raw}");
}

#[test]
fn bad_input_exits_with_error() {
    let home = tempdir().expect("tempdir");
    let home_arg = home.path().to_str().unwrap();

    cli()
        .args(["--home", home_arg, "dashboard", "--date", "2024-13-01"])
        .assert()
        .failure()
        .stderr(contains("Error: Invalid date `2024-13-01`"));

    cli()
        .args(["--home", home_arg, "add-expense", "Gift", "10", "Pets"])
        .assert()
        .failure()
        .stderr(contains("Error:"));
}

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tokio::{fs, sync::Mutex};
use tracing::{debug, info, warn};

use spendwise_core::{BudgetSource, CoreError, ExpenseSource, SeedData};
use spendwise_domain::{Budget, Expense, Identifiable};

const TMP_SUFFIX: &str = "tmp";

/// Decoded contents of `spendwise.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataFile {
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

/// On-disk layout, records kept as raw JSON so unreadable ones survive rewrites.
#[derive(Debug, Default, Serialize, Deserialize)]
struct RawDataFile {
    #[serde(default)]
    budgets: Vec<Value>,
    #[serde(default)]
    expenses: Vec<Value>,
}

/// Filesystem-backed JSON data source for budgets and expenses.
///
/// A missing file reads as empty. Records that do not decode are skipped with
/// a warning and left untouched on disk. Writes go through a temporary
/// sibling file that is renamed into place.
#[derive(Debug)]
pub struct JsonDataStore {
    path: PathBuf,
    seed: SeedData,
    lock: Mutex<()>,
}

impl JsonDataStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            seed: SeedData::default(),
            lock: Mutex::new(()),
        }
    }

    pub fn with_seed(mut self, seed: SeedData) -> Self {
        self.seed = seed;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<DataFile, CoreError> {
        let _guard = self.lock.lock().await;
        let raw = self.read().await?;
        Ok(DataFile {
            budgets: decode_records("budget", raw.budgets),
            expenses: decode_records("expense", raw.expenses),
        })
    }

    pub async fn save(&self, data: &DataFile) -> Result<(), CoreError> {
        let _guard = self.lock.lock().await;
        let raw = RawDataFile {
            budgets: encode_records(&data.budgets)?,
            expenses: encode_records(&data.expenses)?,
        };
        self.write(&raw).await
    }

    /// Appends an expense, rejecting one whose id is already stored.
    pub async fn append_expense(&self, expense: Expense) -> Result<(), CoreError> {
        let _guard = self.lock.lock().await;
        let mut raw = self.read().await?;
        let stored: Vec<Expense> = decode_records("expense", raw.expenses.clone());
        let id = expense.id();
        if stored.iter().any(|existing| existing.id() == id) {
            return Err(CoreError::Source(format!("expense `{id}` already exists")));
        }
        debug!(name = %expense.name, amount = expense.amount, "appending expense");
        raw.expenses.push(encode(&expense)?);
        self.write(&raw).await
    }

    /// Writes the seed records into whichever collections are empty.
    /// Returns `true` when anything was written.
    pub async fn seed_if_empty(&self) -> Result<bool, CoreError> {
        self.seed_collections(true, true).await
    }

    async fn seed_collections(&self, budgets: bool, expenses: bool) -> Result<bool, CoreError> {
        let _guard = self.lock.lock().await;
        let mut raw = self.read().await?;
        let mut changed = false;
        if budgets && raw.budgets.is_empty() && !self.seed.budgets.is_empty() {
            raw.budgets = encode_records(&self.seed.budgets)?;
            changed = true;
        }
        if expenses && raw.expenses.is_empty() && !self.seed.expenses.is_empty() {
            raw.expenses = encode_records(&self.seed.expenses)?;
            changed = true;
        }
        if changed {
            info!(path = %self.path.display(), "seeding data file");
            self.write(&raw).await?;
        }
        Ok(changed)
    }

    async fn read(&self) -> Result<RawDataFile, CoreError> {
        match fs::read_to_string(&self.path).await {
            Ok(raw) => serde_json::from_str(&raw).map_err(|err| CoreError::Serde(err.to_string())),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(RawDataFile::default()),
            Err(err) => Err(err.into()),
        }
    }

    async fn write(&self, data: &RawDataFile) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let json =
            serde_json::to_string_pretty(data).map_err(|err| CoreError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.path);
        fs::write(&tmp, json).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl BudgetSource for JsonDataStore {
    async fn fetch_budgets(&self) -> Result<Vec<Budget>, CoreError> {
        Ok(self.load().await?.budgets)
    }

    async fn seed_budgets_if_empty(&self) -> Result<(), CoreError> {
        self.seed_collections(true, false).await.map(|_| ())
    }
}

#[async_trait]
impl ExpenseSource for JsonDataStore {
    async fn fetch_expenses(&self) -> Result<Vec<Expense>, CoreError> {
        Ok(self.load().await?.expenses)
    }

    async fn seed_expenses_if_empty(&self) -> Result<(), CoreError> {
        self.seed_collections(false, true).await.map(|_| ())
    }
}

fn decode_records<T: DeserializeOwned>(kind: &'static str, values: Vec<Value>) -> Vec<T> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(kind, index, error = %err, "skipping unreadable record");
                None
            }
        })
        .collect()
}

fn encode<T: Serialize>(record: &T) -> Result<Value, CoreError> {
    serde_json::to_value(record).map_err(|err| CoreError::Serde(err.to_string()))
}

fn encode_records<T: Serialize>(records: &[T]) -> Result<Vec<Value>, CoreError> {
    records.iter().map(encode).collect()
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

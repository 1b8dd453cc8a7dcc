use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use log::{debug, error, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::error::{AllowanceError, Result};
use crate::storage::traits::Connection;

use super::earnings_log_repository::EarningsLogRepository;
use super::task_repository::TaskRepository;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub const TASK_HEADER: [&str; 2] = ["task", "reward"];
pub const LOG_HEADER: [&str; 3] = ["date", "task", "reward"];

/// Catalog written on first run
pub const SEED_TASKS: [(&str, u32); 4] = [
    ("トイレ掃除", 50),
    ("風呂掃除", 50),
    ("洗い物", 30),
    ("料理の手伝い", 30),
];

/// A CSV file read into memory
#[derive(Debug)]
pub struct CsvTable {
    path: PathBuf,
    headers: StringRecord,
    /// Data rows with their 1-based line numbers
    pub rows: Vec<(u64, StringRecord)>,
}

impl CsvTable {
    /// Index of a named column
    pub fn column(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| AllowanceError::MalformedRecord {
                path: self.path.clone(),
                line: 1,
                reason: format!("missing column '{}'", name),
            })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// False for a file with no header row, such as a zero-byte file
    pub fn has_header(&self) -> bool {
        !self.headers.is_empty()
    }
}

/// CsvConnection knows where the two stores live and how to read and write them
#[derive(Debug, Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
    task_file: PathBuf,
    log_file: PathBuf,
}

impl CsvConnection {
    /// Create a connection from configuration, creating the data directory if needed
    pub fn new(config: &AppConfig) -> Result<Self> {
        let base_directory = config.data_directory.clone();

        if !base_directory.exists() {
            fs::create_dir_all(&base_directory)
                .map_err(|e| AllowanceError::io(&base_directory, e))?;
            info!("Created data directory: {}", base_directory.display());
        }

        Ok(Self {
            task_file: config.task_file_path(),
            log_file: config.log_file_path(),
            base_directory,
        })
    }

    /// Create a connection with the default file names inside `base_directory`
    pub fn from_directory<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        Self::new(&AppConfig::with_data_directory(base_directory))
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub fn task_file_path(&self) -> &Path {
        &self.task_file
    }

    pub fn log_file_path(&self) -> &Path {
        &self.log_file
    }

    /// Seed the catalog when it is missing or empty, and create an empty log when missing
    pub fn ensure_initialized(&self) -> Result<()> {
        if !self.base_directory.exists() {
            fs::create_dir_all(&self.base_directory)
                .map_err(|e| AllowanceError::io(&self.base_directory, e))?;
        }

        let needs_seed = match fs::metadata(&self.task_file) {
            Ok(metadata) => metadata.len() == 0,
            Err(e) if e.kind() == io::ErrorKind::NotFound => true,
            Err(e) => return Err(AllowanceError::io(&self.task_file, e)),
        };

        if needs_seed {
            let rows = SEED_TASKS
                .iter()
                .map(|(name, reward)| vec![name.to_string(), reward.to_string()]);
            self.write_table(&self.task_file, &TASK_HEADER, rows)?;
            info!(
                "Seeded task catalog with {} tasks at {}",
                SEED_TASKS.len(),
                self.task_file.display()
            );
        }

        match fs::metadata(&self.log_file) {
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                self.write_table(&self.log_file, &LOG_HEADER, std::iter::empty::<Vec<String>>())?;
                info!("Created empty earnings log at {}", self.log_file.display());
            }
            Err(e) => return Err(AllowanceError::io(&self.log_file, e)),
        }

        Ok(())
    }

    /// Read a whole CSV file, dropping a leading byte-order mark
    pub fn read_table(&self, path: &Path) -> Result<CsvTable> {
        let bytes = fs::read(path).map_err(|e| AllowanceError::io(path, e))?;
        let content = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);

        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(content);

        let headers = csv_reader
            .headers()
            .map_err(|e| AllowanceError::csv(path, e))?
            .clone();

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result.map_err(|e| AllowanceError::csv(path, e))?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            rows.push((line, record));
        }

        debug!("Read {} rows from {}", rows.len(), path.display());
        Ok(CsvTable {
            path: path.to_path_buf(),
            headers,
            rows,
        })
    }

    /// Replace a CSV file with `header` and `rows`.
    ///
    /// The content goes to a temporary sibling first and is renamed over the
    /// target, so the old file survives a failed write.
    pub fn write_table<I, R>(&self, path: &Path, header: &[&str], rows: I) -> Result<()>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator,
        R::Item: AsRef<[u8]>,
    {
        let mut csv_writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::from(UTF8_BOM));

        csv_writer.write_record(header).map_err(|e| AllowanceError::csv(path, e))?;
        for row in rows {
            csv_writer.write_record(row).map_err(|e| AllowanceError::csv(path, e))?;
        }

        let content = csv_writer
            .into_inner()
            .map_err(|e| AllowanceError::io(path, e.into_error()))?;

        let temp_path = path.with_extension("tmp");
        if let Err(e) = fs::write(&temp_path, &content) {
            error!("Failed to write {}: {}", temp_path.display(), e);
            return Err(AllowanceError::io(&temp_path, e));
        }
        if let Err(e) = fs::rename(&temp_path, path) {
            error!("Failed to replace {}: {}", path.display(), e);
            let _ = fs::remove_file(&temp_path);
            return Err(AllowanceError::io(path, e));
        }

        debug!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(())
    }
}

impl Connection for CsvConnection {
    type TaskRepository = TaskRepository;
    type EarningsLogRepository = EarningsLogRepository;

    fn ensure_initialized(&self) -> Result<()> {
        CsvConnection::ensure_initialized(self)
    }

    fn create_task_repository(&self) -> Self::TaskRepository {
        TaskRepository::new(self.clone())
    }

    fn create_earnings_log_repository(&self) -> Self::EarningsLogRepository {
        EarningsLogRepository::new(self.clone())
    }
}

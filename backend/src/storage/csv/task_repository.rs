use log::{debug, info};
use shared::Task;

use super::connection::{CsvConnection, TASK_HEADER};
use crate::domain::models::task::coerce_reward;
use crate::error::{AllowanceError, Result};
use crate::storage::traits::TaskStorage;

/// CSV-based task catalog repository
#[derive(Debug, Clone)]
pub struct TaskRepository {
    connection: CsvConnection,
}

impl TaskRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }
}

impl TaskStorage for TaskRepository {
    fn load_tasks(&self) -> Result<Vec<Task>> {
        let table = self.connection.read_table(self.connection.task_file_path())?;
        if !table.has_header() {
            debug!("Task catalog has no header row, treating it as empty");
            return Ok(Vec::new());
        }
        let name_column = table.column("task")?;
        let reward_column = table.column("reward")?;

        let mut tasks = Vec::with_capacity(table.rows.len());
        for (line, record) in &table.rows {
            let raw_reward = record.get(reward_column).unwrap_or("");
            let reward =
                coerce_reward(raw_reward).map_err(|reason| AllowanceError::MalformedRecord {
                    path: table.path().to_path_buf(),
                    line: *line,
                    reason,
                })?;

            tasks.push(Task {
                name: record.get(name_column).unwrap_or("").to_string(),
                reward,
            });
        }

        debug!("Loaded {} tasks", tasks.len());
        Ok(tasks)
    }

    fn save_tasks(&self, tasks: &[Task]) -> Result<()> {
        let rows = tasks
            .iter()
            .map(|task| vec![task.name.clone(), task.reward.to_string()]);
        self.connection
            .write_table(self.connection.task_file_path(), &TASK_HEADER, rows)?;

        info!("Saved task catalog with {} tasks", tasks.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::test_utils::TestEnvironment;
    use std::fs;

    fn task(name: &str, reward: u32) -> Task {
        Task {
            name: name.to_string(),
            reward,
        }
    }

    #[test]
    fn test_load_seeded_catalog() {
        let env = TestEnvironment::initialized().unwrap();
        let tasks = env.task_repository().load_tasks().unwrap();

        assert_eq!(
            tasks,
            vec![
                task("トイレ掃除", 50),
                task("風呂掃除", 50),
                task("洗い物", 30),
                task("料理の手伝い", 30),
            ]
        );
    }

    #[test]
    fn test_save_replaces_whole_catalog() {
        let env = TestEnvironment::initialized().unwrap();
        let repo = env.task_repository();

        repo.save_tasks(&[task("洗濯物たたみ", 40)]).unwrap();

        assert_eq!(repo.load_tasks().unwrap(), vec![task("洗濯物たたみ", 40)]);
    }

    #[test]
    fn test_save_of_loaded_catalog_is_noop() {
        let env = TestEnvironment::initialized().unwrap();
        let repo = env.task_repository();
        let before = fs::read(env.connection.task_file_path()).unwrap();

        let tasks = repo.load_tasks().unwrap();
        repo.save_tasks(&tasks).unwrap();

        assert_eq!(fs::read(env.connection.task_file_path()).unwrap(), before);
    }

    #[test]
    fn test_empty_catalog_round_trips() {
        let env = TestEnvironment::initialized().unwrap();
        let repo = env.task_repository();

        repo.save_tasks(&[]).unwrap();
        assert!(repo.load_tasks().unwrap().is_empty());
    }

    #[test]
    fn test_catalog_emptied_after_startup_loads_as_empty() {
        let env = TestEnvironment::initialized().unwrap();
        fs::write(env.connection.task_file_path(), b"").unwrap();

        assert!(env.task_repository().load_tasks().unwrap().is_empty());
    }

    #[test]
    fn test_float_rewards_from_spreadsheet_are_coerced() {
        let env = TestEnvironment::new().unwrap();
        fs::write(env.connection.task_file_path(), "task,reward\n洗い物,30.0\n").unwrap();

        let tasks = env.task_repository().load_tasks().unwrap();
        assert_eq!(tasks, vec![task("洗い物", 30)]);
    }

    #[test]
    fn test_bad_reward_reports_line() {
        let env = TestEnvironment::new().unwrap();
        fs::write(
            env.connection.task_file_path(),
            "task,reward\n洗い物,30\n風呂掃除,lots\n",
        )
        .unwrap();

        let err = env.task_repository().load_tasks().unwrap_err();
        match err {
            AllowanceError::MalformedRecord { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }
}

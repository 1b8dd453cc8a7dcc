use serde::{Deserialize, Serialize};

/// A chore in the task catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Task name, unique within the catalog
    pub name: String,
    /// Reward paid per completion, in whole currency units
    pub reward: u32,
}

/// One row of the editable catalog grid, exactly as the user typed it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRowInput {
    pub name: String,
    /// Raw reward cell; coerced to a non-negative integer on save
    pub reward: String,
}

/// A recorded chore completion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Timestamp formatted as `YYYY-MM-DD HH:MM:SS`
    pub date: String,
    /// Task name at the time of recording (free text, may no longer be in the catalog)
    pub task: String,
    pub reward: u32,
}

/// The three buckets earnings are split into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllocationCategory {
    Spend,
    Save,
    Invest,
}

impl AllocationCategory {
    pub const ALL: [AllocationCategory; 3] = [
        AllocationCategory::Spend,
        AllocationCategory::Save,
        AllocationCategory::Invest,
    ];

    /// Label shown on the proportion chart
    pub fn label(&self) -> &'static str {
        match self {
            AllocationCategory::Spend => "使う",
            AllocationCategory::Save => "貯める",
            AllocationCategory::Invest => "増やす",
        }
    }
}

/// Slider positions for the spend/save/invest split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationSetting {
    pub spend_pct: u8,
    pub save_pct: u8,
    pub invest_pct: u8,
}

impl Default for AllocationSetting {
    fn default() -> Self {
        Self {
            spend_pct: 20,
            save_pct: 70,
            invest_pct: 10,
        }
    }
}

/// Allocated amounts for each bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub spend: f64,
    pub save: f64,
    pub invest: f64,
    /// True when there are no earnings and the amounts are a uniform {1,1,1}
    /// stand-in that only keeps the proportion chart drawable
    pub is_placeholder: bool,
}

/// One slice of the proportion chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationSlice {
    pub category: AllocationCategory,
    pub label: String,
    pub amount: f64,
    pub formatted_amount: String,
    /// Share of the whole chart in percent
    pub proportion: f64,
    pub formatted_proportion: String,
}

/// Earnings summed over one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    /// Month in `YYYY-MM` form
    pub month: String,
    pub total: u64,
}

/// A log entry prepared for the read-only history table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedLogEntry {
    pub date: String,
    pub task: String,
    pub formatted_reward: String,
    pub raw_reward: u32,
}

/// Everything the presentation layer needs to redraw after an interaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub tasks: Vec<Task>,
    /// Options for the task selection control, in catalog order
    pub task_names: Vec<String>,
    pub total_reward: u64,
    pub allocation_setting: AllocationSetting,
    pub allocation: Allocation,
    pub slices: Vec<AllocationSlice>,
    pub percentage_total: u32,
    /// Advisory text when the percentages do not add up to 100
    pub percentage_warning: Option<String>,
    pub monthly_totals: Vec<MonthlyTotal>,
    /// False means the monthly chart should show an explicit "no history" state
    pub has_history: bool,
    /// Newest first
    pub history: Vec<FormattedLogEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveCatalogRequest {
    pub rows: Vec<TaskRowInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveCatalogResponse {
    pub tasks: Vec<Task>,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordChoreRequest {
    /// Currently selected task name
    pub task_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordChoreResponse {
    pub entry: LogEntry,
    pub success_message: String,
}

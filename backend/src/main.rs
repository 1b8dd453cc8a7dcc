use chore_allowance_backend::config::OutputFormat;
use chore_allowance_backend::{AppConfig, Backend};
use log::info;
use shared::DashboardSnapshot;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = AppConfig::default_config_path();
    info!("Loading configuration from {}", config_path.display());
    let config = AppConfig::load(&config_path)?;

    let backend = Backend::new(config)?;
    let snapshot = backend.dashboard(backend.default_allocation())?;

    match backend.config().output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
        OutputFormat::Text => print_snapshot(&snapshot),
    }

    Ok(())
}

fn print_snapshot(snapshot: &DashboardSnapshot) {
    println!("Tasks");
    for task in &snapshot.tasks {
        println!("  {:<16} {:>6}", task.name, task.reward);
    }

    println!();
    println!("Total earned: {}", snapshot.total_reward);

    let setting = snapshot.allocation_setting;
    println!(
        "Split: {}% / {}% / {}%",
        setting.spend_pct, setting.save_pct, setting.invest_pct
    );
    if let Some(warning) = &snapshot.percentage_warning {
        println!("  ! {}", warning);
    }
    for slice in &snapshot.slices {
        println!(
            "  {:<6} {:>10} {:>7}",
            slice.label, slice.formatted_amount, slice.formatted_proportion
        );
    }

    println!();
    if !snapshot.has_history {
        println!("No chores recorded yet.");
        return;
    }

    println!("Monthly totals");
    for month in &snapshot.monthly_totals {
        println!("  {} {:>8}", month.month, month.total);
    }

    println!();
    println!("History");
    for entry in &snapshot.history {
        println!("  {}  {:<16} {:>8}", entry.date, entry.task, entry.formatted_reward);
    }
}

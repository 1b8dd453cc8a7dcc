//! Spend / save / invest allocation.
//!
//! Total earnings are split by three slider percentages. Percentages that do
//! not add up to 100 produce a warning but never stop the calculation.
//! Amounts stay unrounded here; rounding is a display concern.

use log::warn;
use shared::{Allocation, AllocationCategory, AllocationSetting};

use crate::error::{AllowanceError, Result};

/// Allocation together with the advisory state shown next to the sliders
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationSummary {
    pub setting: AllocationSetting,
    pub allocation: Allocation,
    pub percentage_total: u32,
    pub warning: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AllocationService;

impl AllocationService {
    pub fn new() -> Self {
        Self
    }

    /// Split `total_reward` by the three percentages.
    ///
    /// With no earnings the result is the uniform placeholder {1,1,1} flagged
    /// `is_placeholder`, which only exists to keep a proportion chart drawable.
    pub fn allocate(
        &self,
        total_reward: u64,
        spend_pct: u8,
        save_pct: u8,
        invest_pct: u8,
    ) -> Allocation {
        if total_reward == 0 {
            return Allocation {
                spend: 1.0,
                save: 1.0,
                invest: 1.0,
                is_placeholder: true,
            };
        }

        let total = total_reward as f64;
        Allocation {
            spend: total * f64::from(spend_pct) / 100.0,
            save: total * f64::from(save_pct) / 100.0,
            invest: total * f64::from(invest_pct) / 100.0,
            is_placeholder: false,
        }
    }

    /// True iff the three percentages add up to exactly 100
    pub fn validate_percentages(&self, spend_pct: u8, save_pct: u8, invest_pct: u8) -> bool {
        percentage_total(spend_pct, save_pct, invest_pct) == 100
    }

    /// Build a setting from raw slider values, which must lie in [0, 100]
    pub fn setting_from_sliders(
        &self,
        spend_pct: i64,
        save_pct: i64,
        invest_pct: i64,
    ) -> Result<AllocationSetting> {
        Ok(AllocationSetting {
            spend_pct: slider_value("spend_pct", spend_pct)?,
            save_pct: slider_value("save_pct", save_pct)?,
            invest_pct: slider_value("invest_pct", invest_pct)?,
        })
    }

    /// Allocation plus percentage total and warning text
    pub fn summarize(&self, total_reward: u64, setting: AllocationSetting) -> AllocationSummary {
        let total = percentage_total(setting.spend_pct, setting.save_pct, setting.invest_pct);
        let warning = if total == 100 {
            None
        } else {
            warn!("Allocation percentages add up to {}%", total);
            Some(format!(
                "Percentages add up to {}%. Adjust them so they total 100%.",
                total
            ))
        };

        AllocationSummary {
            setting,
            allocation: self.allocate(
                total_reward,
                setting.spend_pct,
                setting.save_pct,
                setting.invest_pct,
            ),
            percentage_total: total,
            warning,
        }
    }

    /// Amount allocated to one category
    pub fn amount_for(&self, allocation: &Allocation, category: AllocationCategory) -> f64 {
        match category {
            AllocationCategory::Spend => allocation.spend,
            AllocationCategory::Save => allocation.save,
            AllocationCategory::Invest => allocation.invest,
        }
    }

    /// Each slice's share of the chart in percent, in spend/save/invest order.
    /// All zeros when there is nothing to draw.
    pub fn proportions(&self, allocation: &Allocation) -> [f64; 3] {
        let sum = allocation.spend + allocation.save + allocation.invest;
        if sum <= 0.0 {
            return [0.0; 3];
        }
        [
            allocation.spend / sum * 100.0,
            allocation.save / sum * 100.0,
            allocation.invest / sum * 100.0,
        ]
    }
}

/// Check that every percentage of a setting lies in [0, 100]
pub fn validate_setting(setting: &AllocationSetting) -> Result<()> {
    slider_value("spend_pct", i64::from(setting.spend_pct))?;
    slider_value("save_pct", i64::from(setting.save_pct))?;
    slider_value("invest_pct", i64::from(setting.invest_pct))?;
    Ok(())
}

fn percentage_total(spend_pct: u8, save_pct: u8, invest_pct: u8) -> u32 {
    u32::from(spend_pct) + u32::from(save_pct) + u32::from(invest_pct)
}

fn slider_value(field: &str, value: i64) -> Result<u8> {
    if (0..=100).contains(&value) {
        Ok(value as u8)
    } else {
        Err(AllowanceError::validation(
            field,
            &value.to_string(),
            "must be between 0 and 100",
        ))
    }
}

use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use crate::errors::{Error, Result};
use crate::health::calculate_health_breakdown_at;
use crate::import::{load_csv_text, process_portfolio_data_with_config, ColumnMapping};
use crate::insights::{filter_dismissed, generate_insights_at};
use crate::portfolio::{
    calculate_allocation_breakdown, calculate_concentration_risk, calculate_era_allocation_breakdown_at,
    calculate_liquidity_breakdown, calculate_portfolio_summary, calculate_position_concentration,
    calculate_profit_milestones, calculate_rebalance_suggestions_with_band, era_target_drift, AllocationPreset,
    AllocationTarget, EraAllocationTarget, EraPreset, PortfolioItem,
};
use crate::settings::AnalyticsConfig;

use super::{PortfolioDashboard, PortfolioSink, PortfolioSnapshot, PortfolioTargets};

fn lock_error(e: impl std::fmt::Display) -> Error {
    Error::Unexpected(format!("portfolio state lock poisoned: {}", e))
}

/// Holds the current import, targets and dismissed insights.
///
/// The snapshot is replaced by swapping an `Arc`, so a reader holding the
/// previous snapshot keeps a consistent view while a new upload lands.
pub struct PortfolioContext {
    config: AnalyticsConfig,
    snapshot: RwLock<Arc<PortfolioSnapshot>>,
    targets: RwLock<PortfolioTargets>,
    dismissed: RwLock<HashSet<String>>,
    sink: Option<Arc<dyn PortfolioSink>>,
}

impl Default for PortfolioContext {
    fn default() -> Self {
        Self::new(AnalyticsConfig::default())
    }
}

impl PortfolioContext {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self {
            config,
            snapshot: RwLock::new(Arc::new(PortfolioSnapshot::default())),
            targets: RwLock::new(PortfolioTargets::default()),
            dismissed: RwLock::new(HashSet::new()),
            sink: None,
        }
    }

    /// Sets the sink that receives the items of every upload that produced items.
    pub fn with_sink(mut self, sink: Arc<dyn PortfolioSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Result<Arc<PortfolioSnapshot>> {
        Ok(self.snapshot.read().map_err(lock_error)?.clone())
    }

    /// Imports CSV text and replaces the current snapshot with the result,
    /// valid or not. Only the lock can fail here; import problems are in the
    /// returned snapshot's validation.
    pub fn upload_data(&self, csv_text: &str) -> Result<Arc<PortfolioSnapshot>> {
        self.upload_with_mapping(csv_text, None)
    }

    /// Like [`upload_data`](Self::upload_data) with a caller-chosen column mapping.
    pub fn upload_with_mapping(
        &self,
        csv_text: &str,
        column_override: Option<&ColumnMapping>,
    ) -> Result<Arc<PortfolioSnapshot>> {
        let result = process_portfolio_data_with_config(csv_text, column_override, &self.config);
        let snapshot = Arc::new(PortfolioSnapshot::from_import(result, Utc::now()));

        *self.snapshot.write().map_err(lock_error)? = snapshot.clone();
        info!(
            "Portfolio snapshot replaced: {} items (valid: {})",
            snapshot.items.len(),
            snapshot.validation.is_valid
        );

        if !snapshot.items.is_empty() {
            self.notify_sink(snapshot.items.clone());
        }

        Ok(snapshot)
    }

    /// Reads a CSV file and uploads its contents.
    pub async fn upload_file(&self, path: impl AsRef<Path>) -> Result<Arc<PortfolioSnapshot>> {
        let text = load_csv_text(path).await?;
        self.upload_data(&text)
    }

    /// Drops every imported item.
    pub fn clear_data(&self) -> Result<()> {
        *self.snapshot.write().map_err(lock_error)? = Arc::new(PortfolioSnapshot::default());
        info!("Portfolio data cleared");
        Ok(())
    }

    pub fn targets(&self) -> Result<PortfolioTargets> {
        Ok(*self.targets.read().map_err(lock_error)?)
    }

    pub fn set_allocation_preset(&self, preset: AllocationPreset) -> Result<()> {
        let mut targets = self.targets.write().map_err(lock_error)?;
        targets.allocation = preset.target();
        targets.allocation_preset = Some(preset);
        info!("Allocation target set to preset '{}'", preset.as_str());
        Ok(())
    }

    /// Replaces the allocation target. Targets that are negative or do not
    /// sum to 100 are rejected and leave the current target in place.
    pub fn set_custom_allocation_target(&self, target: AllocationTarget) -> Result<()> {
        target.validate()?;
        let mut targets = self.targets.write().map_err(lock_error)?;
        targets.allocation = target;
        targets.allocation_preset = None;
        info!("Custom allocation target set: {:?}", target);
        Ok(())
    }

    pub fn set_era_preset(&self, preset: EraPreset) -> Result<()> {
        let mut targets = self.targets.write().map_err(lock_error)?;
        targets.era = preset.target();
        targets.era_preset = Some(preset);
        info!("Era target set to preset '{}'", preset.as_str());
        Ok(())
    }

    pub fn set_custom_era_target(&self, target: EraAllocationTarget) -> Result<()> {
        target.validate()?;
        let mut targets = self.targets.write().map_err(lock_error)?;
        targets.era = target;
        targets.era_preset = None;
        info!("Custom era target set: {:?}", target);
        Ok(())
    }

    /// Hides an insight until [`restore_insights`](Self::restore_insights).
    pub fn dismiss_insight(&self, id: &str) -> Result<()> {
        self.dismissed.write().map_err(lock_error)?.insert(id.to_string());
        debug!("Insight '{}' dismissed", id);
        Ok(())
    }

    pub fn restore_insights(&self) -> Result<()> {
        self.dismissed.write().map_err(lock_error)?.clear();
        debug!("Dismissed insights restored");
        Ok(())
    }

    /// Recomputes every aggregate from the current snapshot and targets.
    pub fn dashboard(&self) -> Result<PortfolioDashboard> {
        self.dashboard_at(Utc::now())
    }

    /// Recomputes every aggregate as of `now`.
    pub fn dashboard_at(&self, now: DateTime<Utc>) -> Result<PortfolioDashboard> {
        let snapshot = self.snapshot()?;
        let targets = self.targets()?;
        let dismissed = self.dismissed.read().map_err(lock_error)?.clone();

        let items = snapshot.items.as_slice();
        let today = now.date_naive();

        let allocation = calculate_allocation_breakdown(items);
        let era_breakdown = calculate_era_allocation_breakdown_at(items, today, self.config.current_era_months);
        let rebalance_suggestions =
            calculate_rebalance_suggestions_with_band(&allocation, &targets.allocation, self.config.rebalance_band_pct);
        let insights = filter_dismissed(
            generate_insights_at(items, &targets.allocation, &self.config, now),
            &dismissed,
        );

        Ok(PortfolioDashboard {
            summary: calculate_portfolio_summary(items),
            liquidity: calculate_liquidity_breakdown(items),
            concentration: calculate_concentration_risk(items),
            position_concentration: calculate_position_concentration(items),
            era_drift: era_target_drift(&era_breakdown, &targets.era),
            health: calculate_health_breakdown_at(items, today, self.config.current_era_months),
            milestones: calculate_profit_milestones(items),
            allocation,
            era_breakdown,
            rebalance_suggestions,
            insights,
            targets,
            generated_at: now,
        })
    }

    /// Hands items to the sink on the current tokio runtime, if there is one.
    fn notify_sink(&self, items: Vec<PortfolioItem>) {
        let Some(sink) = self.sink.clone() else {
            return;
        };

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    let count = items.len();
                    match sink.save_items(items).await {
                        Ok(()) => debug!("Portfolio sink saved {} items", count),
                        Err(e) => warn!("Portfolio sink failed to save {} items: {}", count, e),
                    }
                });
            }
            Err(_) => debug!("No async runtime available, portfolio sink skipped"),
        }
    }
}

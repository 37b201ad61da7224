//! Prometheus metrics

use crate::settlement::Settlement;
use crate::wager::Side;

/// Gauge metric types
#[derive(Debug, Clone, Copy)]
pub enum GaugeMetric {
    /// Entries accepting wagers
    OpenEntries,
    /// Entries with a history record
    SettledEntries,
    /// Points currently staked on open entries
    OpenStake,
}

impl GaugeMetric {
    fn name(self) -> &'static str {
        match self {
            GaugeMetric::OpenEntries => "lateline_open_entries",
            GaugeMetric::SettledEntries => "lateline_settled_entries",
            GaugeMetric::OpenStake => "lateline_open_stake_points",
        }
    }
}

/// Set a gauge value
pub fn set_gauge(metric: GaugeMetric, value: f64) {
    metrics::gauge!(metric.name()).set(value);
}

/// Count a placed wager and its stake
pub fn record_wager_placed(side: Side, stake: u64) {
    metrics::counter!("lateline_wagers_placed_total", "side" => side.as_str()).increment(1);
    metrics::counter!("lateline_stake_points_total", "side" => side.as_str()).increment(stake);
}

/// Record the outcome and payouts of a settlement
pub fn record_settlement_metrics(settlement: &Settlement) {
    let outcome = settlement.outcome.as_str();
    metrics::counter!("lateline_settlements_total", "outcome" => outcome).increment(1);
    metrics::counter!("lateline_profit_distributed_points_total")
        .increment(settlement.distributed());
    metrics::counter!("lateline_profit_undistributed_points_total")
        .increment(settlement.undistributed());
    metrics::histogram!("lateline_arrival_delta_seconds").record(settlement.delta_seconds as f64);

    if settlement.is_forfeit() && settlement.losing_pool() > 0 {
        metrics::counter!("lateline_pools_forfeited_total").increment(1);
    }
}

/// Record how many history samples backed a line prediction
pub fn record_prediction(samples: usize) {
    metrics::histogram!("lateline_prediction_samples").record(samples as f64);
}

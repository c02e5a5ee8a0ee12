use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct LookupStats {
    pub start_time: DateTime<Utc>,
    pub total_fetches: usize,
    pub successful_fetches: usize,
    pub failed_fetches: usize,
    pub bytes_fetched: usize,
    pub extractions: usize,
    pub exports: usize,
    pub failure_reasons: HashMap<String, usize>,
    pub average_fetch_time: f64, // in milliseconds
}

#[derive(Debug, Clone)]
pub struct StatsTracker {
    stats: Arc<RwLock<LookupStats>>,
}

impl StatsTracker {
    pub fn new() -> Self {
        Self {
            stats: Arc::new(RwLock::new(LookupStats {
                start_time: Utc::now(),
                total_fetches: 0,
                successful_fetches: 0,
                failed_fetches: 0,
                bytes_fetched: 0,
                extractions: 0,
                exports: 0,
                failure_reasons: HashMap::new(),
                average_fetch_time: 0.0,
            })),
        }
    }

    pub fn record_fetch(&self, size: usize, duration: Duration) {
        let mut stats = self.stats.write();
        stats.successful_fetches += 1;
        stats.bytes_fetched += size;
        Self::record_timing(&mut stats, duration);
    }

    pub fn record_failure(&self, reason: String, duration: Duration) {
        let mut stats = self.stats.write();
        stats.failed_fetches += 1;
        *stats.failure_reasons.entry(reason).or_insert(0) += 1;
        Self::record_timing(&mut stats, duration);
    }

    fn record_timing(stats: &mut LookupStats, duration: Duration) {
        stats.total_fetches += 1;
        let current_total = stats.average_fetch_time * (stats.total_fetches - 1) as f64;
        let new_duration = duration.num_milliseconds() as f64;
        stats.average_fetch_time = (current_total + new_duration) / stats.total_fetches as f64;
    }

    pub fn record_extraction(&self) {
        self.stats.write().extractions += 1;
    }

    pub fn record_export(&self) {
        self.stats.write().exports += 1;
    }

    pub fn get_stats(&self) -> LookupStats {
        self.stats.read().clone()
    }

    pub fn summary_lines(&self) -> Vec<String> {
        let stats = self.stats.read();
        let uptime = Utc::now().signed_duration_since(stats.start_time);

        let mut lines = vec![
            format!("Uptime: {} seconds", uptime.num_seconds()),
            format!("Fetches: {}", stats.total_fetches),
            format!("Successful Fetches: {}", stats.successful_fetches),
            format!("Failed Fetches: {}", stats.failed_fetches),
            format!("Data Fetched: {:.2} KB", stats.bytes_fetched as f64 / 1_000.0),
            format!("Average Fetch Time: {:.2}ms", stats.average_fetch_time),
            format!("Extractions: {}", stats.extractions),
            format!("Exports: {}", stats.exports),
        ];

        if !stats.failure_reasons.is_empty() {
            lines.push("Failure Reasons:".to_string());
            for (reason, count) in &stats.failure_reasons {
                lines.push(format!("  {}: {}", reason, count));
            }
        }
        lines
    }
}

impl Default for StatsTracker {
    fn default() -> Self {
        Self::new()
    }
}

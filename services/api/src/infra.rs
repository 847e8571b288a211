use fair_chance::workflows::assessment::{
    DeliveryError, ReportDelivery, ReportPublisher, ScoringConfig,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::VecDeque;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Deliveries kept in the outbox before the oldest are dropped.
const OUTBOX_CAPACITY: usize = 64;

/// Publisher that keeps the most recent deliveries in memory and logs each one;
/// stands in for an e-mail relay.
#[derive(Clone)]
pub(crate) struct OutboxPublisher {
    deliveries: Arc<Mutex<VecDeque<ReportDelivery>>>,
    capacity: usize,
}

impl Default for OutboxPublisher {
    fn default() -> Self {
        Self::with_capacity(OUTBOX_CAPACITY)
    }
}

impl ReportPublisher for OutboxPublisher {
    fn publish(&self, delivery: ReportDelivery) -> Result<(), DeliveryError> {
        info!(
            recipient = %delivery.recipient,
            candidate = %delivery.candidate_id.0,
            recommendation = delivery.recommendation.label(),
            "assessment report queued for delivery"
        );
        let mut guard = self.deliveries.lock().expect("outbox mutex poisoned");
        if guard.len() == self.capacity {
            guard.pop_front();
        }
        guard.push_back(delivery);
        Ok(())
    }
}

impl OutboxPublisher {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            deliveries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    #[cfg(test)]
    pub(crate) fn deliveries(&self) -> Vec<ReportDelivery> {
        self.deliveries
            .lock()
            .expect("outbox mutex poisoned")
            .iter()
            .cloned()
            .collect()
    }
}

pub(crate) fn default_scoring_config() -> ScoringConfig {
    ScoringConfig::default()
}

//! Prometheus metrics for impact requests.

use couture_models::ImpactEstimate;
use couture_utils::{CoutureError, CoutureResult};
use prometheus::{Encoder, Histogram, HistogramOpts, IntCounterVec, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    estimates_total: IntCounterVec,
    batch_size: Histogram,
}

impl Metrics {
    pub fn new(namespace: &str) -> prometheus::Result<Self> {
        let registry = Registry::new_custom(Some(namespace.to_string()), None)?;

        let estimates_total = IntCounterVec::new(
            Opts::new("bom_estimates_total", "Impact estimates by materials shape and rating"),
            &["shape", "rating"],
        )?;
        let batch_size = Histogram::with_opts(
            HistogramOpts::new("bom_batch_size", "Products per batch estimate request")
                .buckets(vec![1.0, 4.0, 16.0, 64.0, 256.0]),
        )?;

        registry.register(Box::new(estimates_total.clone()))?;
        registry.register(Box::new(batch_size.clone()))?;

        Ok(Self {
            registry,
            estimates_total,
            batch_size,
        })
    }

    pub fn record_estimate(&self, shape: &str, estimate: &ImpactEstimate) {
        self.estimates_total
            .with_label_values(&[shape, estimate.sustainability_rating.as_str()])
            .inc();
    }

    pub fn record_batch(&self, size: usize) {
        self.batch_size.observe(size as f64);
    }

    pub fn encode(&self) -> CoutureResult<String> {
        let mut buffer = Vec::new();
        TextEncoder::new()
            .encode(&self.registry.gather(), &mut buffer)
            .map_err(|e| CoutureError::internal(format!("Failed to encode metrics: {}", e)))?;
        String::from_utf8(buffer).map_err(|e| CoutureError::internal(e.to_string()))
    }
}

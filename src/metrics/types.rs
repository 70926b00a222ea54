use crate::metrics::definitions::MetricDescriptor;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Gauge(f64),
}

impl MetricValue {
    pub const fn as_f64(&self) -> f64 {
        match self {
            Self::Gauge(v) => *v,
        }
    }
}

/// Label pairs in the order declared by the family's schema.
pub type Labels = Vec<(&'static str, String)>;

#[derive(Debug, Clone, PartialEq)]
pub struct MetricPoint {
    pub descriptor: &'static MetricDescriptor,
    pub labels: Labels,
    pub value: MetricValue,
    pub metric_type: MetricType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricType {
    Gauge,
}

impl MetricType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gauge => "gauge",
        }
    }
}

impl MetricPoint {
    /// Build a gauge sample. `values` are paired positionally with the
    /// descriptor's label names and must supply exactly one value per label.
    pub fn gauge<const N: usize>(
        descriptor: &'static MetricDescriptor,
        values: [String; N],
        value: f64,
    ) -> Self {
        debug_assert_eq!(
            N,
            descriptor.labels.len(),
            "label values do not match the schema of {}",
            descriptor.name
        );

        Self {
            descriptor,
            labels: descriptor.labels.iter().copied().zip(values).collect(),
            value: MetricValue::Gauge(value),
            metric_type: MetricType::Gauge,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.descriptor.name
    }

    #[allow(dead_code)] // Used by tests
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Receiver of the samples produced by a collection cycle.
pub trait MetricSink {
    fn accept(&mut self, point: MetricPoint);
}

impl MetricSink for Vec<MetricPoint> {
    fn accept(&mut self, point: MetricPoint) {
        self.push(point);
    }
}

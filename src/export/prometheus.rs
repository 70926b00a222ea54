use crate::collector::CycleReport;
use crate::metrics::definitions::{BUILD_INFO, MetricDescriptor, SCRAPE_CLUSTERS, SCRAPE_DURATION_SECONDS, UP};
use crate::metrics::types::{Labels, MetricPoint, MetricSink, MetricType};
use std::fmt::Write;

pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Collects the samples of one cycle and renders them in the Prometheus text
/// exposition format.
#[derive(Debug, Default)]
pub struct PrometheusEncoder {
    // Families in first-seen order, samples in arrival order
    families: Vec<(&'static MetricDescriptor, MetricType, Vec<MetricPoint>)>,
}

impl PrometheusEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render every collected sample followed by the exporter's own metrics
    /// for the cycle described by `report`.
    #[allow(clippy::cast_precision_loss)]
    pub fn render(mut self, report: &CycleReport) -> String {
        self.accept(MetricPoint::gauge(
            &SCRAPE_DURATION_SECONDS,
            [],
            report.duration.as_secs_f64(),
        ));
        self.accept(MetricPoint::gauge(&UP, [], f64::from(u8::from(report.is_up()))));
        self.accept(MetricPoint::gauge(&SCRAPE_CLUSTERS, [], report.clusters as f64));
        self.accept(MetricPoint::gauge(
            &BUILD_INFO,
            [env!("CARGO_PKG_VERSION").to_string()],
            1.0,
        ));

        let mut output = String::new();
        for (descriptor, metric_type, points) in &self.families {
            let name = descriptor.name;
            let _ = writeln!(output, "# HELP {name} {}", descriptor.help);
            let _ = writeln!(output, "# TYPE {name} {}", metric_type.as_str());
            for point in points {
                let _ = writeln!(
                    output,
                    "{name}{} {}",
                    render_labels(&point.labels),
                    point.value.as_f64()
                );
            }
        }
        output
    }
}

impl MetricSink for PrometheusEncoder {
    fn accept(&mut self, point: MetricPoint) {
        let name = point.name();
        match self
            .families
            .iter_mut()
            .find(|(descriptor, _, _)| descriptor.name == name)
        {
            Some((_, _, points)) => points.push(point),
            None => self
                .families
                .push((point.descriptor, point.metric_type, vec![point])),
        }
    }
}

fn render_labels(labels: &Labels) -> String {
    if labels.is_empty() {
        return String::new();
    }

    let label_str = labels
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, escape_label_value(v)))
        .collect::<Vec<_>>()
        .join(",");

    format!("{{{label_str}}}")
}

fn escape_label_value(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

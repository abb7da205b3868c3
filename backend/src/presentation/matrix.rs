use crate::analytics::correlation::CorrelationMatrix;
use crate::presentation::{grid_axis, ChartStyle};
use common::model::chart::{ChartSpec, Layout, Title, Trace, TraceKind, Values, ZValues};

/// Heatmap of |r| with cells below `threshold` left blank.
pub fn correlation_chart(matrix: &CorrelationMatrix, threshold: f64, style: &ChartStyle) -> ChartSpec {
    let labels: Vec<String> = matrix.columns.iter().map(|c| c.header().to_string()).collect();

    let mut trace = Trace::new(TraceKind::Heatmap);
    trace.x = Some(Values::Text(labels.clone()));
    trace.y = Some(Values::Text(labels));
    trace.z = Some(ZValues::Matrix(matrix.masked(threshold)));
    trace.colorscale = Some("Blues".to_string());
    trace.texttemplate = Some("%{z:.2f}".to_string());
    trace.zmin = Some(0.0);
    trace.zmax = Some(1.0);

    let mut yaxis = grid_axis(None, None);
    yaxis.autorange = Some("reversed".to_string());

    ChartSpec {
        data: vec![trace],
        layout: Layout {
            title: Some(Title::new(format!("Feature Correlations (|r| ≥ {:.2})", threshold))),
            height: style.height,
            margin: Some(style.margin.clone()),
            xaxis: Some(grid_axis(None, Some(style.rotation))),
            yaxis: Some(yaxis),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::column::Column;

    fn matrix() -> CorrelationMatrix {
        CorrelationMatrix {
            columns: vec![Column::Treatment, Column::FamilyHistory],
            values: vec![vec![Some(1.0), Some(0.3)], vec![Some(0.3), Some(1.0)]],
        }
    }

    #[test]
    fn threshold_masks_display_only() {
        let m = matrix();
        let chart = correlation_chart(&m, 0.5, &ChartStyle::default());
        assert_eq!(
            chart.data[0].z,
            Some(ZValues::Matrix(vec![vec![Some(1.0), None], vec![None, Some(1.0)]]))
        );
        assert_eq!(m.get(0, 1), Some(0.3));
        assert_eq!(
            chart.layout.title.unwrap().text,
            "Feature Correlations (|r| ≥ 0.50)"
        );
    }

    #[test]
    fn zero_threshold_shows_everything() {
        let chart = correlation_chart(&matrix(), 0.0, &ChartStyle::default());
        assert_eq!(chart.data[0].z, Some(ZValues::Matrix(matrix().values)));
        assert_eq!(chart.data[0].x, Some(Values::Text(vec!["treatment".into(), "family_history".into()])));
    }
}

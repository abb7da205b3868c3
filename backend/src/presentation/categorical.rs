use crate::analytics::grouped::GroupCount;
use crate::presentation::ChartStyle;
use common::model::chart::{
    ChartSpec, Layout, Marker, MarkerColor, Title, Trace, TraceKind, Values,
};
use common::model::column::Column;
use common::model::stats::{ColumnSummary, HistogramBucket, ValueCount};

/// Bar chart of value counts, one palette color per category.
pub fn distribution_chart(column: Column, counts: &[ValueCount], style: &ChartStyle) -> ChartSpec {
    let mut trace = Trace::new(TraceKind::Bar);
    trace.x = Some(Values::Text(counts.iter().map(|c| c.value.clone()).collect()));
    trace.y = Some(Values::Numbers(counts.iter().map(|c| c.count as f64).collect()));
    trace.marker = Some(Marker {
        color: Some(MarkerColor::PerPoint(
            (0..counts.len()).map(|i| style.color(i)).collect(),
        )),
    });
    trace.showlegend = Some(false);

    let style = style.clone().with_x_title(column.header());
    ChartSpec {
        data: vec![trace],
        layout: Layout {
            title: Some(Title::new(format!("Distribution of {}", column))),
            height: style.height,
            margin: Some(style.margin.clone()),
            xaxis: Some(style.x_axis(Some(style.tick_angle(counts.len())))),
            yaxis: Some(style.y_axis()),
            showlegend: Some(false),
            plot_bgcolor: Some("white".to_string()),
            ..Default::default()
        },
    }
}

/// Histogram drawn as bars at the bucket centers.
pub fn histogram_chart(buckets: &[HistogramBucket], style: &ChartStyle) -> ChartSpec {
    let mut trace = Trace::new(TraceKind::Bar);
    trace.x = Some(Values::Numbers(buckets.iter().map(HistogramBucket::center).collect()));
    trace.y = Some(Values::Numbers(buckets.iter().map(|b| b.count as f64).collect()));
    trace.marker = Some(Marker {
        color: Some(MarkerColor::Single(style.color(0))),
    });

    ChartSpec {
        data: vec![trace],
        layout: compact_layout(style),
    }
}

/// Small chart for a feature card: histogram for numeric summaries, value
/// counts for categorical ones.
pub fn summary_chart(summary: &ColumnSummary, style: &ChartStyle) -> ChartSpec {
    match summary {
        ColumnSummary::Numeric(s) => histogram_chart(&s.histogram, style),
        ColumnSummary::Categorical(s) => {
            let mut trace = Trace::new(TraceKind::Bar);
            trace.x = Some(Values::Text(s.counts.iter().map(|c| c.value.clone()).collect()));
            trace.y = Some(Values::Numbers(s.counts.iter().map(|c| c.count as f64).collect()));
            trace.marker = Some(Marker {
                color: Some(MarkerColor::Single(style.color(0))),
            });
            ChartSpec {
                data: vec![trace],
                layout: compact_layout(style),
            }
        }
    }
}

fn compact_layout(style: &ChartStyle) -> Layout {
    let mut xaxis = style.x_axis(None);
    xaxis.showgrid = Some(false);
    let mut yaxis = style.y_axis();
    yaxis.showgrid = Some(false);
    Layout {
        height: style.height,
        margin: Some(style.margin.clone()),
        xaxis: Some(xaxis),
        yaxis: Some(yaxis),
        plot_bgcolor: Some("rgba(0,0,0,0)".to_string()),
        showlegend: Some(false),
        ..Default::default()
    }
}

/// Grouped bars: one trace per hue value over the x categories.
pub fn grouped_chart(x: Column, hue: Column, counts: &[GroupCount], style: &ChartStyle) -> ChartSpec {
    let mut hues: Vec<&str> = counts.iter().map(|g| g.hue.as_str()).collect();
    hues.sort_unstable();
    hues.dedup();

    let mut xs: Vec<&str> = counts.iter().map(|g| g.x.as_str()).collect();
    xs.dedup();

    let data = hues
        .iter()
        .enumerate()
        .map(|(i, hue_value)| {
            let group: Vec<&GroupCount> = counts.iter().filter(|g| g.hue == *hue_value).collect();
            let mut trace = Trace::new(TraceKind::Bar);
            trace.name = Some(hue_value.to_string());
            trace.x = Some(Values::Text(group.iter().map(|g| g.x.clone()).collect()));
            trace.y = Some(Values::Numbers(group.iter().map(|g| g.count as f64).collect()));
            trace.marker = Some(Marker {
                color: Some(MarkerColor::Single(style.color(i))),
            });
            trace
        })
        .collect();

    let style = style.clone().with_x_title(x.header());
    ChartSpec {
        data,
        layout: Layout {
            title: Some(Title::new(format!("Grouped Bar: {} by {}", x, hue))),
            height: style.height,
            margin: Some(style.margin.clone()),
            xaxis: Some(style.x_axis(Some(style.tick_angle(xs.len())))),
            yaxis: Some(style.y_axis()),
            barmode: Some("group".to_string()),
            ..Default::default()
        },
    }
}

/// Treatment status bars with the counts printed on each bar.
pub fn treatment_chart(counts: &[ValueCount], style: &ChartStyle) -> ChartSpec {
    let mut trace = Trace::new(TraceKind::Bar);
    trace.x = Some(Values::Text(counts.iter().map(|c| c.value.clone()).collect()));
    trace.y = Some(Values::Numbers(counts.iter().map(|c| c.count as f64).collect()));
    trace.text = Some(counts.iter().map(|c| c.count.to_string()).collect());
    trace.marker = Some(Marker {
        color: Some(MarkerColor::Single("#636EFA".to_string())),
    });

    ChartSpec {
        data: vec![trace],
        layout: Layout {
            title: Some(Title::new("Treatment Status")),
            height: style.height,
            margin: Some(style.margin.clone()),
            xaxis: Some(style.x_axis(None)),
            yaxis: Some(style.y_axis()),
            ..Default::default()
        },
    }
}

/// Horizontal bars of missing cells per column.
pub fn missing_chart(missing: &[(Column, usize)], style: &ChartStyle) -> ChartSpec {
    let mut trace = Trace::new(TraceKind::Bar);
    trace.orientation = Some("h".to_string());
    trace.x = Some(Values::Numbers(missing.iter().map(|(_, n)| *n as f64).collect()));
    trace.y = Some(Values::Text(
        missing.iter().map(|(c, _)| c.header().to_string()).collect(),
    ));
    trace.marker = Some(Marker {
        color: Some(MarkerColor::Single("#636EFA".to_string())),
    });

    let style = style
        .clone()
        .with_x_title("Missing count")
        .with_y_title(None);
    ChartSpec {
        data: vec![trace],
        layout: Layout {
            height: style.height,
            margin: Some(style.margin.clone()),
            xaxis: Some(style.x_axis(None)),
            yaxis: Some(style.y_axis()),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vc(value: &str, count: usize) -> ValueCount {
        ValueCount {
            value: value.to_string(),
            count,
        }
    }

    fn gc(x: &str, hue: &str, count: usize) -> GroupCount {
        GroupCount {
            x: x.to_string(),
            hue: hue.to_string(),
            count,
        }
    }

    #[test]
    fn distribution_chart_carries_counts_in_order() {
        let chart = distribution_chart(
            Column::Treatment,
            &[vc("Yes", 2), vc("No", 1)],
            &ChartStyle::default(),
        );
        let trace = &chart.data[0];
        assert_eq!(trace.x, Some(Values::Text(vec!["Yes".into(), "No".into()])));
        assert_eq!(trace.y, Some(Values::Numbers(vec![2.0, 1.0])));
        assert_eq!(chart.layout.title.as_ref().unwrap().text, "Distribution of treatment");
        assert_eq!(chart.layout.xaxis.as_ref().unwrap().tickangle, Some(0));
    }

    #[test]
    fn many_categories_rotate_labels() {
        let counts: Vec<ValueCount> = (0..9).map(|i| vc(&format!("c{}", i), 1)).collect();
        let chart = distribution_chart(Column::Country, &counts, &ChartStyle::default());
        assert_eq!(chart.layout.xaxis.unwrap().tickangle, Some(45));
    }

    #[test]
    fn empty_distribution_renders_empty_bar() {
        let chart = distribution_chart(Column::Gender, &[], &ChartStyle::default());
        assert_eq!(chart.point_count(), 0);
    }

    #[test]
    fn grouped_chart_has_one_trace_per_hue() {
        let counts = vec![
            gc("Female", "No", 1),
            gc("Female", "Yes", 2),
            gc("Male", "Yes", 2),
        ];
        let chart = grouped_chart(Column::Gender, Column::Treatment, &counts, &ChartStyle::default());
        assert_eq!(chart.data.len(), 2);
        assert_eq!(chart.data[0].name.as_deref(), Some("No"));
        assert_eq!(chart.data[1].x, Some(Values::Text(vec!["Female".into(), "Male".into()])));
        assert_eq!(chart.layout.barmode.as_deref(), Some("group"));
        assert_eq!(chart.point_count(), 3);
    }

    #[test]
    fn missing_chart_is_horizontal() {
        let chart = missing_chart(
            &[(Column::Country, 0), (Column::SelfEmployed, 5)],
            &ChartStyle::default(),
        );
        assert_eq!(chart.data[0].orientation.as_deref(), Some("h"));
        assert_eq!(chart.data[0].x, Some(Values::Numbers(vec![0.0, 5.0])));
    }
}

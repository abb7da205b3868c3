use crate::presentation::ChartStyle;
use common::model::chart::{ChartSpec, Geo, Layout, Legend, Title, Trace, TraceKind, ZValues};
use common::model::stats::ValueCount;

/// Donut chart of the gender breakdown.
pub fn gender_chart(counts: &[ValueCount], style: &ChartStyle) -> ChartSpec {
    let mut trace = Trace::new(TraceKind::Pie);
    trace.labels = Some(counts.iter().map(|c| c.value.clone()).collect());
    trace.values = Some(counts.iter().map(|c| c.count as f64).collect());
    trace.hole = Some(0.4);
    trace.textinfo = Some("percent+label".to_string());

    ChartSpec {
        data: vec![trace],
        layout: Layout {
            title: Some(Title::new("Gender Breakdown")),
            height: style.height,
            margin: Some(style.margin.clone()),
            legend: Some(Legend {
                orientation: Some("h".to_string()),
                yanchor: Some("bottom".to_string()),
                y: Some(-0.1),
            }),
            ..Default::default()
        },
    }
}

/// Responses per country on a world map; countries are matched by name.
pub fn world_chart(counts: &[ValueCount], style: &ChartStyle) -> ChartSpec {
    let mut trace = Trace::new(TraceKind::Choropleth);
    trace.locations = Some(counts.iter().map(|c| c.value.clone()).collect());
    trace.locationmode = Some("country names".to_string());
    trace.z = Some(ZValues::Vector(counts.iter().map(|c| c.count as f64).collect()));
    trace.colorscale = Some("Viridis".to_string());
    trace.name = Some("Responses".to_string());

    ChartSpec {
        data: vec![trace],
        layout: Layout {
            title: Some(Title::new("All Responses by Country")),
            height: style.height,
            margin: Some(style.margin.clone()),
            geo: Some(Geo {
                showframe: false,
                showcoastlines: true,
            }),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_chart_pairs_locations_with_counts() {
        let counts = vec![
            ValueCount { value: "United States".into(), count: 3 },
            ValueCount { value: "Poland".into(), count: 2 },
        ];
        let chart = world_chart(&counts, &ChartStyle::default());
        let trace = &chart.data[0];
        assert_eq!(trace.locations.as_ref().unwrap()[1], "Poland");
        assert_eq!(trace.z, Some(ZValues::Vector(vec![3.0, 2.0])));
        assert_eq!(trace.locationmode.as_deref(), Some("country names"));
    }

    #[test]
    fn gender_chart_is_a_donut() {
        let counts = vec![ValueCount { value: "Male".into(), count: 1 }];
        let chart = gender_chart(&counts, &ChartStyle::default());
        assert_eq!(chart.data[0].hole, Some(0.4));
        assert_eq!(chart.point_count(), 1);
    }
}

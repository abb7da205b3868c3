use crate::analytics::trend::TrendPoint;
use crate::presentation::ChartStyle;
use common::model::chart::{ChartSpec, Layout, Line, Title, Trace, TraceKind, Values};

const TREND_COLOR: &str = "#636EFA";

/// Line with markers over a filled area, one point per bucket.
pub fn trend_chart(points: &[TrendPoint], cumulative: bool, style: &ChartStyle) -> ChartSpec {
    let x = Values::Text(points.iter().map(|p| p.bucket.to_string()).collect());
    let y = Values::Numbers(points.iter().map(|p| p.count as f64).collect());

    let mut line = Trace::new(TraceKind::Scatter);
    line.name = Some("count".to_string());
    line.mode = Some("lines+markers".to_string());
    line.x = Some(x.clone());
    line.y = Some(y.clone());
    line.line = Some(Line {
        color: Some(TREND_COLOR.to_string()),
        width: Some(3.0),
    });

    let mut area = Trace::new(TraceKind::Scatter);
    area.name = Some("area".to_string());
    area.mode = Some("lines".to_string());
    area.fill = Some("tozeroy".to_string());
    area.x = Some(x);
    area.y = Some(y);
    area.line = Some(Line {
        color: Some(TREND_COLOR.to_string()),
        width: Some(0.0),
    });
    area.showlegend = Some(false);

    let title = if cumulative {
        "Cumulative Records Over Time"
    } else {
        "Records per Period Over Time"
    };

    ChartSpec {
        data: vec![line, area],
        layout: Layout {
            title: Some(Title::new(title)),
            height: style.height,
            margin: Some(style.margin.clone()),
            xaxis: Some(style.x_axis(Some(-45))),
            yaxis: Some(style.y_axis()),
            hovermode: Some("x unified".to_string()),
            showlegend: Some(false),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn title_reflects_mode() {
        let points = vec![TrendPoint {
            bucket: NaiveDate::from_ymd_opt(2014, 8, 31).unwrap(),
            count: 3,
        }];
        let plain = trend_chart(&points, false, &ChartStyle::default());
        let cumulative = trend_chart(&points, true, &ChartStyle::default());
        assert_eq!(plain.layout.title.unwrap().text, "Records per Period Over Time");
        assert_eq!(cumulative.layout.title.unwrap().text, "Cumulative Records Over Time");
        assert_eq!(plain.data[0].x, Some(Values::Text(vec!["2014-08-31".into()])));
        assert_eq!(plain.data[1].fill.as_deref(), Some("tozeroy"));
    }

    #[test]
    fn empty_trend_has_no_points() {
        let chart = trend_chart(&[], false, &ChartStyle::default());
        assert_eq!(chart.point_count(), 0);
    }
}

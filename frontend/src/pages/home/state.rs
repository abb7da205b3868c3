//! State of the home page: overview figures plus the controls and charts of
//! the trend and correlation regions.

use chrono::NaiveDate;
use common::model::chart::ChartSpec;
use common::model::overview::OverviewResponse;
use common::requests::{CorrelationRequest, TrendPeriod, TrendRequest};

pub struct HomePage {
    /// Static overview block, loaded once.
    pub overview: Option<OverviewResponse>,

    /// Trend range; defaults to the dataset bounds once the overview arrives.
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub period: TrendPeriod,
    pub cumulative: bool,
    pub trend_chart: Option<ChartSpec>,
    /// Incremented per trend request; stale answers are dropped.
    pub trend_seq: u32,

    /// |r| threshold from the slider, 0 to 1.
    pub threshold: f64,
    pub correlation_chart: Option<ChartSpec>,
    pub correlation_seq: u32,
}

impl HomePage {
    pub fn new() -> Self {
        Self {
            overview: None,
            start: None,
            end: None,
            period: TrendPeriod::default(),
            cumulative: false,
            trend_chart: None,
            trend_seq: 0,
            threshold: 0.0,
            correlation_chart: None,
            correlation_seq: 0,
        }
    }

    /// Current trend controls as a request, once both bounds are known.
    pub fn trend_request(&self) -> Option<TrendRequest> {
        Some(TrendRequest {
            start: self.start?,
            end: self.end?,
            period: self.period,
            cumulative: self.cumulative,
        })
    }

    pub fn correlation_request(&self) -> CorrelationRequest {
        CorrelationRequest {
            threshold: self.threshold,
        }
    }
}

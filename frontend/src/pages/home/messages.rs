use common::model::chart::ChartSpec;
use common::model::overview::OverviewResponse;
use common::requests::TrendPeriod;

pub enum Msg {
    OverviewLoaded(OverviewResponse),
    SetStart(String),
    SetEnd(String),
    SetPeriod(TrendPeriod),
    SetCumulative(bool),
    /// Answer to the trend request with the given sequence number.
    TrendLoaded(u32, ChartSpec),
    SetThreshold(f64),
    CorrelationLoaded(u32, ChartSpec),
    RequestFailed(&'static str, String),
}

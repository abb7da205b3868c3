//! Chart specification handed to the rendering collaborator.
//!
//! The field names follow the Plotly.js figure schema so the frontend can pass
//! a serialized `ChartSpec` straight to `Plotly.react` without translation.
//! Unset options are omitted from the JSON and left to Plotly's defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl ChartSpec {
    /// Total number of plotted points across all traces.
    pub fn point_count(&self) -> usize {
        self.data.iter().map(Trace::len).sum()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    #[default]
    Bar,
    Scatter,
    Heatmap,
    Pie,
    Choropleth,
}

/// Axis values: category labels or numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Values {
    Numbers(Vec<f64>),
    Text(Vec<String>),
}

impl Values {
    pub fn len(&self) -> usize {
        match self {
            Values::Numbers(v) => v.len(),
            Values::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `z` is a matrix for heatmaps (null cells are not drawn) and a vector for choropleths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ZValues {
    Matrix(Vec<Vec<Option<f64>>>),
    Vector(Vec<f64>),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: TraceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<Values>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<Values>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<ZValues>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locationmode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hole: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub textinfo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texttemplate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zmin: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zmax: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
}

impl Trace {
    pub fn new(kind: TraceKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// Number of data points carried by the trace.
    pub fn len(&self) -> usize {
        if let Some(x) = &self.x {
            return x.len();
        }
        if let Some(labels) = &self.labels {
            return labels.len();
        }
        if let Some(locations) = &self.locations {
            return locations.len();
        }
        match &self.z {
            Some(ZValues::Matrix(rows)) => rows.iter().map(Vec::len).sum(),
            Some(ZValues::Vector(v)) => v.len(),
            None => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// A single CSS color, or one color per point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<MarkerColor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarkerColor {
    Single(String),
    PerPoint(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Line {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tickangle: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showgrid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gridcolor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autorange: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yanchor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    pub showframe: bool,
    pub showcoastlines: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barmode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
}

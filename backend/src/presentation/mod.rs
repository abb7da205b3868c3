//! Presentation adapter: aggregation results in, [`ChartSpec`]s out.
//!
//! Purely structural. No function here filters or counts; each one lays out
//! already-computed numbers together with the styling in [`ChartStyle`].
//!
//! [`ChartSpec`]: common::model::chart::ChartSpec

pub mod categorical;
pub mod matrix;
pub mod overview;
pub mod temporal;

use common::model::chart::{Axis, Margin, Title};

/// Plotly's qualitative "Pastel" palette.
pub const PASTEL: [&str; 11] = [
    "rgb(102, 197, 204)",
    "rgb(246, 207, 113)",
    "rgb(248, 156, 116)",
    "rgb(220, 176, 242)",
    "rgb(135, 197, 95)",
    "rgb(158, 185, 243)",
    "rgb(254, 136, 177)",
    "rgb(201, 219, 116)",
    "rgb(139, 224, 164)",
    "rgb(180, 151, 231)",
    "rgb(179, 179, 179)",
];

const GRID_COLOR: &str = "lightgrey";

/// Styling knobs shared by the chart builders.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub height: Option<u32>,
    pub palette: &'static [&'static str],
    pub x_title: Option<String>,
    pub y_title: Option<String>,
    /// Category labels are rotated once a chart has more categories than this.
    pub rotate_after: usize,
    pub rotation: i32,
    pub margin: Margin,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            height: None,
            palette: &PASTEL,
            x_title: None,
            y_title: Some("Count".to_string()),
            rotate_after: 8,
            rotation: 45,
            margin: Margin {
                l: 40,
                r: 20,
                t: 60,
                b: 50,
            },
        }
    }
}

impl ChartStyle {
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_margin(mut self, l: u32, r: u32, t: u32, b: u32) -> Self {
        self.margin = Margin { l, r, t, b };
        self
    }

    pub fn with_x_title(mut self, title: impl Into<String>) -> Self {
        self.x_title = Some(title.into());
        self
    }

    pub fn with_y_title(mut self, title: Option<String>) -> Self {
        self.y_title = title;
        self
    }

    pub fn color(&self, i: usize) -> String {
        self.palette[i % self.palette.len()].to_string()
    }

    pub fn tick_angle(&self, categories: usize) -> i32 {
        if categories > self.rotate_after {
            self.rotation
        } else {
            0
        }
    }

    fn x_axis(&self, tickangle: Option<i32>) -> Axis {
        grid_axis(self.x_title.clone(), tickangle)
    }

    fn y_axis(&self) -> Axis {
        grid_axis(self.y_title.clone(), None)
    }
}

fn grid_axis(title: Option<String>, tickangle: Option<i32>) -> Axis {
    Axis {
        title: title.map(Title::new),
        tickangle,
        showgrid: Some(true),
        gridcolor: Some(GRID_COLOR.to_string()),
        autorange: None,
    }
}

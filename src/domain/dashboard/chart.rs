//! Chart builder: population distributions split by loan outcome.
//!
//! The produced [`ChartSpec`] serialises to a Plotly figure (`data` +
//! `layout`) that the browser renders as-is.

use serde::Serialize;
use thiserror::Error;

use crate::domain::feature::{
    CategoricalComparison, Comparison, FeatureValue, NumericalComparison, OutcomeClass,
    PopulationSample, ValueType,
};
use crate::domain::foundation::DataIntegrityError;

/// Opacity applied to every trace so overlapping bars stay visible.
pub const TRACE_OPACITY: f64 = 0.4;

/// Legend title shared by both chart kinds.
pub const LEGEND_TITLE: &str = "Solvent";

/// Annotation text of the user marker line.
pub const USER_MARKER_TEXT: &str = "user";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("Data integrity error: {0}")]
    DataIntegrity(#[from] DataIntegrityError),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Histogram,
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Axis {
    Numbers(Vec<f64>),
    Categories(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: TraceKind,
    pub name: String,
    pub x: Axis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bingroup: Option<String>,
    pub marker: Marker,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLayout {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarMode {
    Overlay,
    Group,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    pub barmode: BarMode,
    pub autosize: bool,
    pub legend: Legend,
    pub xaxis: AxisLayout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<AxisLayout>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shapes: Vec<Shape>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

/// Vertical line spanning the plot at `x0 == x1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: String,
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
    pub xref: String,
    pub yref: String,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub color: String,
    pub width: u32,
    pub dash: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub xref: String,
    pub yref: String,
    pub text: String,
    pub showarrow: bool,
    pub yanchor: String,
}

impl ChartSpec {
    /// Position of the user marker line, if any.
    pub fn user_marker(&self) -> Option<f64> {
        self.layout
            .annotations
            .iter()
            .find(|a| a.text == USER_MARKER_TEXT)
            .map(|a| a.x)
    }

    pub fn user_marker_count(&self) -> usize {
        self.layout
            .annotations
            .iter()
            .filter(|a| a.text == USER_MARKER_TEXT)
            .count()
    }
}

/// Builds the distribution chart for one feature.
///
/// `feature_name` is the label shown to the analyst.
pub fn build_chart(
    value_type: ValueType,
    sample: &PopulationSample,
    user_value: &FeatureValue,
    feature_name: &str,
) -> Result<ChartSpec, ChartError> {
    let comparison = Comparison::prepare(value_type, user_value, sample)?;
    Ok(chart_for(&comparison, feature_name))
}

/// Chart for an already classified comparison.
pub fn chart_for(comparison: &Comparison, feature_name: &str) -> ChartSpec {
    match comparison {
        Comparison::Numerical(n) => numerical_chart(n, feature_name),
        Comparison::Categorical(c) => categorical_chart(c, feature_name),
    }
}

fn numerical_chart(comparison: &NumericalComparison, feature_name: &str) -> ChartSpec {
    let data = OutcomeClass::ALL
        .iter()
        .map(|class| Trace {
            kind: TraceKind::Histogram,
            name: class.legend().to_string(),
            x: Axis::Numbers(comparison.class(*class).to_vec()),
            y: None,
            bingroup: Some("population".to_string()),
            marker: Marker {
                color: class.color().to_string(),
            },
            opacity: TRACE_OPACITY,
        })
        .collect();

    let (shapes, annotations) = match comparison.user {
        Some(x) => (vec![marker_line(x)], vec![marker_annotation(x)]),
        None => (Vec::new(), Vec::new()),
    };

    ChartSpec {
        data,
        layout: Layout {
            title: Some(Title::new(format!("Distribution of {}", feature_name.to_lowercase()))),
            barmode: BarMode::Overlay,
            autosize: false,
            legend: Legend {
                title: Title::new(LEGEND_TITLE),
            },
            xaxis: AxisLayout {
                title: Title::new(feature_name),
            },
            yaxis: None,
            shapes,
            annotations,
        },
    }
}

fn categorical_chart(comparison: &CategoricalComparison, feature_name: &str) -> ChartSpec {
    let mut categories: Vec<&str> = Vec::new();
    for value in comparison.pooled() {
        if !categories.contains(&value.as_str()) {
            categories.push(value);
        }
    }

    let data = OutcomeClass::ALL
        .iter()
        .map(|class| {
            let values = comparison.class(*class);
            let counts = categories
                .iter()
                .map(|category| values.iter().filter(|v| v == category).count() as u64)
                .collect();
            Trace {
                kind: TraceKind::Bar,
                name: class.legend().to_string(),
                x: Axis::Categories(categories.iter().map(|c| c.to_string()).collect()),
                y: Some(counts),
                bingroup: None,
                marker: Marker {
                    color: class.color().to_string(),
                },
                opacity: TRACE_OPACITY,
            }
        })
        .collect();

    ChartSpec {
        data,
        layout: Layout {
            title: None,
            barmode: BarMode::Group,
            autosize: true,
            legend: Legend {
                title: Title::new(LEGEND_TITLE),
            },
            xaxis: AxisLayout {
                title: Title::new(feature_name),
            },
            // Count axis left unlabeled: bar heights already compare the groups.
            yaxis: Some(AxisLayout {
                title: Title::new(""),
            }),
            shapes: Vec::new(),
            annotations: Vec::new(),
        },
    }
}

fn marker_line(x: f64) -> Shape {
    Shape {
        kind: "line".to_string(),
        x0: x,
        x1: x,
        y0: 0.0,
        y1: 1.0,
        xref: "x".to_string(),
        yref: "paper".to_string(),
        line: Line {
            color: "white".to_string(),
            width: 3,
            dash: "dash".to_string(),
        },
    }
}

fn marker_annotation(x: f64) -> Annotation {
    Annotation {
        x,
        y: 1.0,
        xref: "x".to_string(),
        yref: "paper".to_string(),
        text: USER_MARKER_TEXT.to_string(),
        showarrow: false,
        yanchor: "bottom".to_string(),
    }
}

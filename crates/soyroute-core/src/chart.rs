//! Cost comparison chart configuration
//!
//! The chart is configured the way a browser charting library would be: one
//! options object at construction time and partial option patches for live
//! reconfiguration. Rendering backends read the merged [`ChartOptions`].

use serde::{Deserialize, Serialize};

/// Name of the only data series
pub const COST_SERIES_NAME: &str = "Custo por Tonelada (R$)";

/// Cost per ton for each scenario, in severity order
pub const COST_VALUES: [u64; 4] = [180, 350, 580, 770];

/// Category labels, one per severity tier
pub const COST_CATEGORIES: [&str; 4] = [
    "1. Melhor Cenário",
    "2. Contingência (1 Falha)",
    "3. Crítico (2 Falhas)",
    "4. Pior Cenário (Colapso)",
];

/// Per-tier colors, green → yellow → orange → red
pub const SEVERITY_COLORS: [&str; 4] = ["#27AE60", "#F1C40F", "#E67E22", "#C0392B"];

/// Prefix of every formatted value
pub const CURRENCY_PREFIX: &str = "R$ ";

/// Unit appended to tooltip values
pub const UNIT_SUFFIX: &str = "/ton";

/// Chart presentation type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Bar,
    Radar,
}

impl ChartType {
    /// Value as carried by the type selector control
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Radar => "radar",
        }
    }

    /// Parse a selector value; unknown values yield `None`
    pub fn from_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "bar" => Some(ChartType::Bar),
            "radar" => Some(ChartType::Radar),
            _ => None,
        }
    }

    /// The other presentation type
    pub fn toggled(&self) -> Self {
        match self {
            ChartType::Bar => ChartType::Radar,
            ChartType::Radar => ChartType::Bar,
        }
    }

    /// Human label for the selector
    pub fn label(&self) -> &'static str {
        match self {
            ChartType::Bar => "Barras",
            ChartType::Radar => "Radar",
        }
    }
}

impl std::fmt::Display for ChartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named data series
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Series {
    pub name: String,
    pub data: Vec<u64>,
}

/// Fixed prefix/suffix formatter applied to raw values
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct ValueFormat {
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
}

impl ValueFormat {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    pub fn format(&self, value: u64) -> String {
        format!("{}{}{}", self.prefix, value, self.suffix)
    }
}

/// Full chart configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChartOptions {
    #[serde(rename = "type")]
    pub kind: ChartType,
    pub series: Vec<Series>,
    pub categories: Vec<String>,
    pub colors: Vec<String>,
    /// One color per category item instead of one per series
    pub distributed: bool,
    pub show_category_labels: bool,
    pub data_labels: ValueFormat,
    pub tooltip: ValueFormat,
}

impl ChartOptions {
    /// The hardcoded scenario cost comparison
    pub fn cost_comparison() -> Self {
        Self {
            kind: ChartType::Bar,
            series: vec![Series {
                name: COST_SERIES_NAME.to_string(),
                data: COST_VALUES.to_vec(),
            }],
            categories: COST_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            colors: SEVERITY_COLORS.iter().map(|c| c.to_string()).collect(),
            distributed: true,
            show_category_labels: true,
            data_labels: ValueFormat::new(CURRENCY_PREFIX, ""),
            tooltip: ValueFormat::new(CURRENCY_PREFIX, UNIT_SUFFIX),
        }
    }

    /// Color of the item at `index`.
    ///
    /// With distributed coloring every item gets its own color (cycling);
    /// otherwise the whole series uses the first color.
    pub fn color_for(&self, index: usize) -> Option<&str> {
        if self.colors.is_empty() {
            return None;
        }
        let idx = if self.distributed {
            index % self.colors.len()
        } else {
            0
        };
        self.colors.get(idx).map(String::as_str)
    }

    /// Merge a partial update into these options
    pub fn apply(&mut self, patch: &ChartOptionsPatch) {
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(distributed) = patch.distributed {
            self.distributed = distributed;
        }
        if let Some(show) = patch.show_category_labels {
            self.show_category_labels = show;
        }
    }

    /// Largest value across all series
    pub fn max_value(&self) -> u64 {
        self.series
            .iter()
            .flat_map(|s| s.data.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

/// Partial options update; `None` fields are left untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct ChartOptionsPatch {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ChartType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distributed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_category_labels: Option<bool>,
}

impl ChartOptionsPatch {
    /// Reconfiguration for a presentation type change: distributed coloring
    /// only for bars, category labels always visible.
    pub fn for_type(kind: ChartType) -> Self {
        Self {
            kind: Some(kind),
            distributed: Some(kind == ChartType::Bar),
            show_category_labels: Some(true),
        }
    }
}

/// Parse a `#RRGGBB` color into its components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

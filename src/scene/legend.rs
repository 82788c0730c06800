use serde::Serialize;

use crate::domain::SentimentLabel;

/// Shape drawn for a legend entry or marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendSymbol {
    Circle,
    Star,
    Cross,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub symbol: LegendSymbol,
    pub color: &'static str,
}

/// The fixed colour legend shown under every tree
pub fn legend() -> Vec<LegendEntry> {
    let leaf = |label: SentimentLabel, text: &'static str| LegendEntry {
        label: text,
        symbol: LegendSymbol::Circle,
        color: label.color(),
    };

    vec![
        leaf(SentimentLabel::Positive, "Positive Review"),
        leaf(SentimentLabel::Neutral, "Neutral Review"),
        leaf(SentimentLabel::Negative, "Negative Review"),
        LegendEntry {
            label: "Blossom (High Praise)",
            symbol: LegendSymbol::Star,
            color: "pink",
        },
        LegendEntry {
            label: "Wilted (High Criticism)",
            symbol: LegendSymbol::Cross,
            color: "brown",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legend_colors() {
        let entries = legend();
        let colors: Vec<&str> = entries.iter().map(|e| e.color).collect();
        assert_eq!(colors, vec!["green", "orange", "red", "pink", "brown"]);
        assert_eq!(entries[3].symbol, LegendSymbol::Star);
        assert_eq!(entries[4].symbol, LegendSymbol::Cross);
    }
}

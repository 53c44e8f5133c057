// src/core/figure.rs — Choropleth figure description
//
// The shape follows the Plotly figure JSON schema so the page can hand it to
// `Plotly.react` unchanged. Only the fields the dashboard uses are modelled.

use serde::{Deserialize, Serialize};

use crate::data::tally::WinTally;

pub const MAP_TITLE: &str = "Countries that have won the World Cup";

/// Qualitative palette, cycled when there are more winners than colours.
pub const PALETTE: &[&str] = &[
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<ChoroplethTrace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoroplethTrace {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub legendgroup: String,
    pub locations: Vec<String>,
    pub locationmode: String,
    pub z: Vec<u32>,
    pub colorscale: Vec<(f32, String)>,
    pub showscale: bool,
    pub showlegend: bool,
    pub customdata: Vec<usize>,
    pub hovertemplate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: Title,
    pub geo: Geo,
    pub legend: Legend,
    pub margin: Margin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    pub projection: Projection,
    pub showframe: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub title: Title,
    pub tracegrouporder: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub t: u32,
    pub r: u32,
    pub b: u32,
    pub l: u32,
}

pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// One trace per winner, each painted with its own flat colour so the legend
/// reads as a category key. Hover shows the tally.
pub fn build_choropleth(winners: &[String], tally: &WinTally) -> Figure {
    let data = winners
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let color = color_for(i).to_string();
            ChoroplethTrace {
                kind: "choropleth".into(),
                name: name.clone(),
                legendgroup: name.clone(),
                locations: vec![name.clone()],
                locationmode: "country names".into(),
                z: vec![1],
                colorscale: vec![(0.0, color.clone()), (1.0, color)],
                showscale: false,
                showlegend: true,
                customdata: vec![tally.wins(name)],
                hovertemplate: "<b>%{location}</b><br>Wins: %{customdata}<extra></extra>".into(),
            }
        })
        .collect();

    Figure {
        data,
        layout: Layout {
            title: Title {
                text: MAP_TITLE.into(),
            },
            geo: Geo {
                projection: Projection {
                    kind: "natural earth".into(),
                },
                showframe: false,
            },
            legend: Legend {
                title: Title {
                    text: "Winners".into(),
                },
                tracegrouporder: "normal".into(),
            },
            margin: Margin {
                t: 60,
                r: 0,
                b: 0,
                l: 0,
            },
        },
    }
}

// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON input for the demo: a finished bar layout plus a pointer script.

use std::rc::Rc;

use anyhow::{Context, Result, anyhow};
use peniko::Color;
use peniko::color::{Srgb, parse_color};
use serde::Deserialize;
use vizir_bar::{
    BarDatum, BarGeometry, BarItemProps, TextStyle, Theme, TooltipCoordinators, ValueFormat,
};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Chart {
    #[serde(default)]
    pub(crate) label_font_size: Option<f64>,
    #[serde(default)]
    pub(crate) show_labels: Option<bool>,
    #[serde(default)]
    pub(crate) tooltip_format: Option<FormatInput>,
    pub(crate) bars: Vec<Bar>,
    #[serde(default)]
    pub(crate) pointer: Vec<PointerStep>,
}

/// Either a number of decimal places or a specifier like `$,.2f`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum FormatInput {
    Precision(u8),
    Specifier(String),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Bar {
    pub(crate) id: String,
    pub(crate) value: f64,
    pub(crate) index_value: String,
    pub(crate) color: String,
    #[serde(default)]
    pub(crate) fill: Option<String>,
    #[serde(default)]
    pub(crate) border_color: Option<String>,
    #[serde(default)]
    pub(crate) label: Option<String>,
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) width: f64,
    pub(crate) height: f64,
    #[serde(default)]
    pub(crate) border_radius: f64,
    #[serde(default)]
    pub(crate) border_width: f64,
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum PointerStep {
    Move { x: f64, y: f64 },
    Click { x: f64, y: f64 },
    Leave,
}

pub(crate) fn parse(json: &str) -> Result<Chart> {
    serde_json::from_str(json).context("malformed chart json")
}

pub(crate) fn color(s: &str) -> Result<Color> {
    let parsed = parse_color(s).map_err(|e| anyhow!("invalid color {s:?}: {e}"))?;
    Ok(parsed.to_alpha_color::<Srgb>())
}

impl Chart {
    pub(crate) fn theme(&self) -> Theme {
        let theme = Theme::default();
        match self.label_font_size {
            Some(size) => theme.with_label_text(TextStyle::new(size)),
            None => theme,
        }
    }

    pub(crate) fn value_format(&self) -> Result<Option<ValueFormat>> {
        self.tooltip_format
            .as_ref()
            .map(|f| match f {
                FormatInput::Precision(p) => Ok(ValueFormat::Precision(*p)),
                FormatInput::Specifier(s) => s
                    .parse()
                    .with_context(|| format!("invalid tooltip format {s:?}")),
            })
            .transpose()
    }
}

impl Bar {
    pub(crate) fn into_props(
        self,
        theme: &Rc<Theme>,
        tooltip_format: Option<ValueFormat>,
        show_labels: bool,
        coordinators: &TooltipCoordinators,
    ) -> Result<BarItemProps> {
        let mut datum = BarDatum::new(self.id.as_str(), self.value, self.index_value.as_str());
        if let Some(fill) = &self.fill {
            datum = datum.with_fill(color(fill)?);
        }

        let geometry = BarGeometry::new(self.x, self.y, self.width, self.height)
            .with_border_radius(self.border_radius)
            .with_border_width(self.border_width);
        let mut props = BarItemProps::new(
            Rc::new(datum),
            geometry,
            color(&self.color).with_context(|| format!("bar {:?}", self.id))?,
            theme.clone(),
            coordinators.clone(),
        )
        .with_tooltip_format(tooltip_format);

        props.validate().with_context(|| format!("bar {:?}", self.id))?;

        if let Some(border) = &self.border_color {
            props = props.with_border_color(color(border)?);
        }
        let label = self.label.unwrap_or_else(|| props.label.clone());
        Ok(props.with_label(label, show_labels))
    }
}

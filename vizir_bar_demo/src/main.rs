// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar item demo.
//!
//! Loads a laid-out bar chart from JSON, replays its pointer script against a [`BarLayer`]
//! while logging hover, click and tooltip activity, then writes the final scene as SVG.
//!
//! ```text
//! RUST_LOG=debug cargo run -p vizir_bar_demo -- --input vizir_bar_demo/data/bars.json
//! ```

mod input;

use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vizir_bar::{
    BarLayer, ClickCallback, HoverCallback, PointerEvent, TooltipCoordinator, TooltipLabelFn,
    to_svg_string,
};

use crate::input::PointerStep;

#[derive(Debug, Parser)]
#[command(name = "vizir_bar_demo", version, about = "Replay pointer input over bar items")]
struct Args {
    /// Chart description (bars plus an optional pointer script).
    #[arg(long, default_value = "vizir_bar_demo/data/bars.json")]
    input: PathBuf,

    /// Where to write the rendered SVG. Printed to stdout when omitted.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Skip the pointer script.
    #[arg(long)]
    no_pointer: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let json = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let chart = input::parse(&json)?;

    let tooltips = TooltipCoordinator::new();
    let coordinators =
        tooltips.coordinators(TooltipLabelFn::new(|d| format!("{}: {}", d.index_value, d.id)));
    let on_click = ClickCallback::new(|merged, event| {
        tracing::info!(
            id = %merged.datum.id,
            value = merged.datum.value,
            x = event.position.x,
            y = event.position.y,
            "bar clicked"
        );
    });
    let on_enter = HoverCallback::new(|datum, _| tracing::info!(id = %datum.id, "hover start"));
    let on_leave = HoverCallback::new(|datum, _| tracing::info!(id = %datum.id, "hover end"));

    let theme = Rc::new(chart.theme());
    let tooltip_format = chart.value_format()?;
    let show_labels = chart.show_labels.unwrap_or(true);
    let mut props = Vec::with_capacity(chart.bars.len());
    for bar in chart.bars {
        props.push(
            bar.into_props(&theme, tooltip_format, show_labels, &coordinators)?
                .with_on_click(on_click.clone())
                .with_on_mouse_enter(on_enter.clone())
                .with_on_mouse_leave(on_leave.clone()),
        );
    }

    let mut layer = BarLayer::new();
    layer.update(props);
    tracing::info!(bars = layer.items().len(), "layer built");

    if !args.no_pointer {
        for step in chart.pointer {
            match step {
                PointerStep::Move { x, y } => layer.pointer_move(&PointerEvent::at((x, y))),
                PointerStep::Click { x, y } => layer.click(&PointerEvent::at((x, y))),
                PointerStep::Leave => layer.pointer_leave(&PointerEvent::at((-1.0, -1.0))),
            }
            match tooltips.content() {
                Some(content) => tracing::info!(tooltip = %content, "tooltip shown"),
                None => tracing::debug!("no tooltip"),
            }
        }
        tracing::info!(
            shows = tooltips.show_calls(),
            hides = tooltips.hide_calls(),
            "pointer script done"
        );
    }

    let svg = to_svg_string(&layer.nodes(), None);
    match &args.output {
        Some(path) => {
            fs::write(path, svg).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote svg");
        }
        None => print!("{svg}"),
    }
    Ok(())
}

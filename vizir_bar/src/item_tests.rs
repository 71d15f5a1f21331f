// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::cell::RefCell;

use kurbo::{Point, Rect, Size};
use peniko::color::palette::css;
use peniko::{Brush, Color};

use crate::{
    AttrValue, BarDatum, BarGeometry, BarItem, BarItemCache, BarItemProps, BarLayer,
    ClickCallback, ClickHandler, HideTooltip, HoverCallback, PointerEvent, ShowTooltip, Theme,
    TooltipContent, TooltipCoordinator, TooltipCoordinators, TooltipLabelFn, ValueFormat,
    to_svg_string,
};

type Log = Rc<RefCell<Vec<String>>>;

fn red() -> Color {
    Color::from_rgba8(0xff, 0x00, 0x00, 0xff)
}

fn green() -> Color {
    Color::from_rgba8(0x00, 0xff, 0x00, 0xff)
}

fn label_fn() -> TooltipLabelFn {
    TooltipLabelFn::new(|d| format!("{} - {}", d.id, d.index_value))
}

/// Coordinators that append `show:<id>` / `hide` to `log`.
fn logging_coordinators(log: &Log) -> TooltipCoordinators {
    let show_log = log.clone();
    let hide_log = log.clone();
    TooltipCoordinators {
        show: ShowTooltip::new(move |desc, _| {
            show_log.borrow_mut().push(format!("show:{}", desc.id));
        }),
        hide: HideTooltip::new(move |_| hide_log.borrow_mut().push("hide".to_string())),
        get_label: label_fn(),
    }
}

fn scenario_props(datum: BarDatum, coordinators: TooltipCoordinators) -> BarItemProps {
    BarItemProps::new(
        Rc::new(datum),
        BarGeometry::new(0.0, 0.0, 20.0, 40.0),
        red(),
        Rc::new(Theme::default()),
        coordinators,
    )
    .with_label("10", true)
}

fn quiet_coordinators() -> TooltipCoordinators {
    TooltipCoordinator::new().coordinators(label_fn())
}

#[test]
fn scenario_bar_with_centered_label() {
    let props = scenario_props(BarDatum::new("a", 10.0, "x"), quiet_coordinators());
    let item = BarItem::new(props, &mut BarItemCache::new());
    let node = item.node();

    assert_eq!(node.origin(), Point::new(0.0, 0.0));
    assert_eq!(node.size, Size::new(20.0, 40.0));
    assert_eq!(node.fill, Brush::Solid(red()));

    let label = node.label.as_ref().expect("label should be rendered");
    assert_eq!(label.text, "10");
    assert_eq!(label.pos, Point::new(10.0, 20.0));
    assert_eq!(label.style, Theme::default().labels.text);
}

#[test]
fn datum_fill_overrides_color() {
    let datum = BarDatum::new("a", 10.0, "x").with_fill(green());
    let props = scenario_props(datum, quiet_coordinators());
    let node = BarItem::new(props, &mut BarItemCache::new()).node();
    assert_eq!(node.fill, Brush::Solid(green()));
}

#[test]
fn hidden_label_produces_no_label_node() {
    let props = scenario_props(BarDatum::new("a", 10.0, "x"), quiet_coordinators())
        .with_label("10", false);
    let node = BarItem::new(props, &mut BarItemCache::new()).node();
    assert!(node.label.is_none(), "no label node when labels are off");
    assert_eq!(node.label_anchor(), None);
}

#[test]
fn geometry_maps_without_transformation() {
    let mut props = scenario_props(BarDatum::new("a", 1.0, "x"), quiet_coordinators());
    props.geometry = BarGeometry::new(12.5, 7.25, 3.5, 0.75)
        .with_border_radius(1.0)
        .with_border_width(2.0);
    props.border_color = css::NAVY;
    let node = BarItem::new(props, &mut BarItemCache::new()).node();

    assert_eq!(node.origin(), Point::new(12.5, 7.25));
    assert_eq!(node.size, Size::new(3.5, 0.75));
    assert_eq!(node.bounds(), Rect::new(12.5, 7.25, 16.0, 8.0));
    assert_eq!(node.corner_radius, 1.0);
    assert_eq!(node.stroke, Brush::Solid(css::NAVY));
    assert_eq!(node.stroke_width, 2.0);
    assert_eq!(node.label_anchor(), Some(Point::new(14.25, 7.625)));
}

#[test]
fn click_merges_datum_with_item_color() {
    let seen: Rc<RefCell<Vec<(Option<AttrValue>, Option<AttrValue>, Point)>>> =
        Rc::default();
    let sink = seen.clone();
    let on_click = ClickCallback::new(move |merged, event| {
        sink.borrow_mut()
            .push((merged.get("color"), merged.get("id"), event.position));
    });

    let datum = BarDatum::new("a", 10.0, "x").with_attribute("color", css::BLUE);
    let props = scenario_props(datum, quiet_coordinators()).with_on_click(on_click);
    let item = BarItem::new(props, &mut BarItemCache::new());
    item.click(&PointerEvent::at((3.0, 4.0)));

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, Some(AttrValue::Color(red())), "item color wins");
    assert_eq!(seen[0].1, Some(AttrValue::from("a")));
    assert_eq!(seen[0].2, Point::new(3.0, 4.0));
}

#[test]
fn click_without_callback_is_a_noop() {
    let props = scenario_props(BarDatum::new("a", 10.0, "x"), quiet_coordinators());
    let item = BarItem::new(props, &mut BarItemCache::new());
    assert!(item.click_handler().is_none());
    item.click(&PointerEvent::at((1.0, 1.0)));
}

#[test]
fn click_handler_is_reused_until_a_dependency_changes() {
    let base = scenario_props(BarDatum::new("a", 10.0, "x"), quiet_coordinators())
        .with_on_click(ClickCallback::new(|_, _| {}));
    let mut cache = BarItemCache::new();

    let first = BarItem::new(base.clone(), &mut cache);
    let first_handler = first.click_handler().cloned().expect("handler installed");

    // Geometry and label changes are not deps.
    let mut moved = base.clone();
    moved.geometry = BarGeometry::new(5.0, 5.0, 1.0, 1.0);
    moved.label = "changed".into();
    let second = BarItem::new(moved, &mut cache);
    let second_handler = second.click_handler().cloned().expect("handler installed");
    assert!(
        ClickHandler::ptr_eq(&first_handler, &second_handler),
        "handler should be reused"
    );
    assert_eq!(cache.click_computations(), 1);

    // An equal datum behind a fresh allocation is still equal.
    let same_value = BarItemProps {
        datum: Rc::new(BarDatum::new("a", 10.0, "x")),
        ..base.clone()
    };
    let _ = BarItem::new(same_value, &mut cache);
    assert_eq!(cache.click_computations(), 1);

    let recolored = BarItemProps {
        color: css::PURPLE,
        ..base.clone()
    };
    let third = BarItem::new(recolored, &mut cache);
    assert!(!ClickHandler::ptr_eq(
        &first_handler,
        third.click_handler().expect("handler installed")
    ));
    assert_eq!(cache.click_computations(), 2);

    let new_callback = base.clone().with_on_click(ClickCallback::new(|_, _| {}));
    let _ = BarItem::new(new_callback, &mut cache);
    assert_eq!(cache.click_computations(), 3);

    let new_datum = BarItemProps {
        datum: Rc::new(BarDatum::new("a", 11.0, "x")),
        ..base
    };
    let _ = BarItem::new(new_datum, &mut cache);
    assert_eq!(cache.click_computations(), 4);
}

#[test]
fn tooltip_is_rebuilt_only_for_its_dependencies() {
    let base = scenario_props(BarDatum::new("a", 10.0, "x"), quiet_coordinators());
    let mut cache = BarItemCache::new();

    let first = BarItem::new(base.clone(), &mut cache);
    assert_eq!(first.tooltip().id, "a - x");
    assert_eq!(first.tooltip().value, 10.0);

    let mut moved = base.clone();
    moved.geometry.height = 80.0;
    moved.should_render_label = false;
    let second = BarItem::new(moved, &mut cache);
    assert!(Rc::ptr_eq(first.tooltip(), second.tooltip()));
    assert_eq!(cache.tooltip_computations(), 1);

    let formatted = base.clone().with_tooltip_format(ValueFormat::Precision(2));
    let third = BarItem::new(formatted, &mut cache);
    assert_eq!(cache.tooltip_computations(), 2);
    assert_eq!(third.tooltip().formatted_value(), "10.00");

    let mut themed = base.clone();
    themed.theme = Rc::new(Theme::default().with_label_text(crate::TextStyle::new(20.0)));
    let _ = BarItem::new(themed, &mut cache);
    assert_eq!(cache.tooltip_computations(), 3);

    let relabeled = BarItemProps {
        coordinators: TooltipCoordinators {
            get_label: TooltipLabelFn::new(|d| d.index_value.to_string()),
            ..base.coordinators.clone()
        },
        ..base
    };
    let fourth = BarItem::new(relabeled, &mut cache);
    assert_eq!(cache.tooltip_computations(), 4);
    assert_eq!(fourth.tooltip().id, "x");
}

#[test]
fn hover_callbacks_fire_before_tooltip_coordinators() {
    let log: Log = Rc::default();
    let enter_log = log.clone();
    let leave_log = log.clone();
    let props = scenario_props(BarDatum::new("a", 10.0, "x"), logging_coordinators(&log))
        .with_on_mouse_enter(HoverCallback::new(move |d, _| {
            enter_log.borrow_mut().push(format!("enter:{}", d.id));
        }))
        .with_on_mouse_leave(HoverCallback::new(move |d, _| {
            leave_log.borrow_mut().push(format!("leave:{}", d.id));
        }));
    let item = BarItem::new(props, &mut BarItemCache::new());

    let e = PointerEvent::at((5.0, 5.0));
    item.pointer_enter(&e);
    item.pointer_move(&e);
    item.pointer_leave(&e);

    assert_eq!(
        *log.borrow(),
        vec!["enter:a", "show:a - x", "show:a - x", "leave:a", "hide"]
    );
}

#[test]
fn missing_hover_callbacks_still_drive_the_tooltip() {
    let tooltips = TooltipCoordinator::new();
    let props = scenario_props(
        BarDatum::new("a", 10.0, "x"),
        tooltips.coordinators(label_fn()),
    );
    let item = BarItem::new(props, &mut BarItemCache::new());

    item.pointer_enter(&PointerEvent::at((1.0, 2.0)));
    assert!(tooltips.is_visible());
    let shown = tooltips.current().expect("tooltip shown");
    assert!(Rc::ptr_eq(&shown.descriptor, item.tooltip()));
    assert_eq!(
        tooltips.content().map(|c| c.to_string()),
        Some("[#] a - x: 10".to_string())
    );

    item.pointer_move(&PointerEvent::at((3.0, 4.0)));
    assert_eq!(
        tooltips.current().map(|s| s.event.position),
        Some(Point::new(3.0, 4.0))
    );

    item.pointer_leave(&PointerEvent::at((30.0, 4.0)));
    assert!(!tooltips.is_visible());
    assert_eq!(tooltips.show_calls(), 2);
    assert_eq!(tooltips.hide_calls(), 1);
}

#[test]
fn custom_tooltip_content_reaches_the_coordinator() {
    let tooltips = TooltipCoordinator::new();
    let renderer = crate::TooltipRenderer::new(|ctx, _| {
        TooltipContent::Custom(format!("{} in {}", ctx.datum.id, ctx.datum.index_value))
    });
    let props = scenario_props(
        BarDatum::new("a", 10.0, "x"),
        tooltips.coordinators(label_fn()),
    )
    .with_tooltip(renderer);
    let item = BarItem::new(props, &mut BarItemCache::new());
    item.pointer_enter(&PointerEvent::at((1.0, 1.0)));
    assert_eq!(
        tooltips.content(),
        Some(TooltipContent::Custom("a in x".to_string()))
    );
}

#[test]
fn rounded_corners_are_not_hit_targets() {
    let mut props = scenario_props(BarDatum::new("a", 10.0, "x"), quiet_coordinators());
    props.geometry = BarGeometry::new(100.0, 100.0, 40.0, 40.0).with_border_radius(10.0);
    let node = BarItem::new(props, &mut BarItemCache::new()).node();
    assert!(node.hit_test(Point::new(120.0, 120.0)));
    assert!(!node.hit_test(Point::new(100.5, 100.5)), "corner is cut");
    assert!(!node.hit_test(Point::new(99.0, 120.0)));
}

#[test]
fn layer_routes_hover_between_items() {
    let log: Log = Rc::default();
    let coordinators = logging_coordinators(&log);
    let enter_log = log.clone();
    let leave_log = log.clone();
    let on_enter = HoverCallback::new(move |d, _| {
        enter_log.borrow_mut().push(format!("enter:{}", d.id));
    });
    let on_leave = HoverCallback::new(move |d, _| {
        leave_log.borrow_mut().push(format!("leave:{}", d.id));
    });
    let theme = Rc::new(Theme::default());

    let make = |id: &str, x: f64| {
        BarItemProps::new(
            Rc::new(BarDatum::new(id, 1.0, id)),
            BarGeometry::new(x, 0.0, 10.0, 10.0),
            red(),
            theme.clone(),
            coordinators.clone(),
        )
        .with_on_mouse_enter(on_enter.clone())
        .with_on_mouse_leave(on_leave.clone())
    };

    let mut layer = BarLayer::new();
    layer.update([make("a", 0.0), make("b", 20.0)]);

    layer.pointer_move(&PointerEvent::at((5.0, 5.0)));
    layer.pointer_move(&PointerEvent::at((6.0, 5.0)));
    layer.pointer_move(&PointerEvent::at((25.0, 5.0)));
    layer.pointer_move(&PointerEvent::at((15.0, 5.0)));
    assert!(layer.hovered().is_none());

    assert_eq!(
        *log.borrow(),
        vec![
            "enter:a", "show:a - a", "show:a - a", "leave:a", "hide", "enter:b", "show:b - b",
            "leave:b", "hide",
        ]
    );

    log.borrow_mut().clear();
    layer.pointer_move(&PointerEvent::at((25.0, 5.0)));
    layer.pointer_leave(&PointerEvent::at((40.0, 5.0)));
    assert_eq!(*log.borrow(), vec!["enter:b", "show:b - b", "leave:b", "hide"]);
}

#[test]
fn layer_keeps_caches_by_id_and_drops_removed_ones() {
    let coordinators = quiet_coordinators();
    let theme = Rc::new(Theme::default());
    let make = |id: &str, height: f64| {
        BarItemProps::new(
            Rc::new(BarDatum::new(id, 1.0, "x")),
            BarGeometry::new(0.0, 0.0, 10.0, height),
            red(),
            theme.clone(),
            coordinators.clone(),
        )
    };

    let mut layer = BarLayer::new();
    layer.update([make("a", 10.0), make("b", 10.0)]);
    let tooltip_a = layer.item("a").expect("a").tooltip().clone();

    layer.pointer_move(&PointerEvent::at((5.0, 5.0)));
    assert_eq!(layer.hovered().map(|i| &*i.datum().id), Some("b"), "b paints on top");

    // Resize everything and drop `b`.
    layer.update([make("a", 30.0)]);
    assert!(layer.cache("b").is_none());
    assert!(layer.hovered().is_none());
    let a = layer.item("a").expect("a");
    assert!(Rc::ptr_eq(&tooltip_a, a.tooltip()), "a kept its tooltip");
    assert_eq!(layer.cache("a").map(|c| c.tooltip_computations()), Some(1));
    assert_eq!(layer.nodes().len(), 1);
}

#[test]
fn layer_click_hits_topmost_item_only() {
    let clicks: Log = Rc::default();
    let sink = clicks.clone();
    let on_click = ClickCallback::new(move |m, _| sink.borrow_mut().push(m.datum.id.to_string()));
    let coordinators = quiet_coordinators();
    let theme = Rc::new(Theme::default());
    let make = |id: &str| {
        BarItemProps::new(
            Rc::new(BarDatum::new(id, 1.0, "x")),
            BarGeometry::new(0.0, 0.0, 10.0, 10.0),
            red(),
            theme.clone(),
            coordinators.clone(),
        )
        .with_on_click(on_click.clone())
    };

    let mut layer = BarLayer::new();
    layer.update([make("under"), make("over")]);
    layer.click(&PointerEvent::at((5.0, 5.0)));
    layer.click(&PointerEvent::at((50.0, 5.0)));
    assert_eq!(*clicks.borrow(), vec!["over"]);
}

#[test]
fn scenario_svg_output() {
    let props = scenario_props(BarDatum::new("a", 10.0, "x"), quiet_coordinators());
    let node = BarItem::new(props, &mut BarItemCache::new()).node();
    let svg = to_svg_string(&[node], None);

    assert!(svg.contains(r#"<g transform="translate(0, 0)">"#), "{svg}");
    assert!(
        svg.contains(r##"<rect width="20" height="40" rx="0" ry="0" fill="#ff0000""##),
        "{svg}"
    );
    assert!(
        svg.contains(r#"<text x="10" y="20" text-anchor="middle" dominant-baseline="central""#),
        "{svg}"
    );
    assert!(svg.contains(r#"style="pointer-events: none""#), "{svg}");
    assert!(svg.contains(">10</text>"), "{svg}");
}

#[test]
fn nan_datum_shared_across_passes_is_not_rebuilt() {
    let props = scenario_props(BarDatum::new("a", f64::NAN, "x"), quiet_coordinators())
        .with_on_click(ClickCallback::new(|_, _| {}));
    let mut cache = BarItemCache::new();

    let first = BarItem::new(props.clone(), &mut cache);
    let second = BarItem::new(props, &mut cache);

    assert_eq!(cache.click_computations(), 1, "same datum allocation reuses the handler");
    assert_eq!(cache.tooltip_computations(), 1, "same datum allocation reuses the tooltip");
    assert!(
        Rc::ptr_eq(first.tooltip(), second.tooltip()),
        "tooltip descriptor should be shared"
    );
}

#[test]
fn removing_the_hovered_bar_hides_its_tooltip() {
    let log: Log = Rc::default();
    let tooltips = TooltipCoordinator::new();
    let leave_log = log.clone();
    let on_leave = HoverCallback::new(move |d, _| {
        leave_log.borrow_mut().push(format!("leave:{}", d.id));
    });
    let theme = Rc::new(Theme::default());
    let make = |id: &str, x: f64| {
        BarItemProps::new(
            Rc::new(BarDatum::new(id, 1.0, id)),
            BarGeometry::new(x, 0.0, 10.0, 10.0),
            red(),
            theme.clone(),
            tooltips.coordinators(label_fn()),
        )
        .with_on_mouse_leave(on_leave.clone())
    };

    let mut layer = BarLayer::new();
    layer.update([make("a", 0.0), make("b", 20.0)]);
    layer.pointer_move(&PointerEvent::at((5.0, 5.0)));
    assert!(tooltips.is_visible(), "hovering `a` shows its tooltip");

    layer.update([make("b", 20.0)]);
    assert!(!tooltips.is_visible(), "tooltip of the removed bar is hidden");
    assert_eq!(tooltips.hide_calls(), 1);
    assert!(layer.hovered().is_none());
    assert!(log.borrow().is_empty(), "a removed bar reports no hover end");

    layer.pointer_move(&PointerEvent::at((15.0, 5.0)));
    layer.pointer_leave(&PointerEvent::at((40.0, 5.0)));
    assert!(tooltips.current().is_none());
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "invalid geometry")]
fn negative_size_is_a_caller_defect() {
    let mut props = scenario_props(BarDatum::new("a", 10.0, "x"), quiet_coordinators());
    props.geometry.width = -1.0;
    let _ = BarItem::new(props, &mut BarItemCache::new());
}

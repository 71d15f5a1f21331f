// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The data record bound to a bar item.

extern crate alloc;

use alloc::rc::Rc;
use alloc::sync::Arc;

use peniko::Color;
use smallvec::SmallVec;

/// An extra attribute value carried on a [`BarDatum`].
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    /// A numeric value.
    Number(f64),
    /// A text value.
    Text(Arc<str>),
    /// A color value.
    Color(Color),
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<Color> for AttrValue {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

/// One categorical data point of a bar chart.
///
/// `id`, `value` and `index_value` are always present; a datum without them cannot be
/// constructed. `fill` overrides the item color when set.
#[derive(Clone, Debug, PartialEq)]
pub struct BarDatum {
    /// Series key, unique within the chart.
    pub id: Arc<str>,
    /// The numeric value the bar represents.
    pub value: f64,
    /// Key on the categorical axis.
    pub index_value: Arc<str>,
    /// Explicit fill override.
    pub fill: Option<Color>,
    /// Extra fields carried over from the source row, in insertion order.
    pub attributes: SmallVec<[(Arc<str>, AttrValue); 4]>,
}

impl BarDatum {
    /// Creates a datum with no fill override and no extra attributes.
    pub fn new(id: impl Into<Arc<str>>, value: f64, index_value: impl Into<Arc<str>>) -> Self {
        Self {
            id: id.into(),
            value,
            index_value: index_value.into(),
            fill: None,
            attributes: SmallVec::new(),
        }
    }

    /// Sets the fill override.
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Sets an extra attribute, replacing any previous value for `key`.
    pub fn with_attribute(mut self, key: impl Into<Arc<str>>, value: impl Into<AttrValue>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.attributes.push((key, value)),
        }
        self
    }

    /// Returns the extra attribute stored under `key`.
    pub fn attribute(&self, key: &str) -> Option<&AttrValue> {
        self.attributes
            .iter()
            .find(|(k, _)| &**k == key)
            .map(|(_, v)| v)
    }

    /// Looks up a field by its record key.
    ///
    /// Built-in fields (`id`, `value`, `indexValue`, `fill`) shadow extra attributes of the same
    /// name.
    pub fn get(&self, key: &str) -> Option<AttrValue> {
        match key {
            "id" => Some(AttrValue::Text(self.id.clone())),
            "value" => Some(AttrValue::Number(self.value)),
            "indexValue" => Some(AttrValue::Text(self.index_value.clone())),
            "fill" => self
                .fill
                .map(AttrValue::Color)
                .or_else(|| self.attribute(key).cloned()),
            _ => self.attribute(key).cloned(),
        }
    }
}

/// The click payload: a datum merged with the item's display color.
///
/// The item color always wins: `get("color")` returns [`MergedDatum::color`] even when the
/// datum carries its own `color` attribute.
#[derive(Clone, Debug, PartialEq)]
pub struct MergedDatum {
    /// The item's display color.
    pub color: Color,
    /// The original datum.
    pub datum: Rc<BarDatum>,
}

impl MergedDatum {
    /// Merges `color` into `datum`.
    pub fn new(color: Color, datum: Rc<BarDatum>) -> Self {
        Self { color, datum }
    }

    /// Looks up a field of the merged record.
    pub fn get(&self, key: &str) -> Option<AttrValue> {
        if key == "color" {
            return Some(AttrValue::Color(self.color));
        }
        self.datum.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peniko::color::palette::css;

    #[test]
    fn attributes_replace_by_key() {
        let d = BarDatum::new("a", 1.0, "x")
            .with_attribute("group", "g1")
            .with_attribute("group", "g2");
        assert_eq!(d.attributes.len(), 1);
        assert_eq!(d.attribute("group"), Some(&AttrValue::from("g2")));
    }

    #[test]
    fn builtin_fields_shadow_attributes() {
        let d = BarDatum::new("a", 3.0, "x").with_attribute("value", 99.0);
        assert_eq!(d.get("value"), Some(AttrValue::Number(3.0)));
        assert_eq!(d.get("indexValue"), Some(AttrValue::from("x")));
        assert_eq!(d.get("missing"), None);
    }

    #[test]
    fn merged_color_wins_over_datum_color() {
        let d = Rc::new(BarDatum::new("a", 1.0, "x").with_attribute("color", css::BLUE));
        let merged = MergedDatum::new(css::RED, d.clone());
        assert_eq!(merged.get("color"), Some(AttrValue::Color(css::RED)));
        assert_eq!(merged.get("id"), Some(AttrValue::from("a")));
        assert_eq!(
            d.get("color"),
            Some(AttrValue::Color(css::BLUE)),
            "the original datum is untouched"
        );
    }
}

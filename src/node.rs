//! Total navigation over parsed json.
//!
//! Every helper here answers `None` instead of failing, so a chain such as
//! `root.property("a").property("b").string()` simply collapses to `None` as soon as a
//! step is missing or has an unexpected type.
use std::slice;

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use serde_json::{Map, Value};

/// Typed, throw-free access to a json node. Implemented for both `&Value` and
/// `Option<&Value>` so lookups can be chained without `and_then` at every step.
pub trait Node<'a>: Sized {
    fn node(self) -> Option<&'a Value>;

    /// Property of an object node, ignoring explicit `null` values.
    fn property(self, name: &str) -> Option<&'a Value> {
        self.node()?
            .as_object()?
            .get(name)
            .filter(|value| !value.is_null())
    }

    fn string(self) -> Option<&'a str> {
        self.node()?.as_str()
    }

    fn int32(self) -> Option<i32> {
        i32::try_from(self.node()?.as_i64()?).ok()
    }

    fn int64(self) -> Option<i64> {
        self.node()?.as_i64()
    }

    fn timestamp(self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(self.string()?)
    }

    fn array(self) -> Option<&'a [Value]> {
        self.node()?.as_array().map(Vec::as_slice)
    }

    fn object(self) -> Option<&'a Map<String, Value>> {
        self.node()?.as_object()
    }

    fn elements(self) -> Option<slice::Iter<'a, Value>> {
        self.array().map(<[Value]>::iter)
    }

    fn elements_or_empty(self) -> slice::Iter<'a, Value> {
        let empty: &'a [Value] = &[];
        self.array().unwrap_or(empty).iter()
    }

    fn element_at(self, index: usize) -> Option<&'a Value> {
        self.array()?.get(index)
    }

    /// Text stored either as `{"simpleText": ".."}` or as `{"runs": [{"text": ".."}, ..]}`.
    /// The plain form wins when both are present.
    fn rich_text(self) -> Option<String> {
        let node = self.node()?;
        if let Some(text) = node.property("simpleText").string() {
            return Some(text.to_owned());
        }
        let runs = node.property("runs").elements()?;
        Some(runs.filter_map(|run| run.property("text").string()).collect())
    }

    /// Every value stored under `name` anywhere below this node, depth first.
    fn descendants<'n>(self, name: &'n str) -> Descendants<'a, 'n> {
        Descendants {
            name,
            stack: self.node().into_iter().collect(),
        }
    }
}

impl<'a> Node<'a> for &'a Value {
    fn node(self) -> Option<&'a Value> {
        Some(self)
    }
}

impl<'a> Node<'a> for Option<&'a Value> {
    fn node(self) -> Option<&'a Value> {
        self
    }
}

/// Lazy pre-order walk yielding each value whose parent object carries the property.
/// Array items are visited in order, object values in document order. The walk is
/// finite; call [`Node::descendants`] again to start over.
#[derive(Debug, Clone)]
pub struct Descendants<'a, 'n> {
    name: &'n str,
    stack: Vec<&'a Value>,
}

impl<'a> Iterator for Descendants<'a, '_> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                Value::Array(items) => self.stack.extend(items.iter().rev()),
                Value::Object(map) => self.stack.extend(map.values().rev()),
                _ => {}
            }
            if let Some(found) = node.property(self.name) {
                return Some(found);
            }
        }
        None
    }
}

/// Accepts full RFC 3339 timestamps as well as bare `yyyy-mm-dd` dates, the latter
/// taken as midnight UTC.
fn parse_timestamp(input: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Some(timestamp);
    }
    let midnight = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()?
        .and_hms_opt(0, 0, 0)?;
    FixedOffset::east_opt(0)?
        .from_local_datetime(&midnight)
        .single()
}

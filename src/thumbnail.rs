use serde_json::Value;

use crate::{memo::Memo, node::Node};

/// One entry of a `thumbnails` array.
#[derive(Debug)]
pub struct Thumbnail<'a> {
    content: &'a Value,
    url: Memo<Option<&'a str>>,
    width: Memo<Option<i32>>,
    height: Memo<Option<i32>>,
}

impl<'a> Thumbnail<'a> {
    pub fn new(content: &'a Value) -> Self {
        Thumbnail {
            content,
            url: Memo::new(),
            width: Memo::new(),
            height: Memo::new(),
        }
    }

    /// Map every element of a `thumbnails` array, if the node is one.
    pub(crate) fn list(node: Option<&'a Value>) -> Option<Vec<Self>> {
        node.elements().map(|items| items.map(Thumbnail::new).collect())
    }

    pub fn url(&self) -> Option<&'a str> {
        *self
            .url
            .get_or_compute(|| self.content.property("url").string())
    }

    pub fn width(&self) -> Option<i32> {
        *self
            .width
            .get_or_compute(|| self.content.property("width").int32())
    }

    pub fn height(&self) -> Option<i32> {
        *self
            .height
            .get_or_compute(|| self.content.property("height").int32())
    }
}

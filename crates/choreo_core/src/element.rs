//! Animation target elements
//!
//! Elements are the things animations write to. The engine never touches a
//! concrete widget type; it only knows an [`ElementId`] and what the element
//! declares it can do through its [`ElementCaps`]. Operations that need more
//! than plain float properties (text color, declarative asset playback) check
//! the capability set instead of downcasting.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Unique identifier for a registered target element
    pub struct ElementId;
}

/// Inline storage for the small target lists animations operate on
pub type Targets = SmallVec<[ElementId; 4]>;

/// Edge insets around an element's content box
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Insets {
    /// Same inset on all four edges
    pub fn uniform(value: f32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    /// Combined left + right inset
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Combined top + bottom inset
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// What an element supports beyond plain float properties.
///
/// A static, checkable set: color tracks are only built for elements that
/// opted into them, and asset playback requests bind only to elements that
/// can host one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ElementCaps {
    /// Element renders text and accepts text color tracks
    pub text_colorable: bool,
    /// Element can host declarative (pre-authored) asset playback
    pub asset_playable: bool,
}

/// A registered target element
#[derive(Clone, Debug)]
pub struct Element {
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
    pub padding: Insets,
    pub caps: ElementCaps,
}

impl Element {
    /// Create an element with the given measured size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            x: 0.0,
            y: 0.0,
            padding: Insets::default(),
            caps: ElementCaps::default(),
        }
    }

    /// Set the element's position
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the element's padding
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Mark the element as accepting text color tracks
    pub fn text_colorable(mut self) -> Self {
        self.caps.text_colorable = true;
        self
    }

    /// Mark the element as able to host declarative asset playback
    pub fn asset_playable(mut self) -> Self {
        self.caps.asset_playable = true;
        self
    }
}

/// Read-only geometry snapshot of an element
#[derive(Clone, Copy, Debug, Default)]
pub struct ElementGeometry {
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
    pub padding: Insets,
}

impl ElementGeometry {
    /// Width of the content box inside the padding
    pub fn content_width(&self) -> f32 {
        self.width - self.padding.horizontal()
    }

    /// Horizontal center of the content box, in element-local coordinates
    pub fn content_center_x(&self) -> f32 {
        self.content_width() / 2.0 + self.padding.left
    }

    /// Bottom edge of the content box, in element-local coordinates
    pub fn content_bottom(&self) -> f32 {
        self.height - self.padding.bottom
    }
}

/// Arena of registered elements
#[derive(Default)]
pub struct ElementRegistry {
    elements: SlotMap<ElementId, Element>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self {
            elements: SlotMap::with_key(),
        }
    }

    pub fn insert(&mut self, element: Element) -> ElementId {
        self.elements.insert(element)
    }

    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        self.elements.remove(id)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    /// Geometry snapshot for an element, if it is still registered
    pub fn geometry(&self, id: ElementId) -> Option<ElementGeometry> {
        self.elements.get(id).map(|e| ElementGeometry {
            width: e.width,
            height: e.height,
            x: e.x,
            y: e.y,
            padding: e.padding,
        })
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

//! Shared element stage
//!
//! The stage owns the element registry behind shared ownership so that
//! long-lived animation callbacks (resize and path-following tracks) can
//! write back into it while builders keep reading geometry out of it.
//! It also carries the display density used for device-independent units.

use std::cell::RefCell;
use std::rc::Rc;

use crate::element::{Element, ElementGeometry, ElementId, ElementRegistry};

/// Unit mode for numeric keyframe values
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Units {
    /// Raw pixels, consumed verbatim
    #[default]
    Px,
    /// Device-independent units, scaled by the stage density once at call time
    Dp,
}

/// Shared handle to the element registry plus the display density.
///
/// Cloning a `Stage` clones the handle, not the registry.
#[derive(Clone)]
pub struct Stage {
    registry: Rc<RefCell<ElementRegistry>>,
    density: f32,
}

impl Stage {
    /// Create a stage with the given display density (px per dp).
    ///
    /// Density must be positive; a density of 1.0 makes dp and px identical.
    pub fn new(density: f32) -> Self {
        debug_assert!(density > 0.0, "display density must be positive");
        Self {
            registry: Rc::new(RefCell::new(ElementRegistry::new())),
            density,
        }
    }

    pub fn density(&self) -> f32 {
        self.density
    }

    /// Register an element and return its id
    pub fn insert(&self, element: Element) -> ElementId {
        let id = self.registry.borrow_mut().insert(element);
        tracing::trace!(?id, "element registered");
        id
    }

    /// Remove an element from the stage
    pub fn remove(&self, id: ElementId) -> Option<Element> {
        self.registry.borrow_mut().remove(id)
    }

    /// Geometry snapshot for an element, if it is still registered
    pub fn geometry(&self, id: ElementId) -> Option<ElementGeometry> {
        self.registry.borrow().geometry(id)
    }

    /// Convert device-independent units to pixels
    pub fn to_px(&self, dp: f32) -> f32 {
        dp * self.density
    }

    /// Convert pixels to device-independent units
    pub fn to_dp(&self, px: f32) -> f32 {
        px / self.density
    }

    /// Resolve a value in the given unit mode to pixels
    pub fn resolve(&self, units: Units, value: f32) -> f32 {
        match units {
            Units::Px => value,
            Units::Dp => self.to_px(value),
        }
    }

    /// Write a new width to an element. Missing elements are ignored.
    pub fn set_width(&self, id: ElementId, width: f32) {
        if let Some(element) = self.registry.borrow_mut().get_mut(id) {
            element.width = width;
        }
    }

    /// Write a new height to an element. Missing elements are ignored.
    pub fn set_height(&self, id: ElementId, height: f32) {
        if let Some(element) = self.registry.borrow_mut().get_mut(id) {
            element.height = height;
        }
    }

    /// Move an element to a new position. Missing elements are ignored.
    pub fn set_position(&self, id: ElementId, x: f32, y: f32) {
        if let Some(element) = self.registry.borrow_mut().get_mut(id) {
            element.x = x;
            element.y = y;
        }
    }

    /// Whether the element accepts text color tracks
    pub fn supports_text_color(&self, id: ElementId) -> bool {
        self.registry
            .borrow()
            .get(id)
            .is_some_and(|e| e.caps.text_colorable)
    }

    /// Whether the element can host declarative asset playback
    pub fn supports_assets(&self, id: ElementId) -> bool {
        self.registry
            .borrow()
            .get(id)
            .is_some_and(|e| e.caps.asset_playable)
    }

    pub fn element_count(&self) -> usize {
        self.registry.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversion() {
        let stage = Stage::new(2.5);
        assert_eq!(stage.to_px(10.0), 25.0);
        assert_eq!(stage.to_dp(25.0), 10.0);
        assert_eq!(stage.resolve(Units::Px, 10.0), 10.0);
        assert_eq!(stage.resolve(Units::Dp, 10.0), 25.0);
    }

    #[test]
    fn test_clones_share_the_registry() {
        let stage = Stage::new(1.0);
        let alias = stage.clone();

        let id = stage.insert(Element::new(50.0, 50.0));
        alias.set_width(id, 80.0);

        assert_eq!(stage.geometry(id).unwrap().width, 80.0);
    }

    #[test]
    fn test_writes_to_missing_elements_are_ignored() {
        let stage = Stage::new(1.0);
        let id = stage.insert(Element::new(10.0, 10.0));
        stage.remove(id);

        // Must not panic
        stage.set_width(id, 99.0);
        stage.set_position(id, 1.0, 2.0);
        assert!(stage.geometry(id).is_none());
    }

    #[test]
    fn test_capability_queries() {
        let stage = Stage::new(1.0);
        let label = stage.insert(Element::new(10.0, 10.0).text_colorable());
        let plain = stage.insert(Element::new(10.0, 10.0));

        assert!(stage.supports_text_color(label));
        assert!(!stage.supports_text_color(plain));
        assert!(!stage.supports_assets(label));
    }
}

use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::domain::config::{ScrollMotion, UiConfig};
use crate::domain::errors::DomError;
use crate::infrastructure::dom;

/// Brings the first element matching a selector into view with animated
/// motion.
pub struct SmoothScroller {
    motion: ScrollMotion,
}

impl SmoothScroller {
    pub fn from_config(config: &UiConfig) -> Self {
        Self { motion: config.scroll_motion }
    }

    pub fn scroll_to(&self, selector: &str) -> Result<(), DomError> {
        let document = dom::document()?;
        let element = document
            .query_selector(selector)
            .map_err(|_| DomError::InvalidSelector(selector.to_string()))?
            .ok_or_else(|| DomError::ElementNotFound(selector.to_string()))?;

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(self.motion.into());
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }
}

impl From<ScrollMotion> for ScrollBehavior {
    fn from(motion: ScrollMotion) -> Self {
        match motion {
            ScrollMotion::Smooth => ScrollBehavior::Smooth,
            ScrollMotion::Instant => ScrollBehavior::Instant,
            ScrollMotion::Auto => ScrollBehavior::Auto,
        }
    }
}

//! Spacing around start/end decorators (icons, adornments)

use serde::{Deserialize, Serialize};

const DEFAULT_SPACING: f32 = 8.0;

/// Which side of the content a decorator sits on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecoratorPosition {
    Start,
    End,
}

/// Decorator wrapper props
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecoratorWrapper {
    position: Option<DecoratorPosition>,
    spacing: f32,
}

impl Default for DecoratorWrapper {
    fn default() -> Self {
        Self::new()
    }
}

impl DecoratorWrapper {
    pub fn new() -> Self {
        Self {
            position: None,
            spacing: DEFAULT_SPACING,
        }
    }

    pub fn start() -> Self {
        Self::new().position(DecoratorPosition::Start)
    }

    pub fn end() -> Self {
        Self::new().position(DecoratorPosition::End)
    }

    pub fn position(mut self, position: DecoratorPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Margin toward the content; none without a position
    pub fn resolve(&self) -> DecoratorStyle {
        match self.position {
            Some(DecoratorPosition::Start) => DecoratorStyle {
                margin_right: self.spacing,
                ..DecoratorStyle::default()
            },
            Some(DecoratorPosition::End) => DecoratorStyle {
                margin_left: self.spacing,
                ..DecoratorStyle::default()
            },
            None => DecoratorStyle::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DecoratorStyle {
    pub margin_left: f32,
    pub margin_right: f32,
}

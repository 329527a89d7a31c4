use crate::config::ChartConfig;

/// Months per grid row.
const COLUMNS: usize = 3;

/// Position of a chart block's center on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockPosition {
    pub x: f64,
    pub y: f64,
}

/// Grid geometry derived from the canvas size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub width: f64,
    pub height: f64,
}

impl From<&ChartConfig> for GridLayout {
    fn from(config: &ChartConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
        }
    }
}

impl GridLayout {
    /// Pie radius before the arc inset.
    pub fn radius(&self) -> f64 {
        self.width.min(self.height) / 4.0 - 40.0
    }

    pub fn outer_radius(&self) -> f64 {
        self.radius() - 10.0
    }

    /// Vertical offset of a block title relative to the block center.
    pub fn title_offset(&self) -> f64 {
        -(self.height / 4.0 - 20.0)
    }

    /// Canvas height for `months` charts, never below the base height.
    pub fn canvas_height(&self, months: usize) -> f64 {
        let needed = (self.height / 2.0) * months.div_ceil(2) as f64;
        needed.max(self.height)
    }

    /// Block centers: narrow-left, wide-center, narrow-right, with a new row
    /// every third month.
    pub fn positions(&self, months: usize) -> Vec<BlockPosition> {
        let mut y = -(self.height / 4.0);
        (0..months)
            .map(|i| {
                let x = match i % COLUMNS {
                    0 => {
                        y += self.height / 2.0;
                        self.width / 6.0
                    }
                    1 => self.width / 2.0,
                    _ => self.width / 6.0 * 5.0,
                };
                BlockPosition { x, y }
            })
            .collect()
    }
}

//! Badge geometry.

/// Column widths and height of a badge with `levels` value columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeLayout {
    pub label_width: u32,
    pub box_width: u32,
    pub height: u32,
    pub levels: u32,
}

impl Default for BadgeLayout {
    fn default() -> Self {
        Self {
            label_width: 110,
            box_width: 60,
            height: 20,
            levels: 4,
        }
    }
}

impl BadgeLayout {
    pub fn values_width(&self) -> u32 {
        self.box_width * self.levels
    }

    pub fn total_width(&self) -> u32 {
        self.label_width + self.values_width()
    }

    /// Left edge of value column `index`.
    pub fn column_x(&self, index: u32) -> u32 {
        self.label_width + self.box_width * index
    }

    pub fn label_center(&self) -> f64 {
        f64::from(self.label_width) / 2.0
    }

    pub fn column_center(&self, index: u32) -> f64 {
        f64::from(self.column_x(index)) + f64::from(self.box_width) / 2.0
    }
}

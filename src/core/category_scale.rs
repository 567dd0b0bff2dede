use crate::core::ChartArea;

/// Evenly spaced x positions for category labels.
///
/// The first and last categories sit on the plot edges; a single category
/// is centered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryScale {
    count: usize,
    left: f64,
    right: f64,
}

impl CategoryScale {
    #[must_use]
    pub fn new(count: usize, area: ChartArea) -> Self {
        Self {
            count,
            left: area.left,
            right: area.right,
        }
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    /// Pixel x of category `index`, or `None` past the last category.
    #[must_use]
    pub fn position(self, index: usize) -> Option<f64> {
        match self.count {
            0 => None,
            1 if index == 0 => Some((self.left + self.right) / 2.0),
            count if index < count => {
                let step = (self.right - self.left) / (count - 1) as f64;
                Some(self.left + step * index as f64)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CategoryScale;
    use crate::core::ChartArea;

    const AREA: ChartArea = ChartArea {
        left: 100.0,
        top: 0.0,
        right: 300.0,
        bottom: 100.0,
    };

    #[test]
    fn categories_span_edges() {
        let scale = CategoryScale::new(3, AREA);
        assert_eq!(scale.position(0), Some(100.0));
        assert_eq!(scale.position(1), Some(200.0));
        assert_eq!(scale.position(2), Some(300.0));
        assert_eq!(scale.position(3), None);
    }

    #[test]
    fn single_and_empty_category_sets() {
        assert_eq!(CategoryScale::new(1, AREA).position(0), Some(200.0));
        assert_eq!(CategoryScale::new(1, AREA).position(1), None);
        assert_eq!(CategoryScale::new(0, AREA).position(0), None);
    }
}

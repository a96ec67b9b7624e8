use nalgebra::Point2;

use crate::{Error, Result};

/// Axis-aligned bounding box for one frame, in TLWH layout.
///
/// Width and height are expected to be non-negative but are taken as read
/// from the source files. A zero-area box is legal.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingBox {
    /// Top-left x coordinate
    pub x: f64,
    /// Top-left y coordinate
    pub y: f64,
    /// Width of the bounding box
    pub width: f64,
    /// Height of the bounding box
    pub height: f64,
}

impl BoundingBox {
    /// Create a box from top-left coordinates and dimensions (TLWH format).
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Convert to TLBR format: (x1, y1, x2, y2).
    #[inline]
    pub fn to_tlbr(&self) -> [f64; 4] {
        [self.x, self.y, self.x + self.width, self.y + self.height]
    }

    #[inline]
    pub fn center(&self) -> Point2<f64> {
        Point2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Intersection over Union with another box.
    ///
    /// Fails with [`Error::DegenerateInput`] when the union area is not
    /// positive, which happens when both boxes have zero area.
    pub fn iou(&self, other: &BoundingBox) -> Result<f64> {
        let [left_a, top_a, right_a, bottom_a] = self.to_tlbr();
        let [left_b, top_b, right_b, bottom_b] = other.to_tlbr();

        let left = left_a.max(left_b);
        let top = top_a.max(top_b);
        let right = right_a.min(right_b);
        let bottom = bottom_a.min(bottom_b);

        let inter_area = (right - left).max(0.0) * (bottom - top).max(0.0);
        let union_area = self.area() + other.area() - inter_area;

        if union_area > 0.0 {
            Ok(inter_area / union_area)
        } else {
            Err(Error::DegenerateInput {
                a: *self,
                b: *other,
            })
        }
    }

    /// Euclidean distance between the two box centers.
    pub fn center_distance(&self, other: &BoundingBox) -> f64 {
        nalgebra::distance(&self.center(), &other.center())
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from([x, y, width, height]: [f64; 4]) -> Self {
        Self::new(x, y, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_box_corners_and_center() {
        let rect = BoundingBox::new(10.0, 20.0, 30.0, 40.0);

        assert_eq!(rect.to_tlbr(), [10.0, 20.0, 40.0, 60.0]);

        let center = rect.center();
        assert_eq!(center.x, 25.0);
        assert_eq!(center.y, 40.0);
    }

    #[test]
    fn test_from_array() {
        let rect = BoundingBox::from([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(rect, BoundingBox::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_iou() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(5.0, 5.0, 10.0, 10.0);

        // Intersection: 5x5 = 25
        // Union: 100 + 100 - 25 = 175
        assert_relative_eq!(a.iou(&b).unwrap(), 25.0 / 175.0);
    }

    #[test]
    fn test_iou_no_overlap() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(20.0, 20.0, 10.0, 10.0);
        assert_eq!(a.iou(&b).unwrap(), 0.0);
    }

    #[test]
    fn test_iou_touching_edges() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(10.0, 0.0, 10.0, 10.0);
        assert_eq!(a.iou(&b).unwrap(), 0.0);
    }

    #[test]
    fn test_iou_same_box() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        assert_relative_eq!(a.iou(&a).unwrap(), 1.0);
    }

    #[test]
    fn test_iou_zero_area_against_real_box() {
        let point = BoundingBox::new(5.0, 5.0, 0.0, 0.0);
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(point.iou(&a).unwrap(), 0.0);
    }

    #[test]
    fn test_iou_both_degenerate() {
        let a = BoundingBox::new(5.0, 5.0, 0.0, 0.0);
        let b = BoundingBox::new(1.0, 1.0, 0.0, 3.0);
        assert!(matches!(a.iou(&b), Err(Error::DegenerateInput { .. })));
    }

    #[test]
    fn test_center_distance() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(3.0, 4.0, 10.0, 10.0);
        assert_relative_eq!(a.center_distance(&b), 5.0);
        assert_relative_eq!(b.center_distance(&a), 5.0);
    }
}

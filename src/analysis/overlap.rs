//! Per-frame overlap and center-error metrics between a tracker and ground truth.

use std::collections::BTreeMap;

use super::IouSeries;
use crate::boxes::{BoundingBox, SequenceSet};
use crate::{Error, Result};

/// Intersection over Union of a ground-truth box and a candidate box.
#[inline]
pub fn iou(ground_truth: &BoundingBox, candidate: &BoundingBox) -> Result<f64> {
    ground_truth.iou(candidate)
}

/// Frame-by-frame IoU of `candidate` against `ground_truth`.
///
/// Both sequences must cover the same frames.
pub fn iou_series(ground_truth: &[BoundingBox], candidate: &[BoundingBox]) -> Result<IouSeries> {
    if ground_truth.len() != candidate.len() {
        return Err(Error::LengthMismatch {
            ground_truth: ground_truth.len(),
            candidate: candidate.len(),
        });
    }

    ground_truth
        .iter()
        .zip(candidate)
        .map(|(gt, c)| iou(gt, c))
        .collect()
}

/// Distance between the centers of two boxes.
#[inline]
pub fn center_error(a: &BoundingBox, b: &BoundingBox) -> f64 {
    a.center_distance(b)
}

/// Per-frame center error, paired up to the shorter of the two sequences.
pub fn center_error_series(experimental: &[BoundingBox], ground_truth: &[BoundingBox]) -> Vec<f64> {
    experimental
        .iter()
        .zip(ground_truth)
        .map(|(e, gt)| center_error(e, gt))
        .collect()
}

/// Center-error series for every experimental sequence that has ground truth.
pub fn center_errors(
    experimental: &SequenceSet,
    ground_truth: &SequenceSet,
) -> BTreeMap<String, Vec<f64>> {
    experimental
        .iter()
        .filter_map(|(name, boxes)| {
            ground_truth
                .get(name)
                .map(|gt| (name.clone(), center_error_series(boxes, gt)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn boxes(values: &[[f64; 4]]) -> Vec<BoundingBox> {
        values.iter().copied().map(BoundingBox::from).collect()
    }

    #[test]
    fn test_iou_is_symmetric() {
        let pairs = [
            ([0.0, 0.0, 10.0, 10.0], [5.0, 5.0, 10.0, 10.0]),
            ([3.0, 1.0, 4.0, 9.0], [0.0, 0.0, 6.0, 6.0]),
            ([0.0, 0.0, 2.0, 2.0], [10.0, 10.0, 2.0, 2.0]),
            ([1.5, 2.5, 0.5, 7.0], [1.0, 2.0, 20.0, 1.0]),
        ];
        for (a, b) in pairs {
            let (a, b) = (BoundingBox::from(a), BoundingBox::from(b));
            let ab = iou(&a, &b).unwrap();
            let ba = iou(&b, &a).unwrap();
            assert_relative_eq!(ab, ba);
            assert!((0.0..=1.0).contains(&ab));
        }
    }

    #[test]
    fn test_iou_contained_box() {
        let outer = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let inner = BoundingBox::new(2.0, 2.0, 5.0, 5.0);
        assert_relative_eq!(iou(&outer, &inner).unwrap(), 0.25);
    }

    #[test]
    fn test_iou_series() {
        let gt = boxes(&[[0.0, 0.0, 10.0, 10.0], [0.0, 0.0, 10.0, 10.0], [0.0, 0.0, 10.0, 10.0]]);
        let tracked = boxes(&[[0.0, 0.0, 10.0, 10.0], [5.0, 5.0, 10.0, 10.0], [50.0, 50.0, 10.0, 10.0]]);

        let series = iou_series(&gt, &tracked).unwrap();
        assert_eq!(series.len(), 3);
        assert_relative_eq!(series[0], 1.0);
        assert_relative_eq!(series[1], 25.0 / 175.0);
        assert_eq!(series[2], 0.0);
    }

    #[test]
    fn test_iou_series_length_mismatch() {
        let gt = vec![BoundingBox::new(0.0, 0.0, 1.0, 1.0); 100];
        let tracked = vec![BoundingBox::new(0.0, 0.0, 1.0, 1.0); 99];

        match iou_series(&gt, &tracked) {
            Err(Error::LengthMismatch {
                ground_truth,
                candidate,
            }) => {
                assert_eq!(ground_truth, 100);
                assert_eq!(candidate, 99);
            }
            other => panic!("expected length mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_iou_series_empty() {
        assert!(iou_series(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_iou_series_degenerate_frame() {
        let gt = boxes(&[[0.0, 0.0, 10.0, 10.0], [1.0, 1.0, 0.0, 0.0]]);
        let tracked = boxes(&[[0.0, 0.0, 10.0, 10.0], [4.0, 4.0, 0.0, 0.0]]);
        assert!(matches!(
            iou_series(&gt, &tracked),
            Err(Error::DegenerateInput { .. })
        ));
    }

    #[test]
    fn test_center_error_uses_both_axes() {
        let a = BoundingBox::new(0.0, 0.0, 2.0, 2.0);
        let b = BoundingBox::new(0.0, 6.0, 2.0, 2.0);
        assert_relative_eq!(center_error(&a, &b), 6.0);
    }

    #[test]
    fn test_center_error_series_pairs_to_shorter() {
        let experimental = boxes(&[[0.0, 0.0, 2.0, 2.0], [3.0, 4.0, 2.0, 2.0], [9.0, 9.0, 2.0, 2.0]]);
        let gt = boxes(&[[0.0, 0.0, 2.0, 2.0], [0.0, 0.0, 2.0, 2.0]]);

        let errors = center_error_series(&experimental, &gt);
        assert_eq!(errors.len(), 2);
        assert_relative_eq!(errors[0], 0.0);
        assert_relative_eq!(errors[1], 5.0);
    }

    #[test]
    fn test_center_errors_only_common_sequences() {
        let mut experimental = SequenceSet::new();
        experimental.insert("Bolt".to_string(), boxes(&[[0.0, 0.0, 2.0, 2.0]]));
        experimental.insert("Toy".to_string(), boxes(&[[0.0, 0.0, 2.0, 2.0]]));
        let mut gt = SequenceSet::new();
        gt.insert("Bolt".to_string(), boxes(&[[3.0, 4.0, 2.0, 2.0]]));

        let errors = center_errors(&experimental, &gt);
        assert_eq!(errors.len(), 1);
        assert_relative_eq!(errors["Bolt"][0], 5.0);
    }
}

use crate::reference::ReferencePoint;

/// Straight-line distance between two points in (expense, income) space.
///
///   sqrt((a.expense - b.expense)² + (a.income - b.income)²)
///
/// Inputs are not validated; a NaN coordinate yields a NaN distance.
pub fn euclidean_distance(a: ReferencePoint, b: ReferencePoint) -> f64 {
    let expense_diff = a.expense - b.expense;
    let income_diff = a.income - b.income;
    (expense_diff * expense_diff + income_diff * income_diff).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        let p = ReferencePoint::new(6.0, 10.0);
        assert_eq!(euclidean_distance(p, p), 0.0);
    }

    #[test]
    fn three_four_five_triangle() {
        let a = ReferencePoint::new(0.0, 0.0);
        let b = ReferencePoint::new(3.0, 4.0);
        assert!((euclidean_distance(a, b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = ReferencePoint::new(7.0, 12.0);
        let b = ReferencePoint::new(5.0, 7.0);
        assert_eq!(euclidean_distance(a, b), euclidean_distance(b, a));
    }

    #[test]
    fn negative_coordinates_are_accepted() {
        let a = ReferencePoint::new(-1.0, -1.0);
        let b = ReferencePoint::new(2.0, 3.0);
        assert!((euclidean_distance(a, b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn nan_propagates() {
        let a = ReferencePoint::new(f64::NAN, 0.0);
        let b = ReferencePoint::new(0.0, 0.0);
        assert!(euclidean_distance(a, b).is_nan());
    }
}

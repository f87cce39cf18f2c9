//! Circle-based collision detection
//!
//! Every entity collides as a circle; overlap is a plain
//! distance-versus-radius-sum test applied pairwise by the session.

use crate::entities::body::Body;

/// Whether two bodies overlap: Euclidean distance between centers
/// strictly less than the sum of their radii.
pub fn bodies_overlap(a: &Body, b: &Body) -> bool {
    let distance = (a.position - b.position).norm();
    distance < a.radius + b.radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_bodies() {
        let a = Body::new(0.0, 0.0, 10.0);
        let b = Body::new(15.0, 0.0, 10.0);
        assert!(bodies_overlap(&a, &b));
    }

    #[test]
    fn test_separated_bodies() {
        let a = Body::new(0.0, 0.0, 10.0);
        let b = Body::new(25.0, 0.0, 10.0);
        assert!(!bodies_overlap(&a, &b));
    }

    #[test]
    fn test_exact_touch_does_not_count() {
        let a = Body::new(0.0, 0.0, 10.0);
        let b = Body::new(20.0, 0.0, 10.0);
        assert!(!bodies_overlap(&a, &b));
    }

    #[test]
    fn test_containment_counts_as_overlap() {
        let a = Body::new(0.0, 0.0, 45.0);
        let b = Body::new(1.0, 1.0, 5.0);
        assert!(bodies_overlap(&a, &b));
    }
}

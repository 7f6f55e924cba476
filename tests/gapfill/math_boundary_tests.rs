#![cfg(feature = "dev")]
//! Tests for grid boundary classification.
//!
//! These tests verify:
//! - Interior, edge, and corner classification
//! - Neighbor lists contain only in-extent orthogonal cells
//!
//! ## Test Organization
//!
//! 1. **Classification** - Every class on a 720 x 720 extent
//! 2. **Neighbor Lists** - Exact cells for each class
//! 3. **Small Extents** - Degenerate but valid 2 x N extents

use gapfill::internals::math::boundary::{GridExtent, PixelClass};

// ============================================================================
// Classification Tests
// ============================================================================

/// Test classification across a 720 x 720 extent.
#[test]
fn test_classification() {
    let extent = GridExtent::new(720, 720);

    assert_eq!(extent.neighborhood(300, 300).class, PixelClass::Interior);
    assert_eq!(extent.neighborhood(0, 300).class, PixelClass::Edge);
    assert_eq!(extent.neighborhood(719, 300).class, PixelClass::Edge);
    assert_eq!(extent.neighborhood(300, 0).class, PixelClass::Edge);
    assert_eq!(extent.neighborhood(300, 719).class, PixelClass::Edge);
    for &(r, c) in &[(0, 0), (0, 719), (719, 0), (719, 719)] {
        assert_eq!(extent.neighborhood(r, c).class, PixelClass::Corner);
    }
}

/// Test containment.
#[test]
fn test_contains() {
    let extent = GridExtent::new(720, 1280);
    assert!(extent.contains(719, 1279));
    assert!(!extent.contains(720, 0));
    assert!(!extent.contains(0, 1280));
}

// ============================================================================
// Neighbor List Tests
// ============================================================================

/// Test neighbor lists are orthogonal and ordered down/right/left/up.
#[test]
fn test_neighbor_lists() {
    let extent = GridExtent::new(720, 720);

    assert_eq!(
        extent.neighborhood(5, 5).cells(),
        &[(6, 5), (5, 6), (5, 4), (4, 5)]
    );
    assert_eq!(extent.neighborhood(0, 5).cells(), &[(1, 5), (0, 6), (0, 4)]);
    assert_eq!(
        extent.neighborhood(719, 5).cells(),
        &[(719, 6), (719, 4), (718, 5)]
    );
    assert_eq!(extent.neighborhood(0, 0).cells(), &[(1, 0), (0, 1)]);
    assert_eq!(extent.neighborhood(719, 719).cells(), &[(719, 718), (718, 719)]);
}

/// Test neighbor counts match classes.
#[test]
fn test_neighbor_counts() {
    let extent = GridExtent::new(10, 12);
    for r in 0..10 {
        for c in 0..12 {
            let n = extent.neighborhood(r, c);
            let expected = match n.class {
                PixelClass::Interior => 4,
                PixelClass::Edge => 3,
                PixelClass::Corner => 2,
            };
            assert_eq!(n.count(), expected, "at ({r}, {c})");
            assert_eq!(n.cells().len(), n.count());
            assert!(n.cells().iter().all(|&(nr, nc)| extent.contains(nr, nc)));
        }
    }
}

// ============================================================================
// Small Extent Tests
// ============================================================================

/// Test a two-row extent where every cell touches a row edge.
#[test]
fn test_two_row_extent() {
    let extent = GridExtent::new(2, 5);
    let n = extent.neighborhood(0, 2);
    assert_eq!(n.class, PixelClass::Edge);
    assert_eq!(n.cells(), &[(1, 2), (0, 3), (0, 1)]);

    let n = extent.neighborhood(1, 4);
    assert_eq!(n.class, PixelClass::Corner);
    assert_eq!(n.cells(), &[(1, 3), (0, 4)]);
}

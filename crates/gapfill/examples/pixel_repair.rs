//! Pixel Repair Example
//!
//! Builds a synthetic 720 x 720 RGB gradient, corrupts some pixels with the
//! pure-red marker (R=1, G=0, B=0), finds them by exact color match, and
//! repairs them from their orthogonal neighbors.
//!
//! Run with `RUST_LOG=trace` to see every repaired pixel.

use gapfill::prelude::*;
use ndarray::{Array3, Axis};

const SIZE: usize = 720;

fn main() -> Result<(), GapfillError> {
    env_logger::init();

    let clean = Array3::from_shape_fn((SIZE, SIZE, 3), |(r, c, ch)| match ch {
        0 => r as f32 / (SIZE - 1) as f32,
        1 => c as f32 / (SIZE - 1) as f32,
        _ => 0.5,
    });

    let mut corrupted = clean.clone();
    for k in 0..200 {
        let (r, c) = ((k * 37) % SIZE, (k * 53 + k / 7) % SIZE);
        corrupted[[r, c, 0]] = 1.0;
        corrupted[[r, c, 1]] = 0.0;
        corrupted[[r, c, 2]] = 0.0;
    }
    // Adjacent markers and corners exercise ordering and boundary handling.
    for &(r, c) in &[(0, 0), (719, 719), (5, 5), (5, 6)] {
        corrupted[[r, c, 0]] = 1.0;
        corrupted[[r, c, 1]] = 0.0;
        corrupted[[r, c, 2]] = 0.0;
    }

    let bad = find_markers(&corrupted);
    println!("Found {} marker pixels", bad.len());

    let result = PixelRepair::new().build()?.repair_copy(&corrupted, &bad)?;
    println!("{}", result);

    if let Some(fixed) = result.into_image() {
        let worst = fixed
            .iter()
            .zip(clean.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0f32, f32::max);
        println!();
        println!("Largest deviation from the clean image: {worst:.4}");
    }

    Ok(())
}

/// Row-major list of pixels that exactly match the red marker.
fn find_markers(image: &Array3<f32>) -> Vec<(usize, usize)> {
    let mut found = Vec::new();
    for (r, row) in image.axis_iter(Axis(0)).enumerate() {
        for (c, px) in row.axis_iter(Axis(0)).enumerate() {
            if px[0] == 1.0 && px[1] == 0.0 && px[2] == 0.0 {
                found.push((r, c));
            }
        }
    }
    found
}

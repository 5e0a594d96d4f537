//! Convolution regression test
//!
//! Exercises the convolution engine with both border policies, checks
//! shape preservation, identity behavior and the border effect of
//! zero-sum kernels on flat images.

use pdi_core::{BorderPolicy, FPix};
use pdi_filter::{FilterError, Kernel, LaplacianMask, convolve, convolve_pix};
use pdi_test::{RegParams, gradient_image, square_image};

const BORDERS: [BorderPolicy; 2] = [BorderPolicy::Replicate, BorderPolicy::Zero];

#[test]
fn convolve_reg() {
    let mut rp = RegParams::new("convolve");

    let pixs = square_image(40, 10, 30).expect("square image");
    let fpixs = FPix::from_pix(&pixs);
    let w = pixs.width();
    let h = pixs.height();

    // --- Test 1: identity kernel returns the input for either border ---
    for border in BORDERS {
        let out = convolve(&fpixs, &Kernel::identity(), border).expect("identity");
        rp.compare_fpix(&fpixs, &out, 0.0);
    }

    // --- Test 2: output shape equals input shape for odd square kernels ---
    let ramp = gradient_image(23, 17).expect("gradient image");
    for side in [1u32, 3, 5, 7] {
        let kernel = Kernel::from_slice(side, side, &vec![1.0; (side * side) as usize])
            .expect("box kernel");
        for border in BORDERS {
            let out = convolve_pix(&ramp, &kernel, border).expect("convolve");
            rp.compare_values(23.0, out.width() as f64, 0.0);
            rp.compare_values(17.0, out.height() as f64, 0.0);
        }
    }

    // --- Test 3: even or non-square kernels are rejected ---
    for (kw, kh) in [(2, 2), (3, 5), (4, 4)] {
        let kernel = Kernel::new(kw, kh).expect("kernel");
        let result = convolve(&fpixs, &kernel, BorderPolicy::Replicate);
        rp.check(
            matches!(result, Err(FilterError::InvalidKernelShape { .. })),
            "bad kernel shape rejected",
        );
    }

    // --- Test 4: flat image + zero-sum kernel ---
    let flat = FPix::new_with_value(w, h, 100.0).expect("flat");
    for mask in LaplacianMask::ALL {
        let kernel = mask.kernel();
        let rep = convolve(&flat, &kernel, BorderPolicy::Replicate).expect("replicate");
        rp.compare_values(0.0, rep.min_value() as f64, 0.0);
        rp.compare_values(0.0, rep.max_value() as f64, 0.0);

        let zero = convolve(&flat, &kernel, BorderPolicy::Zero).expect("zero");
        // interior stays zero, every border pixel picks up the missing neighbors
        rp.compare_values(0.0, zero.get_pixel(w / 2, h / 2).unwrap_or(1.0) as f64, 0.0);
        let border_nonzero = (0..w).all(|x| {
            zero.get_pixel(x, 0).is_ok_and(|v| v != 0.0)
                && zero.get_pixel(x, h - 1).is_ok_and(|v| v != 0.0)
        }) && (0..h).all(|y| {
            zero.get_pixel(0, y).is_ok_and(|v| v != 0.0)
                && zero.get_pixel(w - 1, y).is_ok_and(|v| v != 0.0)
        });
        rp.check(border_nonzero, "zero border shows up on flat image");
    }

    // --- Test 5: 3x3 box sum on the square, replicate border ---
    let ones = Kernel::from_slice(3, 3, &[1.0; 9]).expect("ones");
    let boxed = convolve(&fpixs, &ones, BorderPolicy::Replicate).expect("box");
    rp.compare_values(9.0 * 255.0, boxed.get_pixel(20, 20).unwrap_or(0.0) as f64, 0.0);
    rp.compare_values(0.0, boxed.get_pixel(0, 0).unwrap_or(1.0) as f64, 0.0);
    // corner of the white block sees 4 of 9 white samples
    rp.compare_values(4.0 * 255.0, boxed.get_pixel(10, 10).unwrap_or(0.0) as f64, 0.0);

    assert!(rp.cleanup(), "convolve regression test failed");
}

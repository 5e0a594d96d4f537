//! Raster basics regression test
//!
//! Tests:
//!   (1) Border padding of float rasters with both policies
//!   (2) Histogram, inversion and saturating subtraction
//!   (3) Histogram bar chart layout
//!   (4) Horizontal tiling of a result panel

use pdi_core::pix::graphics::BarChartStyle;
use pdi_core::{BorderPolicy, Error, FPix, Pix};
use pdi_io::ImageFormat;
use pdi_test::{RegParams, gradient_image, square_image};

#[test]
fn pixgraphics_reg() {
    let mut rp = RegParams::new("pixgraphics");

    let pixs = square_image(200, 50, 150).expect("square image");

    // ====================================================================
    // Test 1: border padding
    // ====================================================================
    let fpix = FPix::from_pix(&pixs);
    for npix in [0u32, 1, 2, 5] {
        for policy in [BorderPolicy::Replicate, BorderPolicy::Zero] {
            let padded = fpix.add_border(npix, policy);
            rp.compare_values(
                (200 + 2 * npix) as f64,
                padded.width() as f64,
                0.0,
            );
            rp.compare_values(
                (200 + 2 * npix) as f64,
                padded.height() as f64,
                0.0,
            );
            // interior is a verbatim copy
            let same_interior = (0..200).all(|y| {
                let src = fpix.row(y);
                let dst = &padded.row(y + npix)[npix as usize..(npix + 200) as usize];
                src == dst
            });
            rp.check(same_interior, "padded interior matches source");
        }
    }

    // a bright pixel at the edge shows up in the border only when replicated
    let ramp = FPix::from_pix(&gradient_image(16, 4).expect("ramp"));
    let rep = ramp.add_border(2, BorderPolicy::Replicate);
    let zero = ramp.add_border(2, BorderPolicy::Zero);
    rp.compare_values(255.0, rep.get_pixel(19, 0).unwrap_or(0.0) as f64, 0.0);
    rp.compare_values(0.0, zero.get_pixel(19, 0).unwrap_or(1.0) as f64, 0.0);
    rp.compare_values(255.0, rep.max_value() as f64, 0.0);

    // ====================================================================
    // Test 2: histogram, invert, subtract
    // ====================================================================
    let hist = pixs.gray_histogram();
    rp.compare_values(30000.0, hist[0] as f64, 0.0);
    rp.compare_values(10000.0, hist[255] as f64, 0.0);
    let inv = pixs.invert();
    rp.compare_values(30000.0, inv.gray_histogram()[255] as f64, 0.0);
    rp.compare_pix(&pixs, &inv.invert());

    let diff = pixs.subtract_gray(&inv).expect("subtract");
    rp.compare_pix(&pixs, &diff);
    let small = Pix::new(10, 10).expect("small");
    rp.check(
        matches!(
            pixs.subtract_gray(&small),
            Err(Error::IncompatibleSizes(200, 200, 10, 10))
        ),
        "size mismatch rejected",
    );

    // ====================================================================
    // Test 3: bar chart of the histogram
    // ====================================================================
    let style = BarChartStyle::default();
    let chart = Pix::render_bar_chart(&hist, &style).expect("bar chart");
    let expected_w = 256 * style.bar_width + 2 * style.margin + 1;
    let expected_h = style.plot_height + 2 * style.margin + 1;
    rp.compare_values(expected_w as f64, chart.width() as f64, 0.0);
    rp.compare_values(expected_h as f64, chart.height() as f64, 0.0);
    // two equal-ish bars: the black bar is the tallest and touches the top
    let top = style.margin;
    let bar0_x = style.margin + 1;
    rp.compare_values(
        style.bar as f64,
        chart.get_pixel(bar0_x, top).unwrap_or(0) as f64,
        0.0,
    );
    rp.check(
        Pix::render_bar_chart(&[], &style).is_err(),
        "empty series rejected",
    );
    rp.write_pix_and_check(&chart, ImageFormat::Png)
        .expect("write chart");

    // ====================================================================
    // Test 4: tiling
    // ====================================================================
    let tiles = [&pixs, &inv, &small];
    let panel = Pix::tile_horizontal(&tiles, 4, 128).expect("tile");
    rp.compare_values((200 + 4 + 200 + 4 + 10) as f64, panel.width() as f64, 0.0);
    rp.compare_values(200.0, panel.height() as f64, 0.0);
    rp.compare_values(128.0, panel.get_pixel(202, 0).unwrap_or(0) as f64, 0.0);
    rp.compare_values(255.0, panel.get_pixel(204, 0).unwrap_or(0) as f64, 0.0);
    // below the short tile the background shows through
    rp.compare_values(128.0, panel.get_pixel(410, 50).unwrap_or(0) as f64, 0.0);
    rp.check(Pix::tile_horizontal(&[], 4, 0).is_err(), "no tiles rejected");
    rp.write_pix_and_check(&panel, ImageFormat::Png)
        .expect("write panel");

    assert!(rp.cleanup(), "pixgraphics regression test failed");
}

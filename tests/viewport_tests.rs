use implicit_render::canvas::*;

#[test]
fn center_pixel_maps_to_range_center() {
    let viewport = Viewport::new((100, 100), (0, 0), (-1.0, -1.0), (1.0, 1.0));
    let (x, y) = viewport.to_math((50, 50));

    assert!(x.abs() < 1e-6, "Expected 0, got {}", x);
    assert!(y.abs() < 1e-6, "Expected 0, got {}", y);
}

#[test]
fn top_left_pixel_maps_to_range_corner() {
    let viewport = Viewport::new((100, 100), (0, 0), (-1.0, -1.0), (1.0, 1.0));
    let (x, y) = viewport.to_math((0, 0));

    assert!((x - -1.0).abs() < 1e-6, "Expected -1, got {}", x);
    assert!((y - 1.0).abs() < 1e-6, "Expected 1, got {}", y);
}

#[test]
fn y_axis_is_inverted() {
    let viewport = Viewport::new((100, 100), (0, 0), (-1.0, -1.0), (1.0, 1.0));

    let (_, y_top) = viewport.to_math((50, 0));
    let (_, y_bottom) = viewport.to_math((50, 99));

    assert!(
        y_top > y_bottom,
        "Expected mathematical y to decrease down the raster ({} vs {})",
        y_top,
        y_bottom
    );
}

#[test]
fn margin_shifts_the_drawable_region() {
    let viewport = Viewport::new((120, 120), (10, 10), (-1.0, -1.0), (1.0, 1.0));

    let (x0, y0) = viewport.to_math((10, 10));
    let (x1, y1) = viewport.to_math((110, 110));

    assert!((x0 - -1.0).abs() < 1e-6, "Expected -1, got {}", x0);
    assert!((y0 - 1.0).abs() < 1e-6, "Expected 1, got {}", y0);
    assert!((x1 - 1.0).abs() < 1e-6, "Expected 1, got {}", x1);
    assert!((y1 - -1.0).abs() < 1e-6, "Expected -1, got {}", y1);
}

#[test]
fn round_trip_recovers_the_pixel() {
    let viewport = Viewport::new((640, 480), (20, 15), (-3.0, -2.0), (5.0, 4.0));

    for pixel in [(21, 16), (100, 250), (333, 77), (619, 464)].iter() {
        let math = viewport.to_math(*pixel);
        let (x, y) = viewport.to_pixel(math);

        assert!(
            (x - pixel.0 as f32).abs() < 1e-2,
            "Expected x {}, got {}",
            pixel.0,
            x
        );
        assert!(
            (y - pixel.1 as f32).abs() < 1e-2,
            "Expected y {}, got {}",
            pixel.1,
            y
        );
    }
}

#[test]
fn wider_range_means_coarser_pixels() {
    let narrow = Viewport::new((100, 100), (0, 0), (-1.0, -1.0), (1.0, 1.0));
    let wide = Viewport::new((100, 100), (0, 0), (-2.0, -1.0), (2.0, 1.0));

    let narrow_footprint = narrow.pixel_footprint();
    let wide_footprint = wide.pixel_footprint();

    assert!(
        wide_footprint.0 > narrow_footprint.0,
        "Expected a wider range to make each pixel cover more mathematical space ({} vs {})",
        wide_footprint.0,
        narrow_footprint.0
    );
}

#[test]
fn margin_swallowing_the_canvas_is_degenerate() {
    let viewport = Viewport::new((100, 100), (50, 0), (-1.0, -1.0), (1.0, 1.0));

    assert!(viewport.validate() == Err(RenderError::DegenerateCanvas));
}

#[test]
fn oversized_margin_is_degenerate() {
    let viewport = Viewport::new((100, 100), (0, 70), (-1.0, -1.0), (1.0, 1.0));

    assert!(viewport.validate() == Err(RenderError::DegenerateCanvas));
}

#[test]
fn empty_range_is_degenerate() {
    let viewport = Viewport::new((100, 100), (0, 0), (2.0, -1.0), (2.0, 1.0));

    assert!(viewport.validate() == Err(RenderError::DegenerateCanvas));
}

#[test]
fn sensible_viewport_validates() {
    let viewport = Viewport::new((100, 100), (10, 10), (-1.0, -1.0), (1.0, 1.0));

    assert!(viewport.validate() == Ok(()));
}

#[test]
fn ndc_transform_maps_range_corners_to_unit_square() {
    let viewport = Viewport::new((100, 100), (8, 8), (-2.0, -1.0), (4.0, 3.0));
    let to_ndc = viewport.to_ndc().unwrap();

    let (x0, y0) = to_ndc.transform_point(-2.0, -1.0);
    let (x1, y1) = to_ndc.transform_point(4.0, 3.0);
    let (cx, cy) = to_ndc.transform_point(1.0, 1.0);

    assert!((x0 - -1.0).abs() < 1e-6, "Expected -1, got {}", x0);
    assert!((y0 - -1.0).abs() < 1e-6, "Expected -1, got {}", y0);
    assert!((x1 - 1.0).abs() < 1e-6, "Expected 1, got {}", x1);
    assert!((y1 - 1.0).abs() < 1e-6, "Expected 1, got {}", y1);
    assert!(cx.abs() < 1e-6, "Expected 0, got {}", cx);
    assert!(cy.abs() < 1e-6, "Expected 0, got {}", cy);
}

#[test]
fn ndc_transform_needs_a_range() {
    let viewport = Viewport::new((100, 100), (0, 0), (1.0, -1.0), (1.0, 1.0));

    assert!(viewport.to_ndc() == Err(RenderError::DegenerateCanvas));
}

#[test]
fn scale_range_zooms_around_the_center() {
    let mut viewport = Viewport::new((100, 100), (0, 0), (-1.0, -1.0), (1.0, 1.0));
    viewport.scale_range((2.0, 3.0));

    assert!((viewport.range_start.0 - -2.0).abs() < 1e-6, "Got {:?}", viewport.range_start);
    assert!((viewport.range_end.0 - 2.0).abs() < 1e-6, "Got {:?}", viewport.range_end);
    assert!((viewport.range_start.1 - -3.0).abs() < 1e-6, "Got {:?}", viewport.range_start);
    assert!((viewport.range_end.1 - 3.0).abs() < 1e-6, "Got {:?}", viewport.range_end);
}

#[test]
fn offset_range_pans_the_window() {
    let mut viewport = Viewport::new((100, 100), (0, 0), (-1.0, -1.0), (1.0, 1.0));
    viewport.offset_range((0.5, -1.0));

    assert!((viewport.range_start.0 - -0.5).abs() < 1e-6, "Got {:?}", viewport.range_start);
    assert!((viewport.range_end.0 - 1.5).abs() < 1e-6, "Got {:?}", viewport.range_end);
    assert!((viewport.range_start.1 - -2.0).abs() < 1e-6, "Got {:?}", viewport.range_start);
    assert!((viewport.range_end.1 - 0.0).abs() < 1e-6, "Got {:?}", viewport.range_end);
}

#[test]
fn scale_range_rejects_non_finite_updates() {
    let mut viewport = Viewport::new((100, 100), (0, 0), (-3.0e38, -1.0), (3.0e38, 1.0));
    viewport.scale_range((2.0, 2.0));

    assert!(
        viewport.range_start.0 == -3.0e38 && viewport.range_end.0 == 3.0e38,
        "Expected the range to stay put, got {:?}..{:?}",
        viewport.range_start,
        viewport.range_end
    );
}

use euclid::{Angle, Rotation3D, Size2D, point2, point3, vec3};
use pretty_assertions::assert_eq;
use rand::{Rng as _, SeedableRng as _};
use rand_xoshiro::Xoshiro256Plus;

use super::*;
use crate::math::{EyeVector, FreeVector};

fn pose(
    axis: [FreeCoordinate; 3],
    angle_degrees: FreeCoordinate,
    position: FreeVector,
) -> ViewTransform {
    ViewTransform {
        rotation: Rotation3D::around_axis(
            EyeVector::from(axis).normalize(),
            Angle::degrees(angle_degrees),
        ),
        translation: position,
    }
}

#[test]
fn camera_bad_viewport_doesnt_panic() {
    let camera = Camera::new(
        ViewOptions::default(),
        Viewport {
            nominal_size: Size2D::new(0.0, 0.0),
            framebuffer_size: Size2D::new(0, 0),
        },
    );
    // Degenerate viewports produce center rays rather than NaN.
    let ray = camera.project_nominal_into_world(point2(10.0, 10.0));
    assert_eq!(ray, camera.look_ray());
    camera.view_frustum();
}

#[test]
fn set_options_repairs_values() {
    let mut camera = Camera::new(ViewOptions::default(), Viewport::ARBITRARY);
    camera.set_options(ViewOptions {
        fov_y: notnan!(1000.0),
        ..ViewOptions::default()
    });
    assert_eq!(camera.options().fov_y.into_inner(), 179.0);
}

#[test]
fn camera_view_position() {
    let mut camera = Camera::new(ViewOptions::default(), Viewport::ARBITRARY);
    camera.set_view_transform(pose([0., 1., 0.], 45.0, vec3(1.0, 2.0, 3.0)));
    assert_eq!(camera.view_position(), point3(1.0, 2.0, 3.0));
}

#[test]
fn center_projection_is_look_ray() {
    let mut camera = Camera::new(ViewOptions::default(), Viewport::ARBITRARY);
    camera.set_view_transform(pose([0.3, 1.0, 0.2], 40.0, vec3(5.0, 0.0, -2.0)));
    assert_eq!(
        camera.project_ndc_into_world(point2(0.0, 0.0)),
        camera.look_ray()
    );
}

#[test]
fn view_frustum() {
    let camera = Camera::new(
        ViewOptions {
            fov_y: notnan!(90.0),
            view_distance: notnan!(100.0),
        },
        Viewport::with_scale(1.0, Size2D::new(10, 5)),
    );
    // tan(45°) is not exactly 1.0 in floating point, so compute the expected
    // values with the same operations the camera uses.
    let tan_half = 45.0f64.to_radians().tan();
    let y_near = tan_half * (1. / 32.);
    let x_near = y_near * 2.0;
    let z_near = -1. / 32.;
    let y_far = tan_half * 100.0;
    let x_far = y_far * 2.0;
    let z_far = -100.0;
    assert_eq!(
        camera.view_frustum(),
        FrustumPoints {
            lbn: point3(-x_near, -y_near, z_near),
            ltn: point3(-x_near, y_near, z_near),
            rbn: point3(x_near, -y_near, z_near),
            rtn: point3(x_near, y_near, z_near),
            lbf: point3(-x_far, -y_far, z_far),
            ltf: point3(-x_far, y_far, z_far),
            rbf: point3(x_far, -y_far, z_far),
            rtf: point3(x_far, y_far, z_far),
        }
    );
}

#[test]
fn frustum_slice_matches_corner_projections() {
    let mut camera = Camera::new(
        ViewOptions {
            fov_y: notnan!(60.0),
            view_distance: notnan!(50.0),
        },
        Viewport::with_scale(1.0, Size2D::new(16, 9)),
    );
    camera.set_view_transform(pose([0.2, 1.0, -0.4], 120.0, vec3(3.0, -1.0, 4.0)));

    let slice = camera.frustum_slice(50.0).unwrap();
    for (ndc, corner) in [
        (point2(-1.0, -1.0), slice.lb),
        (point2(-1.0, 1.0), slice.lt),
        (point2(1.0, -1.0), slice.rb),
        (point2(1.0, 1.0), slice.rt),
    ] {
        let endpoint = camera.project_ndc_into_world(ndc).unit_endpoint();
        assert!(
            (endpoint - corner).length() < 1e-9,
            "corner mismatch for {ndc:?}: {endpoint:?} vs {corner:?}"
        );
    }
}

#[test]
fn frustum_slice_rejects_bad_depths() {
    let camera = Camera::new(ViewOptions::default(), Viewport::ARBITRARY);
    assert_eq!(
        camera.frustum_slice(0.0),
        Err(FrustumError { depth: 0.0 })
    );
    assert_eq!(
        camera.frustum_slice(-5.0),
        Err(FrustumError { depth: -5.0 })
    );
    assert!(camera.frustum_slice(FreeCoordinate::INFINITY).is_err());
    assert!(camera.frustum_slice(FreeCoordinate::NAN).is_err());
}

#[test]
fn normalize_nominal_point() {
    let viewport = Viewport::with_scale(2.0, Size2D::new(200, 100));
    assert_eq!(viewport.nominal_size, Size2D::new(100.0, 50.0));
    assert_eq!(
        viewport.normalize_nominal_point(point2(50.0, 25.0)),
        point2(0.0, 0.0)
    );
    assert_eq!(
        viewport.normalize_nominal_point(point2(0.0, 0.0)),
        point2(-1.0, 1.0)
    );
    assert_eq!(
        viewport.normalize_nominal_point(point2(100.0, 50.0)),
        point2(1.0, -1.0)
    );
}

/// Any projected ray, followed out to a given depth, should land on the
/// frustum slice at that depth at the matching interpolation coordinates.
#[test]
fn projection_agrees_with_slice_interpolation() {
    let mut rng = Xoshiro256Plus::seed_from_u64(475);
    for _ in 0..100 {
        let mut camera = Camera::new(
            ViewOptions {
                fov_y: notnan!(70.0),
                view_distance: notnan!(200.0),
            },
            Viewport::with_scale(1.0, Size2D::new(300, 200)),
        );
        camera.set_view_transform(pose(
            [
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(1.0..2.0),
            ],
            rng.random_range(-180.0..180.0),
            vec3(
                rng.random_range(-100.0..100.0),
                rng.random_range(-100.0..100.0),
                rng.random_range(-100.0..100.0),
            ),
        ));
        let ndc = point2(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0));
        let depth = rng.random_range(0.1..500.0);

        let ray = camera.project_ndc_into_world(ndc);
        let at_depth = ray.origin
            + ray.direction * (depth / camera.options().view_distance.into_inner());
        let expected = camera
            .frustum_slice(depth)
            .unwrap()
            .point_at((ndc.x + 1.0) / 2.0, (1.0 - ndc.y) / 2.0);
        assert!(
            (at_depth - expected).length() <= 1e-6 * depth.max(1.0),
            "mismatch: {at_depth:?} vs {expected:?}"
        );
    }
}

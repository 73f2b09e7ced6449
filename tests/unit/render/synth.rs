use super::*;
use crate::foundation::core::Canvas;

fn small_params() -> RenderParameters {
    RenderParameters {
        canvas: Canvas {
            width: 64,
            height: 64,
        },
        ..RenderParameters::byte_preset()
    }
}

#[test]
fn throb_exponent_at_zero() {
    let e = throb_exponent(0.0, 1.0);
    assert!((e - (0.4 + 0.1f64.sin() * 0.2)).abs() < 1e-15);
    for t in [0.0, 0.7, 3.3, 100.0] {
        let e = throb_exponent(t, 2.0);
        assert!((0.2..=0.6).contains(&e));
    }
}

#[test]
fn mask_is_clamped() {
    assert_eq!(mask_from_shape(1.0), 1.0);
    assert_eq!(mask_from_shape(0.0), 1.0);
    assert_eq!(mask_from_shape(-1.0), 0.0);
    let m = mask_from_shape(-0.5);
    assert!(m > 0.0 && m < 1e-14);
}

#[test]
fn mask_stays_in_unit_interval_across_pixels_and_times() {
    let p = small_params();
    for t in [0.0, 0.35, 1.9, 17.25] {
        let field = SpiralField::at(&p, t);
        for x in (0..64).step_by(3) {
            for y in (0..64).step_by(5) {
                let m = field.sample(x, y).mask;
                assert!((0.0..=1.0).contains(&m), "mask {m} at ({x},{y}) t={t}");
            }
        }
    }
}

#[test]
fn center_pixel_is_well_defined() {
    let p = small_params();
    let s = SpiralField::at(&p, 0.0).sample(32, 32);
    assert_eq!(s.angle, 0.0);
    assert_eq!(s.dist, 0.0);
    assert_eq!(s.shape, 0.0);
    assert_eq!(s.mask, 1.0);
}

#[test]
fn point_reflected_pixels_share_dist_and_negate_shape() {
    let p = small_params();
    for t in [0.0, 0.4, 2.2] {
        let field = SpiralField::at(&p, t);
        let a = field.sample(1, 1);
        let b = field.sample(63, 63);
        assert_eq!(a.dist, b.dist);
        assert!((a.shape + b.shape).abs() < 1e-9, "t={t}");
    }
}

#[test]
fn blend_endpoints() {
    let s = [0.2, 0.4, 0.6];
    let bg = [1.0, 0.0, 0.5];
    assert_eq!(blend(s, bg, 0.0), s);
    assert_eq!(blend(s, bg, 1.0), bg);
}

#[test]
fn render_is_deterministic() {
    let synth = SpiralSynth::new(small_params()).unwrap();
    let a = synth.render(1.25).unwrap();
    let b = synth.render(1.25).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, synth.render(0.0).unwrap());
}

#[test]
fn render_rejects_non_finite_time() {
    let synth = SpiralSynth::new(small_params()).unwrap();
    assert!(matches!(synth.render(f64::NAN), Err(SpiralError::Render(_))));
}

#[test]
fn new_validates_parameters() {
    let mut p = small_params();
    p.canvas.width = 0;
    assert!(SpiralSynth::new(p).unwrap_err().is_configuration());
}

#[test]
fn non_square_canvas_has_declared_dimensions() {
    let mut p = small_params();
    p.canvas = Canvas {
        width: 40,
        height: 24,
    };
    let synth = SpiralSynth::new(p).unwrap();
    assert_eq!(synth.dimensions(), (40, 24));
    let f = synth.render_at(0.5).unwrap();
    assert_eq!((f.width, f.height), (40, 24));
    assert_eq!(f.data.len(), 40 * 24 * 3);
}

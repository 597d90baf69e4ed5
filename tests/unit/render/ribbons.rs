use super::*;
use crate::render::backend::RecordingRenderer;

fn sized() -> RibbonLayer {
    let mut layer = RibbonLayer::new(RibbonParams::default()).unwrap();
    layer.resize(Viewport::new(1200.0, 800.0).unwrap());
    layer
}

#[test]
fn one_second_advances_forty_five_phase_units() {
    let mut layer = sized();
    layer.advance(1.0);
    assert!((layer.time() - 45.0).abs() < 1e-9);
    assert_eq!(layer.center(), Point::new(600.0, 400.0));
}

#[test]
fn draw_keeps_topology_and_applies_alpha() {
    let mut r = RecordingRenderer::new();
    let mut layer = sized();
    layer.ensure_created(&mut r).unwrap();
    layer.ensure_created(&mut r).unwrap();
    assert_eq!(layer.handles().len(), 3);
    assert_eq!(r.objects().len(), 3);

    let before = r.object(layer.handles()[0]).unwrap().desc.topology();
    layer.advance(0.5);
    layer.draw(&mut r).unwrap();
    let after = r.object(layer.handles()[0]).unwrap();
    assert_eq!(after.desc.topology(), before);
    assert_eq!(after.param(MaterialParam::Opacity), Some(0.4));
}

#[test]
fn gradient_follows_pointer() {
    let mut layer = sized();
    assert_eq!(layer.gradient_angle(), 0.0);
    layer.pointer_moved(300.0);
    assert_eq!(layer.gradient_angle(), 90.0);
    assert_eq!(layer.gradient(0)[0].offset, 0.0);
}

#[test]
fn invalid_params_are_rejected() {
    let params = RibbonParams {
        segments: 1,
        ..RibbonParams::default()
    };
    assert!(RibbonLayer::new(params).is_err());
}

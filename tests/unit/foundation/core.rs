use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(matches!(Fps::new(0, 1), Err(MotionError::Validation(_))));
    assert!(matches!(Fps::new(30, 0), Err(MotionError::Validation(_))));
}

#[test]
fn fps_frames_to_secs() {
    let fps = Fps::new(60, 1).unwrap();
    assert_eq!(fps.as_f64(), 60.0);
    assert_eq!(fps.frames_to_secs(120), 2.0);
}

#[test]
fn secs_to_frames_rounds_up() {
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(fps.secs_to_frames_ceil(1.0), 30);
    assert_eq!(fps.secs_to_frames_ceil(1.01), 31);
    assert_eq!(fps.secs_to_frames_ceil(0.0), 0);
}

#[test]
fn frame_index_orders_naturally() {
    assert!(FrameIndex(2) < FrameIndex(3));
    assert_eq!(FrameIndex(7).max(FrameIndex(4)), FrameIndex(7));
}

use super::*;

#[test]
fn timed_two_seconds_at_ten_fps() {
    let s = SampleSchedule::timed(2.0, 10);
    let times = s.times().unwrap();
    let expected = [
        0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.1, 1.2, 1.3, 1.4, 1.5, 1.6, 1.7,
        1.8, 1.9,
    ];
    assert_eq!(times.len(), 20);
    assert_eq!(times, expected);
    assert_eq!(s.encode_fps().unwrap(), Fps::integer(10).unwrap());
}

#[test]
fn timed_frame_count_truncates() {
    assert_eq!(SampleSchedule::timed(0.25, 10).frame_count().unwrap(), 2);
    assert_eq!(SampleSchedule::timed(6.0, 30).frame_count().unwrap(), 180);
}

#[test]
fn legacy_schedule_is_sixty_tenth_steps() {
    let times = SampleSchedule::Legacy.times().unwrap();
    assert_eq!(times.len(), 60);
    assert_eq!(times[0], 0.0);
    assert_eq!(times[1], 0.1);
    assert_eq!(times[59], 59.0 * 0.1);
    assert!(times.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(
        SampleSchedule::Legacy.encode_fps().unwrap(),
        Fps::integer(30).unwrap()
    );
}

#[test]
fn invalid_timed_schedules_are_configuration_errors() {
    for s in [
        SampleSchedule::timed(1.0, 0),
        SampleSchedule::timed(-1.0, 30),
        SampleSchedule::timed(f64::NAN, 30),
        SampleSchedule::timed(f64::INFINITY, 30),
        SampleSchedule::timed(0.01, 30),
    ] {
        assert!(s.times().unwrap_err().is_configuration(), "{s:?}");
    }
}

#[test]
fn oversized_timed_schedules_are_rejected_before_allocating() {
    for s in [
        SampleSchedule::timed(1e300, 30),
        SampleSchedule::timed(f64::MAX, u32::MAX),
        SampleSchedule::timed(MAX_FRAME_COUNT as f64 + 1.0, 1),
    ] {
        let err = s.times().unwrap_err();
        assert!(err.is_configuration(), "{s:?}");
        assert!(err.to_string().contains("exceeds"));
    }
    assert_eq!(
        SampleSchedule::timed(MAX_FRAME_COUNT as f64, 1)
            .frame_count()
            .unwrap(),
        MAX_FRAME_COUNT
    );
}

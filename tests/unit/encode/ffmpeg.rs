use super::*;

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        fps: Fps::integer(30).unwrap(),
    }
}

#[test]
fn config_validation_catches_bad_values() {
    assert!(validate_sink_config(&cfg(0, 10)).unwrap_err().is_configuration());
    assert!(validate_sink_config(&cfg(11, 10)).unwrap_err().is_configuration());
    assert!(validate_sink_config(&cfg(10, 7)).is_err());
    assert!(validate_sink_config(&cfg(10, 10)).is_ok());
}

#[test]
fn odd_size_is_rejected_before_spawning() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("target/ffmpeg_unit/odd.mp4"));
    assert!(sink.begin(cfg(9, 9)).unwrap_err().is_configuration());
}

#[test]
fn push_and_end_before_begin_fail() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("target/ffmpeg_unit/unstarted.mp4"));
    let frame = FrameRGB::new(2, 2, vec![0; 12]).unwrap();
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());
    assert!(sink.end().is_err());
}

#[test]
fn streams_frames_when_ffmpeg_is_available() {
    if !is_ffmpeg_on_path() {
        return;
    }
    let out = PathBuf::from("target").join("ffmpeg_unit").join("stream.mp4");
    let _ = std::fs::remove_file(&out);

    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&out));
    sink.begin(cfg(16, 16)).unwrap();
    for i in 0..3u8 {
        let frame = FrameRGB::new(16, 16, vec![i * 40; 16 * 16 * 3]).unwrap();
        sink.push_frame(FrameIndex(u64::from(i)), &frame).unwrap();
    }
    sink.end().unwrap();
    assert!(out.exists());
}

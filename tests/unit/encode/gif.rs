use super::*;
use image::AnimationDecoder as _;
use std::path::PathBuf;

fn solid(w: u32, h: u32, rgb: [u8; 3]) -> FrameRGB {
    let data = rgb.iter().copied().cycle().take((w * h * 3) as usize).collect();
    FrameRGB::new(w, h, data).unwrap()
}

#[test]
fn writes_all_frames_in_order() {
    let dir = PathBuf::from("target").join("gif_unit");
    let path = dir.join("three.gif");
    let _ = std::fs::remove_file(&path);

    let frames = vec![
        solid(8, 4, [255, 0, 0]),
        solid(8, 4, [0, 255, 0]),
        solid(8, 4, [0, 0, 255]),
    ];
    save_gif(&path, &frames, Fps::integer(10).unwrap()).unwrap();

    let file = std::io::BufReader::new(File::open(&path).unwrap());
    let decoded = image::codecs::gif::GifDecoder::new(file)
        .unwrap()
        .into_frames()
        .collect_frames()
        .unwrap();
    assert_eq!(decoded.len(), 3);
    assert_eq!(decoded[0].buffer().dimensions(), (8, 4));
    assert_eq!(decoded[0].buffer().get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(decoded[2].buffer().get_pixel(7, 3).0, [0, 0, 255, 255]);
}

#[test]
fn empty_and_mismatched_sequences_are_encoding_errors() {
    let path = PathBuf::from("target").join("gif_unit").join("bad.gif");
    let fps = Fps::integer(10).unwrap();
    assert!(matches!(
        save_gif(&path, &[], fps),
        Err(SpiralError::Encoding(_))
    ));
    let frames = vec![solid(2, 2, [0, 0, 0]), solid(4, 2, [0, 0, 0])];
    assert!(matches!(
        save_gif(&path, &frames, fps),
        Err(SpiralError::Encoding(_))
    ));
}

use std::io::Write;

use colormood_core::color::rgb_to_lab8;
use colormood_core::{
    ColorMoodError, DownloadLink, Filter, HsvTemperatureFilter, HsvTemperatureParams,
    LabShiftFilter, LabShiftParams, MoodImage, MoodSession, Pipeline, PresetCatalog, encode_png,
};

/// A 16×12 image covering hues, saturations, and brightness levels.
fn gradient_image() -> MoodImage {
    let (width, height) = (16_u32, 12_u32);
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            data.push((x * 17) as u8);
            data.push((y * 23) as u8);
            data.push(((x + y) * 9) as u8);
        }
    }
    MoodImage::from_raw(width, height, data).expect("gradient dimensions")
}

fn assert_within_one(actual: &MoodImage, expected: &MoodImage) {
    assert_eq!(actual.dimensions(), expected.dimensions());
    for (i, (a, e)) in actual.pixels.iter().zip(&expected.pixels).enumerate() {
        for c in 0..3 {
            let diff = (i16::from(a[c]) - i16::from(e[c])).abs();
            assert!(diff <= 1, "pixel {i} channel {c}: {a:?} vs {e:?}");
        }
    }
}

#[test]
fn hsv_identity_preserves_image() {
    let image = gradient_image();
    let out = HsvTemperatureFilter.apply(&image, &HsvTemperatureParams::default());
    assert_within_one(&out, &image);
}

#[test]
fn lab_identity_preserves_image() {
    let image = gradient_image();
    let out = LabShiftFilter.apply(&image, &LabShiftParams::default());
    assert_within_one(&out, &image);
}

#[test]
fn hue_shift_of_full_turn_matches_no_shift() {
    let image = gradient_image();
    let base = HsvTemperatureParams {
        saturation_scale: 1.3,
        ..Default::default()
    };
    let unshifted = HsvTemperatureFilter.apply(&image, &base);
    let wrapped = HsvTemperatureFilter.apply(
        &image,
        &HsvTemperatureParams {
            hue_shift: 180,
            ..base
        },
    );
    assert_within_one(&wrapped, &unshifted);
}

#[test]
fn warm_and_cool_shifts_are_symmetric() {
    let image = MoodImage::filled(4, 4, [100, 120, 140]);
    let warm = HsvTemperatureParams {
        warm_shift: 25,
        ..Default::default()
    };
    let cool = HsvTemperatureParams {
        warm_shift: -25,
        ..Default::default()
    };

    let warmed = HsvTemperatureFilter.apply(&image, &warm).pixels[0];
    let cooled = HsvTemperatureFilter.apply(&image, &cool).pixels[0];

    let red_net = (i16::from(warmed[0]) - 100) + (i16::from(cooled[0]) - 100);
    let blue_net = (i16::from(warmed[2]) - 140) + (i16::from(cooled[2]) - 140);
    assert_eq!(warmed, [125, 120, 115]);
    assert_eq!(red_net, 0);
    assert_eq!(blue_net, 0);
}

#[test]
fn every_pipeline_keeps_shape_for_extreme_parameters() {
    let image = gradient_image();
    let hsv_cases = [
        HsvTemperatureParams {
            hue_shift: -90,
            saturation_scale: 0.0,
            brightness_scale: 2.0,
            contrast_scale: 2.0,
            warm_shift: 50,
        },
        HsvTemperatureParams {
            hue_shift: 1_000,
            saturation_scale: 50.0,
            brightness_scale: -3.0,
            contrast_scale: -8.0,
            warm_shift: -10_000,
        },
    ];
    for params in hsv_cases {
        let out = HsvTemperatureFilter.apply(&image, &params);
        assert_eq!(out.shape(), image.shape());
        assert_eq!(out.pixels.len(), image.pixels.len());
    }

    for shift in [-500, -50, 0, 50, 500] {
        let params = LabShiftParams {
            l_shift: shift,
            a_shift: -shift,
            b_shift: shift,
        };
        let out = LabShiftFilter.apply(&image, &params);
        assert_eq!(out.shape(), image.shape());
    }
}

#[test]
fn extreme_brightness_saturates_instead_of_wrapping() {
    let image = MoodImage::filled(2, 2, [250, 250, 250]);
    let params = HsvTemperatureParams {
        brightness_scale: 2.0,
        contrast_scale: 2.0,
        warm_shift: 50,
        ..Default::default()
    };
    let out = HsvTemperatureFilter.apply(&image, &params);
    assert_eq!(out.pixels[0], [255, 255, 205]);
}

#[test]
fn warm_memory_preset_on_mid_gray() {
    let catalog = PresetCatalog::from_json(
        r#"{ "warm_memory": { "hue": 10, "saturation": 1.2, "brightness": 0.9, "contrast": 1.1, "warm_shift": 15 } }"#,
    )
    .unwrap();
    let mut session = MoodSession::new(&catalog, "warm_memory").unwrap();
    let image = MoodImage::filled(8, 8, [128, 128, 128]);

    let out = session
        .render(&catalog, Pipeline::HsvTemperature, &image)
        .unwrap();

    assert_eq!(out.dimensions(), (8, 8));
    let [r, g, b] = out.pixels[0];
    assert!(out.pixels.iter().all(|px| *px == [r, g, b]), "flat input stays flat");
    // V = 128 × 0.9 = 115.2 -> 115, then 128 + 1.1 × (115 − 128) = 113.7 -> 114
    assert_eq!(g, 114, "green carries the post-contrast gray");
    assert_eq!(r, g + 15);
    assert_eq!(b, g - 15);
}

#[test]
fn lab_darkening_white_stays_neutral() {
    let image = MoodImage::filled(1, 1, [255, 255, 255]);
    let params = LabShiftParams {
        l_shift: -30,
        a_shift: 0,
        b_shift: 0,
    };
    let out = LabShiftFilter.apply(&image, &params).pixels[0];

    assert!(out.iter().all(|&c| c < 255), "output should be darker: {out:?}");
    let spread = out.iter().max().unwrap() - out.iter().min().unwrap();
    assert!(spread <= 1, "output should stay gray: {out:?}");

    let lab = rgb_to_lab8(out);
    assert!((lab[1] - 128.0).abs() <= 1.0, "a drifted: {}", lab[1]);
    assert!((lab[2] - 128.0).abs() <= 1.0, "b drifted: {}", lab[2]);
}

#[test]
fn catalog_loads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "dusk": {{ "warm_shift": 12, "l_shift": -8 }} }}"#).unwrap();

    let catalog = PresetCatalog::load(file.path()).unwrap();
    assert_eq!(catalog.len(), 1);
    let params = catalog.require("dusk").unwrap().params();
    assert_eq!(params.hsv.warm_shift, 12);
    assert_eq!(params.lab.l_shift, -8);
}

#[test]
fn missing_catalog_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("color_moods.json");
    match PresetCatalog::load(&path) {
        Err(ColorMoodError::PresetCatalogLoad { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected PresetCatalogLoad, got {other:?}"),
    }
}

#[test]
fn upload_filter_download_round_trip() {
    let source = gradient_image();
    let upload = encode_png(&source).unwrap();

    let catalog = PresetCatalog::from_json(r#"{ "faded": { "saturation": 0.5, "l_shift": 5 } }"#)
        .unwrap();
    let mut session = MoodSession::new(&catalog, "faded").unwrap();
    let decoded = MoodImage::decode(&upload).unwrap();
    assert_eq!(decoded, source);

    for pipeline in Pipeline::all() {
        let filtered = session.render(&catalog, *pipeline, &decoded).unwrap();
        let link = DownloadLink::from_image(&filtered).unwrap();
        assert_eq!(link.filename, "colormood_output.png");

        let downloaded = MoodImage::decode(&link.png_bytes().unwrap()).unwrap();
        assert_eq!(downloaded, filtered);
    }
}

#[test]
fn bundled_catalog_is_valid() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../color_moods.json");
    let catalog = PresetCatalog::load(&path).unwrap();
    assert!(!catalog.is_empty());
    for mood in catalog.names() {
        let params = catalog.require(mood).unwrap().params();
        assert!(params.check_ranges().is_ok(), "{mood} is outside the control ranges");
    }
}

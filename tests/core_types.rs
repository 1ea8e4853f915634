use pixfind::{Color, ImageView, OwnedImage, PixFindError};

#[test]
fn image_view_rejects_invalid_dimensions() {
    let data = [0u8; 4];

    let err = ImageView::from_slice(&data, 0, 1).err().unwrap();
    assert_eq!(
        err,
        PixFindError::InvalidDimensions {
            width: 0,
            height: 1,
        }
    );

    let err = ImageView::from_slice(&data, 1, 0).err().unwrap();
    assert_eq!(
        err,
        PixFindError::InvalidDimensions {
            width: 1,
            height: 0,
        }
    );
}

#[test]
fn image_view_rejects_invalid_stride() {
    let data = [0u8; 8];

    let err = ImageView::new(&data, 4, 1, 3).err().unwrap();
    assert_eq!(
        err,
        PixFindError::InvalidStride {
            width: 4,
            stride: 3,
        }
    );
}

#[test]
fn image_view_rejects_small_buffer() {
    let data = [Color::BLACK; 3];

    let err = ImageView::new(&data, 2, 2, 2).err().unwrap();
    assert_eq!(err, PixFindError::BufferTooSmall { needed: 4, got: 3 });
}

#[test]
fn image_view_roi_matches_expected_values() {
    let data: Vec<u8> = (0u8..16).collect();
    let view = ImageView::from_slice(&data, 4, 4).unwrap();
    assert_eq!(view.stride(), 4);
    assert_eq!(view.as_slice(), data.as_slice());

    let roi = view.roi(1, 1, 2, 2).unwrap();
    assert_eq!(roi.size(), (2, 2));
    assert_eq!(roi.stride(), 4);
    assert_eq!(roi.row(0).unwrap(), &[5u8, 6u8]);
    assert_eq!(roi.row(1).unwrap(), &[9u8, 10u8]);
    assert_eq!(roi.get(0, 0).copied(), Some(5u8));
    assert!(roi.get(2, 0).is_none());

    let err = view.roi(3, 3, 2, 2).err().unwrap();
    assert_eq!(
        err,
        PixFindError::RoiOutOfBounds {
            x: 3,
            y: 3,
            width: 2,
            height: 2,
            img_width: 4,
            img_height: 4,
        }
    );
}

#[test]
fn owned_image_requires_exact_length() {
    let err = OwnedImage::new(vec![Color::WHITE; 5], 2, 2).err().unwrap();
    assert_eq!(
        err,
        PixFindError::InvalidDimensions {
            width: 2,
            height: 2
        }
    );

    let err = OwnedImage::new(vec![Color::WHITE; 3], 2, 2).err().unwrap();
    assert_eq!(err, PixFindError::BufferTooSmall { needed: 4, got: 3 });

    let img = OwnedImage::new(vec![Color::WHITE; 4], 2, 2).unwrap();
    assert_eq!(img.view().size(), (2, 2));
    assert_eq!(img.into_data().len(), 4);
}

#[test]
fn color_conversions_round_trip_channels() {
    let c = Color::from([1u8, 2, 3, 4]);
    assert_eq!(c, Color::rgba(1, 2, 3, 4));
    assert_eq!(<[u8; 4]>::from(c), [1, 2, 3, 4]);
    assert_eq!(Color::from([9u8, 8, 7]).a, 255);
}

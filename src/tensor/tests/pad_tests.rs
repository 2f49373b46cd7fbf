use crate::assert_panic;
use crate::tensor::Tensor;
use approx::assert_abs_diff_eq;

#[test]
fn test_pad_spatial() {
    let x = Tensor::new(&[1., 2., 3., 4.], &[1, 1, 2, 2]);
    let padded = x.pad_spatial(1);
    assert_eq!(padded.shape(), &[1, 1, 4, 4]);
    #[rustfmt::skip]
    let expected = Tensor::new(&[
        0., 0., 0., 0.,
        0., 1., 2., 0.,
        0., 3., 4., 0.,
        0., 0., 0., 0.,
    ], &[1, 1, 4, 4]);
    assert_eq!(padded, expected);
}

#[test]
fn test_crop_spatial_inverts_pad() {
    let x = Tensor::linspace(-1., 1., &[2, 3, 4, 5]);
    for pad in 0..3 {
        let padded = x.pad_spatial(pad);
        assert_eq!(padded.shape(), &[2, 3, 4 + 2 * pad, 5 + 2 * pad]);
        assert_abs_diff_eq!(padded.sum(), x.sum(), epsilon = 1e-12);
        assert_eq!(padded.crop_spatial(pad), x);
    }
}

#[test]
fn test_zero_pad_is_identity() {
    // pad=0时裁剪不会得到空数组
    let x = Tensor::ones(&[1, 2, 3, 3]);
    assert_eq!(x.crop_spatial(0), x);
    assert_eq!(x.pad_spatial(0), x);
}

#[test]
fn test_pad_requires_4d() {
    assert_panic!(Tensor::zeros(&[3, 3]).pad_spatial(1));
    assert_panic!(Tensor::zeros(&[1, 1, 1, 3]).crop_spatial(1));
}

use crate::tensor::Tensor;
use std::fmt::Write;

#[test]
fn test_print_matrix() {
    let tensor = Tensor::new(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]);
    let mut buffer = String::new();
    write!(&mut buffer, "{}", tensor).unwrap();
    assert_eq!(
        buffer,
        "[[  1.000000,   2.000000,   3.000000], \n [  4.000000,   5.000000,   6.000000]]\n形状: [2, 3]\n"
    );
}

#[test]
fn test_print_vector() {
    let tensor = Tensor::new(&[-0.5, 0.25], &[2]);
    assert_eq!(
        tensor.to_string(),
        "[ -0.500000,   0.250000]\n形状: [2]\n"
    );
}

#[test]
fn test_print_high_rank_summary() {
    let tensor = Tensor::zeros(&[2, 3, 4, 4]);
    assert_eq!(
        tensor.to_string(),
        "<对于阶数大于二（rank>2）的张量（形状：[2, 3, 4, 4]）无法展示具体数据>\n"
    );
}

#[test]
fn test_print_rank_zero() {
    let tensor = Tensor::new(&[1.5], &[]);
    assert_eq!(tensor.to_string(), "  1.500000\n形状: []\n");
}

//! # Naive CNN
//!
//! 卷积神经网络各层的朴素实现：affine、ReLU、dropout、卷积、最大池化五种层的前向/反向传播，
//! 以及多分类SVM与softmax两种损失函数。
//! 卷积与池化刻意保留最直接的嵌套循环写法，便于与数值梯度逐元素对照。
//!

pub mod errors;
pub mod layers;
pub mod random;
pub mod tensor;
pub mod utils;

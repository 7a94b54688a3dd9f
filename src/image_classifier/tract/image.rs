use crate::image_classifier::models::model_config::ModelConfig;
use image::{imageops, DynamicImage};
use tract_onnx::prelude::*;

pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, Box<dyn std::error::Error + Send + Sync>> {
    let image = image::load_from_memory(bytes)?;
    Ok(image)
}

/// Scales to cover `width` x `height` and center-crops the overflow, so the
/// aspect ratio is kept and no padding ends up in the tensor.
pub fn fit_image(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    if image.width() == width && image.height() == height {
        image.clone()
    } else {
        image.resize_to_fill(width, height, imageops::FilterType::Triangle)
    }
}

fn image_to_tensor(image: &DynamicImage, mean: [f32; 3], std: [f32; 3]) -> Tensor {
    let rgb = image.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);

    tract_ndarray::Array4::from_shape_fn((1, 3, height, width), |(_, c, y, x)| {
        let value = rgb.get_pixel(x as u32, y as u32)[c] as f32 / 255.0;
        (value - mean[c]) / std[c]
    })
    .into_tensor()
}

/// NCHW float tensor normalized with the model's per-channel mean and std.
pub fn image_to_input_tensor(image: &DynamicImage, config: &ModelConfig) -> Tensor {
    let (height, width) = config.input_shape;
    let fitted = fit_image(image, width, height);
    image_to_tensor(&fitted, config.mean, config.std)
}

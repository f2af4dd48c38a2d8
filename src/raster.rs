use image::{GrayImage, RgbaImage};

use crate::model::{Gradient, RepeatMode};
use crate::typing::Rgba;

fn to_u8(value: f32) -> u8 {
    return (value.clamp(0.0, 1.0) * 255.0) as u8;
}

fn to_pixel(color: Rgba) -> image::Rgba<u8> {
    return image::Rgba([to_u8(color[0]), to_u8(color[1]), to_u8(color[2]), to_u8(color[3])]);
}

impl Gradient {
    // Horizontal preview strip covering times [0, span]
    pub fn render_strip(&self, width: u32, height: u32, span: f32, repeat_mode: RepeatMode) -> RgbaImage {
        assert!(width > 1 && height > 0);

        let columns = (0..width).map(|x| {
            to_pixel(self.evaluate(x as f32 / (width - 1) as f32 * span, repeat_mode))
        }).collect::<Vec<_>>();

        return RgbaImage::from_fn(width, height, |x, _| columns[x as usize]);
    }

    // Recolors a grayscale image by looking each intensity up in the gradient
    pub fn false_color(&self, gray: &GrayImage) -> RgbaImage {
        return RgbaImage::from_fn(gray.width(), gray.height(), |x, y| {
            to_pixel(self.evaluate(gray.get_pixel(x, y).0[0] as f32 / 255.0, RepeatMode::Clamp))
        });
    }
}

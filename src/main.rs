use image::{GrayImage, Luma};

use gradfield::model::{Gradient, RepeatMode};
use gradfield::typing::AlphaKey;

pub fn main() {
    // Fire palette: black -> red -> yellow -> white, fading in over the first quarter
    let mut gradient = Gradient::simple(vec!(
        [0.0, 0.0, 0.0, 1.0],
        [0.9, 0.1, 0.0, 1.0],
        [1.0, 0.8, 0.0, 1.0],
        [1.0, 1.0, 1.0, 1.0]
    ));

    gradient.set_alpha_keys(vec!(AlphaKey::new(0.0, 0.0), AlphaKey::new(1.0, 0.25)));

    for time in [0.0, 0.25, 0.5, 0.75, 1.0] {
        println!("{:.2} -> {:?}", time, gradient.evaluate(time, RepeatMode::Clamp));
    }

    gradient.render_strip(512, 32, 1.0, RepeatMode::Clamp).save("strip_clamp.png").unwrap();
    gradient.render_strip(512, 32, 3.0, RepeatMode::Repeat).save("strip_repeat.png").unwrap();
    gradient.render_strip(512, 32, 3.0, RepeatMode::PingPong).save("strip_ping_pong.png").unwrap();

    // Diagonal ramp recolored through the gradient
    let ramp = GrayImage::from_fn(256, 256, |x, y| Luma([((x + y) / 2) as u8]));
    gradient.false_color(&ramp).save("false_color.png").unwrap();

    println!("Wrote strip_clamp.png, strip_repeat.png, strip_ping_pong.png, false_color.png");
}

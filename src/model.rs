use serde::{Deserialize, Serialize};

use crate::typing::{AlphaKey, ColorKey, Keyed, Rgba};
use crate::utils::{inverse_lerp, lerp, mix, ping_pong, repeat};

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum GradientMode {
    #[default]
    Blend,
    Fixed
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum RepeatMode {
    #[default]
    Clamp,
    Repeat,
    PingPong
}

#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    mode: GradientMode,

    // Both channels hold at least one key and stay sorted by time
    color_keys: Vec<ColorKey>,
    alpha_keys: Vec<AlphaKey>
}

impl Default for Gradient {
    fn default() -> Gradient {
        return Gradient {
            mode: GradientMode::Blend,
            color_keys: vec!(
                ColorKey::new([1.0, 1.0, 1.0, 1.0], 0.0),
                ColorKey::new([1.0, 1.0, 1.0, 1.0], 1.0)
            ),
            alpha_keys: vec!(
                AlphaKey::new(1.0, 0.0),
                AlphaKey::new(1.0, 1.0)
            )
        };
    }
}

impl Gradient {
    pub fn new(color_keys: Vec<ColorKey>, alpha_keys: Vec<AlphaKey>) -> Gradient {
        let mut gradient = Gradient::default();

        gradient.set_color_keys(color_keys);
        gradient.set_alpha_keys(alpha_keys);

        return gradient;
    }

    pub fn simple(colors: Vec<Rgba>) -> Gradient {
        let mut gradient = Gradient::default();
        let count = colors.len();

        gradient.set_color_keys(colors.into_iter().enumerate().map(|(i, c)| {
            ColorKey::new(c, if count > 1 { i as f32 / (count - 1) as f32 } else { 0.0 })
        }).collect());

        return gradient;
    }

    pub fn mode(&self) -> GradientMode {
        return self.mode;
    }

    pub fn set_mode(&mut self, mode: GradientMode) {
        self.mode = mode;
    }

    pub fn color_keys(&self) -> &[ColorKey] {
        return &self.color_keys;
    }

    pub fn alpha_keys(&self) -> &[AlphaKey] {
        return &self.alpha_keys;
    }

    pub fn set_color_keys(&mut self, keys: Vec<ColorKey>) {
        if keys.is_empty() {
            return;
        }

        if keys.len() == 1 {
            // A lone key covers the whole range
            self.color_keys = vec!(
                ColorKey::new(keys[0].color, 0.0),
                ColorKey::new(keys[0].color, 1.0)
            );

            return;
        }

        self.color_keys = keys;
        sort_by_time(&mut self.color_keys);
    }

    pub fn set_alpha_keys(&mut self, keys: Vec<AlphaKey>) {
        if keys.is_empty() {
            return;
        }

        if keys.len() == 1 {
            self.alpha_keys = vec!(
                AlphaKey::new(keys[0].alpha, 0.0),
                AlphaKey::new(keys[0].alpha, 1.0)
            );

            return;
        }

        self.alpha_keys = keys;
        sort_by_time(&mut self.alpha_keys);
    }

    pub fn add_color_key(&mut self, color: Rgba, time: f32) {
        self.color_keys.push(ColorKey::new(color, time));
        sort_by_time(&mut self.color_keys);
    }

    pub fn add_alpha_key(&mut self, alpha: f32, time: f32) {
        self.alpha_keys.push(AlphaKey::new(alpha, time));
        sort_by_time(&mut self.alpha_keys);
    }

    pub fn remove_color_key(&mut self, index: usize) -> Option<ColorKey> {
        if self.color_keys.len() <= 1 || index >= self.color_keys.len() {
            return None;
        }

        return Some(self.color_keys.remove(index));
    }

    pub fn remove_alpha_key(&mut self, index: usize) -> Option<AlphaKey> {
        if self.alpha_keys.len() <= 1 || index >= self.alpha_keys.len() {
            return None;
        }

        return Some(self.alpha_keys.remove(index));
    }

    pub fn evaluate(&self, time: f32, repeat_mode: RepeatMode) -> Rgba {
        let t = normalize_time(time, repeat_mode);

        let mut result = self.color_at(t);
        result[3] = self.alpha_at(t);

        return result;
    }

    fn color_at(&self, time: f32) -> Rgba {
        let next = next_key(&self.color_keys, time);

        if self.mode == GradientMode::Fixed {
            return next.color;
        }

        let prev = previous_key(&self.color_keys, time);

        return mix(prev.color, next.color, inverse_lerp(prev.time, next.time, time));
    }

    fn alpha_at(&self, time: f32) -> f32 {
        let next = next_key(&self.alpha_keys, time);

        if self.mode == GradientMode::Fixed {
            return next.alpha;
        }

        let prev = previous_key(&self.alpha_keys, time);

        return lerp(prev.alpha, next.alpha, inverse_lerp(prev.time, next.time, time));
    }
}

fn normalize_time(time: f32, repeat_mode: RepeatMode) -> f32 {
    return match repeat_mode {
        RepeatMode::Clamp => time.clamp(0.0, 1.0),
        RepeatMode::Repeat => repeat(time, 1.0),
        RepeatMode::PingPong => ping_pong(time, 1.0)
    };
}

// Smallest-time key at or after `time`; the last key when none qualifies
fn next_key<T: Keyed>(keys: &[T], time: f32) -> T {
    assert!(!keys.is_empty(), "gradient channel has no keys");

    let idx = keys.partition_point(|k| k.time() < time);

    return keys[idx.min(keys.len() - 1)];
}

// Largest-time key at or before `time`; the first key when none qualifies
fn previous_key<T: Keyed>(keys: &[T], time: f32) -> T {
    assert!(!keys.is_empty(), "gradient channel has no keys");

    let idx = keys.partition_point(|k| k.time() <= time);

    return keys[idx.saturating_sub(1)];
}

fn sort_by_time<T: Keyed>(keys: &mut [T]) {
    keys.sort_by(|a, b| a.time().partial_cmp(&b.time()).unwrap());
}

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

pub type Rgba = [f32; 4];

pub trait Keyed: Copy + Debug {
    fn time(&self) -> f32;
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorKey {
    pub color: Rgba,
    pub time: f32
}

impl ColorKey {
    pub fn new(color: Rgba, time: f32) -> ColorKey {
        return ColorKey { color, time };
    }
}

impl Keyed for ColorKey {
    fn time(&self) -> f32 {
        return self.time;
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlphaKey {
    pub alpha: f32,
    pub time: f32
}

impl AlphaKey {
    pub fn new(alpha: f32, time: f32) -> AlphaKey {
        return AlphaKey { alpha, time };
    }
}

impl Keyed for AlphaKey {
    fn time(&self) -> f32 {
        return self.time;
    }
}

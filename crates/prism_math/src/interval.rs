/// A closed range of floats `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }

    /// Every distance in front of a ray origin, the origin itself included.
    pub const FORWARD: Interval = Interval::new(0.0, f32::INFINITY);

    /// The displayable range of a colour channel.
    pub const UNIT: Interval = Interval::new(0.0, 1.0);
}

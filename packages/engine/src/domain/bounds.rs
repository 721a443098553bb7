/// Axis-aligned simulation box centred on the origin.
///
/// Derived from the viewport: width and depth follow the viewport width,
/// height follows the viewport height. The floor is `max_y` (+Y is down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
    pub min_z: f32,
    pub max_z: f32,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl SimulationBounds {
    pub fn from_viewport(width: f32, height: f32) -> Result<Self, String> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(format!("viewport must be positive and finite, got {width}x{height}"));
        }

        let depth = width;
        Ok(Self {
            min_x: -width / 2.0,
            max_x: width / 2.0,
            min_y: -height / 2.0,
            max_y: height / 2.0,
            min_z: -depth / 2.0,
            max_z: depth / 2.0,
            width,
            height,
            depth,
        })
    }

    /// Floor height (alias of `max_y`)
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.max_y
    }

    /// Screen-space offset that moves the origin to the viewport's top-left corner
    #[inline]
    pub fn screen_offset(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_is_centred_and_depth_follows_width() {
        let b = SimulationBounds::from_viewport(1280.0, 720.0).unwrap();
        assert_eq!(b.min_x, -640.0);
        assert_eq!(b.max_y, 360.0);
        assert_eq!(b.floor_y(), 360.0);
        assert_eq!(b.depth, 1280.0);
        assert_eq!(b.max_z, 640.0);
        assert_eq!(b.screen_offset(), (640.0, 360.0));
    }

    #[test]
    fn degenerate_viewport_is_rejected() {
        assert!(SimulationBounds::from_viewport(0.0, 720.0).is_err());
        assert!(SimulationBounds::from_viewport(800.0, f32::NAN).is_err());
    }
}

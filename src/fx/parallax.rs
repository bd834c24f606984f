//! Pointer parallax for the floating background shapes.

/// Number of decorative shapes drifting behind the home view.
pub const SHAPE_COUNT: usize = 5;

/// Base offset scale: pointer position is normalized to 0..1, then
/// multiplied by the per-shape speed and this factor.
pub const OFFSET_SCALE: f32 = 10.0;

/// Offset and rotation for one shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeOffset {
    pub x: f32,
    pub y: f32,
    /// Degrees; tied to the horizontal offset.
    pub rot_deg: f32,
}

/// Per-shape speed multiplier: (index + 1) · 0.5.
pub fn shape_speed(index: usize) -> f32 {
    (index as f32 + 1.0) * 0.5
}

/// Offset for shape `index` given the pointer position normalized to
/// 0..1 in each axis.
pub fn shape_offset(index: usize, norm_x: f32, norm_y: f32) -> ShapeOffset {
    let speed = shape_speed(index);
    let x = norm_x * speed * OFFSET_SCALE;
    let y = norm_y * speed * OFFSET_SCALE;
    ShapeOffset { x, y, rot_deg: x }
}

/// Offsets for the whole shape field.
pub fn field_offsets(norm_x: f32, norm_y: f32) -> Vec<ShapeOffset> {
    (0..SHAPE_COUNT)
        .map(|i| shape_offset(i, norm_x, norm_y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deeper_shapes_move_faster() {
        assert_eq!(shape_speed(0), 0.5);
        assert_eq!(shape_speed(1), 1.0);
        assert_eq!(shape_speed(4), 2.5);
    }

    #[test]
    fn offset_follows_pointer_and_speed() {
        let o = shape_offset(1, 0.5, 1.0);
        assert_eq!(o.x, 5.0);
        assert_eq!(o.y, 10.0);
        assert_eq!(o.rot_deg, o.x);
    }

    #[test]
    fn pointer_at_origin_leaves_shapes_at_rest() {
        for o in field_offsets(0.0, 0.0) {
            assert_eq!(o, ShapeOffset { x: 0.0, y: 0.0, rot_deg: 0.0 });
        }
    }

    #[test]
    fn field_has_one_offset_per_shape() {
        assert_eq!(field_offsets(0.3, 0.7).len(), SHAPE_COUNT);
    }
}

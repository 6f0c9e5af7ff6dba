pub mod boundingbox;
pub mod position;
pub mod vector3;

pub fn squared_magnitude(a: f64, b: f64, c: f64) -> f64 {
    c.mul_add(c, a.mul_add(a, b * b))
}

pub fn magnitude(a: f64, b: f64, c: f64) -> f64 {
    squared_magnitude(a, b, c).sqrt()
}

/// Converts a world coordinate to the coordinate of the chunk (or chunk section) containing it.
pub const fn get_section_cord(coord: i32) -> i32 {
    coord >> 4
}

/// Converts a world coordinate to its offset inside the containing chunk.
pub const fn get_local_cord(coord: i32) -> i32 {
    coord & 15
}

/// Block coordinate containing a fractional world coordinate.
pub fn floor_to_block(coord: f64) -> i32 {
    coord.floor() as i32
}

#[cfg(test)]
mod test {
    use super::{floor_to_block, get_local_cord, get_section_cord, magnitude};

    #[test]
    fn section_cords_round_towards_negative() {
        assert_eq!(get_section_cord(0), 0);
        assert_eq!(get_section_cord(15), 0);
        assert_eq!(get_section_cord(16), 1);
        assert_eq!(get_section_cord(-1), -1);
        assert_eq!(get_section_cord(-16), -1);
        assert_eq!(get_section_cord(-17), -2);
    }

    #[test]
    fn local_cords_stay_in_chunk() {
        assert_eq!(get_local_cord(17), 1);
        assert_eq!(get_local_cord(-1), 15);
        assert_eq!(get_local_cord(-16), 0);
    }

    #[test]
    fn floors_negative_fractions() {
        assert_eq!(floor_to_block(1.9), 1);
        assert_eq!(floor_to_block(-0.1), -1);
        assert_eq!(floor_to_block(-1.0), -1);
    }

    #[test]
    fn magnitude_of_axis_triangle() {
        assert_eq!(magnitude(3.0, 4.0, 0.0), 5.0);
    }
}

use serde::{Deserialize, Serialize};

use super::{position::BlockPos, vector3::Vector3};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Vector3<f64>,
    pub max: Vector3<f64>,
}

/// Where a ray first enters a [`BoundingBox`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxHit {
    pub position: Vector3<f64>,
    /// Distance travelled along the normalized ray.
    pub distance: f64,
    /// Outward unit normal of the entered side. Zero when the ray starts inside the box.
    pub normal: Vector3<i32>,
}

impl BoundingBox {
    /// Builds a box from two arbitrary corners.
    pub fn new(a: Vector3<f64>, b: Vector3<f64>) -> Self {
        Self {
            min: Vector3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Vector3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    pub fn new_array(min: [f64; 3], max: [f64; 3]) -> Self {
        Self::new(
            Vector3::new(min[0], min[1], min[2]),
            Vector3::new(max[0], max[1], max[2]),
        )
    }

    pub fn from_block(position: &BlockPos) -> Self {
        let min = position.to_f64();
        Self {
            min,
            max: min.add_raw(1.0, 1.0, 1.0),
        }
    }

    /// Zero-volume box at the corner of a block, used for blocks without a shape.
    pub fn from_block_raw(position: &BlockPos) -> Self {
        let min = position.to_f64();
        Self { min, max: min }
    }

    pub fn expand(&self, x: f64, y: f64, z: f64) -> Self {
        Self {
            min: Vector3::new(self.min.x - x, self.min.y - y, self.min.z - z),
            max: Vector3::new(self.max.x + x, self.max.y + y, self.max.z + z),
        }
    }

    pub fn shift(&self, offset: Vector3<f64>) -> Self {
        Self {
            min: self.min.add(&offset),
            max: self.max.add(&offset),
        }
    }

    pub fn width_x(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn width_z(&self) -> f64 {
        self.max.z - self.min.z
    }

    pub fn volume(&self) -> f64 {
        self.width_x() * self.height() * self.width_z()
    }

    pub fn center(&self) -> Vector3<f64> {
        Vector3::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        )
    }

    pub fn contains(&self, pos: &Vector3<f64>) -> bool {
        pos.x >= self.min.x
            && pos.x < self.max.x
            && pos.y >= self.min.y
            && pos.y < self.max.y
            && pos.z >= self.min.z
            && pos.z < self.max.z
    }

    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }

    pub fn squared_magnitude(&self, pos: Vector3<f64>) -> f64 {
        let d = f64::max(f64::max(self.min.x - pos.x, pos.x - self.max.x), 0.0);
        let e = f64::max(f64::max(self.min.y - pos.y, pos.y - self.max.y), 0.0);
        let f = f64::max(f64::max(self.min.z - pos.z, pos.z - self.max.z), 0.0);
        super::squared_magnitude(d, e, f)
    }

    /// Slab test of the ray `start + t * direction` against this box for `0 <= t <= max_distance`.
    ///
    /// `direction` does not need to be normalized; a zero or non-finite direction never hits.
    pub fn ray_trace(
        &self,
        start: Vector3<f64>,
        direction: Vector3<f64>,
        max_distance: f64,
    ) -> Option<BoxHit> {
        if max_distance < 0.0 || !start.is_finite() || !direction.is_finite() {
            return None;
        }
        let dir = direction.normalize()?;

        let start_axes = [start.x, start.y, start.z];
        let dir_axes = [dir.x, dir.y, dir.z];
        let min_axes = [self.min.x, self.min.y, self.min.z];
        let max_axes = [self.max.x, self.max.y, self.max.z];

        let mut t_min = f64::NEG_INFINITY;
        let mut t_max = f64::INFINITY;
        let mut entry_axis = None;
        let mut entry_sign = 0;

        for axis in 0..3 {
            if dir_axes[axis] == 0.0 {
                if start_axes[axis] < min_axes[axis] || start_axes[axis] > max_axes[axis] {
                    return None;
                }
                continue;
            }
            let inverse = 1.0 / dir_axes[axis];
            let (near, far, sign) = if inverse >= 0.0 {
                (
                    (min_axes[axis] - start_axes[axis]) * inverse,
                    (max_axes[axis] - start_axes[axis]) * inverse,
                    -1,
                )
            } else {
                (
                    (max_axes[axis] - start_axes[axis]) * inverse,
                    (min_axes[axis] - start_axes[axis]) * inverse,
                    1,
                )
            };
            if near > t_min {
                t_min = near;
                entry_axis = Some(axis);
                entry_sign = sign;
            }
            t_max = t_max.min(far);
            if t_min > t_max {
                return None;
            }
        }

        if t_max < 0.0 {
            return None;
        }

        let (distance, normal) = if t_min < 0.0 {
            // Started inside the box.
            (0.0, Vector3::new(0, 0, 0))
        } else {
            let normal = match entry_axis {
                Some(0) => Vector3::new(entry_sign, 0, 0),
                Some(1) => Vector3::new(0, entry_sign, 0),
                Some(_) => Vector3::new(0, 0, entry_sign),
                None => Vector3::new(0, 0, 0),
            };
            (t_min, normal)
        };

        if distance > max_distance {
            return None;
        }

        Some(BoxHit {
            position: start + dir * distance,
            distance,
            normal,
        })
    }
}

#[cfg(test)]
mod test {
    use super::BoundingBox;
    use crate::assert_eq_delta;
    use crate::math::{position::BlockPos, vector3::Vector3};

    #[test]
    fn from_block_is_unit_cube() {
        let bb = BoundingBox::from_block(&BlockPos::new(2, -3, 4));
        assert_eq!(bb.min, Vector3::new(2.0, -3.0, 4.0));
        assert_eq!(bb.max, Vector3::new(3.0, -2.0, 5.0));
        assert_eq!(bb.volume(), 1.0);
        assert_eq!(bb.center(), Vector3::new(2.5, -2.5, 4.5));
    }

    #[test]
    fn new_orders_corners() {
        let bb = BoundingBox::new(Vector3::new(1.0, 0.0, 1.0), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(bb.min, Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(bb.max, Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn ray_hits_west_side() {
        let bb = BoundingBox::from_block(&BlockPos::new(0, 0, 0));
        let hit = bb
            .ray_trace(Vector3::new(-2.0, 0.5, 0.5), Vector3::new(1.0, 0.0, 0.0), 10.0)
            .expect("ray should hit");
        assert_eq_delta!(hit.distance, 2.0_f64, 1e-9);
        assert_eq!(hit.normal, Vector3::new(-1, 0, 0));
        assert_eq_delta!(hit.position.x, 0.0_f64, 1e-9);
    }

    #[test]
    fn ray_hits_top_when_looking_down() {
        let bb = BoundingBox::from_block(&BlockPos::new(0, 0, 0));
        let hit = bb
            .ray_trace(Vector3::new(0.5, 5.0, 0.5), Vector3::new(0.0, -3.0, 0.0), 10.0)
            .unwrap();
        assert_eq_delta!(hit.distance, 4.0_f64, 1e-9);
        assert_eq!(hit.normal, Vector3::new(0, 1, 0));
    }

    #[test]
    fn ray_too_short() {
        let bb = BoundingBox::from_block(&BlockPos::new(0, 0, 0));
        assert!(bb
            .ray_trace(Vector3::new(-2.0, 0.5, 0.5), Vector3::new(1.0, 0.0, 0.0), 1.5)
            .is_none());
    }

    #[test]
    fn ray_pointing_away() {
        let bb = BoundingBox::from_block(&BlockPos::new(0, 0, 0));
        assert!(bb
            .ray_trace(Vector3::new(-2.0, 0.5, 0.5), Vector3::new(-1.0, 0.0, 0.0), 10.0)
            .is_none());
        assert!(bb
            .ray_trace(Vector3::new(-2.0, 0.5, 0.5), Vector3::new(0.0, 0.0, 0.0), 10.0)
            .is_none());
    }

    #[test]
    fn ray_passing_beside() {
        let bb = BoundingBox::from_block(&BlockPos::new(0, 0, 0));
        assert!(bb
            .ray_trace(Vector3::new(-2.0, 1.5, 0.5), Vector3::new(1.0, 0.0, 0.0), 10.0)
            .is_none());
    }

    #[test]
    fn ray_starting_inside() {
        let bb = BoundingBox::from_block(&BlockPos::new(0, 0, 0));
        let hit = bb
            .ray_trace(Vector3::new(0.5, 0.5, 0.5), Vector3::new(0.0, 0.0, 1.0), 0.0)
            .unwrap();
        assert_eq!(hit.distance, 0.0);
        assert_eq!(hit.normal, Vector3::new(0, 0, 0));
        assert_eq!(hit.position, Vector3::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn intersects_and_contains() {
        let a = BoundingBox::from_block(&BlockPos::new(0, 0, 0));
        let b = a.shift(Vector3::new(0.5, 0.5, 0.5));
        let c = a.shift(Vector3::new(1.0, 0.0, 0.0));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        assert!(a.contains(&Vector3::new(0.0, 0.0, 0.0)));
        assert!(!a.contains(&Vector3::new(1.0, 0.5, 0.5)));
        assert_eq!(a.expand(1.0, 0.0, 0.0).width_x(), 3.0);
    }
}

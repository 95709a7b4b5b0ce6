use std::mem;
use std::ops::{Index, IndexMut};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline(always)]
    pub fn as_array(&self) -> &[f32; 4] {
        let ary: &[f32; 4] = unsafe { mem::transmute(self) };
        ary
    }
    #[inline(always)]
    pub fn as_array_mut(&mut self) -> &mut [f32; 4] {
        let ary: &mut [f32; 4] = unsafe { mem::transmute(self) };
        ary
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;
    #[inline(always)]
    fn index(&self, i: usize) -> &f32 {
        self.as_array().index(i)
    }
}

impl IndexMut<usize> for Vec4 {
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        self.as_array_mut().index_mut(i)
    }
}

/// Column-major 4x4 matrix, laid out the way `glUniformMatrix4fv` expects.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4x4 {
    pub c0: Vec4,
    pub c1: Vec4,
    pub c2: Vec4,
    pub c3: Vec4,
}

impl Mat4x4 {
    pub fn identity() -> Self {
        Self {
            c0: Vec4::new(1.0, 0.0, 0.0, 0.0),
            c1: Vec4::new(0.0, 1.0, 0.0, 0.0),
            c2: Vec4::new(0.0, 0.0, 1.0, 0.0),
            c3: Vec4::new(0.0, 0.0, 0.0, 1.0),
        }
    }

    /// Orthographic projection (glOrtho semantics).
    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let rl = right - left;
        let tb = top - bottom;
        let fne = far - near;
        Self {
            c0: Vec4::new(2.0 / rl, 0.0, 0.0, 0.0),
            c1: Vec4::new(0.0, 2.0 / tb, 0.0, 0.0),
            c2: Vec4::new(0.0, 0.0, -2.0 / fne, 0.0),
            c3: Vec4::new(
                -(right + left) / rl,
                -(top + bottom) / tb,
                -(far + near) / fne,
                1.0,
            ),
        }
    }

    /// Pixel-space projection for a `w` x `h` framebuffer with the origin top-left.
    pub fn screen(w: f32, h: f32) -> Self {
        Self::ortho(0.0, w, h, 0.0, -1.0, 1.0)
    }

    pub fn to_array(&self) -> [f32; 16] {
        let mut arr = [0.0; 16];
        for (i, c) in [self.c0, self.c1, self.c2, self.c3].iter().enumerate() {
            arr[i * 4..i * 4 + 4].copy_from_slice(c.as_array());
        }
        arr
    }

    pub fn transform(&self, v: Vec4) -> Vec4 {
        let mut out = Vec4::new(0.0, 0.0, 0.0, 0.0);
        for row in 0..4 {
            out[row] = self.c0[row] * v.x + self.c1[row] * v.y + self.c2[row] * v.z + self.c3[row] * v.w;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn vec4_indexing() {
        let mut v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v[2], 3.0);
        v[3] = 9.0;
        assert_eq!(v.w, 9.0);
    }

    #[test]
    fn identity_leaves_points_alone() {
        let p = Vec4::new(3.0, -2.0, 0.5, 1.0);
        assert_eq!(Mat4x4::identity().transform(p), p);
    }

    #[test]
    fn screen_projection_maps_corners_to_ndc() {
        let m = Mat4x4::screen(600.0, 400.0);
        let top_left = m.transform(Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert!(approx(top_left.x, -1.0) && approx(top_left.y, 1.0));
        let bottom_right = m.transform(Vec4::new(600.0, 400.0, 0.0, 1.0));
        assert!(approx(bottom_right.x, 1.0) && approx(bottom_right.y, -1.0));
    }

    #[test]
    fn to_array_is_column_major() {
        let arr = Mat4x4::ortho(0.0, 2.0, 0.0, 2.0, -1.0, 1.0).to_array();
        assert!(approx(arr[0], 1.0));
        assert!(approx(arr[12], -1.0));
        assert!(approx(arr[13], -1.0));
        assert!(approx(arr[15], 1.0));
    }
}

//! Minimal 4x4 affine math for positioning the triangle.
//!
//! Matrices are stored row-major, the layout they are written in on paper.
//! Vectors are `glam::Vec4` in homogeneous form where `w = 1` marks a point.

use glam::{Mat4, Vec4};

/// Homogeneous 4-component vector.
pub type Vector4 = Vec4;

/// Build a position vector (`w = 1`).
#[inline]
pub fn point(x: f32, y: f32, z: f32) -> Vector4 {
    Vec4::new(x, y, z, 1.0)
}

/// Row-major 4x4 matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix44 {
    pub m: [f32; 16],
}

impl Matrix44 {
    pub const IDENTITY: Self = Self {
        m: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    #[inline]
    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::from_slice(&self.m[i * 4..i * 4 + 4])
    }
}

impl From<Matrix44> for Mat4 {
    fn from(value: Matrix44) -> Self {
        // glam is column-major
        Mat4::from_cols_array(&value.m).transpose()
    }
}

/// Identity with `(x, y, z)` in the last column.
pub fn translate_by(x: f32, y: f32, z: f32) -> Matrix44 {
    Matrix44 {
        m: [
            1.0, 0.0, 0.0, x, //
            0.0, 1.0, 0.0, y, //
            0.0, 0.0, 1.0, z, //
            0.0, 0.0, 0.0, 1.0,
        ],
    }
}

/// Matrix-vector product: each output component is a row dotted with `v`.
pub fn apply(matrix: &Matrix44, v: Vector4) -> Vector4 {
    Vec4::new(
        matrix.row(0).dot(v),
        matrix.row(1).dot(v),
        matrix.row(2).dot(v),
        matrix.row(3).dot(v),
    )
}

use super::error::{DegenerateGeometryError, DirectionFieldError, InputError};
use crate::core::utils::geometry::try_normalize;
use crate::core::utils::periodic::wrap;
use nalgebra::{Point3, Unit, Vector3};

/// Per-monomer unit directions along one chain.
///
/// Each monomer points along the line joining its neighbors. The direction the
/// template monomer faces before placement is kept separately as the
/// `predecessor`, so the first monomer is reoriented relative to it.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionField {
    predecessor: Vector3<f64>,
    directions: Vec<Unit<Vector3<f64>>>,
}

impl DirectionField {
    /// Computes directions for `coords` (at least two points).
    ///
    /// Closed chains use centered differences everywhere, wrapping around the ends.
    /// Open chains use centered differences for interior points and one-sided
    /// differences at the two ends.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::TooFewCoordinates`] for fewer than two points, and
    /// [`DegenerateGeometryError`] for the first monomer whose difference vector has
    /// zero length.
    pub fn build(
        coords: &[Point3<f64>],
        closed: bool,
        predecessor: Vector3<f64>,
    ) -> Result<Self, DirectionFieldError> {
        let n = coords.len();
        if n < 2 {
            return Err(InputError::TooFewCoordinates { found: n }.into());
        }

        let raw = (0..n).map(|i| {
            if closed {
                let prev = wrap(i as isize - 1, n).index;
                let next = wrap(i as isize + 1, n).index;
                coords[next] - coords[prev]
            } else if i == 0 {
                coords[1] - coords[0]
            } else if i == n - 1 {
                coords[n - 1] - coords[n - 2]
            } else {
                coords[i + 1] - coords[i - 1]
            }
        });

        let directions = raw
            .enumerate()
            .map(|(index, v)| try_normalize(&v).ok_or(DegenerateGeometryError { index }))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            predecessor,
            directions,
        })
    }

    pub fn len(&self) -> usize {
        self.directions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    pub fn direction(&self, i: usize) -> &Unit<Vector3<f64>> {
        &self.directions[i]
    }

    /// Direction preceding monomer `i`: the reference orientation for the first
    /// monomer, otherwise the direction of monomer `i - 1`.
    pub fn previous(&self, i: usize) -> Vector3<f64> {
        match i {
            0 => self.predecessor,
            _ => self.directions[i - 1].into_inner(),
        }
    }

    pub fn predecessor(&self) -> &Vector3<f64> {
        &self.predecessor
    }

    pub fn iter(&self) -> impl Iterator<Item = &Unit<Vector3<f64>>> {
        self.directions.iter()
    }
}

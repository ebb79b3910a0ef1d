use nalgebra::Point3;

/// A contiguous run of monomers cut out of the full coordinate list.
///
/// Chains are independent: directions and connectivity never reach across chain
/// boundaries, and monomer indices inside a chain restart at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    pub ordinal: usize, // Zero-based position of this chain among all chains
    pub start: usize,   // Index of the first monomer in the full coordinate list
    pub(crate) coordinates: Vec<Point3<f64>>,
    pub(crate) monomer_names: Vec<String>,
}

impl Chain {
    pub(crate) fn new(
        ordinal: usize,
        start: usize,
        coordinates: Vec<Point3<f64>>,
        monomer_names: Vec<String>,
    ) -> Self {
        debug_assert_eq!(coordinates.len(), monomer_names.len());
        Self {
            ordinal,
            start,
            coordinates,
            monomer_names,
        }
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn coordinates(&self) -> &[Point3<f64>] {
        &self.coordinates
    }

    pub fn monomer_names(&self) -> &[String] {
        &self.monomer_names
    }

    /// Index one past the last monomer in the full coordinate list.
    pub fn end(&self) -> usize {
        self.start + self.len()
    }
}

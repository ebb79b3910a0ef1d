use super::error::InputError;
use crate::core::models::chain::Chain;
use nalgebra::Point3;

/// Splits the full coordinate list into independent chains at `cuts`.
///
/// Each cut is the index of the first monomer of a new chain. Cuts may be given in
/// any order; chains are always produced in ascending coordinate order and together
/// cover every monomer exactly once. `names` must have one entry per coordinate.
///
/// # Errors
///
/// Fails if there are fewer than two coordinates, if a cut is not a valid interior
/// monomer index, or if any resulting chain would hold fewer than two monomers
/// (which includes duplicate cuts).
pub fn segment(
    coordinates: &[Point3<f64>],
    names: &[String],
    cuts: &[usize],
) -> Result<Vec<Chain>, InputError> {
    let total = coordinates.len();
    if total < 2 {
        return Err(InputError::TooFewCoordinates { found: total });
    }
    debug_assert_eq!(names.len(), total);

    if let Some(&cut) = cuts.iter().find(|&&c| c >= total) {
        return Err(InputError::CutOutOfRange { cut, total });
    }

    let mut boundaries: Vec<usize> = cuts.to_vec();
    boundaries.push(total);
    boundaries.sort_unstable();

    let mut chains = Vec::with_capacity(boundaries.len());
    let mut start = 0;
    for (ordinal, &end) in boundaries.iter().enumerate() {
        let len = end - start;
        if len < 2 {
            return Err(InputError::ChainTooShort {
                chain: ordinal,
                start,
                end,
                len,
            });
        }
        chains.push(Chain::new(
            ordinal,
            start,
            coordinates[start..end].to_vec(),
            names[start..end].to_vec(),
        ));
        start = end;
    }
    Ok(chains)
}

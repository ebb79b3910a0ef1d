use crate::core::models::assembly::PolymerAssembly;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Defines the interface for rendering a polymer assembly in a topology format.
///
/// A writer receives the fully resolved placement and connectivity records and is
/// only responsible for the target syntax; it never changes their order.
pub trait TopologyWriter {
    /// The error type for write operations.
    type Error: Error + From<io::Error>;

    /// Writes an assembly to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(assembly: &PolymerAssembly, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Writes an assembly to a file path, creating or truncating the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(
        assembly: &PolymerAssembly,
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(assembly, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

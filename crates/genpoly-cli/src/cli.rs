use clap::{ArgAction, Args, Parser};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "genpoly - Generate moltemplate (.lt) files describing coarse-grained polymers that follow a curve.",
    long_about = "Reads a list of points (one \"x y z\" triple per line) and writes a moltemplate \
object that places one monomer at each point, oriented along the curve, together with the \
bonds, angles, dihedrals and impropers that connect neighboring monomers.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    #[command(flatten)]
    pub build: BuildArgs,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output and progress bars
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    // --- Input / Output ---
    /// File containing the curve coordinates. Reads standard input if omitted.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Destination for the generated .lt file. Writes standard output if omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Connection templates ---
    /// Bond between atom A1 of monomer i and atom A2 of monomer i+1.
    /// Can be used multiple times.
    #[arg(
        long = "bond",
        num_args = 3,
        value_names = ["TYPE", "A1", "A2"],
        action = ArgAction::Append
    )]
    pub bonds: Vec<String>,

    /// Angle across three atoms; I1..I3 are monomer offsets. Can be used multiple times.
    #[arg(
        long = "angle",
        num_args = 7,
        value_names = ["TYPE", "A1", "A2", "A3", "I1", "I2", "I3"],
        action = ArgAction::Append,
        allow_negative_numbers = true
    )]
    pub angles: Vec<String>,

    /// Dihedral across four atoms; I1..I4 are monomer offsets. Can be used multiple times.
    #[arg(
        long = "dihedral",
        num_args = 9,
        value_names = ["TYPE", "A1", "A2", "A3", "A4", "I1", "I2", "I3", "I4"],
        action = ArgAction::Append,
        allow_negative_numbers = true
    )]
    pub dihedrals: Vec<String>,

    /// Improper across four atoms; I1..I4 are monomer offsets. Can be used multiple times.
    #[arg(
        long = "improper",
        num_args = 9,
        value_names = ["TYPE", "A1", "A2", "A3", "A4", "I1", "I2", "I3", "I4"],
        action = ArgAction::Append,
        allow_negative_numbers = true
    )]
    pub impropers: Vec<String>,

    /// TOML file with additional `[[templates]]` entries. Can be used multiple times.
    #[arg(long = "templates", value_name = "PATH")]
    pub templates: Vec<PathBuf>,

    // --- Geometry ---
    /// Twist added per monomer about the reference axis, in degrees.
    #[arg(long, value_name = "DEG", allow_negative_numbers = true)]
    pub helix: Option<f64>,

    /// Chain ends: "no" (open), "yes" (circular), or "connected".
    #[arg(long, value_name = "yes|no|connected")]
    pub circular: Option<String>,

    /// Direction the monomer template faces, as x,y,z.
    #[arg(long, value_name = "X,Y,Z", allow_hyphen_values = true)]
    pub axis: Option<String>,

    // --- Naming ---
    /// Name of the monomer object to instantiate at each point.
    #[arg(long, value_name = "NAME")]
    pub monomer_name: Option<String>,

    /// Name of the generated polymer object.
    #[arg(long, value_name = "NAME")]
    pub polymer_name: Option<String>,

    /// Parent object the polymer inherits from.
    #[arg(long, value_name = "NAME")]
    pub inherits: Option<String>,

    /// First line of the generated file.
    #[arg(long, value_name = "TEXT")]
    pub header: Option<String>,

    /// File with one monomer name per coordinate.
    #[arg(long, value_name = "PATH")]
    pub sequence: Option<PathBuf>,

    /// File with the coordinate indices at which a new chain begins.
    #[arg(long, value_name = "PATH")]
    pub cuts: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S geometry.helix=30
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

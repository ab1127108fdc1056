//! Command-line wrapper evaluating a single building entry loss

use crate::io::configuration::{
    DEFAULT_BUILDING_CLASS, DEFAULT_ELEVATION_DEG, DEFAULT_PROBABILITY_PERCENT, OUTPUT_PRECISION,
};
use crate::io::error::Result;
use crate::model::coefficients::BuildingClass;
use crate::model::entry_loss::{EntryLossComponents, evaluate, is_documented_frequency};
use clap::Parser;
use std::fmt::Write as _;
use std::io::Write as _;

#[derive(Parser, Debug)]
#[command(name = "p2109")]
#[command(
    author,
    version,
    about = "Building entry loss not exceeded for a given probability (ITU-R P.2109)",
    allow_negative_numbers = true
)]
/// Command-line arguments for a single entry loss evaluation
pub struct Cli {
    /// Frequency in GHz (documented for 0.08 to 100)
    #[arg(value_name = "FREQUENCY_GHZ")]
    pub frequency: f64,

    /// Percentage of locations for which the loss is not exceeded, in (0, 100)
    #[arg(short, long, default_value_t = DEFAULT_PROBABILITY_PERCENT)]
    pub probability: f64,

    /// Building class code (2 thermally efficient, anything else traditional)
    #[arg(short, long, default_value_t = DEFAULT_BUILDING_CLASS)]
    pub class: i32,

    /// Elevation angle at the facade in degrees, in [-90, 90]
    #[arg(short, long, default_value_t = DEFAULT_ELEVATION_DEG)]
    pub elevation: f64,

    /// Print every intermediate term instead of the loss alone
    #[arg(short, long)]
    pub breakdown: bool,

    /// Suppress warnings
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Building class selected by the class code
    pub const fn building_class(&self) -> BuildingClass {
        BuildingClass::from_code(self.class)
    }

    /// Evaluate the model and format the output text
    ///
    /// # Errors
    ///
    /// Returns a domain error if the elevation or probability is out of range
    pub fn render(&self) -> Result<String> {
        let components = evaluate(
            self.frequency,
            self.probability,
            self.building_class(),
            self.elevation,
        )?;

        if self.breakdown {
            Ok(format_breakdown(&components))
        } else {
            Ok(format!(
                "{:.prec$}\n",
                components.loss_db,
                prec = OUTPUT_PRECISION
            ))
        }
    }

    /// Evaluate the model and write the result to standard output
    ///
    /// # Errors
    ///
    /// Returns an error if the inputs are out of range or stdout cannot be written
    // Allow print for user feedback on undocumented frequencies
    #[allow(clippy::print_stderr)]
    pub fn run(&self) -> Result<()> {
        if !self.quiet && !is_documented_frequency(self.frequency) {
            eprintln!(
                "Warning: {} GHz is outside the documented range (continuing anyway)",
                self.frequency
            );
        }

        let text = self.render()?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

fn format_breakdown(components: &EntryLossComponents) -> String {
    let rows = [
        ("Le", components.le),
        ("Lh", components.lh),
        ("mu1", components.mu1),
        ("sigma1", components.sigma1),
        ("mu2", components.mu2),
        ("sigma2", components.sigma2),
        ("A", components.a),
        ("B", components.b),
        ("C", components.c),
        ("L", components.loss_db),
    ];

    let mut out = format!(
        "class    {:?} ({})\n",
        components.building_class,
        components.building_class.code()
    );
    for (name, value) in rows {
        // Writing into a String cannot fail
        let _ = writeln!(out, "{name:<8} {value:.prec$}", prec = OUTPUT_PRECISION);
    }
    out
}

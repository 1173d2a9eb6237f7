use crate::arithmetic::DivisionPolicy;
use crate::core::Number;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "thing_printer")]
#[command(about = "Small demo of a printable trait and a few numeric helpers")]
#[command(version)]
pub struct Cli {
    /// Print numeric results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Emit debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the identity of the thing printer
    PrintThing,

    /// Add two numbers (integers stay integers, any float promotes)
    #[command(allow_negative_numbers = true)]
    Sum {
        /// First operand
        a: Number,

        /// Second operand
        b: Number,
    },

    /// Print the given text
    Echo {
        /// Text to print
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Divide a number by zero (15 is always rejected)
    #[command(allow_negative_numbers = true)]
    Divide {
        /// Dividend
        number: Number,

        /// How non-rejected inputs are divided
        #[arg(short, long, value_enum, default_value_t = DivisionPolicy::Strict)]
        policy: DivisionPolicy,
    },
}

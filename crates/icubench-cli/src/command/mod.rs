use clap::{Parser, Subcommand};

use self::{
    in_hospital_mortality::InHospitalMortalityArg, length_of_stay::LengthOfStayArg,
    split_train_test::SplitTrainTestArg,
};

mod in_hospital_mortality;
mod length_of_stay;
mod task;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Which benchmark step to run
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Split patients into train and test id files
    SplitTrainTest(#[clap(flatten)] SplitTrainTestArg),
    /// Create data for the in-hospital mortality prediction task
    InHospitalMortality(#[clap(flatten)] InHospitalMortalityArg),
    /// Create data for the length of stay prediction task
    LengthOfStay(#[clap(flatten)] LengthOfStayArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::SplitTrainTest(arg) => split_train_test::run(&arg)?,
        Mode::InHospitalMortality(arg) => in_hospital_mortality::run(&arg)?,
        Mode::LengthOfStay(arg) => length_of_stay::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition_is_valid() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_length_of_stay_defaults() {
        let args = CommandArgs::try_parse_from(["icubench", "length-of-stay", "/data/root"]).unwrap();
        let Mode::LengthOfStay(arg) = args.mode else {
            panic!("unexpected mode");
        };
        assert_eq!(arg.seed.0, 100);
        assert!((arg.sample_rate - 1.0).abs() < f64::EPSILON);
        assert!((arg.shortest_length - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mortality_requires_output_path() {
        assert!(CommandArgs::try_parse_from(["icubench", "in-hospital-mortality", "/root"]).is_err());
        let args =
            CommandArgs::try_parse_from(["icubench", "in-hospital-mortality", "/root", "/out"])
                .unwrap();
        let Mode::InHospitalMortality(arg) = args.mode else {
            panic!("unexpected mode");
        };
        assert_eq!(arg.seed.0, 49297);
        assert!((arg.n_hours - 48.0).abs() < f64::EPSILON);
    }
}

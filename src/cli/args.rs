use crate::cards::mode::Mode;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Count head-to-head wins over a file of five-card poker deals",
    long_about = None
)]
pub struct Args {
    #[arg(
        default_value = "data/poker.txt",
        help = "File with one deal of ten cards per line, or - for stdin"
    )]
    pub path: String,
    #[arg(long, help = "Use the legacy parser that skips unknown symbols")]
    pub lenient: bool,
    #[arg(long, help = "Print the tally as JSON")]
    pub json: bool,
    #[arg(short, long, help = "Log every deal")]
    pub verbose: bool,
}

impl Args {
    pub fn mode(&self) -> Mode {
        if self.lenient {
            Mode::Lenient
        } else {
            Mode::Strict
        }
    }
    pub fn level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["tally"]).unwrap();
        assert_eq!(args.path, "data/poker.txt");
        assert_eq!(args.mode(), Mode::Strict);
        assert_eq!(args.level(), log::LevelFilter::Info);
        assert!(!args.json);
    }

    #[test]
    fn flags() {
        let args = Args::try_parse_from(["tally", "-", "--lenient", "--json", "-v"]).unwrap();
        assert_eq!(args.path, "-");
        assert_eq!(args.mode(), Mode::Lenient);
        assert_eq!(args.level(), log::LevelFilter::Debug);
        assert!(args.json);
    }
}

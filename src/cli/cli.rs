use super::args::Args;
use crate::tally::Tally;
use anyhow::Context;
use std::fs::File;
use std::io::BufReader;

pub struct CLI(Args);

impl From<Args> for CLI {
    fn from(args: Args) -> Self {
        Self(args)
    }
}

impl CLI {
    pub fn run(&self) -> anyhow::Result<()> {
        log::info!("{:<32}{:<32}", "tallying deals", self.0.path);
        log::info!("{:<32}{:<32}", "parsing mode", self.0.mode());
        let tally = self.tally()?;
        if tally.skipped() > 0 {
            log::warn!("{:<32}{:<32}", "skipped lines", tally.skipped());
        }
        if self.0.json {
            println!("{}", serde_json::to_string(&tally).context("encoding tally")?);
        } else {
            println!("{}", tally);
        }
        Ok(())
    }

    fn tally(&self) -> anyhow::Result<Tally> {
        match self.0.path.as_str() {
            "-" => Tally::from_reader(std::io::stdin().lock(), self.0.mode()),
            path => File::open(path)
                .with_context(|| format!("opening {}", path))
                .map(BufReader::new)
                .and_then(|reader| Tally::from_reader(reader, self.0.mode())),
        }
    }
}

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about)]
pub struct Arg {
    /// Number of sequential values the driver pushes into the list.
    #[clap(long, default_value = "10")]
    count: usize,

    /// Number of values spliced in after the saved middle node.
    #[clap(long, default_value = "20")]
    inserts: usize,
}

impl Arg {
    pub fn parse() -> Self {
        Arg::parse_from(std::env::args())
    }

    pub fn get_count(&self) -> usize {
        self.count
    }

    pub fn get_inserts(&self) -> usize {
        self.inserts
    }
}

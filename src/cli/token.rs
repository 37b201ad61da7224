//! Token encode/decode commands

use crate::wager::{decode_wager, encode_wager, Side, Wager};
use clap::Args;

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Bettor name
    #[arg(long)]
    pub bettor: String,

    /// over or under
    #[arg(long)]
    pub side: Side,

    /// Points staked
    #[arg(long)]
    pub stake: u64,
}

impl EncodeArgs {
    pub fn execute(&self) -> anyhow::Result<()> {
        let wager = Wager::new(self.bettor.clone(), self.side, self.stake)?;
        println!("{}", encode_wager(&wager));
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Wager token, e.g. bob^30
    pub token: String,
}

impl DecodeArgs {
    pub fn execute(&self) -> anyhow::Result<()> {
        let wager = decode_wager(&self.token)?;
        println!("{}", serde_json::to_string(&wager)?);
        Ok(())
    }
}

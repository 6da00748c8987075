use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cluesmith",
    version,
    about = "Encrypt an activation key and generate a puzzle clue sheet"
)]
pub struct Cli {
    #[arg(help = "Activation key to encrypt (A-Z and 0-9 only)")]
    pub activation_key: String,
    #[arg(help = "YAML file with hints and clue templates")]
    pub config: PathBuf,
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, default_value = ".", help = "Directory for the clue sheet CSV")]
    pub out_dir: PathBuf,
    #[arg(long, help = "Seed for synthesized hints (omit for OS randomness)")]
    pub seed: Option<u64>,
}

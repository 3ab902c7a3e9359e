use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "skycast", version, about = "Terminal UI for weather lookup")]
pub struct Args {
    /// Location shown on startup (overrides the configured default)
    #[arg(short, long)]
    pub location: Option<String>,

    /// weatherapi.com API key (overrides config file and environment)
    #[arg(short, long)]
    pub key: Option<String>,
}

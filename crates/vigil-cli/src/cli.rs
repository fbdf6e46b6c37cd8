use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "vigil",
    about = "Watch a live resource and display every structural change",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Display changes made to a resource in real time, as structural diffs
    Changes(ResourceArgs),
    /// Display changes to a resource's status subtree in real time
    Status(ResourceArgs),
}

#[derive(Args)]
pub struct ResourceArgs {
    /// API version of the resource (e.g. apps/v1)
    pub api_version: String,
    /// Resource kind (e.g. Deployment)
    pub kind: String,
    /// Resource name, optionally namespace-qualified (<namespace>/<name>)
    pub name: String,
}

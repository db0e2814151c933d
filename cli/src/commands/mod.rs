pub mod request;
pub mod shared;
pub mod spec;
pub mod validators;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    Request(request::RequestCommand),
    Spec(spec::SpecCommand),
}

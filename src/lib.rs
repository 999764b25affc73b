pub mod agent;
pub mod book;
pub mod chess;
pub(crate) mod error;
pub(crate) mod protocol;

#[allow(unused)]
pub mod prelude
{
    pub use std::str::FromStr;

    pub use log::{self};

    pub use crate::{
        agent::*,
        book::{openings, Catalogue, CatalogueStats},
        chess::*,
        error::{Error, Kind, Result},
        protocol::{Server, ServerOptions},
    };
}

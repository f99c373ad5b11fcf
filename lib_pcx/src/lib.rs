pub mod compression;
pub mod image;

use log::*;
use std::fs::File;
use std::io::Write;

pub use crate::image::decode;
pub use crate::image::decoder::DecodeError;
pub use crate::image::format::{Container, Header, Image};

pub fn init_logging() {
    let target = Box::new(File::create("log.txt").expect("Can't create file"));

    env_logger::Builder::new()
        .target(env_logger::Target::Pipe(target))
        .filter(Some("lib_pcx"), LevelFilter::Debug)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

use chrono::Local;
use clap::crate_version;
use log::info;

pub fn write_header() {
    info!("{: ^80}", "-----------------");
    info!("{: ^80}", "QCGEOM");
    info!("{: ^80}", "-----------------");
    let mut version_string: String = "version: ".to_owned();
    version_string.push_str(crate_version!());
    info!("{: ^80}", version_string);
    info!("{: ^80}", "");
    info!("{: ^80}", "::::::::::::::::::::::::::::::::::::::::::::::::::");
    info!("{: ^80}", "::  coordinates from Gaussian and MOLPRO files  ::");
    info!("{: ^80}", "::::::::::::::::::::::::::::::::::::::::::::::::::");
    info!("{: ^80}", Local::now().format("%Y-%m-%d %H:%M:%S").to_string());
    info!("{: ^80}", "");
}

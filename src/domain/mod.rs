// Domain layer: record types and the ports the spreadsheet adapter plugs into.

pub mod model;
pub mod ports;

pub mod analyzers;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod parcel;
pub mod rhna;
pub mod rules;
pub mod scenario;
pub mod standards;
pub mod zoning;

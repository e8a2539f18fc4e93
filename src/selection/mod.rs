//! Selection tokens and their resolution into map highlights

pub mod resolver;
pub mod token;

pub use resolver::{
    Connector, ConnectorKind, Highlight, HighlightRole, Resolution, SelectionMode, resolve,
};
pub use token::{EntityRef, SelectionToken};

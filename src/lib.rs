//! Parser for the digitized chapters of *A Climber's Guide to the High
//! Sierra*.
//!
//! Each chapter is a legacy windows-1252 HTML file in which meaning is
//! carried by tag adjacency and italic styling rather than any schema:
//! a `<p>` whose content opens with an `<i>` run starts a new peak or pass
//! record, and "Route N." / "Class N." prose conventions introduce routes.
//! The library recovers the Region → Peaks/Passes → Routes tree from that
//! flat markup and hands the result to a JSON or SQLite sink.

pub mod config;
pub mod db;
pub mod json;
pub mod markup;
pub mod models;
pub mod parser;
pub mod source;

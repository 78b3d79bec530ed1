//! Sink selector - picks the destination from the first argument

use contracts::{DumpArg, Responder};

/// Where a report goes
#[derive(Debug)]
pub enum Target<'a> {
    /// Console banner + params, optional append log
    Console,
    /// `status(200).json(body)` on the given responder
    Response(&'a mut dyn Responder),
}

/// Destination plus the params left to report
#[derive(Debug)]
pub struct Selection<'a> {
    pub target: Target<'a>,
    pub values: Vec<DumpArg<'a>>,
}

/// Classify `args` by their first element only.
///
/// A leading responder is consumed as the destination. Anything else, an
/// empty list included, selects the console and keeps every argument as data.
/// Responders in later positions stay data.
pub fn select(args: Vec<DumpArg<'_>>) -> Selection<'_> {
    let mut args = args.into_iter();
    match args.next() {
        Some(DumpArg::Responder(responder)) => Selection {
            target: Target::Response(responder),
            values: args.collect(),
        },
        Some(first) => Selection {
            target: Target::Console,
            values: std::iter::once(first).chain(args).collect(),
        },
        None => Selection {
            target: Target::Console,
            values: Vec::new(),
        },
    }
}

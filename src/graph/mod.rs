/// Pipeline graph: node/edge model, producer rules, and upstream resolution.
///
/// Resolution answers one question for any node: which single upstream table
/// should it operate on? The answer walks inbound edges in stored order and
/// takes the first recognized producer (never a merge). File-backed sources
/// resolve to a descriptor that still needs an async parse; overlapping
/// parses for one node are arbitrated by a generation gate so the newest
/// attempt always wins.
pub mod model;
pub mod producer;
pub mod resolver;

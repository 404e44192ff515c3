// Opportunity fit scoring: category rules, weighted aggregation, dealbreaker
// checks and multi-opportunity comparison. Everything below `handlers` is pure.

pub mod category;
pub mod compare;
pub mod engine;
pub mod handlers;
pub mod rules;

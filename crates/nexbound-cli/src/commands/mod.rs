pub mod campaigns;
pub mod draft;
pub mod repl;

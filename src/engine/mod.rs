pub mod auto_trigger;

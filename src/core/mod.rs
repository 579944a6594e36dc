pub mod classifier;
pub mod encoder;
pub mod soundex_fsm;
pub mod trace;

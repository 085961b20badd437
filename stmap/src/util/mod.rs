pub mod alphabet;
pub mod subseq;

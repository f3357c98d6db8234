mod registrant;

pub use registrant::Registrant;

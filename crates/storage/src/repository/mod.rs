pub mod registrant;
